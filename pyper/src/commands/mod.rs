mod check;
mod init;
mod render;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use eyre::Result;
use init::InitCommand;
use render::RenderCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pyper_module::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pyper")]
#[command(version)]
#[command(about = "Generate Python modules from TOML descriptions")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Python module described by pyper.toml
    Render(RenderCommand),

    /// Validate pyper.toml without generating code
    Check(CheckCommand),

    /// Create a starter pyper.toml
    Init(InitCommand),
}
