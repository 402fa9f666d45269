use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use pyper_codegen_python::Generator;
use pyper_core::{File, GeneratedFile, Indent, LineEnding};
use pyper_module::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to pyper.toml (defaults to ./pyper.toml)
    #[arg(short, long, default_value = "pyper.toml")]
    pub config: PathBuf,

    /// Output file (defaults to the module path next to pyper.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the indentation from [style] (spaces4, spaces2, tab, ...)
    #[arg(long)]
    pub indent: Option<Indent>,

    /// Override the line ending from [style] (lf, crlf, native)
    #[arg(long)]
    pub line_ending: Option<LineEnding>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let manifest = self.apply_overrides(pyper_module::parse_file(&self.config).unwrap_or_exit());
        let generator = Generator::new(&manifest);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            let path = self.run_generation(&generator)?;
            println!("Generated: {}", path.display());
            Ok(())
        }
    }

    fn apply_overrides(&self, mut manifest: Manifest) -> Manifest {
        if let Some(indent) = self.indent {
            manifest.style.indent = indent;
        }
        if let Some(line_ending) = self.line_ending {
            manifest.style.line_ending = line_ending;
        }
        manifest
    }

    /// Directory the module path is resolved against when no output is given.
    fn base_dir(&self) -> &Path {
        self.config
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    fn run_generation(&self, generator: &Generator) -> Result<PathBuf> {
        let module = generator.module();
        let path = match &self.output {
            Some(output) => output.clone(),
            None => module.path(self.base_dir()),
        };

        let content = module.render().wrap_err("Failed to render module")?;
        File::new(&path, content)
            .write()
            .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

        tracing::info!(path = %path.display(), "rendered module");
        Ok(path)
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let preview = generator.preview()?;

        println!("── {} ──", preview.path);
        print!("{}", preview.content);

        Ok(())
    }
}
