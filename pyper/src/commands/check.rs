use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pyper_module::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to pyper.toml (defaults to ./pyper.toml)
    #[arg(short, long, default_value = "pyper.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = pyper_module::parse_file(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());
        print!("{}", summary(&manifest));

        Ok(())
    }
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

/// Human-readable overview of what the manifest will generate.
fn summary(manifest: &Manifest) -> String {
    let mut out = format!(
        "  module {} ({}, {})\n",
        manifest.module.name, manifest.style.indent, manifest.style.line_ending
    );

    if !manifest.imports.is_empty() {
        out.push_str(&format!("\n  {}:\n", count(manifest.imports.len(), "import", "imports")));
        for import in &manifest.imports {
            out.push_str(&format!("    {}\n", import.module));
        }
    }

    if !manifest.classes.is_empty() {
        out.push_str(&format!("\n  {}:\n", count(manifest.classes.len(), "class", "classes")));
        for class in &manifest.classes {
            out.push_str(&format!(
                "    {} ({})\n",
                class.name,
                count(class.methods.len(), "method", "methods")
            ));
        }
    }

    if !manifest.functions.is_empty() {
        out.push_str(&format!(
            "\n  {}:\n",
            count(manifest.functions.len(), "function", "functions")
        ));
        for function in &manifest.functions {
            out.push_str(&format!("    {}\n", function.name));
        }
    }

    out
}
