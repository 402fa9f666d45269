use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use pyper_core::{FileRules, GeneratedFile, Overwrite, WriteResult};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Dotted module name, e.g. `shapes` or `geometry.shapes`
    pub name: String,

    /// Directory to create pyper.toml in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = PyperToml::new(&self.name);
        // Reject names pyper itself would refuse before anything is written.
        pyper_module::parse_str(&file.content()).unwrap_or_exit();

        let path = file.path(&self.output);
        match file.write(&self.output)? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next: pyper render -c {}", path.display());
            }
            WriteResult::Skipped => {
                println!("{} already exists, leaving it untouched", path.display());
            }
        }
        Ok(())
    }
}

/// Starter module description written by `pyper init`.
struct PyperToml<'a> {
    name: &'a str,
}

impl<'a> PyperToml<'a> {
    fn new(name: &'a str) -> Self {
        Self { name }
    }

    fn content(&self) -> String {
        format!(
            r#"[module]
name = "{name}"
header = "Generated by pyper. Do not edit."

[style]
indent = "spaces4"
line_ending = "lf"

[[imports]]
module = "dataclasses"
symbols = ["dataclass"]

[[classes]]
name = "Greeter"
decorators = ["dataclass"]
attributes = [{{ name = "greeting", value = "'Hello'" }}]

[[classes.methods]]
name = "greet"
args = ["self", "who: str"]
returns = "str"
body = "return f'{{self.greeting}}, {{who}}!'"

[[functions]]
name = "main"
body = "print(Greeter().greet('world'))"
"#,
            name = self.name
        )
    }
}

impl GeneratedFile for PyperToml<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("pyper.toml")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
            header: Some("# Module description for pyper. Run `pyper render` to generate.".into()),
        }
    }

    fn render(&self) -> Result<String> {
        Ok(self.content())
    }
}
