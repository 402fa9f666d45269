use std::path::Path;

use eyre::Result;
use pyper_core::{GeneratedFile, WriteResult};
use pyper_module::{ClassSpec, DecoratorSpec, FunctionSpec, ImportSpec, KeywordSpec, Manifest};

use crate::{Class, Decorator, Function, Imports, Parameters, PythonModule};

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Builds the Python module described by a parsed `pyper.toml`.
pub struct Generator<'a> {
    manifest: &'a Manifest,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Build the module: imports first, then classes, then functions, each
    /// in declaration order.
    #[tracing::instrument(level = "debug", skip_all, fields(module = %self.manifest.module.name))]
    pub fn module(&self) -> PythonModule {
        let config = &self.manifest.module;
        let mut module = PythonModule::new(&config.name)
            .config(self.manifest.style)
            .imports(imports(&self.manifest.imports));

        if let Some(header) = &config.header {
            module = module.header(header);
        }
        if let Some(doc) = &config.doc {
            module = module.doc(doc);
        }

        for spec in &self.manifest.classes {
            module.push(class(spec));
        }
        for spec in &self.manifest.functions {
            module.push(function(spec));
        }

        tracing::debug!(
            definitions = self.manifest.definition_count(),
            "built module"
        );
        module
    }

    /// Render without writing to disk
    pub fn preview(&self) -> Result<PreviewFile> {
        let module = self.module();
        Ok(PreviewFile {
            path: module.relative_path().display().to_string(),
            content: module.render()?,
        })
    }

    /// Write the module below `output_dir`
    pub fn generate(&self, output_dir: &Path) -> Result<WriteResult> {
        self.module().write(output_dir)
    }
}

fn imports(specs: &[ImportSpec]) -> Imports {
    let mut imports = Imports::new();
    for spec in specs {
        if !spec.symbols.is_empty() {
            for symbol in &spec.symbols {
                imports.from_import(&spec.module, symbol);
            }
        } else if let Some(alias) = &spec.alias {
            imports.import_as(&spec.module, alias);
        } else {
            imports.import(&spec.module);
        }
    }
    imports
}

fn keywords(specs: &[KeywordSpec]) -> impl Iterator<Item = (&str, &str)> {
    specs.iter().map(|kw| (kw.name.as_str(), kw.value.as_str()))
}

fn decorator(spec: &DecoratorSpec) -> Decorator {
    match spec {
        DecoratorSpec::Name(name) => Decorator::new(name),
        DecoratorSpec::Call { name, args, kwargs } => Decorator::call(
            name,
            Parameters::new().args(args).kwargs(keywords(kwargs)),
        ),
    }
}

fn function(spec: &FunctionSpec) -> Function {
    let params = Parameters::new()
        .args(&spec.args)
        .kwargs(keywords(&spec.kwargs));

    let mut function = spec
        .decorators
        .iter()
        .fold(Function::new(&spec.name), |f, d| f.decorator(decorator(d)))
        .params(params);

    if spec.is_async {
        function = function.async_();
    }
    if let Some(returns) = &spec.returns {
        function = function.returns(returns);
    }
    if let Some(doc) = &spec.doc {
        function = function.doc(doc);
    }
    if let Some(body) = spec.body.as_deref().filter(|b| !b.trim().is_empty()) {
        function = function.body(body);
    }
    function
}

fn class(spec: &ClassSpec) -> Class {
    let mut class = spec
        .decorators
        .iter()
        .fold(Class::new(&spec.name), |c, d| c.decorator(decorator(d)))
        .parents(&spec.parents);

    if let Some(doc) = &spec.doc {
        class = class.doc(doc);
    }
    for attribute in &spec.attributes {
        class = class.attribute(&attribute.name, &attribute.value);
    }
    for method in &spec.methods {
        class = class.method(function(method));
    }
    class
}
