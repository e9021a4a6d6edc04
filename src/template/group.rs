use std::{
    borrow::Cow,
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, trace};
use parking_lot::RwLock;

use super::{Placeholders, TemplateRenderer, compile::Template};
use crate::{CodegenError, Result};

/// File extension of templates stored on disk.
const EXTENSION: &str = "st";

/// Templates compiled into the binary.
const EMBEDDED: &[(&str, &str)] = &[(
    "FullyMeshedNet",
    include_str!("../../templates/cpp/FullyMeshedNet.st"),
)];

#[derive(Debug)]
enum Source {
    Embedded,
    Dir(PathBuf),
}

/// A set of named templates, loaded on first use and cached afterwards.
///
/// The cache is shared between threads, so a group can back any number of concurrent
/// renders.
#[derive(Debug)]
pub struct TemplateGroup {
    source: Source,
    cache: RwLock<HashMap<String, Arc<Template>>>,
}

impl TemplateGroup {
    /// Creates a group serving the templates shipped with this crate.
    pub fn embedded() -> Self {
        Self::new(Source::Embedded)
    }

    /// Creates a group reading `<dir>/<name>.st` files.
    ///
    /// # Arguments
    /// * `dir` - The directory holding the templates. It is not accessed until a template is
    ///   rendered.
    pub fn dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self::new(Source::Dir(dir.into()))
    }

    fn new(source: Source) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the directory templates are read from, if they are not embedded.
    pub fn template_dir(&self) -> Option<&Path> {
        match &self.source {
            Source::Embedded => None,
            Source::Dir(dir) => Some(dir.as_path()),
        }
    }

    /// Returns how many templates have been loaded so far.
    pub fn loaded(&self) -> usize {
        self.cache.read().len()
    }

    fn load(&self, name: &str) -> Result<Arc<Template>> {
        if let Some(template) = self.cache.read().get(name) {
            trace!(template = name; "template cache hit");
            return Ok(Arc::clone(template));
        }

        let source = self.read_source(name)?;
        let template = Arc::new(Template::compile(name, &source)?);
        debug!(template = name; "loaded template");

        // Another thread may have loaded it meanwhile, both compiled the same text.
        let mut cache = self.cache.write();
        let template = cache.entry(name.to_string()).or_insert(template);
        Ok(Arc::clone(template))
    }

    fn read_source(&self, name: &str) -> Result<Cow<'static, str>> {
        match &self.source {
            Source::Embedded => EMBEDDED
                .iter()
                .find(|(embedded, _)| *embedded == name)
                .map(|(_, source)| Cow::Borrowed(*source))
                .ok_or_else(|| CodegenError::TemplateNotFound {
                    name: name.to_string(),
                    path: None,
                }),
            Source::Dir(dir) => {
                let path = dir.join(format!("{name}.{EXTENSION}"));

                match fs::read_to_string(&path) {
                    Ok(source) => Ok(Cow::Owned(source)),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        Err(CodegenError::TemplateNotFound {
                            name: name.to_string(),
                            path: Some(path),
                        })
                    }
                    Err(source) => Err(CodegenError::Io { path, source }),
                }
            }
        }
    }
}

impl Default for TemplateGroup {
    fn default() -> Self {
        Self::embedded()
    }
}

impl TemplateRenderer for TemplateGroup {
    fn render(&self, name: &str, placeholders: &Placeholders) -> Result<String> {
        self.load(name)?.render(placeholders)
    }
}
