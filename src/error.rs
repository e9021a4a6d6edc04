use std::{error::Error, fmt, io, path::PathBuf};

/// The exporter's result type.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Faults that mean the exporter itself is misconfigured or badly deployed.
///
/// Unsupported or disabled generation is never reported through this type.
#[derive(Debug)]
pub enum CodegenError {
    /// No template with the given name exists in the group.
    TemplateNotFound { name: String, path: Option<PathBuf> },
    /// A template or configuration file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A template does not follow the template syntax.
    MalformedTemplate {
        name: String,
        line: usize,
        reason: String,
    },
    /// A template refers to a placeholder nobody provided.
    MissingPlaceholder { template: String, placeholder: String },
    /// The configuration could not be parsed.
    Config(serde_json::Error),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TemplateNotFound {
                name,
                path: Some(path),
            } => write!(f, "template {name} not found at {}", path.display()),
            Self::TemplateNotFound { name, path: None } => {
                write!(f, "template {name} is not embedded")
            }
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::MalformedTemplate { name, line, reason } => {
                write!(f, "malformed template {name} at line {line}: {reason}")
            }
            Self::MissingPlaceholder {
                template,
                placeholder,
            } => write!(
                f,
                "template {template} refers to {placeholder}, which was not provided"
            ),
            Self::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for CodegenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

/// Boundary conversion for callers exposing I/O APIs.
impl From<CodegenError> for io::Error {
    fn from(value: CodegenError) -> Self {
        match value {
            CodegenError::Io { source, .. } => source,
            err @ CodegenError::TemplateNotFound { .. } => {
                io::Error::new(io::ErrorKind::NotFound, err)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
