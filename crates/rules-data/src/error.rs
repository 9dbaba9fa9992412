use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RulesError>;

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rule file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid frontmatter in {}: {message}", .path.display())]
    Frontmatter { path: PathBuf, message: String },

    #[error("markdown rendering failed: {0}")]
    Markdown(String),
}

impl RulesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn frontmatter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: message.into(),
        }
    }
}
