use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Knowledge file missing, unreadable, or not UTF-8.
    #[error("cannot read knowledge file '{}'", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Knowledge file readable but holds no non-blank lines.
    #[error("knowledge file '{}' contains no facts", .path.display())]
    EmptyKnowledgeBase { path: PathBuf },
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
