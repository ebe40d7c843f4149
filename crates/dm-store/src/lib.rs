pub mod config;
pub mod error;
pub mod knowledge;

pub use config::{DEFAULT_KNOWLEDGE_FILE, KNOWLEDGE_ENV, Settings};
pub use error::{Result, StoreError};
pub use knowledge::KnowledgeBase;
