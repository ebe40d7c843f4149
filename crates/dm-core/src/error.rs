#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No facts to build a vector space over.
    #[error("knowledge base contains no facts")]
    EmptyKnowledgeBase,
}

pub type Result<T> = std::result::Result<T, CoreError>;
