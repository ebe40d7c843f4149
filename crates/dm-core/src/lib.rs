//! Lexical retrieval engine for docu-mind.
//!
//! Fits a TF-IDF model over a fact list plus one query, then ranks facts by
//! cosine similarity to the query. The vector space is rebuilt on every call;
//! nothing is cached between queries.
//!
//! No I/O here: callers hand in the facts as strings.

pub mod constants;
pub mod error;
pub mod matcher;
pub mod tokenizer;
pub mod vectorizer;

pub use constants::{DEFAULT_MIN_SCORE, EPSILON, MIN_TOKEN_CHARS};
pub use error::{CoreError, Result};
pub use matcher::{Match, Outcome, best_match, cosine_similarity, similarities};
pub use tokenizer::tokenize;
pub use vectorizer::{SparseVector, TfidfModel, VectorSpace, vectorize};
