/// Minimum cosine similarity for a fact to count as a relevant match.
/// Anything below is reported as "no relevant information".
pub const DEFAULT_MIN_SCORE: f64 = 1e-6;

/// Numerical epsilon for near-zero comparisons
pub const EPSILON: f64 = 1e-10;

/// Shortest token (in word characters) the tokenizer keeps
pub const MIN_TOKEN_CHARS: usize = 2;
