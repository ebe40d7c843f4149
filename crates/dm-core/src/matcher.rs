use crate::constants::EPSILON;
use crate::error::Result;
use crate::vectorizer::{SparseVector, VectorSpace, vectorize};

/// Best-scoring fact for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Position of the fact in the knowledge base.
    pub index: usize,
    pub fact: String,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
}

/// A match after the minimum-score threshold has been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Found(Match),
    NoMatch { best_score: f64 },
}

impl Match {
    /// `Found` when `score >= min_score`, otherwise `NoMatch`.
    pub fn outcome(self, min_score: f64) -> Outcome {
        if self.score >= min_score {
            Outcome::Found(self)
        } else {
            Outcome::NoMatch {
                best_score: self.score,
            }
        }
    }
}

/// Cosine of the angle between `a` and `b`.
/// Returns 0.0 when either vector is zero. Clamped to `[0, 1]` since TF-IDF
/// weights are non-negative and rounding can push identical vectors past 1.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let magnitude = a.norm() * b.norm();
    if magnitude < EPSILON {
        return 0.0;
    }
    (a.dot(b) / magnitude).clamp(0.0, 1.0)
}

/// Query-to-fact similarity for every fact, in fact order.
pub fn similarities(space: &VectorSpace) -> Vec<f64> {
    space
        .facts
        .iter()
        .map(|fact| cosine_similarity(&space.query, fact))
        .collect()
}

/// Index and score of the maximum. Ties go to the earliest index.
fn argmax(scores: &[f64]) -> Option<(usize, f64)> {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, s)| match best {
            Some((_, b)) if s <= b => best,
            _ => Some((i, s)),
        })
}

/// Vectorize `facts` with `query` and return the most similar fact.
///
/// When the query shares no vocabulary with any fact every score is zero and
/// the first fact is returned with score 0.0; use [`Match::outcome`] to turn
/// that into [`Outcome::NoMatch`].
pub fn best_match<S: AsRef<str>>(facts: &[S], query: &str) -> Result<Match> {
    let space = vectorize(facts, query)?;
    let scores = similarities(&space);
    // vectorize rejects an empty fact list, so scores is non-empty
    let (index, score) = argmax(&scores).unwrap_or((0, 0.0));

    tracing::debug!(
        index,
        score,
        vocabulary = space.vocabulary_len,
        "best match"
    );

    Ok(Match {
        index,
        fact: facts[index].as_ref().to_string(),
        score,
    })
}
