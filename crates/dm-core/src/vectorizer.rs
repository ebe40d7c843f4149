use std::collections::{BTreeMap, HashSet};

use crate::error::{CoreError, Result};
use crate::tokenizer::tokenize;

/// Sparse term-weight vector. Entries are sorted by term index and
/// every stored weight is strictly positive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from (index, weight) pairs. Zero and negative weights are dropped.
    pub fn from_weights(weights: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let merged: BTreeMap<usize, f64> =
            weights
                .into_iter()
                .fold(BTreeMap::new(), |mut acc, (index, weight)| {
                    *acc.entry(index).or_insert(0.0) += weight;
                    acc
                });
        Self {
            entries: merged.into_iter().filter(|(_, w)| *w > 0.0).collect(),
        }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Weight at `index`, 0.0 if absent.
    #[cfg(test)]
    fn weight(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product via a merge walk over both sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit length. The zero vector stays zero.
    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// TF-IDF model fitted over one corpus.
///
/// Term frequency is the raw count of a term in a document. Inverse document
/// frequency is smoothed: `ln((1 + n) / (1 + df)) + 1`, so a term present in
/// every document still carries weight 1. Output vectors are L2-normalized.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    n_documents: usize,
}

impl TfidfModel {
    /// Fit vocabulary and IDF table over `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> =
            documents.iter().map(|d| tokenize(d.as_ref())).collect();
        Self::fit_tokens(&tokenized)
    }

    fn fit_tokens(documents: &[Vec<String>]) -> Self {
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in documents {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len();
        // BTreeMap iteration is sorted, so term indices follow lexicographic order
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            idf.push(smoothed_idf(n, df));
        }

        Self {
            vocabulary,
            idf,
            n_documents: n,
        }
    }

    /// Weighted, normalized vector for `text`. Terms outside the fitted
    /// vocabulary are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.transform_tokens(&tokenize(text))
    }

    fn transform_tokens(&self, tokens: &[String]) -> SparseVector {
        SparseVector::from_weights(
            tokens
                .iter()
                .filter_map(|t| self.vocabulary.get(t))
                .map(|&index| (index, self.idf[index])),
        )
        .normalized()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    fn n_documents(&self) -> usize {
        self.n_documents
    }

    #[cfg(test)]
    fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    #[cfg(test)]
    fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|i| self.idf[i])
    }
}

fn smoothed_idf(n_documents: usize, document_frequency: usize) -> f64 {
    ((1 + n_documents) as f64 / (1 + document_frequency) as f64).ln() + 1.0
}

/// Vectors for one query against the fact list. Built per query, never reused.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    pub facts: Vec<SparseVector>,
    pub query: SparseVector,
    pub vocabulary_len: usize,
}

/// Fit TF-IDF over `facts ++ [query]` and vectorize every document.
pub fn vectorize<S: AsRef<str>>(facts: &[S], query: &str) -> Result<VectorSpace> {
    if facts.is_empty() {
        return Err(CoreError::EmptyKnowledgeBase);
    }

    let mut corpus: Vec<Vec<String>> = facts.iter().map(|f| tokenize(f.as_ref())).collect();
    corpus.push(tokenize(query));

    let model = TfidfModel::fit_tokens(&corpus);
    let mut vectors: Vec<SparseVector> =
        corpus.iter().map(|t| model.transform_tokens(t)).collect();
    let query = vectors.pop().unwrap_or_default();

    tracing::debug!(facts = vectors.len(), "fitted tf-idf model");

    Ok(VectorSpace {
        facts: vectors,
        query,
        vocabulary_len: model.vocabulary_len(),
    })
}
