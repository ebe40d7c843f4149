use std::fs;
use std::path::{Path, PathBuf};

use dm_core::Match;

use crate::error::{Result, StoreError};

/// Ordered, immutable list of facts read from a knowledge file.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    path: Option<PathBuf>,
    facts: Vec<String>,
}

impl KnowledgeBase {
    /// Read one fact per line from `path`.
    ///
    /// Lines are trimmed and blank lines skipped; file order is kept.
    /// A missing, unreadable, or non-UTF-8 file is a configuration error.
    /// A file with no usable lines is rejected here so no match is attempted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StoreError::Configuration {
            path: path.to_path_buf(),
            source,
        })?;

        let total = content.lines().count();
        let mut kb = Self::from_lines(content.lines());
        kb.path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            facts = kb.len(),
            skipped = total - kb.len(),
            "loaded knowledge file"
        );

        if kb.is_empty() {
            return Err(StoreError::EmptyKnowledgeBase {
                path: path.to_path_buf(),
            });
        }
        Ok(kb)
    }

    /// Build from in-memory lines with the same trimming rules as [`load`].
    ///
    /// [`load`]: KnowledgeBase::load
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let facts = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { path: None, facts }
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Source file, if loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Most similar fact to `query`. See [`dm_core::best_match`].
    pub fn best_match(&self, query: &str) -> dm_core::Result<Match> {
        dm_core::best_match(&self.facts, query)
    }
}
