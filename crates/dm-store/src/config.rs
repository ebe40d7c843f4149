use std::path::PathBuf;

use dm_core::DEFAULT_MIN_SCORE;

use crate::error::{Result, StoreError};

/// Knowledge file used when nothing else is configured.
pub const DEFAULT_KNOWLEDGE_FILE: &str = "knowledge.txt";

/// Environment variable overriding the knowledge file path.
pub const KNOWLEDGE_ENV: &str = "DOCU_MIND_KNOWLEDGE";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub knowledge_path: PathBuf,
    /// Scores below this are reported as no relevant match.
    pub min_score: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            knowledge_path: PathBuf::from(DEFAULT_KNOWLEDGE_FILE),
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl Settings {
    /// Build and validate. `None` fields take their defaults.
    pub fn new(knowledge_path: Option<PathBuf>, min_score: Option<f64>) -> Result<Self> {
        let defaults = Self::default();
        let settings = Self {
            knowledge_path: knowledge_path.unwrap_or(defaults.knowledge_path),
            min_score: min_score.unwrap_or(defaults.min_score),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(StoreError::InvalidSetting(format!(
                "min score must be within [0, 1], got {}",
                self.min_score
            )));
        }
        if self.knowledge_path.as_os_str().is_empty() {
            return Err(StoreError::InvalidSetting(
                "knowledge file path is empty".to_string(),
            ));
        }
        Ok(())
    }
}
