use std::path::Path;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::dto::types::{GenerationResult, GenerationStats, WrittenArtifact};
use crate::error::Result;
use crate::utils::file_utils;

/// Persistable record of one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,

    /// Statistics about the run
    pub stats: GenerationStats,

    /// The artifacts written during the run
    pub artifacts: Vec<WrittenArtifact>,
}

impl GenerationReport {
    /// Build a report from a completed run
    pub fn new(result: &GenerationResult) -> Self {
        Self {
            generated_at: Utc::now(),
            stats: result.stats.clone(),
            artifacts: result.artifacts.clone(),
        }
    }

    /// Save the report as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)?;
        file_utils::write_string_to_file(path, &content)?;

        info!("Saved generation report to {}", path.display());
        Ok(())
    }
}
