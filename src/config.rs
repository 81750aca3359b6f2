use std::path::Path;
use serde::{Deserialize, Serialize};

use crate::dto::types::OperationKind;
use crate::error::{GeneratorError, Result};
use crate::utils::file_utils;

/// Configuration for a generation run.
///
/// The operation list and the Create exclusion words are explicit values
/// rather than hidden constants, so callers and tests can vary them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Operations to generate, in execution order
    #[serde(default = "default_operations")]
    pub operations: Vec<OperationKind>,

    /// Words that disqualify a member from Create output when they occur
    /// in its name (case-insensitive substring match)
    #[serde(default = "default_create_exclusion_words")]
    pub create_exclusion_words: Vec<String>,
}

fn default_operations() -> Vec<OperationKind> {
    vec![
        OperationKind::Create,
        OperationKind::Read,
        OperationKind::Update,
    ]
}

fn default_create_exclusion_words() -> Vec<String> {
    vec!["active".to_string(), "delete".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            operations: default_operations(),
            create_exclusion_words: default_create_exclusion_words(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = file_utils::read_file_to_string(path)?;
        toml::from_str(&content).map_err(|source| GeneratorError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
