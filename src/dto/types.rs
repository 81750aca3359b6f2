use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// The operations a DTO can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Create,
    Read,
    Update,
}

impl OperationKind {
    /// Name used in generated class and file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
        }
    }

    /// DTO class name for a source class and this operation
    pub fn dto_class_name(&self, class_name: &str) -> String {
        format!("{}{}DTO", class_name, self.as_str())
    }

    /// Output file name for a source class and this operation
    pub fn file_name(&self, class_name: &str) -> String {
        format!("{}.cs", self.dto_class_name(class_name))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member that survived filtering for one DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtoMember {
    /// Property name
    pub name: String,

    /// Type text rendered verbatim
    pub type_display: String,
}

/// Record of an artifact written during a run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrittenArtifact {
    /// Source class the DTO was generated from
    pub class_name: String,

    /// Operation the DTO serves
    pub operation: OperationKind,

    /// Where the artifact was written
    pub file_path: PathBuf,

    /// SHA-256 hash of the written content
    pub content_hash: String,
}

/// Statistics about a generation run
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Number of declaration files scanned
    pub files_scanned: usize,

    /// Number of classes discovered
    pub classes_found: usize,

    /// Classes skipped because they carry the opt-out marker
    pub classes_excluded: usize,

    /// Classes skipped because every operation file already existed
    pub classes_skipped_existing: usize,

    /// Classes skipped because they could not be resolved
    pub classes_skipped_unresolved: usize,

    /// Artifacts written during the run
    pub artifacts_written: usize,

    /// Artifacts skipped because their file already existed
    pub artifacts_skipped_existing: usize,
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Statistics about the run
    pub stats: GenerationStats,

    /// The artifacts written during the run
    pub artifacts: Vec<WrittenArtifact>,
}
