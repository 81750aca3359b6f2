use std::path::{Path, PathBuf};
use log::debug;

use crate::dto::types::OperationKind;
use crate::error::Result;
use crate::utils::file_utils;

/// Artifact writer rooted at the target folder.
///
/// Existing files are authoritative: a path that already exists is never
/// rewritten, so a prior generation with manual edits survives every
/// subsequent run.
#[derive(Debug)]
pub struct ArtifactWriter {
    /// Root folder generated artifacts are placed under
    target_dir: PathBuf,
}

impl ArtifactWriter {
    /// Create a writer rooted at the given target folder
    pub fn new(target_dir: impl AsRef<Path>) -> Self {
        Self {
            target_dir: target_dir.as_ref().to_path_buf(),
        }
    }

    /// Folder that holds one class's artifacts
    pub fn class_dir(&self, class_name: &str) -> PathBuf {
        self.target_dir.join(class_name)
    }

    /// Path of one (class, operation) artifact
    pub fn artifact_path(&self, class_name: &str, operation: OperationKind) -> PathBuf {
        self.class_dir(class_name).join(operation.file_name(class_name))
    }

    /// Whether every operation file for a class already exists. Used as a
    /// fast pre-check so fully generated classes never reach member
    /// resolution.
    pub fn all_artifacts_exist(&self, class_name: &str, operations: &[OperationKind]) -> bool {
        operations
            .iter()
            .all(|operation| self.artifact_path(class_name, *operation).exists())
    }

    /// Write an artifact unless its file already exists. Returns whether a
    /// write happened.
    pub fn write_if_absent(&self, path: &Path, content: &str) -> Result<bool> {
        if path.exists() {
            debug!("Skipping existing artifact: {}", path.display());
            return Ok(false);
        }

        file_utils::write_string_to_file(path, content)?;
        debug!("Wrote artifact: {}", path.display());
        Ok(true)
    }
}
