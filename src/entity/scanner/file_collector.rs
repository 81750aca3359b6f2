use std::path::{Path, PathBuf};
use log::{debug, trace};
use walkdir::WalkDir;

use crate::error::{GeneratorError, Result};

/// File collector for finding entity declaration files
#[derive(Debug)]
pub struct FileCollector {
    /// Valid file extensions to collect
    valid_extensions: Vec<String>,
}

impl FileCollector {
    /// Create a new file collector with default settings
    pub fn new() -> Self {
        Self {
            valid_extensions: vec!["cs".to_string()],
        }
    }

    /// Create a new file collector with custom file extensions
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self {
            valid_extensions: extensions,
        }
    }

    /// Collect all files with valid extensions from the top level of the
    /// input directory. Subfolders are not descended into. Results are
    /// sorted so class discovery order is stable across runs.
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let input_dir = input_dir.as_ref();
        if !input_dir.is_dir() {
            return Err(GeneratorError::SourceNotFound {
                path: input_dir.to_path_buf(),
            });
        }
        debug!("Collecting files from directory: {}", input_dir.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Some(ext) = entry.path().extension() {
                if let Some(ext_str) = ext.to_str() {
                    if self
                        .valid_extensions
                        .iter()
                        .any(|valid_ext| ext_str.eq_ignore_ascii_case(valid_ext))
                    {
                        trace!("Found file: {}", entry.path().display());
                        files.push(entry.path().to_owned());
                    }
                }
            }
        }

        files.sort();

        debug!("Collected {} files for processing", files.len());
        Ok(files)
    }

    /// Get the list of valid file extensions
    pub fn extensions(&self) -> &[String] {
        &self.valid_extensions
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}
