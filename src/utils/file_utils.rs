use std::fs;
use std::path::Path;
use log::debug;

use crate::error::{GeneratorError, Result};

/// Create a directory if it doesn't exist
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        debug!("Creating directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|source| GeneratorError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Check if a file has a specific extension
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    let path = path.as_ref();
    if let Some(ext) = path.extension() {
        if let Some(ext_str) = ext.to_str() {
            return ext_str.eq_ignore_ascii_case(extension);
        }
    }
    false
}

/// Read a file to string with better error handling
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| GeneratorError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a string to a file with better error handling
pub fn write_string_to_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }

    fs::write(path, content).map_err(|source| GeneratorError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension_is_case_insensitive() {
        assert!(has_extension("Entities/Customer.cs", "cs"));
        assert!(has_extension("Entities/Customer.CS", "cs"));
        assert!(!has_extension("Entities/Customer.csproj", "cs"));
        assert!(!has_extension("Entities/Customer", "cs"));
    }
}
