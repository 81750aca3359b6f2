use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Main error type for DTO generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Source folder missing or not a directory
    #[error("source folder not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Target folder is not inside any project
    #[error("no project descriptor (.csproj) found in {path} or any parent folder")]
    ProjectNotFound { path: PathBuf },

    /// A class declaration could not be matched against the scanned sources
    #[error("class '{name}' could not be resolved against the scanned sources")]
    UnresolvedClass { name: String },

    /// Failed to read a file
    #[error("failed to read {path}: {source}")]
    FileRead { path: PathBuf, source: std::io::Error },

    /// Failed to write a file
    #[error("failed to write {path}: {source}")]
    FileWrite { path: PathBuf, source: std::io::Error },

    /// Failed to create a directory
    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },

    /// Invalid configuration file
    #[error("failed to parse config {path}: {source}")]
    Config { path: PathBuf, source: toml::de::Error },

    /// Report serialization error
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unresolved_class() {
        let err = GeneratorError::UnresolvedClass {
            name: "Customer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "class 'Customer' could not be resolved against the scanned sources"
        );
    }

    #[test]
    fn test_error_display_project_not_found() {
        let err = GeneratorError::ProjectNotFound {
            path: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            err.to_string(),
            "no project descriptor (.csproj) found in /tmp/out or any parent folder"
        );
    }
}
