use std::path::{Path, PathBuf};
use log::debug;

use crate::error::{GeneratorError, Result};
use crate::utils::file_utils;

/// Extension of the project descriptor file that anchors a target folder
/// to a project
const PROJECT_DESCRIPTOR_EXTENSION: &str = "csproj";

/// Find the project descriptor governing a folder by walking up its
/// ancestors. Entries within a folder are checked in sorted order so the
/// result is stable when several descriptors coexist.
pub fn find_project_file(folder: impl AsRef<Path>) -> Option<PathBuf> {
    for dir in folder.as_ref().ancestors() {
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };

        let mut candidates: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && file_utils::has_extension(path, PROJECT_DESCRIPTOR_EXTENSION)
            })
            .collect();
        candidates.sort();

        if let Some(found) = candidates.into_iter().next() {
            debug!("Found project descriptor: {}", found.display());
            return Some(found);
        }
    }
    None
}

/// Derive the root namespace for generated output from the project that
/// contains the target folder. Fails before any file is written when the
/// target folder is not part of a project.
pub fn derive_namespace(target_folder: impl AsRef<Path>) -> Result<String> {
    let target_folder = target_folder.as_ref();

    let project_file = find_project_file(target_folder).ok_or_else(|| {
        GeneratorError::ProjectNotFound {
            path: target_folder.to_path_buf(),
        }
    })?;

    let name = project_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    if name.is_empty() {
        return Err(GeneratorError::ProjectNotFound {
            path: target_folder.to_path_buf(),
        });
    }

    Ok(name)
}
