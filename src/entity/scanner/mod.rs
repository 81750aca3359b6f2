mod file_collector;
mod parser;
mod progress;

use std::path::{Path, PathBuf};
use log::info;

use crate::entity::types::{EntityScanResult, EntityScanStats};
use crate::error::Result;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use parser::{ClassParser, ParsedFile};
pub use progress::ProgressTracker;

/// Scanner responsible for finding and parsing entity declaration files
#[derive(Debug, Default)]
pub struct EntityScanner {
    /// File collector for finding declaration files
    file_collector: FileCollector,

    /// Parser for extracting declarations from file content
    parser: ClassParser,

    /// Progress tracker for displaying progress
    progress_tracker: ProgressTracker,
}

impl EntityScanner {
    /// Create a new entity scanner
    pub fn new() -> Self {
        Self {
            file_collector: FileCollector::new(),
            parser: ClassParser::new(),
            progress_tracker: ProgressTracker::new(),
        }
    }

    /// Collect the declaration files at the top level of the input directory
    pub fn collect_files(&self, input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.file_collector.collect_files(input_dir)
    }

    /// Scan a directory for entity declarations
    pub fn scan_directory(&self, input_dir: impl AsRef<Path>) -> Result<EntityScanResult> {
        let input_dir = input_dir.as_ref();
        info!("Scanning directory: {}", input_dir.display());

        let files = self.collect_files(input_dir)?;
        info!("Found {} files to process", files.len());

        self.scan_files(&files)
    }

    /// Scan specific files for entity declarations. Files are processed in
    /// the given order and declarations keep their in-file order, so class
    /// discovery order is deterministic.
    pub fn scan_files(&self, files: &[PathBuf]) -> Result<EntityScanResult> {
        let parsed = self
            .progress_tracker
            .track_progress(files, |file| self.parser.parse_file(file))?;

        let mut stats = EntityScanStats {
            total_files: parsed.len(),
            ..EntityScanStats::default()
        };

        let mut classes = Vec::new();
        let mut enums = Vec::new();
        for parsed_file in parsed {
            if parsed_file.classes.is_empty() && parsed_file.enums.is_empty() {
                stats.empty_files += 1;
                continue;
            }

            if !parsed_file.classes.is_empty() {
                stats.files_with_classes += 1;
            }
            stats.total_classes += parsed_file.classes.len();
            stats.total_enums += parsed_file.enums.len();

            classes.extend(parsed_file.classes);
            enums.extend(parsed_file.enums);
        }

        info!(
            "Processed {} files, found {} classes and {} enums",
            stats.total_files, stats.total_classes, stats.total_enums
        );

        Ok(EntityScanResult {
            classes,
            enums,
            stats,
        })
    }
}
