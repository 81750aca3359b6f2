use std::path::Path;
use log::{debug, info, trace, warn};

use crate::config::GeneratorConfig;
use crate::dto::flattener::flatten_members;
use crate::dto::policy::ExclusionPolicy;
use crate::dto::synthesizer::synthesize;
use crate::dto::types::{DtoMember, GenerationResult, GenerationStats, OperationKind, WrittenArtifact};
use crate::dto::writer::ArtifactWriter;
use crate::entity::resolver::SymbolTable;
use crate::entity::scanner::EntityScanner;
use crate::entity::types::{EntityScanResult, PropertyMember, TypeKind};
use crate::error::Result;
use crate::project;
use crate::utils::{file_utils, hash_utils};

/// Generates Create/Read/Update DTO classes for the entity classes found in
/// a source folder
#[derive(Debug)]
pub struct DtoGenerator {
    /// Configuration for the run
    config: GeneratorConfig,

    /// Member-level exclusion rules derived from the configuration
    policy: ExclusionPolicy,

    /// Scanner for finding and parsing entity declarations
    scanner: EntityScanner,
}

impl DtoGenerator {
    /// Create a generator with the given configuration
    pub fn new(config: GeneratorConfig) -> Self {
        let policy = ExclusionPolicy::new(&config.create_exclusion_words);
        Self {
            config,
            policy,
            scanner: EntityScanner::new(),
        }
    }

    /// Create a generator with default configuration
    pub fn with_defaults() -> Self {
        Self::new(GeneratorConfig::default())
    }

    /// Run a full generation pass: derive the output namespace from the
    /// target folder's project, scan the source folder, and generate DTO
    /// files for every eligible class.
    ///
    /// The project lookup happens first so a target folder outside any
    /// project aborts the run with no files written.
    pub fn run(
        &self,
        source_dir: impl AsRef<Path>,
        target_dir: impl AsRef<Path>,
    ) -> Result<GenerationResult> {
        let source_dir = source_dir.as_ref();
        let target_dir = target_dir.as_ref();

        let namespace = project::derive_namespace(target_dir)?;
        info!("Generating DTOs into namespace {}.Domain.DTO", namespace);

        let scan = self.scanner.scan_directory(source_dir)?;
        let table = SymbolTable::from_scan(&scan);

        self.generate(&scan, &table, target_dir, &namespace)
    }

    /// Generate DTO files for an already scanned set of classes. Classes
    /// are processed sequentially in discovery order; within a class,
    /// operations run in configured order.
    pub fn generate(
        &self,
        scan: &EntityScanResult,
        table: &SymbolTable,
        target_dir: &Path,
        namespace: &str,
    ) -> Result<GenerationResult> {
        let writer = ArtifactWriter::new(target_dir);
        let mut stats = GenerationStats {
            files_scanned: scan.stats.total_files,
            ..GenerationStats::default()
        };
        let mut artifacts = Vec::new();

        for class in &scan.classes {
            stats.classes_found += 1;

            if class.is_excluded {
                debug!("Class '{}' is marked excluded; skipping", class.name);
                stats.classes_excluded += 1;
                continue;
            }

            file_utils::ensure_dir_exists(writer.class_dir(&class.name))?;

            if writer.all_artifacts_exist(&class.name, &self.config.operations) {
                debug!(
                    "All operation files for '{}' already exist; skipping",
                    class.name
                );
                stats.classes_skipped_existing += 1;
                continue;
            }

            let symbol = match table.resolve(&class.name) {
                Ok(symbol) => symbol,
                Err(error) => {
                    warn!("Skipping class '{}': {}", class.name, error);
                    stats.classes_skipped_unresolved += 1;
                    continue;
                }
            };

            let members = flatten_members(table, symbol);

            for operation in &self.config.operations {
                let path = writer.artifact_path(&class.name, *operation);
                if path.exists() {
                    stats.artifacts_skipped_existing += 1;
                    continue;
                }

                let dto_members = self.filter_members(table, *operation, &members);
                let content = synthesize(
                    namespace,
                    &operation.dto_class_name(&class.name),
                    &dto_members,
                );

                if writer.write_if_absent(&path, &content)? {
                    stats.artifacts_written += 1;
                    artifacts.push(WrittenArtifact {
                        class_name: class.name.clone(),
                        operation: *operation,
                        file_path: path,
                        content_hash: hash_utils::hash_string(&content),
                    });
                } else {
                    stats.artifacts_skipped_existing += 1;
                }
            }
        }

        info!("Generation complete:");
        info!("- Classes found: {}", stats.classes_found);
        info!("- Artifacts written: {}", stats.artifacts_written);
        info!(
            "- Artifacts skipped (existing): {}",
            stats.artifacts_skipped_existing
        );

        Ok(GenerationResult { stats, artifacts })
    }

    /// Apply the per-operation exclusion policy and the representability
    /// filter to a flattened member list
    fn filter_members(
        &self,
        table: &SymbolTable,
        operation: OperationKind,
        members: &[PropertyMember],
    ) -> Vec<DtoMember> {
        members
            .iter()
            .filter(|member| !self.policy.excludes_member(operation, &member.name))
            .filter_map(|member| match table.type_kind(&member.type_name) {
                TypeKind::Enum | TypeKind::Special => Some(DtoMember {
                    name: member.name.clone(),
                    type_display: member.type_name.clone(),
                }),
                TypeKind::Complex => {
                    trace!(
                        "Dropping member '{}': type '{}' is not representable",
                        member.name, member.type_name
                    );
                    None
                }
            })
            .collect()
    }
}
