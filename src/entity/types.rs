use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Declared accessibility of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Protected,
    Internal,
    Private,
}

impl Accessibility {
    /// Map a C# accessibility keyword to its model value
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "internal" => Some(Self::Internal),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

/// Accessor-derived mutability of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mutability {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

/// How a property's declared type can be rendered in generated output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// An enum declared in the scanned sources; rendered verbatim
    Enum,

    /// A built-in value or string type; rendered verbatim
    Special,

    /// Anything else; never rendered
    Complex,
}

/// A data-carrying property declared directly on a class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyMember {
    /// Name of the property
    pub name: String,

    /// Declared type text, used verbatim in generated output
    pub type_name: String,

    /// Declared accessibility
    pub accessibility: Accessibility,

    /// Accessor-derived mutability
    pub mutability: Mutability,
}

/// A class declaration found in the scanned sources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityClass {
    /// Name of the class
    pub name: String,

    /// Base type name, if any
    pub base_type: Option<String>,

    /// Properties declared directly on this class, in declaration order
    pub properties: Vec<PropertyMember>,

    /// Whether the class carries the generation opt-out marker
    pub is_excluded: bool,

    /// Path to the file where this class was found
    pub file_path: Option<PathBuf>,
}

/// Statistics about the entity scanning process
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EntityScanStats {
    /// Total number of files processed
    pub total_files: usize,

    /// Number of files with no declarations
    pub empty_files: usize,

    /// Number of files containing classes
    pub files_with_classes: usize,

    /// Total number of classes found
    pub total_classes: usize,

    /// Total number of enums found
    pub total_enums: usize,
}

/// Result of scanning a set of declaration files
#[derive(Debug, Clone)]
pub struct EntityScanResult {
    /// The classes found during scanning, in discovery order
    pub classes: Vec<EntityClass>,

    /// Names of the enums found during scanning
    pub enums: Vec<String>,

    /// Statistics about the scanning process
    pub stats: EntityScanStats,
}
