use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use log::warn;

use crate::entity::types::{EntityClass, EntityScanResult, TypeKind};
use crate::error::{GeneratorError, Result};

/// Types whose declarations can be reproduced verbatim in generated output.
/// Mirrors the host language's built-in "special" types; everything else,
/// including nullable forms, generics and collections, is complex.
const SPECIAL_TYPES: &[&str] = &[
    "bool", "byte", "sbyte", "char", "decimal", "double", "float", "int", "uint", "long", "ulong",
    "short", "ushort", "string", "object", "DateTime", "System.DateTime",
];

/// Symbol table built from a completed scan.
///
/// This is the semantic-resolution boundary: the generator resolves class
/// declarations against it, walks base-type chains through it, and
/// classifies member types with it. Resolution calls are counted so tests
/// can assert that skipped classes never reach member resolution.
#[derive(Debug)]
pub struct SymbolTable {
    /// Map of class name to class symbol
    classes: HashMap<String, EntityClass>,

    /// Names of enums declared in the scanned sources
    enums: HashSet<String>,

    /// Number of resolve calls made against this table
    resolutions: Cell<usize>,
}

impl SymbolTable {
    /// Build a symbol table from scan results. The first declaration of a
    /// name wins; later duplicates are reported and ignored.
    pub fn from_scan(scan: &EntityScanResult) -> Self {
        let mut classes = HashMap::with_capacity(scan.classes.len());
        for class in &scan.classes {
            if classes.contains_key(&class.name) {
                warn!(
                    "Duplicate class declaration '{}'; keeping the first one",
                    class.name
                );
                continue;
            }
            classes.insert(class.name.clone(), class.clone());
        }

        Self {
            classes,
            enums: scan.enums.iter().cloned().collect(),
            resolutions: Cell::new(0),
        }
    }

    /// Resolve a class declaration by name, counting the call
    pub fn resolve(&self, name: &str) -> Result<&EntityClass> {
        self.resolutions.set(self.resolutions.get() + 1);
        self.classes
            .get(name)
            .ok_or_else(|| GeneratorError::UnresolvedClass {
                name: name.to_string(),
            })
    }

    /// Look up a class by name without counting; used for base-chain walks
    /// where an unknown name just ends the chain
    pub fn lookup(&self, name: &str) -> Option<&EntityClass> {
        self.classes.get(name)
    }

    /// Number of resolve calls made so far
    pub fn resolution_calls(&self) -> usize {
        self.resolutions.get()
    }

    /// Classify a declared type for representability
    pub fn type_kind(&self, type_name: &str) -> TypeKind {
        if self.enums.contains(type_name) {
            TypeKind::Enum
        } else if SPECIAL_TYPES.contains(&type_name) {
            TypeKind::Special
        } else {
            TypeKind::Complex
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::types::EntityScanStats;

    fn scan_with(classes: Vec<EntityClass>, enums: Vec<String>) -> EntityScanResult {
        EntityScanResult {
            classes,
            enums,
            stats: EntityScanStats::default(),
        }
    }

    fn class(name: &str) -> EntityClass {
        EntityClass {
            name: name.to_string(),
            base_type: None,
            properties: Vec::new(),
            is_excluded: false,
            file_path: None,
        }
    }

    #[test]
    fn test_resolve_counts_calls() {
        let table = SymbolTable::from_scan(&scan_with(vec![class("Customer")], Vec::new()));
        assert_eq!(table.resolution_calls(), 0);

        assert!(table.resolve("Customer").is_ok());
        assert!(table.resolve("Missing").is_err());
        assert_eq!(table.resolution_calls(), 2);

        // lookup is not a resolution
        assert!(table.lookup("Customer").is_some());
        assert_eq!(table.resolution_calls(), 2);
    }

    #[test]
    fn test_first_duplicate_declaration_wins() {
        let mut first = class("Customer");
        first.base_type = Some("EntityBase".to_string());
        let second = class("Customer");

        let table = SymbolTable::from_scan(&scan_with(vec![first, second], Vec::new()));
        let resolved = table.lookup("Customer").expect("Customer not found");
        assert_eq!(resolved.base_type, Some("EntityBase".to_string()));
    }

    #[test]
    fn test_type_kind_classification() {
        let table = SymbolTable::from_scan(&scan_with(Vec::new(), vec!["Status".to_string()]));

        assert_eq!(table.type_kind("Status"), TypeKind::Enum);
        assert_eq!(table.type_kind("int"), TypeKind::Special);
        assert_eq!(table.type_kind("string"), TypeKind::Special);
        assert_eq!(table.type_kind("DateTime"), TypeKind::Special);
        assert_eq!(table.type_kind("List<Order>"), TypeKind::Complex);
        assert_eq!(table.type_kind("int?"), TypeKind::Complex);
        assert_eq!(table.type_kind("Guid"), TypeKind::Complex);
    }
}
