use std::collections::{HashMap, HashSet};
use log::{debug, warn};

use crate::entity::resolver::SymbolTable;
use crate::entity::types::{Accessibility, EntityClass, Mutability, PropertyMember};

/// Names treated as the universal root of the inheritance chain
const ROOT_TYPE_NAMES: &[&str] = &["object", "Object", "System.Object"];

/// Collect the ordered member list for a class: eligible inherited members
/// from the base-most ancestor down the chain, then the class's own
/// eligible members last.
///
/// Inherited members admit public and protected accessibility; the DTO is a
/// flat projection with no runtime relationship to the entity hierarchy, so
/// protected state is fair game. Own members admit public only. Only
/// read-write members are eligible. A member re-declared along the chain is
/// kept once per declaration; the duplicate is reported, not removed.
pub fn flatten_members(table: &SymbolTable, class: &EntityClass) -> Vec<PropertyMember> {
    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(class.name.as_str());

    let mut base = class.base_type.as_deref();
    while let Some(base_name) = base {
        if ROOT_TYPE_NAMES.contains(&base_name) {
            break;
        }
        if !visited.insert(base_name) {
            warn!(
                "Inheritance cycle at '{}' while flattening '{}'; stopping the walk",
                base_name, class.name
            );
            break;
        }
        match table.lookup(base_name) {
            Some(parent) => {
                chain.push(parent);
                base = parent.base_type.as_deref();
            }
            None => {
                debug!(
                    "Base type '{}' of '{}' is not in the scanned sources; stopping the walk",
                    base_name, class.name
                );
                break;
            }
        }
    }

    let mut members = Vec::new();
    for ancestor in chain.iter().rev() {
        members.extend(
            ancestor
                .properties
                .iter()
                .filter(|property| {
                    property.mutability == Mutability::ReadWrite
                        && matches!(
                            property.accessibility,
                            Accessibility::Public | Accessibility::Protected
                        )
                })
                .cloned(),
        );
    }
    members.extend(
        class
            .properties
            .iter()
            .filter(|property| {
                property.mutability == Mutability::ReadWrite
                    && property.accessibility == Accessibility::Public
            })
            .cloned(),
    );

    report_shadowed(class, &members);
    members
}

/// Shadowing re-declarations double-emit; flag them so the duplicated
/// output is no surprise.
fn report_shadowed(class: &EntityClass, members: &[PropertyMember]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for member in members {
        *counts.entry(member.name.as_str()).or_insert(0) += 1;
    }
    for (name, count) in counts {
        if count > 1 {
            warn!(
                "Property '{}' appears {} times in the flattened members of '{}' (shadowed along the inheritance chain)",
                name, count, class.name
            );
        }
    }
}
