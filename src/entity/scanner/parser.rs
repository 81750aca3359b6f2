use std::path::Path;
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::entity::types::{Accessibility, EntityClass, Mutability, PropertyMember};
use crate::error::Result;
use crate::utils::file_utils;

/// Marker attribute that opts a class out of generation. Matched by simple
/// name, with the conventional "Attribute" suffix stripped first.
const EXCLUSION_MARKER: &str = "IgnoreDTOGenerator";

// Match class declarations with optional attribute lists, modifiers and a
// base type. Handles both "class Name;" and "class Name : Parent {".
static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*((?:\[[^\]]+\]\s*)*)(?:(?:public|internal|sealed|abstract|partial)\s+)*class\s+([A-Za-z_][A-Za-z0-9_]*)(?:\s*:\s*([A-Za-z_][A-Za-z0-9_.]*))?",
    )
    .unwrap()
});

// Match auto-properties: accessibility, optional modifiers, type, name and
// the accessor list. Properties with accessor bodies don't match and are
// skipped, which loses nothing representable.
static PROPERTY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*(public|protected|internal|private)\s+(?:(?:static|virtual|override|required|new)\s+)*([A-Za-z_][A-Za-z0-9_.]*(?:<[^<>{};]*>)?(?:\[\])?\??)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{([^{}]*)\}",
    )
    .unwrap()
});

// Match enum declarations, with or without attributes and modifiers.
static ENUM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\[[^\]]+\]\s*)*(?:(?:public|internal)\s+)?enum\s+([A-Za-z_][A-Za-z0-9_]*)")
        .unwrap()
});

// Match a single attribute list; a list can carry several comma-separated
// attributes.
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]").unwrap());

/// Declarations extracted from a single source file
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    /// The classes found, in declaration order
    pub classes: Vec<EntityClass>,

    /// Names of the enums found
    pub enums: Vec<String>,
}

/// A class header located in file content, with the extent of its body
struct ClassRegion {
    name: String,
    base_type: Option<String>,
    is_excluded: bool,
    /// Byte offset where the declaration (including attributes) starts
    start: usize,
    /// Byte offset one past the closing brace, or past the header for
    /// body-less declarations
    end: usize,
    /// Interior of the body, when the class has one
    body: Option<(usize, usize)>,
}

/// A parser that extracts class and enum declarations from C# files using regex
#[derive(Debug, Default)]
pub struct ClassParser {}

impl ClassParser {
    /// Create a new class parser
    pub fn new() -> Self {
        Self {}
    }

    /// Parse a file and extract its declarations
    pub fn parse_file(&self, file_path: impl AsRef<Path>) -> Result<ParsedFile> {
        let file_path = file_path.as_ref();
        debug!("Parsing file: {}", file_path.display());

        let content = file_utils::read_file_to_string(file_path)?;

        Ok(self.parse_content(&content, file_path))
    }

    /// Parse content and extract its declarations
    pub fn parse_content(&self, content: &str, file_path: &Path) -> ParsedFile {
        let regions = self.locate_classes(content);

        let mut classes = Vec::with_capacity(regions.len());
        for (index, region) in regions.iter().enumerate() {
            let properties = match region.body {
                Some((body_start, body_end)) => {
                    let body = own_body(content, &regions, index, body_start, body_end);
                    self.parse_properties(&body)
                }
                None => Vec::new(),
            };

            debug!(
                "Found class: {} with base: {:?} ({} properties) in {}",
                region.name,
                region.base_type,
                properties.len(),
                file_path.display()
            );

            classes.push(EntityClass {
                name: region.name.clone(),
                base_type: region.base_type.clone(),
                properties,
                is_excluded: region.is_excluded,
                file_path: Some(file_path.to_path_buf()),
            });
        }

        let enums: Vec<String> = ENUM_RE
            .captures_iter(content)
            .map(|cap| cap[1].to_string())
            .collect();

        debug!(
            "Found {} classes and {} enums in {}",
            classes.len(),
            enums.len(),
            file_path.display()
        );

        ParsedFile { classes, enums }
    }

    /// Locate every class header in the content, together with its body extent
    fn locate_classes(&self, content: &str) -> Vec<ClassRegion> {
        let mut regions = Vec::new();
        for cap in CLASS_RE.captures_iter(content) {
            let Some(whole) = cap.get(0) else { continue };
            let attributes = cap.get(1).map(|m| m.as_str()).unwrap_or("");
            let body = class_body_span(content, whole.end());

            regions.push(ClassRegion {
                name: cap[2].to_string(),
                base_type: cap.get(3).map(|m| m.as_str().to_string()),
                is_excluded: self.is_marked_excluded(attributes),
                start: whole.start(),
                end: body.map(|(_, close)| close + 1).unwrap_or(whole.end()),
                body,
            });
        }
        regions
    }

    /// Whether the attribute lists preceding a declaration carry the
    /// exclusion marker. The decision is made here, once, so downstream
    /// policy never deals with attribute naming conventions.
    fn is_marked_excluded(&self, attribute_lists: &str) -> bool {
        for cap in ATTRIBUTE_RE.captures_iter(attribute_lists) {
            for attribute in cap[1].split(',') {
                let name = attribute
                    .trim()
                    .split('(')
                    .next()
                    .unwrap_or(attribute)
                    .trim();
                let simple = name.strip_suffix("Attribute").unwrap_or(name);
                if simple == EXCLUSION_MARKER {
                    return true;
                }
            }
        }
        false
    }

    /// Extract the auto-properties declared in a class body
    fn parse_properties(&self, body: &str) -> Vec<PropertyMember> {
        let mut properties = Vec::new();
        for cap in PROPERTY_RE.captures_iter(body) {
            let Some(accessibility) = Accessibility::from_keyword(&cap[1]) else {
                continue;
            };
            let Some(mutability) = classify_mutability(&cap[4]) else {
                continue;
            };

            trace!(
                "Found property: {} {} ({:?}, {:?})",
                &cap[2], &cap[3], accessibility, mutability
            );

            properties.push(PropertyMember {
                name: cap[3].to_string(),
                type_name: cap[2].to_string(),
                accessibility,
                mutability,
            });
        }
        properties
    }
}

/// Derive mutability from the accessor list of an auto-property. Returns
/// None when neither accessor is present.
fn classify_mutability(accessors: &str) -> Option<Mutability> {
    let has_get = accessors.contains("get");
    let has_set = accessors.contains("set") || accessors.contains("init");
    match (has_get, has_set) {
        (true, true) => Some(Mutability::ReadWrite),
        (true, false) => Some(Mutability::ReadOnly),
        (false, true) => Some(Mutability::WriteOnly),
        (false, false) => None,
    }
}

/// Find the brace-delimited body following a class header. Returns the
/// interior span as absolute byte offsets; the closing brace sits at the
/// span's end offset. Forward declarations and unterminated bodies yield
/// None.
fn class_body_span(content: &str, header_end: usize) -> Option<(usize, usize)> {
    let rest = &content[header_end..];
    let open = rest.find('{')?;
    if let Some(semi) = rest.find(';') {
        if semi < open {
            return None;
        }
    }

    let mut depth = 0usize;
    for (offset, ch) in rest[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((header_end + open + 1, header_end + open + offset));
                }
            }
            _ => {}
        }
    }
    None
}

/// Body text of one class with any nested class declarations blanked out,
/// so their members are not attributed to the outer class. Blanking with
/// spaces keeps byte offsets aligned.
fn own_body(content: &str, regions: &[ClassRegion], index: usize, start: usize, end: usize) -> String {
    let mut body = content[start..end].to_string();
    for (other_index, other) in regions.iter().enumerate() {
        if other_index == index {
            continue;
        }
        if other.start >= start && other.end <= end {
            body.replace_range(
                other.start - start..other.end - start,
                &" ".repeat(other.end - other.start),
            );
        }
    }
    body
}
