//! Process-wide, read-only format registry.
//!
//! The class-name table is built on first use and never mutated.  Lookups are
//! plain `HashMap` reads, so any number of threads may classify concurrently
//! without synchronisation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::format::{FileFormat, FormatError};
use crate::wire::WireFormat;

static CLASS_NAMES: Lazy<HashMap<&'static str, FileFormat>> = Lazy::new(|| {
    FileFormat::ALL
        .iter()
        .map(|&format| (format.class_name(), format))
        .collect()
});

/// Raw table lookup.  `None` for anything that is not an exact key.
#[inline]
pub(crate) fn lookup(class_name: &str) -> Option<FileFormat> {
    CLASS_NAMES.get(class_name).copied()
}

/// Returns true if `class_name` names an input format class we support.
pub fn is_supported_class_name(class_name: &str) -> bool {
    CLASS_NAMES.contains_key(class_name)
}

/// Classify the input format class recorded against a table.
///
/// The catalog field is nullable, so `None` is accepted and reported as
/// `InvalidArgument`, the same as an empty string.
pub fn classify(class_name: Option<&str>) -> Result<FileFormat, FormatError> {
    match class_name {
        Some(name) => FileFormat::from_class_name(name),
        None       => Err(FormatError::InvalidArgument),
    }
}

/// Classify and convert straight to the wire value.
pub fn classify_to_wire(class_name: Option<&str>) -> Result<WireFormat, FormatError> {
    classify(class_name).map(FileFormat::to_wire)
}

/// Supported class names, in [`FileFormat::ALL`] order.
pub fn supported_class_names() -> impl Iterator<Item = &'static str> {
    FileFormat::ALL.into_iter().map(FileFormat::class_name)
}

// ── Catalog descriptors ──────────────────────────────────────────────────────

/// One row of the published format catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatDescriptor {
    pub format:     FileFormat,
    pub class_name: String,
    pub wire:       i32,
}

impl FormatDescriptor {
    /// The row this build publishes for `format`.
    pub fn new(format: FileFormat) -> Self {
        Self {
            format,
            class_name: format.class_name().to_string(),
            wire:       format.to_wire().value(),
        }
    }
}

/// Describe every supported format.
pub fn describe() -> Vec<FormatDescriptor> {
    FileFormat::ALL.into_iter().map(FormatDescriptor::new).collect()
}

/// The full format catalog, as exchanged with collaborators in JSON.
///
/// A valid catalog holds exactly one row per [`FileFormat`], in any order,
/// and every row matches [`FormatDescriptor::new`] for its format.  Subsets,
/// duplicates and rows that disagree on class name or wire value are rejected
/// with `CatalogMismatch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormatCatalog {
    pub formats: Vec<FormatDescriptor>,
}

impl FormatCatalog {
    /// The catalog describing this build.
    pub fn current() -> Self {
        Self { formats: describe() }
    }

    /// Serialize to JSON.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FormatError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse a catalog published by a peer and check it against this build.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        let catalog: FormatCatalog = serde_json::from_slice(bytes)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants listed on [`FormatCatalog`].
    pub fn validate(&self) -> Result<(), FormatError> {
        let mut seen = HashSet::new();
        for row in &self.formats {
            if !seen.insert(row.format) {
                return Err(FormatError::CatalogMismatch(format!(
                    "duplicate row for {}", row.format
                )));
            }
            let expected = FormatDescriptor::new(row.format);
            if row.class_name != expected.class_name {
                return Err(FormatError::CatalogMismatch(format!(
                    "{} has class name {}, expected {}",
                    row.format, row.class_name, expected.class_name
                )));
            }
            if row.wire != expected.wire {
                return Err(FormatError::CatalogMismatch(format!(
                    "{} has wire value {}, expected {}",
                    row.format, row.wire, expected.wire
                )));
            }
        }
        if let Some(missing) = FileFormat::ALL.into_iter().find(|f| !seen.contains(f)) {
            return Err(FormatError::CatalogMismatch(format!("no row for {}", missing)));
        }
        Ok(())
    }
}
