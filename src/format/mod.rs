//! Canonical file formats and their input-format class names.
//!
//! # Identity rules
//! A table's storage format is recorded by the metadata catalog as the fully
//! qualified name of the Hadoop/Hive *input format class* that reads it.
//! That string is the only external identity.  It is matched exactly: no case
//! folding, no trimming, no prefix matching.
//!
//! [`FileFormat`] is the closed set of formats this build understands.  New
//! formats are added here and nowhere else; the compiler then flags every
//! `match` that has to learn about them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ── Input format class names ────────────────────────────────────────────────
//
// These are the exact strings the catalog stores.  They are part of the
// boundary contract with the metadata service and must never be edited.

/// Input format class for RCFile tables read by Hive.
pub const RCFILE_INPUT_FORMAT:   &str = "org.apache.hadoop.hive.ql.io.RCFileInputFormat";
/// Input format class for plain text tables.
pub const TEXT_INPUT_FORMAT:     &str = "org.apache.hadoop.mapred.TextInputFormat";
/// Input format class for SequenceFile tables.
pub const SEQUENCE_INPUT_FORMAT: &str = "org.apache.hadoop.mapred.SequenceFileInputFormat";
/// Input format class for Trevni tables read by Hive.
pub const TREVNI_INPUT_FORMAT:   &str = "org.apache.hadoop.hive.ql.io.TrevniInputFormat";

// ── FileFormat enum ─────────────────────────────────────────────────────────

/// Supported HDFS file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileFormat {
    RcFile,
    Text,
    SequenceFile,
    Trevni,
}

impl FileFormat {
    /// Every format, in declaration order.
    pub const ALL: [FileFormat; 4] = [
        FileFormat::RcFile,
        FileFormat::Text,
        FileFormat::SequenceFile,
        FileFormat::Trevni,
    ];

    /// The input format class name the catalog records for this format.
    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            FileFormat::RcFile       => RCFILE_INPUT_FORMAT,
            FileFormat::Text         => TEXT_INPUT_FORMAT,
            FileFormat::SequenceFile => SEQUENCE_INPUT_FORMAT,
            FileFormat::Trevni       => TREVNI_INPUT_FORMAT,
        }
    }

    /// Resolve a catalog class name to its format.
    ///
    /// An empty name is a caller bug and yields `InvalidArgument`.  Any other
    /// name that is not in the class-name table yields `UnrecognizedFormat`
    /// carrying the name verbatim.  Nothing is ever defaulted.
    pub fn from_class_name(class_name: &str) -> Result<Self, FormatError> {
        if class_name.is_empty() {
            return Err(FormatError::InvalidArgument);
        }
        crate::registry::lookup(class_name)
            .ok_or_else(|| FormatError::UnrecognizedFormat(class_name.to_string()))
    }

    /// Human-readable name (for diagnostics only).
    pub fn name(self) -> &'static str {
        match self {
            FileFormat::RcFile       => "RC_FILE",
            FileFormat::Text         => "TEXT",
            FileFormat::SequenceFile => "SEQUENCE_FILE",
            FileFormat::Trevni       => "TREVNI",
        }
    }

    /// Parse a canonical name.  Exact match, the same names serde accepts.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "RC_FILE"       => Some(FileFormat::RcFile),
            "TEXT"          => Some(FileFormat::Text),
            "SEQUENCE_FILE" => Some(FileFormat::SequenceFile),
            "TREVNI"        => Some(FileFormat::Trevni),
            _               => None,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FileFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FormatError::UnrecognizedFormat(s.to_string()))
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum FormatError {
    /// The catalog supplied no input format class at all.
    #[error("Input format class name is missing or empty")]
    InvalidArgument,
    /// A well-formed class name that this build does not support.
    #[error("Unrecognized file format: {0}")]
    UnrecognizedFormat(String),
    /// A peer sent a wire value outside the known range.
    #[error("Unknown wire file format value: {0}")]
    UnknownWireValue(i32),
    /// A published format catalog disagrees with this build's tables.
    #[error("Format catalog mismatch: {0}")]
    CatalogMismatch(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
