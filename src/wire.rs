//! Wire representation of [`FileFormat`] for the cross-process protocol.
//!
//! The protocol carries file formats as an `i32` enum value.  Framing that
//! value on a transport belongs to the protocol layer, not to this crate.
//!
//! Both directions of the mapping are exhaustive `match`es with no wildcard
//! arm: a new `FileFormat` variant without a wire value fails to compile.
//! Decoding an `i32` is the only fallible step, since a peer may be running a
//! newer build.

use serde::{Deserialize, Serialize};

use crate::format::{FileFormat, FormatError};

/// Wire-level file format.  Discriminants are frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum WireFormat {
    RcFile       = 0,
    Text         = 1,
    SequenceFile = 2,
    Trevni       = 3,
}

impl WireFormat {
    /// The `i32` carried on the wire.
    #[inline]
    pub fn value(self) -> i32 {
        self as i32
    }

    /// Resolve a received `i32`.
    pub fn from_value(value: i32) -> Result<Self, FormatError> {
        match value {
            0 => Ok(WireFormat::RcFile),
            1 => Ok(WireFormat::Text),
            2 => Ok(WireFormat::SequenceFile),
            3 => Ok(WireFormat::Trevni),
            v => Err(FormatError::UnknownWireValue(v)),
        }
    }

    /// Inverse of [`FileFormat::to_wire`].
    #[inline]
    pub fn to_file_format(self) -> FileFormat {
        match self {
            WireFormat::RcFile       => FileFormat::RcFile,
            WireFormat::Text         => FileFormat::Text,
            WireFormat::SequenceFile => FileFormat::SequenceFile,
            WireFormat::Trevni       => FileFormat::Trevni,
        }
    }
}

impl TryFrom<i32> for WireFormat {
    type Error = FormatError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<WireFormat> for i32 {
    fn from(wire: WireFormat) -> i32 {
        wire.value()
    }
}

impl FileFormat {
    /// Convert to the wire representation.  Total over every variant.
    #[inline]
    pub fn to_wire(self) -> WireFormat {
        match self {
            FileFormat::RcFile       => WireFormat::RcFile,
            FileFormat::Text         => WireFormat::Text,
            FileFormat::SequenceFile => WireFormat::SequenceFile,
            FileFormat::Trevni       => WireFormat::Trevni,
        }
    }
}

impl From<FileFormat> for WireFormat {
    fn from(format: FileFormat) -> Self {
        format.to_wire()
    }
}

impl From<WireFormat> for FileFormat {
    fn from(wire: WireFormat) -> Self {
        wire.to_file_format()
    }
}
