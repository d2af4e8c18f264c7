pub mod format;
pub mod registry;
pub mod wire;

pub use format::{FileFormat, FormatError};
pub use registry::{classify, is_supported_class_name, FormatCatalog, FormatDescriptor};
pub use wire::WireFormat;
