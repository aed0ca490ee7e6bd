//! Serializers Module
//!
//! Catalog output formats and the line builder they write through

pub mod indented_lines;
pub mod po;
pub mod serializer;

// Re-export commonly used items
pub use indented_lines::IndentedLinesBuilder;
pub use po::Po;
pub use serializer::{xliff_datatype, Serializer};
