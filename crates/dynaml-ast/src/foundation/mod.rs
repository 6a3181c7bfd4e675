//! Foundation types shared across the compiler.

pub mod span;
pub mod types;

pub use span::{SourceFile, SourceMap, Span};
pub use types::Type;
