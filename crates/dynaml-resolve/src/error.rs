//! Diagnostics surface for the analysis pass.
//!
//! The error values themselves live in `dynaml-ast`, next to the slot that
//! stores them; this module re-exports them under the path the pass code
//! uses.

pub use dynaml_ast::error::{CompileError, ErrorKind, Severity, TypeResult};
