//! Diagnostic collection and rendering.
//!
//! [`Diagnostics`] is the reporting sink the inference rules write to:
//! fire-and-forget, no return value. Every report is mirrored to `tracing`
//! at a level matching its severity, so running analyses surface problems
//! live while the collected list feeds batch rendering afterwards.

use crate::error::{CompileError, Severity};
use dynaml_ast::foundation::SourceMap;

/// Collecting diagnostic sink.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports: Vec<CompileError>,
}

impl Diagnostics {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a diagnostic.
    ///
    /// Appends to the collected list and mirrors the message to `tracing`.
    pub fn report(&mut self, error: &CompileError) {
        match error.severity {
            Severity::Error => {
                tracing::error!(kind = error.kind.name(), "{}", error.message);
            }
            Severity::Warning => {
                tracing::warn!(kind = error.kind.name(), "{}", error.message);
            }
            Severity::Note => {
                tracing::debug!(kind = error.kind.name(), "{}", error.message);
            }
        }
        self.reports.push(error.clone());
    }

    /// All diagnostics reported so far, in report order.
    pub fn reports(&self) -> &[CompileError] {
        &self.reports
    }

    /// Check whether any error-severity diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.reports
            .iter()
            .any(|report| report.severity == Severity::Error)
    }
}

/// Render a diagnostic with source context.
///
/// Produces the conventional compiler layout: severity header, file
/// location, the offending line with a caret underline, then any notes.
pub fn render(sources: &SourceMap, error: &CompileError) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}: {}: {}\n",
        error.severity,
        error.kind.name(),
        error.message
    ));

    let path = sources.file_path(&error.span);
    let (line, col) = sources.line_col(&error.span);
    output.push_str(&format!("  --> {}:{}:{}\n", path.display(), line, col));

    if let Some(text) = sources.file(&error.span).line_text(line) {
        let text = text.trim_end_matches('\n');
        output.push_str(&format!("{:3} | {}\n", line, text));

        let width = (error.span.len() as usize).max(1).min(text.len() + 1);
        let underline = " ".repeat((col as usize).saturating_sub(1)) + &"^".repeat(width);
        output.push_str(&format!("    | {}\n", underline));
    }

    for note in &error.notes {
        output.push_str(&format!("    = help: {}\n", note));
    }

    output
}
