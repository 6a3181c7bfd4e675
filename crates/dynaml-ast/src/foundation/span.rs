//! Source location tracking for diagnostics.
//!
//! A [`Span`] is a compact byte range into a file registered with a
//! [`SourceMap`]; the map turns spans back into paths, line/column pairs
//! and snippets when a diagnostic is rendered.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Compact source location reference.
///
/// Points at a byte range in one file of a [`SourceMap`]. The starting line
/// is cached so error messages can name a line without a map lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Index into the source map's file list
    pub file_id: u16,
    /// Byte offset of the start position
    pub start: u32,
    /// Byte offset of the end position (exclusive)
    pub end: u32,
    /// Cached 1-based line number of the start position
    pub line: u16,
}

impl Span {
    /// Create a new span.
    pub fn new(file_id: u16, start: u32, end: u32, line: u16) -> Self {
        Self {
            file_id,
            start,
            end,
            line,
        }
    }

    /// Zero-length span at the start of a file.
    pub fn zero(file_id: u16) -> Self {
        Self::new(file_id, 0, 0, 1)
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> u32 {
        assert!(
            self.end >= self.start,
            "malformed span: end ({}) < start ({})",
            self.end,
            self.start
        );
        self.end - self.start
    }

    /// Check if the span is zero-length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// All source files of one analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMap {
    files: Vec<SourceFile>,
}

/// A single source file with a line-start index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Path the file was loaded from
    pub path: PathBuf,
    /// Original source text
    pub source: String,
    /// Byte offsets of each line start, with an EOF sentinel last
    line_starts: Vec<u32>,
}

impl SourceMap {
    /// Create an empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source file and return its id.
    pub fn add_file(&mut self, path: PathBuf, source: String) -> u16 {
        let file_id = self.files.len();
        assert!(file_id < u16::MAX as usize, "too many source files");
        self.files.push(SourceFile::new(path, source));
        file_id as u16
    }

    /// The file a span points into.
    pub fn file(&self, span: &Span) -> &SourceFile {
        &self.files[span.file_id as usize]
    }

    /// The path of the file a span points into.
    pub fn file_path(&self, span: &Span) -> &Path {
        &self.files[span.file_id as usize].path
    }

    /// The source text a span covers.
    pub fn snippet(&self, span: &Span) -> &str {
        let file = self.file(span);
        &file.source[span.start as usize..span.end as usize]
    }

    /// 1-based (line, column) of a span's start.
    pub fn line_col(&self, span: &Span) -> (u32, u32) {
        self.file(span).line_col(span.start)
    }
}

impl SourceFile {
    /// Create a source file, indexing line starts.
    pub fn new(path: PathBuf, source: String) -> Self {
        let mut line_starts = vec![0];
        for (idx, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push((idx + 1) as u32);
            }
        }
        if line_starts.last() != Some(&(source.len() as u32)) {
            line_starts.push(source.len() as u32);
        }
        Self {
            path,
            source,
            line_starts,
        }
    }

    /// 1-based (line, column) of a byte offset.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        assert!(
            offset <= self.source.len() as u32,
            "offset {} is beyond EOF (len = {})",
            offset,
            self.source.len()
        );

        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx.max(1) - 1,
        };

        let line = (line_idx + 1) as u32;
        let col = (offset - self.line_starts[line_idx]) + 1;
        (line, col)
    }

    /// Text of a 1-based line, without lookup past EOF.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        if line == 0 || line as usize >= self.line_starts.len() {
            return None;
        }
        let start = self.line_starts[(line - 1) as usize] as usize;
        let end = self.line_starts[line as usize] as usize;
        Some(&self.source[start..end])
    }
}
