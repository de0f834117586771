use crate::error::Error;
use serde::Serialize;
use std::path::PathBuf;

/// Rule code reported for an unsorted class list
pub const UNSORTED_RULE: &str = "TWS001";
/// Message reported for an unsorted class list
pub const UNSORTED_MESSAGE: &str = "Unsorted Tailwind classes";

/// An unsorted class attribute with its location in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Line (1-indexed)
    pub line: usize,
    /// Column (1-indexed, in bytes)
    pub col: usize,
    /// Byte offset where the class list starts
    pub start_offset: usize,
    /// Byte offset one past the end of the class list
    pub end_offset: usize,
    /// Rule code
    pub rule: String,
    /// Violation detail
    pub message: String,
    /// Whether a rewrite is available
    pub fixable: bool,
}

/// Outcome of processing a single file.
///
/// Files without violations produce no result at all, so a `FileResult`
/// either carries violations or an error.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
    pub original_bytes: Vec<u8>,
    pub sorted_bytes: Vec<u8>,
    pub error: Option<Error>,
}

impl FileResult {
    pub fn failed(path: PathBuf, error: Error) -> Self {
        Self {
            path,
            violations: Vec::new(),
            original_bytes: Vec::new(),
            sorted_bytes: Vec::new(),
            error: Some(error),
        }
    }
}
