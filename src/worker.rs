use crate::error::Error;
use crate::sort::ClassSorter;
use crate::types::FileResult;
use crossbeam_channel::{Receiver, Sender};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

/// Pull paths until the job channel is closed and drained, pushing one
/// result for every file that has violations or fails.
pub fn worker(
    worker_id: usize,
    sorter: &ClassSorter,
    fix: bool,
    jobs: Receiver<PathBuf>,
    results: Sender<FileResult>,
) {
    debug!("[Worker {}] Started", worker_id);
    let mut processed = 0usize;

    for path in jobs.iter() {
        trace!("[Worker {}] Processing {}", worker_id, path.display());
        processed += 1;

        if let Some(result) = process_file(&path, sorter, fix) {
            if results.send(result).is_err() {
                warn!("[Worker {}] Result channel closed, stopping", worker_id);
                break;
            }
        }
    }

    debug!("[Worker {}] Finished after {} files", worker_id, processed);
}

/// Check one file, and in fix mode write the sorted content back in place.
///
/// Returns `None` when the file is already sorted.
pub fn process_file(path: &Path, sorter: &ClassSorter, fix: bool) -> Option<FileResult> {
    let original_bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            let error = Error::Read {
                path: path.to_path_buf(),
                source,
            };
            return Some(FileResult::failed(path.to_path_buf(), error));
        }
    };

    let violations = sorter.detect(&original_bytes);
    if violations.is_empty() {
        trace!("{} is sorted", path.display());
        return None;
    }
    debug!("{}: {} violations", path.display(), violations.len());

    let sorted_bytes = sorter.rewrite(&original_bytes);
    let mut result = FileResult {
        path: path.to_path_buf(),
        violations,
        original_bytes,
        sorted_bytes,
        error: None,
    };

    if fix {
        // Truncating the existing file keeps its permissions
        match fs::write(path, &result.sorted_bytes) {
            Ok(()) => info!("Formatted {}", path.display()),
            Err(source) => {
                result.error = Some(Error::Write {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Some(result)
}
