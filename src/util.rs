use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// File selection built from the configured `file_patterns`.
///
/// Patterns starting with `.` are extensions; anything else is a glob.
#[derive(Debug)]
pub struct FilePatterns {
    extensions: Vec<String>,
    globs: GlobSet,
}

impl FilePatterns {
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut extensions = Vec::new();
        let mut builder = GlobSetBuilder::new();

        for pattern in patterns {
            if let Some(extension) = pattern.strip_prefix('.') {
                extensions.push(extension.to_string());
            } else {
                let glob = Glob::new(pattern).map_err(|e| {
                    Error::Config(format!("invalid file pattern '{}': {}", pattern, e))
                })?;
                builder.add(glob);
            }
        }

        let globs = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build file patterns: {}", e)))?;

        Ok(Self { extensions, globs })
    }

    pub fn is_match(&self, path: &Path) -> bool {
        let extension_match = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        if extension_match {
            return true;
        }

        let relative = path.strip_prefix("./").unwrap_or(path);
        self.globs.is_match(path) || self.globs.is_match(relative)
    }
}

/// Expand files and directories into the matching files, deduplicated and
/// sorted lexicographically.
///
/// A path that cannot be inspected, or a directory that cannot be walked,
/// fails the whole lookup.
pub fn find_files(paths: &[PathBuf], patterns: &FilePatterns) -> Result<Vec<PathBuf>> {
    let mut files = HashSet::new();

    for path in paths {
        let metadata = fs::metadata(path).map_err(|source| Error::Path {
            path: path.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            if patterns.is_match(path) {
                files.insert(path.clone());
            } else {
                trace!("Skipping {}: no pattern matches", path.display());
            }
            continue;
        }

        walk(path, patterns, &mut files).map_err(|source| Error::Walk {
            path: path.clone(),
            source,
        })?;
    }

    let mut files: Vec<PathBuf> = files.into_iter().collect();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!("Found {} files to process", files.len());
    Ok(files)
}

fn walk(dir: &Path, patterns: &FilePatterns, files: &mut HashSet<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let entry_path = entry.path();

        // Symlinked directories are not followed
        if entry.file_type()?.is_dir() {
            walk(&entry_path, patterns, files)?;
        } else if patterns.is_match(&entry_path) {
            files.insert(entry_path);
        }
    }

    Ok(())
}
