use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a sorter run.
///
/// `Path`, `Walk`, `Config` and `ConfigFile` abort the run before any file is
/// touched. `Read` and `Write` are attached to the `FileResult` of the file
/// they concern and never stop other files from being processed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid path {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk directory {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse config file {}: {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
