use crate::config::Config;
use crate::error::Result;
use crate::render;
use crate::sort::ClassSorter;
use crate::types::FileResult;
use crate::util::{self, FilePatterns};
use crate::worker;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::thread;
use tracing::{debug, error, info, warn};

/// Number of worker threads processing files
pub const WORKER_COUNT: usize = 4;

const EXIT_FAILURE: i32 = 1;

/// Finds files and sorts their classes on a fixed worker pool
#[derive(Debug)]
pub struct Sorter {
    classes: ClassSorter,
    patterns: FilePatterns,
    fix: bool,
}

impl Sorter {
    /// Fails if the configured attributes or file patterns are malformed
    pub fn new(config: Config, fix: bool) -> Result<Self> {
        let patterns = FilePatterns::new(&config.file_patterns)?;
        let classes = ClassSorter::new(config)?;
        Ok(Self {
            classes,
            patterns,
            fix,
        })
    }

    /// Process every matching file under `paths`.
    ///
    /// Only files with violations or errors appear in the result, sorted by
    /// path. Bad input paths fail the run before any file is read.
    pub fn run(&self, paths: &[PathBuf]) -> Result<Vec<FileResult>> {
        let files = util::find_files(paths, &self.patterns)?;
        if files.is_empty() {
            warn!("No files found to process");
            return Ok(Vec::new());
        }
        Ok(self.schedule(files))
    }

    fn schedule(&self, files: Vec<PathBuf>) -> Vec<FileResult> {
        // Each file yields at most one result, so neither channel can fill up
        let capacity = files.len().max(1);
        let (job_tx, job_rx) = crossbeam_channel::bounded::<PathBuf>(capacity);
        let (result_tx, result_rx) = crossbeam_channel::bounded::<FileResult>(capacity);

        info!(
            "Processing {} files with {} workers",
            files.len(),
            WORKER_COUNT
        );

        thread::scope(|scope| {
            let handles: Vec<_> = (0..WORKER_COUNT)
                .map(|worker_id| {
                    let jobs = job_rx.clone();
                    let results = result_tx.clone();
                    let classes = &self.classes;
                    let fix = self.fix;
                    scope.spawn(move || worker::worker(worker_id, classes, fix, jobs, results))
                })
                .collect();
            drop(job_rx);

            for file in files {
                if job_tx.send(file).is_err() {
                    error!("All workers exited early");
                    break;
                }
            }
            drop(job_tx);

            for (worker_id, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() {
                    error!("[Worker {}] Panicked", worker_id);
                }
            }
        });
        drop(result_tx);

        let mut results: Vec<FileResult> = result_rx.iter().collect();
        results.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
        debug!("Collected {} results", results.len());
        results
    }
}

/// Run a check (or fix) over `paths`, print the report and exit non-zero
/// when the run failed or, in check mode, found violations.
pub async fn orchestrate_and_run(
    config: Config,
    paths: Vec<PathBuf>,
    fix: bool,
    output: Option<&str>,
) {
    let sorter = match Sorter::new(config, fix) {
        Ok(sorter) => sorter,
        Err(e) => {
            error!("Error initializing sorter: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let results = match tokio::task::spawn_blocking(move || sorter.run(&paths)).await {
        Ok(Ok(results)) => results,
        Ok(Err(e)) => {
            error!("Error during execution: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
        Err(e) => {
            error!("Task join error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let color = std::io::stderr().is_terminal();
    let summary = render::summarize(&results);
    for result in &results {
        if let Some(e) = &result.error {
            eprintln!("{}", render::format_error(&result.path, e, color));
            continue;
        }
        if !fix {
            let content = &result.original_bytes;
            for violation in &result.violations {
                let block = render::format_violation(&result.path, content, violation, color);
                eprintln!("{}", block);
            }
        }
    }
    eprintln!("{}", render::format_summary(&summary, fix, color));

    if let Some(output_path) = output {
        if let Err(e) = write_output(output_path, &results, fix) {
            error!("Failed to write output file: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }

    if summary.errors > 0 || (!fix && summary.violations > 0) {
        std::process::exit(EXIT_FAILURE);
    }
}

fn write_output(path: &str, results: &[FileResult], fix: bool) -> anyhow::Result<()> {
    let content = if path.ends_with(".json") {
        serde_json::to_string_pretty(&render::Report::new(results, fix))?
    } else if path.ends_with(".md") {
        render::format_markdown(results)
    } else {
        anyhow::bail!("Output file must end with .md or .json");
    };

    std::fs::write(path, content)?;
    info!("Results written to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use std::path::Path;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_run_reports_unsorted_files_in_path_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        for i in 0..12 {
            let content = if i % 3 == 0 {
                "<a class=\"flex p-4\">"
            } else {
                "<a class=\"p-4 flex\">"
            };
            write(&root.join(format!("page{:02}.html", i)), content);
        }
        write(&root.join("notes.txt"), "<a class=\"p-4 flex\">");

        let sorter = Sorter::new(Config::default(), false).unwrap();
        let results = sorter.run(&[root.to_path_buf()]).unwrap();

        let names: Vec<String> = results
            .iter()
            .map(|r| r.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        let expected: Vec<String> = (0..12)
            .filter(|i| i % 3 != 0)
            .map(|i| format!("page{:02}.html", i))
            .collect();
        assert_eq!(names, expected);
        for result in &results {
            assert_eq!(result.violations.len(), 1);
            assert!(result.error.is_none());
        }
    }

    #[test]
    fn test_run_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..8 {
            write(
                &dir.path().join(format!("{}.html", i)),
                "<a class=\"hover:p-4 sm:flex flex flex\">",
            );
        }

        let sorter = Sorter::new(Config::default(), false).unwrap();
        let first = sorter.run(&[dir.path().to_path_buf()]).unwrap();
        let second = sorter.run(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(first.len(), 8);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.violations, b.violations);
            assert_eq!(a.sorted_bytes, b.sorted_bytes);
        }
    }

    #[test]
    fn test_fix_mode_rewrites_only_unsorted_files() {
        let dir = tempfile::tempdir().unwrap();
        let sorted = dir.path().join("sorted.html");
        let unsorted = dir.path().join("unsorted.html");
        write(&sorted, "<a class=\"flex p-4\">");
        write(&unsorted, "<a class=\"p-4 flex\">\n<b class='m-2 flex'>");

        let sorter = Sorter::new(Config::default(), true).unwrap();
        let results = sorter.run(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].path, unsorted);
        assert_eq!(results[0].violations.len(), 2);
        assert_eq!(
            fs::read_to_string(&unsorted).unwrap(),
            "<a class=\"flex p-4\">\n<b class='flex m-2'>"
        );

        let again = sorter.run(&[dir.path().to_path_buf()]).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn test_missing_path_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let sorter = Sorter::new(Config::default(), false).unwrap();
        let result = sorter.run(&[dir.path().join("nope")]);
        assert!(matches!(result, Err(Error::Path { .. })));
    }

    #[test]
    fn test_no_files_found() {
        let dir = tempfile::tempdir().unwrap();
        let sorter = Sorter::new(Config::default(), false).unwrap();
        assert!(sorter.run(&[dir.path().to_path_buf()]).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_attribute_fails_construction() {
        let config = Config {
            class_attributes: vec!["".into()],
            ..Config::default()
        };
        assert!(matches!(Sorter::new(config, false), Err(Error::Config(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_does_not_stop_others() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("a.html");
        let open = dir.path().join("b.html");
        write(&locked, "<a class=\"p-4 flex\">");
        write(&open, "<a class=\"p-4 flex\">");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root can read anything, so there is nothing to observe
        if fs::read(&locked).is_ok() {
            return;
        }

        let sorter = Sorter::new(Config::default(), false).unwrap();
        let results = sorter.run(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0].error, Some(Error::Read { .. })));
        assert!(results[1].error.is_none());
        assert_eq!(results[1].violations.len(), 1);
    }
}
