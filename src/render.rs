use crate::error::Error;
use crate::types::{FileResult, Violation};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::path::Path;

/// Lines of source shown above and below a violation
const CONTEXT_LINES: usize = 1;

const HELP_TEXT: &str = "Sort the Tailwind CSS classes in the attribute";

const FIX_HINT: &str = "Run with --fix to apply changes.";

/// Totals over a run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Files with violations
    pub files: usize,
    pub violations: usize,
    pub fixable: usize,
    /// Files that could not be read or written
    pub errors: usize,
}

pub fn summarize(results: &[FileResult]) -> Summary {
    let mut summary = Summary::default();
    for result in results {
        if result.error.is_some() {
            summary.errors += 1;
            continue;
        }
        summary.files += 1;
        summary.violations += result.violations.len();
        summary.fixable += result.violations.iter().filter(|v| v.fixable).count();
    }
    summary
}

/// Machine-readable report written by `--output *.json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub fixed: bool,
    pub summary: Summary,
    pub files: Vec<FileReport<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    pub path: String,
    pub violations: &'a [Violation],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [FileResult], fixed: bool) -> Self {
        Self {
            fixed,
            summary: summarize(results),
            files: results
                .iter()
                .map(|result| FileReport {
                    path: result.path.display().to_string(),
                    violations: &result.violations,
                    error: result.error.as_ref().map(|e| e.to_string()),
                })
                .collect(),
        }
    }
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn format_error(path: &Path, error: &Error, color: bool) -> String {
    let message = format!("Error processing {}: {}", path.display(), error);
    paint(&message, color, |s| s.red())
}

/// Header line, surrounding source lines with a caret underline, and a help line
pub fn format_violation(path: &Path, content: &[u8], violation: &Violation, color: bool) -> String {
    let mut output = String::new();

    let fix_marker = if violation.fixable {
        format!(" {}", paint("[*]", color, |s| s.dimmed()))
    } else {
        String::new()
    };
    output.push_str(&format!(
        "{}:{}:{}: {}{} {}\n",
        paint(&path.display().to_string(), color, |s| s.bold()),
        violation.line,
        violation.col,
        paint(&violation.rule, color, |s| s.red()),
        fix_marker,
        violation.message
    ));

    let text = String::from_utf8_lossy(content);
    let lines: Vec<&str> = text.lines().collect();
    let target = violation.line.saturating_sub(1);
    if target < lines.len() {
        let start = target.saturating_sub(CONTEXT_LINES);
        let end = (target + CONTEXT_LINES).min(lines.len() - 1);
        let width = (end + 1).to_string().len();
        let pipe = paint("|", color, |s| s.red().dimmed());

        for (idx, line) in lines.iter().enumerate().take(end + 1).skip(start) {
            let number = format!("{:>width$}", idx + 1, width = width);
            output.push_str(&format!(
                "  {} {} {}\n",
                paint(&number, color, |s| s.blue().dimmed()),
                pipe,
                line
            ));

            if idx == target {
                let indent = violation.col.saturating_sub(1);
                let span = violation.end_offset.saturating_sub(violation.start_offset);
                let pointer_width = span.min(line.len().saturating_sub(indent)).max(1);
                output.push_str(&format!(
                    "  {} {} {}{} {}\n",
                    " ".repeat(width),
                    pipe,
                    " ".repeat(indent),
                    paint(&"^".repeat(pointer_width), color, |s| s.red()),
                    paint(&violation.rule, color, |s| s.red())
                ));
            }
        }
    }

    output.push_str(&format!(
        "  {} {} {}\n",
        paint("=", color, |s| s.blue()),
        paint("help:", color, |s| s.cyan()),
        paint(HELP_TEXT, color, |s| s.blue())
    ));
    output
}

pub fn format_summary(summary: &Summary, fixed: bool, color: bool) -> String {
    let violations = summary.violations;
    if violations == 0 {
        if summary.errors > 0 {
            let message = format!("{} file(s) could not be processed.", summary.errors);
            return paint(&message, color, |s| s.red());
        }
        return paint("All files are sorted.", color, |s| s.green());
    }

    if fixed {
        let message = format!("Found {} violation(s) and fixed them.", violations);
        return paint(&message, color, |s| s.green());
    }

    let fixable = summary.fixable;
    let found = format!("Found {} violation(s) ({} fixable).", violations, fixable);
    let hint = paint(FIX_HINT, color, |s| s.dimmed());
    format!("{}\n{}", paint(&found, color, |s| s.red()), hint)
}

/// Markdown report written by `--output *.md`
pub fn format_markdown(results: &[FileResult]) -> String {
    if results.is_empty() {
        return "No violations found".to_string();
    }

    let mut output = String::new();
    for result in results {
        output.push_str(&format!("# Violations in {}\n\n", result.path.display()));
        if let Some(error) = &result.error {
            output.push_str(&format!("**Error:** {}\n\n", error));
            continue;
        }
        for violation in &result.violations {
            output.push_str(&format!(
                "- Line {}, column {}: {} {}\n",
                violation.line, violation.col, violation.rule, violation.message
            ));
        }
        output.push('\n');
    }
    output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{UNSORTED_MESSAGE, UNSORTED_RULE};
    use std::path::PathBuf;

    fn violation(line: usize, col: usize, start: usize, end: usize) -> Violation {
        Violation {
            line,
            col,
            start_offset: start,
            end_offset: end,
            rule: UNSORTED_RULE.into(),
            message: UNSORTED_MESSAGE.into(),
            fixable: true,
        }
    }

    fn result(path: &str, violations: Vec<Violation>) -> FileResult {
        FileResult {
            path: PathBuf::from(path),
            violations,
            original_bytes: Vec::new(),
            sorted_bytes: Vec::new(),
            error: None,
        }
    }

    #[test]
    fn test_format_violation_with_context() {
        let content = b"<html>\n  <div class=\"p-4 flex\"></div>\n</html>\n";
        let output = format_violation(
            Path::new("index.html"),
            content,
            &violation(2, 15, 21, 29),
            false,
        );
        let expected = "\
index.html:2:15: TWS001 [*] Unsorted Tailwind classes
  1 | <html>
  2 |   <div class=\"p-4 flex\"></div>
    |               ^^^^^^^^ TWS001
  3 | </html>
  = help: Sort the Tailwind CSS classes in the attribute
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_violation_first_line() {
        let content = b"<a class=\"p-4 flex\">";
        let found = violation(1, 10, 9, 17);
        let output = format_violation(Path::new("a.html"), content, &found, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "  1 | <a class=\"p-4 flex\">");
        assert_eq!(lines[2], "    |          ^^^^^^^^ TWS001");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_pointer_is_clamped_to_line() {
        let content = b"<a class=\"p-4\n flex\">";
        let found = violation(1, 10, 9, 19);
        let output = format_violation(Path::new("a.html"), content, &found, false);
        assert!(output.contains("|          ^^^^ TWS001"));
    }

    #[test]
    fn test_summarize_counts() {
        let mut failed = result("c.html", vec![]);
        failed.error = Some(Error::Config("x".into()));
        let results = vec![
            result("a.html", vec![violation(1, 1, 0, 1), violation(2, 1, 5, 6)]),
            result("b.html", vec![violation(1, 1, 0, 1)]),
            failed,
        ];
        assert_eq!(
            summarize(&results),
            Summary {
                files: 2,
                violations: 3,
                fixable: 3,
                errors: 1,
            }
        );
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary {
            files: 1,
            violations: 2,
            fixable: 2,
            errors: 0,
        };
        assert_eq!(
            format_summary(&summary, false, false),
            "Found 2 violation(s) (2 fixable).\nRun with --fix to apply changes."
        );
        assert_eq!(
            format_summary(&summary, true, false),
            "Found 2 violation(s) and fixed them."
        );
        assert_eq!(
            format_summary(&Summary::default(), false, false),
            "All files are sorted."
        );
    }

    #[test]
    fn test_format_markdown() {
        let results = vec![result("a.html", vec![violation(3, 7, 40, 48)])];
        assert_eq!(
            format_markdown(&results),
            "# Violations in a.html\n\n- Line 3, column 7: TWS001 Unsorted Tailwind classes"
        );
        assert_eq!(format_markdown(&[]), "No violations found");
    }

    #[test]
    fn test_json_report() {
        let results = vec![result("a.html", vec![violation(1, 10, 9, 17)])];
        let value = serde_json::to_value(Report::new(&results, false)).unwrap();
        assert_eq!(value["fixed"], false);
        assert_eq!(value["summary"]["violations"], 1);
        assert_eq!(value["files"][0]["path"], "a.html");
        assert_eq!(value["files"][0]["violations"][0]["rule"], "TWS001");
        assert_eq!(value["files"][0]["violations"][0]["start_offset"], 9);
        assert!(value["files"][0].get("error").is_none());
    }
}
