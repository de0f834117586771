use super::extract::Extractor;
use super::order::{ends_with_escape, sort_classes};
use crate::config::Config;
use crate::types::{UNSORTED_MESSAGE, UNSORTED_RULE, Violation};
use tracing::{debug, trace};

/// Report every class attribute value that differs from its canonical order
pub fn detect(buf: &[u8], extractor: &Extractor, config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    for occurrence in extractor.occurrences(buf) {
        let content = occurrence.content;
        let Ok(value) = std::str::from_utf8(&buf[content.clone()]) else {
            debug!("Skipping non UTF-8 class value at offset {}", content.start);
            continue;
        };

        let sorted = sort_classes(value, config);
        if sorted.as_bytes() == value.as_bytes() {
            continue;
        }
        if ends_with_escape(&sorted) {
            debug!("Unsortable class value at offset {}", content.start);
            continue;
        }

        trace!("Unsorted classes {:?}, expected {:?}", value, sorted);
        let (line, col) = line_col(buf, content.start);
        violations.push(Violation {
            line,
            col,
            start_offset: content.start,
            end_offset: content.end,
            rule: UNSORTED_RULE.to_string(),
            message: UNSORTED_MESSAGE.to_string(),
            fixable: true,
        });
    }

    violations
}

/// 1-based line and column of a byte offset
pub fn line_col(buf: &[u8], offset: usize) -> (usize, usize) {
    let offset = offset.min(buf.len());
    let before = &buf[..offset];
    let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
    let col = match before.iter().rposition(|&b| b == b'\n') {
        Some(newline) => offset - newline,
        None => offset + 1,
    };
    (line, col)
}
