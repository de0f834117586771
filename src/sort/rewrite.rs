use super::extract::Extractor;
use super::order::{ends_with_escape, sort_classes};
use crate::config::Config;
use tracing::trace;

/// Rebuild `buf` with every class attribute value in canonical order.
///
/// Bytes outside the matched attributes are copied as they are. Values that
/// are not valid UTF-8, or whose sorted form would end in a lone `\`, are
/// left untouched.
pub fn rewrite(buf: &[u8], extractor: &Extractor, config: &Config) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    let mut last = 0;

    for occurrence in extractor.occurrences(buf) {
        let quote = occurrence.quote.as_byte();
        out.extend_from_slice(&buf[last..occurrence.span.start]);
        out.extend_from_slice(&buf[occurrence.name]);
        out.extend_from_slice(&buf[occurrence.assignment]);
        out.push(quote);
        out.extend_from_slice(&rewrite_value(&buf[occurrence.content], config));
        out.push(quote);

        last = occurrence.span.end;
    }

    out.extend_from_slice(&buf[last..]);
    out
}

fn rewrite_value(original: &[u8], config: &Config) -> Vec<u8> {
    let Ok(value) = std::str::from_utf8(original) else {
        trace!("Keeping non UTF-8 value of {} bytes", original.len());
        return original.to_vec();
    };

    let sorted = sort_classes(value, config);
    // A trailing backslash would escape the closing quote
    if ends_with_escape(&sorted) {
        trace!("Keeping {:?}, sorted form ends in an escape", value);
        return original.to_vec();
    }
    sorted.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite_str(buf: &str, attributes: &[&str]) -> String {
        let attributes: Vec<String> = attributes.iter().map(|s| s.to_string()).collect();
        let extractor = Extractor::new(&attributes).unwrap();
        let out = rewrite(buf.as_bytes(), &extractor, &Config::default());
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rewrites_each_occurrence_in_place() {
        let input = "<div class=\"p-4 flex\">\n  <span class='m-2 flex flex'>x</span>\n</div>\n";
        let expected = "<div class=\"flex p-4\">\n  <span class='flex m-2'>x</span>\n</div>\n";
        assert_eq!(rewrite_str(input, &["class"]), expected);
    }

    #[test]
    fn test_preserves_assignment_and_quote() {
        assert_eq!(
            rewrite_str("<a class =  `p-4 flex`>", &["class"]),
            "<a class =  `flex p-4`>"
        );
    }

    #[test]
    fn test_sorted_input_is_unchanged() {
        let input = "<a class=\"flex p-4\" id=\"x\">";
        assert_eq!(rewrite_str(input, &["class"]), input);
    }

    #[test]
    fn test_other_attributes_untouched() {
        let input = "<a id=\"p-4 flex\" className=\"p-4 flex\">";
        assert_eq!(
            rewrite_str(input, &["className"]),
            "<a id=\"p-4 flex\" className=\"flex p-4\">"
        );
    }

    #[test]
    fn test_never_longer_without_dynamic_segments() {
        let input = "<a class=\"  p-4   flex p-4 \">";
        let out = rewrite_str(input, &["class"]);
        assert_eq!(out, "<a class=\"flex p-4\">");
        assert!(out.len() <= input.len());
    }

    #[test]
    fn test_empty_value_is_noop() {
        assert_eq!(rewrite_str("<a class=\"\">", &["class"]), "<a class=\"\">");
        let blank = rewrite_str("<a class=\"   \">", &["class"]);
        assert_eq!(blank, "<a class=\"\">");
    }

    #[test]
    fn test_non_utf8_value_is_kept() {
        let extractor = Extractor::new(&["class".to_string()]).unwrap();
        let input = b"<a class=\"p-4 \xff flex\">";
        let out = rewrite(input, &extractor, &Config::default());
        assert_eq!(out, input.to_vec());
    }

    #[test]
    fn test_trailing_backslash_keeps_closing_quote() {
        let input = "<a class=\"p-4\\ flex\">x</a>\n<b class=\"m-2 flex\">y</b>\n";
        let once = rewrite_str(input, &["class"]);
        let expected = "<a class=\"p-4\\ flex\">x</a>\n<b class=\"flex m-2\">y</b>\n";
        assert_eq!(once, expected);
        assert_eq!(rewrite_str(&once, &["class"]), once);
    }
}
