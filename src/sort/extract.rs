use crate::error::{Error, Result};
use regex::bytes::Regex;
use std::ops::Range;

/// Quote character delimiting an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Double,
    Single,
    Backtick,
}

impl Quote {
    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'"' => Some(Self::Double),
            b'\'' => Some(Self::Single),
            b'`' => Some(Self::Backtick),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Double => b'"',
            Self::Single => b'\'',
            Self::Backtick => b'`',
        }
    }
}

/// One quoted class attribute value found in a buffer.
///
/// All ranges are byte offsets into the scanned buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// Whole match, from the attribute name to the closing quote inclusive
    pub span: Range<usize>,
    /// Attribute name
    pub name: Range<usize>,
    /// `=` with its surrounding whitespace
    pub assignment: Range<usize>,
    pub quote: Quote,
    /// Text between the quotes
    pub content: Range<usize>,
}

/// Locates class attribute values in raw bytes
#[derive(Debug)]
pub struct Extractor {
    attribute: Regex,
}

impl Extractor {
    pub fn new(attributes: &[String]) -> Result<Self> {
        if attributes.is_empty() {
            return Err(Error::Config("no class attributes configured".into()));
        }

        for name in attributes {
            let malformed = name.is_empty()
                || name
                    .bytes()
                    .any(|b| b.is_ascii_whitespace() || matches!(b, b'=' | b'"' | b'\'' | b'`'));
            if malformed {
                return Err(Error::Config(format!("invalid class attribute {:?}", name)));
            }
        }

        let names = attributes
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r#"({})(\s*=\s*)(["'`])"#, names);
        let attribute = Regex::new(&pattern)
            .map_err(|e| Error::Config(format!("failed to build attribute pattern: {}", e)))?;

        Ok(Self { attribute })
    }

    /// Iterate over non-overlapping occurrences, left to right
    pub fn occurrences<'a>(&'a self, buf: &'a [u8]) -> Occurrences<'a> {
        Occurrences {
            extractor: self,
            buf,
            pos: 0,
        }
    }
}

pub struct Occurrences<'a> {
    extractor: &'a Extractor,
    buf: &'a [u8],
    pos: usize,
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        while self.pos < self.buf.len() {
            let caps = self.extractor.attribute.captures_at(self.buf, self.pos)?;
            let groups = (caps.get(1), caps.get(2), caps.get(3));
            let (Some(name), Some(assignment), Some(open)) = groups else {
                return None;
            };
            let quote = Quote::from_byte(self.buf[open.start()])?;

            match find_closing(self.buf, open.end(), quote.as_byte()) {
                Some(close) => {
                    self.pos = close + 1;
                    return Some(Occurrence {
                        span: name.start()..close + 1,
                        name: name.range(),
                        assignment: assignment.range(),
                        quote,
                        content: open.end()..close,
                    });
                }
                // Unterminated value: resume right after the opening quote
                None => self.pos = open.end(),
            }
        }
        None
    }
}

/// Index of the first unescaped `quote` at or after `from`
fn find_closing(buf: &[u8], from: usize, quote: u8) -> Option<usize> {
    let mut i = from;
    while i < buf.len() {
        match buf[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i),
            _ => i += 1,
        }
    }
    None
}
