use super::classify::{ClassProperty, classify};
use crate::config::Config;
use std::cmp::Ordering;
use std::collections::HashSet;

const DYNAMIC_OPEN: &str = "${";
const DYNAMIC_CLOSE: char = '}';

/// Canonical form of a class attribute value.
///
/// `${...}` interpolations are kept verbatim in place; only the static text
/// between them is deduplicated and sorted.
pub fn sort_classes(value: &str, config: &Config) -> String {
    if !value.contains(DYNAMIC_OPEN) {
        return sort_static(value, config);
    }

    let parts: Vec<String> = split_dynamic(value)
        .into_iter()
        .map(|segment| match segment {
            Segment::Static(text) => sort_static(text, config),
            Segment::Dynamic(text) => text.to_string(),
        })
        .filter(|part| !part.is_empty())
        .collect();
    parts.join(" ")
}

/// Whether `value` ends in an unpaired `\\`, which would escape the quote
/// written right after it
pub fn ends_with_escape(value: &str) -> bool {
    value.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

fn sort_static(value: &str, config: &Config) -> String {
    let mut seen = HashSet::new();
    let mut classes: Vec<ClassProperty> = value
        .split_whitespace()
        .filter(|token| seen.insert(*token))
        .map(|token| classify(token, config))
        .collect();

    // Stable, so equal keys keep their written order
    classes.sort_by(compare);

    classes
        .iter()
        .map(|class| class.original)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fewer variants first, then variant orders pairwise, then utility order
fn compare(a: &ClassProperty, b: &ClassProperty) -> Ordering {
    a.variants
        .len()
        .cmp(&b.variants.len())
        .then_with(|| {
            let a_orders = a.variants.iter().map(|v| v.order);
            let b_orders = b.variants.iter().map(|v| v.order);
            a_orders.cmp(b_orders)
        })
        .then_with(|| a.utility_order.cmp(&b.utility_order))
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Static(&'a str),
    Dynamic(&'a str),
}

/// Split around each `${...}`, closing at the first `}`
fn split_dynamic(value: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = value;

    while let Some(open) = rest.find(DYNAMIC_OPEN) {
        let Some(close) = rest[open + DYNAMIC_OPEN.len()..].find(DYNAMIC_CLOSE) else {
            break;
        };
        let end = open + DYNAMIC_OPEN.len() + close + 1;
        segments.push(Segment::Static(&rest[..open]));
        segments.push(Segment::Dynamic(&rest[open..end]));
        rest = &rest[end..];
    }
    segments.push(Segment::Static(rest));
    segments
}
