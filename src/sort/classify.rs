use crate::config::{ARBITRARY_VARIANT_ORDER, Config};

/// One parsed variant segment of a class token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantProperty<'a> {
    pub order: u32,
    pub name: &'a str,
}

/// Ordering facts about a single class token. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassProperty<'a> {
    /// Sorted by `(order, name)`, whatever order they were written in
    pub variants: Vec<VariantProperty<'a>>,
    /// Index of the first matching prefix in the class order
    pub utility_order: usize,
    pub original: &'a str,
}

/// Split a token into its variant segments and utility, and rank both
pub fn classify<'a>(token: &'a str, config: &Config) -> ClassProperty<'a> {
    let parts = split_top_level(token);
    let mut variants = Vec::new();

    let mut utility_start = parts.last().map_or(0, |(start, _)| *start);
    for &(start, end) in &parts {
        let part = &token[start..end];
        if is_arbitrary_variant(part) {
            variants.push(VariantProperty {
                order: ARBITRARY_VARIANT_ORDER,
                name: part,
            });
        } else if let Some(&order) = config.variant_order.get(part) {
            variants.push(VariantProperty { order, name: part });
        } else {
            utility_start = start;
            break;
        }
    }
    let utility = &token[utility_start..];

    variants.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(b.name)));

    let utility_order = config
        .class_order
        .iter()
        .position(|prefix| utility.starts_with(prefix.as_str()))
        .unwrap_or(config.class_order.len());

    ClassProperty {
        variants,
        utility_order,
        original: token,
    }
}

/// Byte ranges of the `:`-separated parts, ignoring colons inside `[...]`
fn split_top_level(token: &str) -> Vec<(usize, usize)> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, byte) in token.bytes().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b':' if depth == 0 => {
                parts.push((start, i));
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push((start, token.len()));
    parts
}

/// `[` followed by at least one byte and a later `]`
fn is_arbitrary_variant(part: &str) -> bool {
    let bytes = part.as_bytes();
    bytes.first() == Some(&b'[') && bytes.get(2..).is_some_and(|rest| rest.contains(&b']'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            class_order: vec!["flex".into(), "p-".into(), "bg-".into()],
            ..Config::default()
        }
    }

    fn orders(property: &ClassProperty) -> Vec<u32> {
        property.variants.iter().map(|v| v.order).collect()
    }

    #[test]
    fn test_plain_utility() {
        let property = classify("p-4", &config());
        assert!(property.variants.is_empty());
        assert_eq!(property.utility_order, 1);
        assert_eq!(property.original, "p-4");
    }

    #[test]
    fn test_first_prefix_match_wins() {
        // "flex" is listed before anything else matching "flex-col"
        assert_eq!(classify("flex-col", &config()).utility_order, 0);
    }

    #[test]
    fn test_unknown_utility_sorts_last() {
        assert_eq!(classify("prose", &config()).utility_order, 3);
    }

    #[test]
    fn test_named_variants_are_canonicalized() {
        let property = classify("hover:sm:bg-red-500", &config());
        assert_eq!(orders(&property), vec![0, 40]);
        assert_eq!(property.variants[0].name, "sm");
        assert_eq!(property.utility_order, 2);
    }

    #[test]
    fn test_variant_ties_break_on_name() {
        let mut config = config();
        config.variant_order.insert("group-hover".into(), 40);
        let property = classify("hover:group-hover:p-2", &config);
        let names: Vec<&str> = property.variants.iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["group-hover", "hover"]);
    }

    #[test]
    fn test_unknown_variant_keyword_is_part_of_utility() {
        let property = classify("foo:bar-1", &config());
        assert!(property.variants.is_empty());
        assert_eq!(property.utility_order, 3);
    }

    #[test]
    fn test_unknown_segment_stops_variant_scan() {
        // "md" after the unknown "foo" is not a variant any more
        let property = classify("sm:foo:md:p-2", &config());
        assert_eq!(orders(&property), vec![0]);
        assert_eq!(property.utility_order, 3);
    }

    #[test]
    fn test_arbitrary_variant() {
        let property = classify("[&:nth-child(3)]:underline", &config());
        assert_eq!(orders(&property), vec![99]);
        assert_eq!(property.variants[0].name, "[&:nth-child(3)]");
    }

    #[test]
    fn test_arbitrary_value_is_not_a_variant() {
        let property = classify("bg-[url(a:b)]", &config());
        assert!(property.variants.is_empty());
        assert_eq!(property.utility_order, 2);
    }

    #[test]
    fn test_empty_brackets_are_not_a_variant() {
        assert!(classify("[]:p-2", &config()).variants.is_empty());
    }

    #[test]
    fn test_all_parts_are_variants() {
        let property = classify("sm:hover", &config());
        assert_eq!(orders(&property), vec![0, 40]);
        assert_eq!(property.utility_order, 3);
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("a:b"), vec![(0, 1), (2, 3)]);
        assert_eq!(split_top_level("[a:b]:c"), vec![(0, 5), (6, 7)]);
        assert_eq!(split_top_level("plain"), vec![(0, 5)]);
    }
}
