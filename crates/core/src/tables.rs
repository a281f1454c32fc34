//! Built-in associations between CSS `list-style-type` keywords, list kinds,
//! and legacy HTML `type` attribute characters.
//!
//! These tables are fixed. Lookups here never consult custom registrations;
//! see [`crate::registry::ListStyleRegistry`] for the combined view.

use crate::list_type::ListType;

/// A built-in marker style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTypeEntry {
    /// CSS `list-style-type` keyword.
    pub style_type: &'static str,
    /// List kind the keyword implies.
    pub list_type: ListType,
    /// Legacy single-character `type` attribute, if one exists.
    pub type_attribute: Option<char>,
}

const fn entry(
    style_type: &'static str,
    list_type: ListType,
    type_attribute: Option<char>,
) -> StyleTypeEntry {
    StyleTypeEntry {
        style_type,
        list_type,
        type_attribute,
    }
}

/// Built-in style types, in declaration order.
///
/// `-alpha` and `-latin` share a type attribute; the `-latin` rows come last
/// and are the canonical answer for reverse lookups.
pub const BUILT_IN_STYLE_TYPES: &[StyleTypeEntry] = &[
    entry("disc", ListType::Bulleted, None),
    entry("circle", ListType::Bulleted, None),
    entry("square", ListType::Bulleted, None),
    entry("decimal", ListType::Numbered, Some('1')),
    entry("decimal-leading-zero", ListType::Numbered, None),
    entry("lower-roman", ListType::Numbered, Some('i')),
    entry("upper-roman", ListType::Numbered, Some('I')),
    entry("lower-alpha", ListType::Numbered, Some('a')),
    entry("upper-alpha", ListType::Numbered, Some('A')),
    entry("lower-latin", ListType::Numbered, Some('a')),
    entry("upper-latin", ListType::Numbered, Some('A')),
];

/// Deprecated spellings and their canonical form.
pub const STYLE_TYPE_ALIASES: &[(&str, &str)] = &[
    ("lower-alpha", "lower-latin"),
    ("upper-alpha", "upper-latin"),
];

/// Finds the built-in entry for an exact (case-sensitive) keyword.
pub fn built_in_entry(style_type: &str) -> Option<&'static StyleTypeEntry> {
    BUILT_IN_STYLE_TYPES
        .iter()
        .find(|e| e.style_type == style_type)
}

/// Returns the list kind of a built-in keyword.
pub fn built_in_list_type(style_type: &str) -> Option<ListType> {
    built_in_entry(style_type).map(|e| e.list_type)
}

/// Returns the HTML `type` attribute for a built-in keyword.
///
/// `None` for `default`, bulleted styles, `decimal-leading-zero`, and
/// anything unknown. The attribute vocabulary is closed, so custom styles
/// never map to one.
pub fn type_attribute_from_list_style_type(style_type: &str) -> Option<char> {
    built_in_entry(style_type).and_then(|e| e.type_attribute)
}

/// Reverse of [`type_attribute_from_list_style_type`], always yielding the
/// canonical (`-latin`) keyword.
pub fn list_style_type_from_type_attribute(type_attribute: char) -> Option<&'static str> {
    BUILT_IN_STYLE_TYPES
        .iter()
        .filter(|e| !is_alias(e.style_type))
        .find(|e| e.type_attribute == Some(type_attribute))
        .map(|e| e.style_type)
}

/// Canonical built-in keywords of one kind, in declaration order.
pub fn built_in_style_types_for(list_type: ListType) -> impl Iterator<Item = &'static str> {
    BUILT_IN_STYLE_TYPES
        .iter()
        .filter(move |e| e.list_type == list_type && !is_alias(e.style_type))
        .map(|e| e.style_type)
}

pub(crate) fn is_alias(style_type: &str) -> bool {
    STYLE_TYPE_ALIASES
        .iter()
        .any(|(alias, _)| *alias == style_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_list_style;

    #[test]
    fn list_type_of_built_ins() {
        let cases = [
            ("decimal", Some(ListType::Numbered)),
            ("decimal-leading-zero", Some(ListType::Numbered)),
            ("lower-roman", Some(ListType::Numbered)),
            ("upper-roman", Some(ListType::Numbered)),
            ("lower-latin", Some(ListType::Numbered)),
            ("upper-latin", Some(ListType::Numbered)),
            ("disc", Some(ListType::Bulleted)),
            ("circle", Some(ListType::Bulleted)),
            ("square", Some(ListType::Bulleted)),
            ("default", None),
            ("style-type-that-is-not-possibly-supported-by-css", None),
        ];

        for (style, expected) in cases {
            assert_eq!(built_in_list_type(style), expected, "style {style:?}");
        }
    }

    #[test]
    fn every_built_in_resolves_to_its_declared_kind() {
        for entry in BUILT_IN_STYLE_TYPES {
            assert_eq!(
                built_in_list_type(entry.style_type),
                Some(entry.list_type),
                "style {:?}",
                entry.style_type
            );
        }
        assert_eq!(built_in_list_type("lower-alpha"), Some(ListType::Numbered));
        assert_eq!(built_in_list_type("upper-alpha"), Some(ListType::Numbered));
    }

    #[test]
    fn lookups_are_case_sensitive() {
        assert_eq!(built_in_list_type("Decimal"), None);
        assert_eq!(type_attribute_from_list_style_type("LOWER-ROMAN"), None);
    }

    #[test]
    fn type_attribute_of_numbered_styles() {
        let cases = [
            ("decimal", '1'),
            ("lower-roman", 'i'),
            ("upper-roman", 'I'),
            ("lower-alpha", 'a'),
            ("upper-alpha", 'A'),
            ("lower-latin", 'a'),
            ("upper-latin", 'A'),
        ];

        for (style, attr) in cases {
            assert_eq!(
                type_attribute_from_list_style_type(style),
                Some(attr),
                "style {style:?}"
            );
        }
    }

    #[test]
    fn type_attribute_absent() {
        for style in [
            "default",
            "strange-style",
            "disc",
            "circle",
            "square",
            "decimal-leading-zero",
        ] {
            assert_eq!(type_attribute_from_list_style_type(style), None, "{style}");
        }
    }

    #[test]
    fn style_type_from_type_attribute_prefers_latin() {
        assert_eq!(list_style_type_from_type_attribute('1'), Some("decimal"));
        assert_eq!(list_style_type_from_type_attribute('i'), Some("lower-roman"));
        assert_eq!(list_style_type_from_type_attribute('I'), Some("upper-roman"));
        assert_eq!(list_style_type_from_type_attribute('a'), Some("lower-latin"));
        assert_eq!(list_style_type_from_type_attribute('A'), Some("upper-latin"));
        assert_eq!(list_style_type_from_type_attribute('Q'), None);
    }

    #[test]
    fn type_attribute_round_trips_to_canonical_form() {
        for entry in BUILT_IN_STYLE_TYPES {
            let Some(attr) = type_attribute_from_list_style_type(entry.style_type) else {
                continue;
            };
            assert_eq!(
                list_style_type_from_type_attribute(attr),
                Some(normalize_list_style(entry.style_type)),
                "round trip of {:?}",
                entry.style_type
            );
        }
    }

    #[test]
    fn bulleted_entries_have_no_type_attribute() {
        assert!(
            BUILT_IN_STYLE_TYPES
                .iter()
                .filter(|e| e.list_type == ListType::Bulleted)
                .all(|e| e.type_attribute.is_none())
        );
    }

    #[test]
    fn built_in_style_types_per_kind_skip_aliases() {
        let bulleted: Vec<_> = built_in_style_types_for(ListType::Bulleted).collect();
        assert_eq!(bulleted, ["disc", "circle", "square"]);

        let numbered: Vec<_> = built_in_style_types_for(ListType::Numbered).collect();
        assert_eq!(
            numbered,
            [
                "decimal",
                "decimal-leading-zero",
                "lower-roman",
                "upper-roman",
                "lower-latin",
                "upper-latin",
            ]
        );
    }
}
