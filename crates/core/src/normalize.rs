use crate::tables::STYLE_TYPE_ALIASES;

/// Collapses a deprecated alias spelling to its canonical keyword.
///
/// Anything that is not an alias, including unknown strings, comes back
/// unchanged.
///
/// # Examples
///
/// ```
/// use listmark_core::normalize_list_style;
///
/// assert_eq!(normalize_list_style("lower-alpha"), "lower-latin");
/// assert_eq!(normalize_list_style("disc"), "disc");
/// assert_eq!(normalize_list_style("made-up"), "made-up");
/// ```
pub fn normalize_list_style(style_type: &str) -> &str {
    STYLE_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == style_type)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(style_type)
}
