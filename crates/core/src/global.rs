//! Process-wide registry and the free-function surface editors call.
//!
//! The registry starts empty on first use and lives until the process exits.
//! Code that needs isolated state (tests, multi-tenant hosts) should own a
//! [`ListStyleRegistry`] instead.

use once_cell::sync::Lazy;

use crate::list_type::ListType;
use crate::registry::{CustomListStyles, ListStyleRegistry};

pub use crate::normalize::normalize_list_style;

static GLOBAL_REGISTRY: Lazy<ListStyleRegistry> = Lazy::new(ListStyleRegistry::new);

/// Returns the process-wide registry.
pub fn global_registry() -> &'static ListStyleRegistry {
    &GLOBAL_REGISTRY
}

/// Returns `numbered` or `bulleted` for a built-in or registered style type.
///
/// # Example
///
/// ```
/// use listmark_core::{ListType, get_list_type_from_list_style_type};
///
/// assert_eq!(get_list_type_from_list_style_type("lower-roman"), Some(ListType::Numbered));
/// assert_eq!(get_list_type_from_list_style_type("default"), None);
/// ```
pub fn get_list_type_from_list_style_type(style_type: &str) -> Option<ListType> {
    GLOBAL_REGISTRY.list_type_from_list_style_type(style_type)
}

/// Returns the legacy HTML `type` attribute for a built-in numbered style.
pub fn get_type_attribute_from_list_style_type(style_type: &str) -> Option<char> {
    GLOBAL_REGISTRY.type_attribute_from_list_style_type(style_type)
}

/// Returns the canonical style type for a legacy HTML `type` attribute.
pub fn get_list_style_type_from_type_attribute(type_attribute: char) -> Option<&'static str> {
    GLOBAL_REGISTRY.list_style_type_from_type_attribute(type_attribute)
}

/// Replaces the process-wide custom styles for each kind present in `styles`.
pub fn register_custom_list_styles(styles: CustomListStyles) {
    GLOBAL_REGISTRY.register_custom_list_styles(styles);
}

/// Built-in style types followed by the process-wide custom ones.
pub fn get_all_supported_style_types() -> Vec<String> {
    GLOBAL_REGISTRY.all_supported_style_types()
}
