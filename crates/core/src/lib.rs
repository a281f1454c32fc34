#![deny(missing_docs)]
//! listmark core: list marker style tables, alias normalization, and the
//! custom style registry.

/// Loading custom style registrations from JSON/YAML.
pub mod config;
/// Core error types.
pub mod error;
/// Process-wide registry and free-function lookups.
pub mod global;
/// Coarse list kinds.
pub mod list_type;
/// Alias normalization for style type keywords.
pub mod normalize;
/// Custom list style registry.
pub mod registry;
/// Built-in style type tables.
pub mod tables;

pub use error::{ConfigError, UnknownListType};
pub use global::{
    get_all_supported_style_types, get_list_style_type_from_type_attribute,
    get_list_type_from_list_style_type, get_type_attribute_from_list_style_type,
    global_registry, register_custom_list_styles,
};
pub use list_type::ListType;
pub use normalize::normalize_list_style;
pub use registry::{CustomListStyles, CustomStyleDefinition, ListStyleRegistry};
pub use tables::{BUILT_IN_STYLE_TYPES, STYLE_TYPE_ALIASES, StyleTypeEntry};
