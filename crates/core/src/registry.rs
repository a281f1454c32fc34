//! Custom list style registry layered over the built-in tables.
//!
//! A host registers additional marker styles per list kind. Lookups consult
//! the built-in tables first and fall back to the registry, so a custom entry
//! can never change what a built-in keyword means.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::list_type::ListType;
use crate::tables::{self, BUILT_IN_STYLE_TYPES};

/// A host-supplied marker style with the metadata a dropdown needs.
///
/// No field is required when deserializing, and a field that is `null` or
/// not a string reads as empty. Incomplete definitions are kept as-is and
/// simply render with empty metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomStyleDefinition {
    /// Menu label (e.g., "Check list style").
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    /// Button tooltip.
    #[serde(deserialize_with = "lenient_string")]
    pub tooltip: String,
    /// The `list-style-type` keyword being added.
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub style_type: String,
    /// SVG markup for the menu icon.
    #[serde(deserialize_with = "lenient_string")]
    pub icon: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(value) => Ok(value),
        _ => Ok(String::new()),
    }
}

impl CustomStyleDefinition {
    /// Creates a definition from its four fields.
    pub fn new(
        label: impl Into<String>,
        tooltip: impl Into<String>,
        style_type: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
            style_type: style_type.into(),
            icon: icon.into(),
        }
    }
}

/// Argument of a registration call.
///
/// `None` means the kind was omitted and keeps its current entries;
/// `Some(vec![])` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomListStyles {
    /// Replacement custom bulleted styles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulleted: Option<Vec<CustomStyleDefinition>>,
    /// Replacement custom numbered styles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered: Option<Vec<CustomStyleDefinition>>,
}

impl CustomListStyles {
    /// Registration that replaces only the bulleted styles.
    pub fn bulleted(styles: Vec<CustomStyleDefinition>) -> Self {
        Self {
            bulleted: Some(styles),
            numbered: None,
        }
    }

    /// Registration that replaces only the numbered styles.
    pub fn numbered(styles: Vec<CustomStyleDefinition>) -> Self {
        Self {
            bulleted: None,
            numbered: Some(styles),
        }
    }

    fn kind(&self, list_type: ListType) -> Option<&[CustomStyleDefinition]> {
        match list_type {
            ListType::Bulleted => self.bulleted.as_deref(),
            ListType::Numbered => self.numbered.as_deref(),
        }
    }
}

#[derive(Debug, Default)]
struct CustomStyleTables {
    bulleted: Vec<CustomStyleDefinition>,
    numbered: Vec<CustomStyleDefinition>,
}

impl CustomStyleTables {
    fn kind(&self, list_type: ListType) -> &[CustomStyleDefinition] {
        match list_type {
            ListType::Bulleted => &self.bulleted,
            ListType::Numbered => &self.numbered,
        }
    }

    fn kind_mut(&mut self, list_type: ListType) -> &mut Vec<CustomStyleDefinition> {
        match list_type {
            ListType::Bulleted => &mut self.bulleted,
            ListType::Numbered => &mut self.numbered,
        }
    }

    fn find(&self, style_type: &str) -> Option<(ListType, &CustomStyleDefinition)> {
        ListType::ALL.into_iter().find_map(|list_type| {
            self.kind(list_type)
                .iter()
                .find(|d| d.style_type == style_type)
                .map(|d| (list_type, d))
        })
    }
}

/// Built-in style tables plus the current custom registrations.
///
/// Custom kinds are searched and listed bulleted first, then numbered.
/// A registration replaces its kinds under a single write lock, so readers
/// see either all of it or none of it.
#[derive(Debug, Default)]
pub struct ListStyleRegistry {
    custom: RwLock<CustomStyleTables>,
}

impl ListStyleRegistry {
    /// Creates a registry with no custom styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry and applies one registration to it.
    pub fn with_custom_styles(styles: CustomListStyles) -> Self {
        let registry = Self::new();
        registry.register_custom_list_styles(styles);
        registry
    }

    fn read(&self) -> RwLockReadGuard<'_, CustomStyleTables> {
        // Tables are only ever swapped whole, so a poisoned lock still holds
        // consistent data.
        self.custom.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CustomStyleTables> {
        self.custom.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the custom styles of every kind present in `styles`.
    ///
    /// Omitted kinds keep their entries. An empty registration is a no-op.
    pub fn register_custom_list_styles(&self, styles: CustomListStyles) {
        warn_on_conflicts(&styles);

        let CustomListStyles { bulleted, numbered } = styles;
        let changed = bulleted.is_some() || numbered.is_some();
        let mut custom = self.write();
        for (list_type, replacement) in [
            (ListType::Bulleted, bulleted),
            (ListType::Numbered, numbered),
        ] {
            let Some(replacement) = replacement else {
                continue;
            };
            let current = custom.kind_mut(list_type);
            log::debug!(
                "Replacing {} custom {} list style(s) with {}",
                current.len(),
                list_type,
                replacement.len()
            );
            *current = replacement;
        }

        if !changed {
            return;
        }
        for style_type in cross_kind_duplicates(&custom) {
            log::warn!(
                "Custom list style {:?} is registered as both bulleted and numbered; lookups resolve it as bulleted",
                style_type
            );
        }
    }

    /// Removes every custom style.
    pub fn clear(&self) {
        let mut custom = self.write();
        custom.bulleted.clear();
        custom.numbered.clear();
    }

    /// Returns the list kind of a built-in or registered style type.
    pub fn list_type_from_list_style_type(&self, style_type: &str) -> Option<ListType> {
        tables::built_in_list_type(style_type)
            .or_else(|| self.read().find(style_type).map(|(list_type, _)| list_type))
    }

    /// Returns the HTML `type` attribute. Built-ins only.
    pub fn type_attribute_from_list_style_type(&self, style_type: &str) -> Option<char> {
        tables::type_attribute_from_list_style_type(style_type)
    }

    /// Returns the canonical style type for an HTML `type` attribute. Built-ins only.
    pub fn list_style_type_from_type_attribute(&self, type_attribute: char) -> Option<&'static str> {
        tables::list_style_type_from_type_attribute(type_attribute)
    }

    /// Whether a style type is built in or currently registered.
    pub fn is_supported_style_type(&self, style_type: &str) -> bool {
        self.list_type_from_list_style_type(style_type).is_some()
    }

    /// All supported style types: built-ins in declaration order, then custom
    /// bulleted, then custom numbered. Duplicates are kept.
    pub fn all_supported_style_types(&self) -> Vec<String> {
        let custom = self.read();
        BUILT_IN_STYLE_TYPES
            .iter()
            .map(|e| e.style_type.to_string())
            .chain(
                ListType::ALL
                    .into_iter()
                    .flat_map(|list_type| custom.kind(list_type))
                    .map(|d| d.style_type.clone()),
            )
            .collect()
    }

    /// Style types offered for one kind: canonical built-ins followed by that
    /// kind's custom entries.
    pub fn style_types_for(&self, list_type: ListType) -> Vec<String> {
        let custom = self.read();
        tables::built_in_style_types_for(list_type)
            .map(str::to_string)
            .chain(custom.kind(list_type).iter().map(|d| d.style_type.clone()))
            .collect()
    }

    /// Snapshot of the custom definitions registered for one kind.
    pub fn custom_definitions(&self, list_type: ListType) -> Vec<CustomStyleDefinition> {
        self.read().kind(list_type).to_vec()
    }

    /// Finds the custom definition for a style type, with the kind it was
    /// registered under.
    pub fn find_custom_definition(
        &self,
        style_type: &str,
    ) -> Option<(ListType, CustomStyleDefinition)> {
        self.read()
            .find(style_type)
            .map(|(list_type, d)| (list_type, d.clone()))
    }
}

fn warn_on_conflicts(styles: &CustomListStyles) {
    for list_type in ListType::ALL {
        for definition in styles.kind(list_type).unwrap_or_default() {
            if let Some(built_in) = tables::built_in_entry(&definition.style_type) {
                log::warn!(
                    "Custom {} list style {:?} is already built in as {}; the built-in mapping wins",
                    list_type,
                    definition.style_type,
                    built_in.list_type
                );
            }
        }
    }
}

/// Style types present in both custom kinds, in bulleted order.
fn cross_kind_duplicates(custom: &CustomStyleTables) -> Vec<&str> {
    custom
        .bulleted
        .iter()
        .filter(|b| custom.numbered.iter().any(|n| n.style_type == b.style_type))
        .map(|b| b.style_type.as_str())
        .collect()
}
