//! Loading custom list style registrations from host configuration.
//!
//! Hosts usually keep their marker menu in JSON or YAML next to the rest of
//! the editor config:
//!
//! ```yaml
//! bulleted:
//!   - label: Check list style
//!     tooltip: Check
//!     type: check
//!     icon: "<svg>...</svg>"
//! ```

use serde_json::Value as JsonValue;

use crate::error::ConfigError;
use crate::registry::CustomListStyles;

impl CustomListStyles {
    /// Parses a registration from JSON text.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let value: JsonValue =
            serde_json::from_str(input).map_err(|err| ConfigError::Json(err.to_string()))?;
        from_root(value, ConfigError::Json)
    }

    /// Converts an already-parsed JSON value into a registration.
    pub fn from_json_value(value: JsonValue) -> Result<Self, ConfigError> {
        from_root(value, ConfigError::Json)
    }

    /// Parses a registration from YAML text. Blank input is an empty registration.
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }

        let yaml_value: serde_yaml::Value =
            serde_yaml::from_str(input).map_err(|err| ConfigError::Yaml(err.to_string()))?;
        let json_value =
            serde_json::to_value(yaml_value).map_err(|err| ConfigError::Yaml(err.to_string()))?;
        from_root(json_value, ConfigError::Yaml)
    }
}

fn from_root(
    value: JsonValue,
    wrap: fn(String) -> ConfigError,
) -> Result<CustomListStyles, ConfigError> {
    match value {
        JsonValue::Null => Ok(CustomListStyles::default()),
        JsonValue::Object(_) => {
            serde_json::from_value(value).map_err(|err| wrap(err.to_string()))
        }
        _ => Err(ConfigError::InvalidRootType),
    }
}
