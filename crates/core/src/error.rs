use thiserror::Error;

/// Errors emitted while loading a custom list style registration from config text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON failed to parse or did not match the registration shape.
    #[error("Custom list styles JSON error: {0}")]
    Json(String),
    /// YAML failed to parse or did not match the registration shape.
    #[error("Custom list styles YAML error: {0}")]
    Yaml(String),
    /// Top-level node was not a mapping.
    #[error("Custom list styles must be a mapping at the top level")]
    InvalidRootType,
}

/// A list kind string that is neither `numbered` nor `bulleted`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown list type: {0:?}")]
pub struct UnknownListType(pub String);
