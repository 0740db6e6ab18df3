use serde::Deserialize;
use thiserror::Error;

pub const MARKER_ATTRIBUTE: &str = "data-content-type";
pub const RESERVED_CLASS_PREFIX: &str = "pagebuilder-";
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("marker attribute must not be empty")]
    EmptyMarker,
    #[error("marker attribute {0:?} must be lowercase; parsed attribute names always are")]
    UppercaseMarker(String),
    #[error("max depth must be at least 1")]
    ZeroDepth,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParserOptions {
    /// Attribute naming the block kind of an element.
    pub marker_attribute: String,
    /// Classes starting with this prefix are stripped from `cssClasses`.
    pub reserved_class_prefix: String,
    /// Marked blocks nested deeper than this are kept as raw markup.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            marker_attribute: MARKER_ATTRIBUTE.to_string(),
            reserved_class_prefix: RESERVED_CLASS_PREFIX.to_string(),
            max_depth: MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let options: ParserOptions = toml::from_str(input)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker_attribute.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.marker_attribute.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::UppercaseMarker(self.marker_attribute.clone()));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}
