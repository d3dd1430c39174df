//! Configuration settings
//!
//! Read from `billdoc.toml`. Every section and key is optional.

use serde::{Deserialize, Serialize};

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// `outline` command settings
    pub outline: OutlineSettings,
    /// `text` command settings
    pub text: TextSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Spaces of indentation per nesting level
    pub indent: usize,
    /// Deepest structural level to print; unlimited when absent
    pub max_depth: Option<usize>,
    /// Prefix each caption with its enumerator
    pub enumerators: bool,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            indent: 2,
            max_depth: None,
            enumerators: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// Leave out the content of deleted phrases
    pub skip_deleted: bool,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self { skip_deleted: true }
    }
}
