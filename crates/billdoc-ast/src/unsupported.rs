//! Opaque record of an element that has no dedicated node type

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tag name and attributes of an element kept for forward compatibility.
///
/// Unlike the modelled node types, every attribute is kept verbatim here,
/// including namespaced ones, keyed by its qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnsupportedElement {
    /// Qualified tag name as written in the source
    pub name: String,
    /// All attributes, qualified name to value
    pub attributes: BTreeMap<String, String>,
}

impl UnsupportedElement {
    /// Create a record with no attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute value by qualified name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
