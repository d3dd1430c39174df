//! Attribute binding
//!
//! Modelled nodes only see plain attributes: anything with a namespace
//! prefix, and the `xmlns` declaration itself, is dropped before binding.
//! Unsupported-element fallbacks instead keep every attribute verbatim.

use std::collections::HashMap;
use std::ops::Range;
use std::str::FromStr;

use billdoc_ast::{Date, UnsupportedElement};

use crate::error::{BillError, Result};
use crate::reader::StartTag;

/// Plain attributes of one start tag, consumed by name
#[derive(Debug, Default)]
pub(crate) struct Attributes {
    values: HashMap<String, String>,
}

impl Attributes {
    pub fn of(tag: &StartTag) -> Self {
        let values = tag
            .attributes
            .iter()
            .filter(|(name, _)| !name.contains(':') && name != "xmlns")
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Self { values }
    }

    /// Remove and return the named attribute
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Remove the named attribute and parse it as a `YYYYMMDD` date
    pub fn take_date(&mut self, name: &str) -> Result<Option<Date>> {
        self.take(name)
            .map(|value| parse_date(name, &value))
            .transpose()
    }
}

/// Record the tag name and all attributes of an element without a
/// dedicated node type
pub(crate) fn capture(tag: &StartTag) -> UnsupportedElement {
    tag.attributes
        .iter()
        .fold(UnsupportedElement::new(tag.name.clone()), |element, (k, v)| {
            element.with_attribute(k.clone(), v.clone())
        })
}

/// Parse an eight-digit `YYYYMMDD` value.
///
/// Only the shape is checked; month 13 or day 32 are accepted as written.
pub(crate) fn parse_date(attribute: &str, value: &str) -> Result<Date> {
    let malformed = |reason: &str| BillError::MalformedAttribute {
        attribute: attribute.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if value.len() != 8 {
        return Err(malformed("expected 8 digits in YYYYMMDD form"));
    }

    let year = digits(value, 0..4).ok_or_else(|| malformed("invalid year"))?;
    let month = digits(value, 4..6).ok_or_else(|| malformed("invalid month"))?;
    let day = digits(value, 6..8).ok_or_else(|| malformed("invalid day"))?;

    Ok(Date { year, month, day })
}

fn digits<T: FromStr>(value: &str, range: Range<usize>) -> Option<T> {
    let segment = value.get(range)?;
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
