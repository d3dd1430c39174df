//! Document root, form metadata and body
//!
//! A [`Bill`] is whatever root element the source uses (`bill`,
//! `resolution`, ...) reduced to its two interesting children: the `form`
//! with distribution and action metadata, and the `legis-body`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inline::InlineMarkup;
use crate::structural::Structural;

/// A complete bill document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bill {
    pub form: Option<Form>,
    pub body: Option<Body>,
}

/// `legis-body`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    /// `style` attribute, e.g. "OLC"
    pub style: Option<String>,
    /// Top-level structural elements
    pub content: Vec<Structural>,
}

/// `form` metadata block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Form {
    /// `distribution-code`
    pub distribution_code: Option<String>,
    /// `calendar`
    pub calendar: Option<String>,
    /// `congress`
    pub congress: Option<String>,
    /// `session`
    pub session: Option<String>,
    /// `enrolled-dateline`
    pub enrolled_dateline: Option<String>,
    /// `legis-num`, e.g. "H. R. 1234"
    pub legis_num: Option<String>,
    /// `associated-doc`
    pub associated_docs: Vec<AssociatedDoc>,
    /// `current-chamber`
    pub current_chamber: Option<String>,
    /// `action`
    pub actions: Vec<Action>,
    /// `legis-type`
    pub legis_type: Option<String>,
}

/// `associated-doc`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssociatedDoc {
    /// `role` attribute
    pub role: Option<String>,
    pub text: String,
}

/// A legislative action recorded on the form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Action {
    /// `stage` attribute
    pub stage: Option<String>,
    /// `action-date`
    pub date: Option<ActionDate>,
    /// `action-desc` paragraphs
    pub descriptions: Vec<InlineMarkup>,
    /// `action-instruction` paragraphs
    pub instructions: Vec<String>,
}

/// `action-date`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionDate {
    /// The date as printed, e.g. "March 3, 2017"
    pub human_readable: String,
    /// `date` attribute
    pub event_date: Option<Date>,
    /// `legis-day` attribute
    pub legislative_date: Option<Date>,
}

/// A calendar date from a `YYYYMMDD` attribute.
///
/// Values are stored as written; no calendar validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Body {
    /// Find a structural element anywhere in the body by its id
    pub fn find_by_id(&self, id: &str) -> Option<&Structural> {
        self.content.iter().find_map(|node| node.find_by_id(id))
    }
}

impl Bill {
    /// Top-level structural elements, empty if the bill has no body
    pub fn structurals(&self) -> &[Structural] {
        self.body.as_ref().map_or(&[], |b| b.content.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structural::StructuralKind;

    #[test]
    fn test_date_display() {
        let date = Date {
            year: 2017,
            month: 3,
            day: 7,
        };
        assert_eq!(date.to_string(), "2017-03-07");
    }

    #[test]
    fn test_empty_bill_has_no_structurals() {
        assert!(Bill::default().structurals().is_empty());
    }

    #[test]
    fn test_body_find_by_id() {
        let body = Body {
            style: None,
            content: vec![
                Structural::builder(StructuralKind::Section)
                    .id(Some("H1".to_string()))
                    .build(),
                Structural::builder(StructuralKind::Section)
                    .id(Some("H2".to_string()))
                    .build(),
            ],
        };
        assert!(body.find_by_id("H2").is_some());
        assert!(body.find_by_id("H3").is_none());
    }
}
