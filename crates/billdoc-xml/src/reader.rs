//! Token stream over quick-xml events
//!
//! The decoders only care about four kinds of token: element starts,
//! element ends, character data and the end of input. This module folds the
//! richer quick-xml event set down to those. Self-closing elements are
//! reported as a start immediately followed by an end, so decoders never
//! need a separate code path for them.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{BillError, Result};

/// One step of the token stream
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Start(StartTag),
    End,
    /// Character data with entities resolved; CDATA sections are reported
    /// as text too
    Text(String),
    Eof,
}

/// An element start tag with its attributes in document order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StartTag {
    /// Qualified name as written, e.g. `dc:title`
    pub name: String,
    /// Qualified attribute names and unescaped values
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    fn from_event(e: &BytesStart) -> Result<Self> {
        let name = std::str::from_utf8(e.name().as_ref())?.to_string();
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self { name, attributes })
    }

    /// Name without any namespace prefix
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }
}

/// Pull reader producing [`Token`]s
pub struct EventReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    pending_end: bool,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        // Whitespace is significant inside inline markup
        reader.config_mut().trim_text(false);
        Self {
            reader,
            buf: Vec::new(),
            pending_end: false,
        }
    }

    /// Read the next token, skipping declarations, comments and
    /// processing instructions
    pub fn next_token(&mut self) -> Result<Token> {
        if self.pending_end {
            self.pending_end = false;
            return Ok(Token::End);
        }

        loop {
            self.buf.clear();
            let token = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(ref e) => Token::Start(StartTag::from_event(e)?),
                Event::Empty(ref e) => {
                    self.pending_end = true;
                    Token::Start(StartTag::from_event(e)?)
                }
                Event::End(_) => Token::End,
                Event::Text(ref e) => Token::Text(e.unescape()?.into_owned()),
                Event::CData(ref e) => Token::Text(std::str::from_utf8(e)?.to_string()),
                Event::Eof => Token::Eof,
                _ => continue,
            };
            return Ok(token);
        }
    }

    /// Consume everything up to and including the end tag of the element
    /// whose start tag was just read
    pub fn skip_element(&mut self, element: &str) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.next_token()? {
                Token::Start(_) => depth += 1,
                Token::End if depth == 0 => return Ok(()),
                Token::End => depth -= 1,
                Token::Text(_) => {}
                Token::Eof => return Err(BillError::eof(element)),
            }
        }
    }

    /// Collect all character data of the current element, descendants
    /// included, and consume its end tag
    pub fn read_text(&mut self, element: &str) -> Result<String> {
        let mut text = String::new();
        let mut depth = 0usize;
        loop {
            match self.next_token()? {
                Token::Start(_) => depth += 1,
                Token::End if depth == 0 => return Ok(text),
                Token::End => depth -= 1,
                Token::Text(t) => text.push_str(&t),
                Token::Eof => return Err(BillError::eof(element)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(xml: &str) -> Vec<Token> {
        let mut reader = EventReader::new(xml.as_bytes());
        let mut out = Vec::new();
        loop {
            let token = reader.next_token().unwrap();
            let done = token == Token::Eof;
            out.push(token);
            if done {
                return out;
            }
        }
    }

    #[test]
    fn test_empty_element_yields_start_and_end() {
        let toks = tokens(r#"<a><b x="1"/></a>"#);
        assert_eq!(toks.len(), 5);
        assert!(matches!(&toks[1], Token::Start(t) if t.name == "b"));
        assert_eq!(toks[2], Token::End);
    }

    #[test]
    fn test_text_is_unescaped_and_untrimmed() {
        let toks = tokens("<a> x &amp; y </a>");
        assert_eq!(toks[1], Token::Text(" x & y ".to_string()));
    }

    #[test]
    fn test_cdata_is_text() {
        let toks = tokens("<a><![CDATA[<raw>]]></a>");
        assert_eq!(toks[1], Token::Text("<raw>".to_string()));
    }

    #[test]
    fn test_declarations_and_comments_are_skipped() {
        let toks = tokens(r#"<?xml version="1.0"?><!-- c --><a/>"#);
        assert!(matches!(&toks[0], Token::Start(t) if t.name == "a"));
    }

    #[test]
    fn test_attributes_keep_qualified_names() {
        let toks = tokens(r#"<a xml:lang="en" id="x&lt;1"/>"#);
        let Token::Start(tag) = &toks[0] else {
            panic!("expected start tag");
        };
        assert_eq!(
            tag.attributes,
            vec![
                ("xml:lang".to_string(), "en".to_string()),
                ("id".to_string(), "x<1".to_string()),
            ]
        );
    }

    #[test]
    fn test_local_name_strips_prefix() {
        assert_eq!(StartTag::new("dc:title").local_name(), "title");
        assert_eq!(StartTag::new("section").local_name(), "section");
    }

    #[test]
    fn test_read_text_collects_descendants() {
        let mut reader = EventReader::new("<a>one <b>two</b> three</a><z/>".as_bytes());
        assert!(matches!(reader.next_token().unwrap(), Token::Start(_)));
        assert_eq!(reader.read_text("a").unwrap(), "one two three");
        assert!(matches!(reader.next_token().unwrap(), Token::Start(t) if t.name == "z"));
    }

    #[test]
    fn test_skip_element_stops_at_matching_end() {
        let mut reader = EventReader::new("<r><a><a/>x</a><b/></r>".as_bytes());
        reader.next_token().unwrap();
        reader.next_token().unwrap();
        reader.skip_element("a").unwrap();
        assert!(matches!(reader.next_token().unwrap(), Token::Start(t) if t.name == "b"));
    }

    #[test]
    fn test_skip_element_reports_eof() {
        let mut reader = EventReader::new("<a><b>".as_bytes());
        reader.next_token().unwrap();
        let err = reader.skip_element("a").unwrap_err();
        assert!(matches!(
            err,
            BillError::UnexpectedEof { .. } | BillError::Xml(_)
        ));
    }
}
