//! Visitors behind the CLI commands
//!
//! All output is built by walking the bill tree; none of these visitors
//! look at the children of a node directly.

use std::fmt;

use billdoc_ast::{
    Inline, InlineMarkup, InlineVisitor, List, ListVisitor, QuotedBlock, Skip, Structural,
    StructuralVisitor,
};

use crate::config::OutlineSettings;

/// Collapse runs of whitespace, including newlines from pretty-printed
/// markup, into single spaces
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Collects the plain text of inline markup
#[derive(Debug, Clone, Default)]
pub struct TextCollector {
    skip_deleted: bool,
    text: String,
}

impl TextCollector {
    pub fn new(skip_deleted: bool) -> Self {
        Self {
            skip_deleted,
            text: String::new(),
        }
    }

    /// The collected text with whitespace normalized
    pub fn finish(self) -> String {
        normalize(&self.text)
    }
}

impl InlineVisitor for TextCollector {
    fn enter_element(&mut self, node: &Inline) -> Option<Self> {
        if self.skip_deleted && matches!(node, Inline::DeletedPhrase(_)) {
            return None;
        }
        Some(TextCollector::new(self.skip_deleted))
    }

    fn exit_element(&mut self, _node: &Inline, sub: Self) {
        self.text.push_str(&sub.text);
    }

    fn visit_element(&mut self, node: &Inline) {
        if matches!(node, Inline::LineBreak | Inline::PageBreak) {
            self.text.push(' ');
        }
    }

    fn visit_text(&mut self, text: &str) {
        self.text.push_str(text);
    }
}

/// Indented outline of structural captions
#[derive(Debug, Clone)]
pub struct OutlineVisitor<'a> {
    settings: &'a OutlineSettings,
    /// Nesting level of the node this visitor was entered for; 0 above the
    /// top-level elements
    level: usize,
    caption: Vec<String>,
    lines: Vec<String>,
}

impl<'a> OutlineVisitor<'a> {
    pub fn new(settings: &'a OutlineSettings) -> Self {
        Self {
            settings,
            level: 0,
            caption: Vec::new(),
            lines: Vec::new(),
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl StructuralVisitor for OutlineVisitor<'_> {
    type Inline = TextCollector;
    type Toc = Skip;
    type Table = Skip;
    type List = Skip;

    fn enter_structural(&mut self, _node: &Structural) -> Option<Self> {
        if self.settings.max_depth.is_some_and(|max| self.level >= max) {
            return None;
        }
        Some(Self {
            settings: self.settings,
            level: self.level + 1,
            caption: Vec::new(),
            lines: Vec::new(),
        })
    }

    fn exit_structural(&mut self, _node: &Structural, sub: Self) {
        self.lines.extend(sub.lines);
    }

    fn exit_caption(&mut self, _node: &Structural) {
        let caption = self.caption.join(" ");
        self.caption.clear();
        if caption.is_empty() {
            return;
        }
        let indent = " ".repeat(self.settings.indent * self.level.saturating_sub(1));
        self.lines.push(format!("{indent}{caption}"));
    }

    fn enter_enum(&mut self, _enumerator: &InlineMarkup) -> Option<TextCollector> {
        self.settings.enumerators.then(TextCollector::default)
    }

    fn exit_enum(&mut self, _enumerator: &InlineMarkup, sub: TextCollector) {
        self.caption.push(sub.finish());
    }

    fn enter_header(&mut self, _header: &InlineMarkup) -> Option<TextCollector> {
        Some(TextCollector::default())
    }

    fn exit_header(&mut self, _header: &InlineMarkup, sub: TextCollector) {
        self.caption.push(sub.finish());
    }
}

/// Running text of the body, one line per caption or paragraph
#[derive(Debug, Clone, Default)]
pub struct BodyTextVisitor {
    skip_deleted: bool,
    caption: Vec<String>,
    lines: Vec<String>,
}

impl BodyTextVisitor {
    pub fn new(skip_deleted: bool) -> Self {
        Self {
            skip_deleted,
            ..Default::default()
        }
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn collector(&self) -> Option<TextCollector> {
        Some(TextCollector::new(self.skip_deleted))
    }

    fn push_line(&mut self, sub: TextCollector) {
        let line = sub.finish();
        if !line.is_empty() {
            self.lines.push(line);
        }
    }
}

impl StructuralVisitor for BodyTextVisitor {
    type Inline = TextCollector;
    type Toc = Skip;
    type Table = Skip;
    type List = ListText;

    fn enter_structural(&mut self, _node: &Structural) -> Option<Self> {
        Some(Self::new(self.skip_deleted))
    }

    fn exit_structural(&mut self, _node: &Structural, sub: Self) {
        self.lines.extend(sub.lines);
    }

    fn exit_caption(&mut self, _node: &Structural) {
        let caption = self.caption.join(" ");
        self.caption.clear();
        if !caption.is_empty() {
            self.lines.push(caption);
        }
    }

    fn enter_enum(&mut self, _enumerator: &InlineMarkup) -> Option<TextCollector> {
        self.collector()
    }

    fn exit_enum(&mut self, _enumerator: &InlineMarkup, sub: TextCollector) {
        self.caption.push(sub.finish());
    }

    fn enter_header(&mut self, _header: &InlineMarkup) -> Option<TextCollector> {
        self.collector()
    }

    fn exit_header(&mut self, _header: &InlineMarkup, sub: TextCollector) {
        self.caption.push(sub.finish());
    }

    fn enter_text(&mut self, _text: &InlineMarkup) -> Option<TextCollector> {
        self.collector()
    }

    fn exit_text(&mut self, _text: &InlineMarkup, sub: TextCollector) {
        self.push_line(sub);
    }

    fn enter_continuation_text(&mut self, _text: &InlineMarkup) -> Option<TextCollector> {
        self.collector()
    }

    fn exit_continuation_text(&mut self, _text: &InlineMarkup, sub: TextCollector) {
        self.push_line(sub);
    }

    fn enter_quoted_block(&mut self, _block: &QuotedBlock) -> Option<Self> {
        Some(Self::new(self.skip_deleted))
    }

    fn exit_quoted_block(&mut self, _block: &QuotedBlock, sub: Self) {
        self.lines.extend(sub.lines);
    }

    fn enter_quoted_text(&mut self, _text: &InlineMarkup) -> Option<TextCollector> {
        self.collector()
    }

    fn exit_quoted_text(&mut self, _text: &InlineMarkup, sub: TextCollector) {
        self.push_line(sub);
    }

    fn enter_after_quoted_block(&mut self, _text: &InlineMarkup) -> Option<TextCollector> {
        self.collector()
    }

    /// The closing text (usually `".`) belongs to the last quoted line
    fn exit_after_quoted_block(&mut self, _text: &InlineMarkup, sub: TextCollector) {
        let after = sub.finish();
        match self.lines.last_mut() {
            Some(last) => last.push_str(&after),
            None if !after.is_empty() => self.lines.push(after),
            None => {}
        }
    }

    fn enter_list(&mut self, _list: &List) -> Option<ListText> {
        Some(ListText {
            skip_deleted: self.skip_deleted,
            items: Vec::new(),
        })
    }

    fn exit_list(&mut self, _list: &List, sub: ListText) {
        self.lines.extend(sub.items);
    }
}

/// List items rendered as `- item` lines
#[derive(Debug, Clone, Default)]
pub struct ListText {
    skip_deleted: bool,
    items: Vec<String>,
}

impl ListVisitor for ListText {
    type Inline = TextCollector;

    fn enter_item(&mut self, _item: &InlineMarkup) -> Option<TextCollector> {
        Some(TextCollector::new(self.skip_deleted))
    }

    fn exit_item(&mut self, _item: &InlineMarkup, sub: TextCollector) {
        self.items.push(format!("- {}", sub.finish()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SponsorRole {
    Sponsor,
    Cosponsor,
    Nonsponsor,
}

impl fmt::Display for SponsorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SponsorRole::Sponsor => "sponsor",
            SponsorRole::Cosponsor => "cosponsor",
            SponsorRole::Nonsponsor => "nonsponsor",
        };
        f.write_str(name)
    }
}

/// A member of Congress named in the bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub role: SponsorRole,
    pub name_id: Option<String>,
    pub name: String,
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.role,
            self.name_id.as_deref().unwrap_or("-"),
            self.name
        )
    }
}

/// Finds sponsor, cosponsor and nonsponsor names anywhere in inline
/// markup or in the inline slots of structural elements
#[derive(Debug, Clone, Default)]
pub struct SponsorCollector {
    members: Vec<Member>,
}

impl SponsorCollector {
    /// Members in order of first appearance, without repeats
    pub fn into_members(self) -> Vec<Member> {
        let mut unique: Vec<Member> = Vec::new();
        for member in self.members {
            if !unique.contains(&member) {
                unique.push(member);
            }
        }
        unique
    }

    fn record(&mut self, role: SponsorRole, name_id: Option<&String>, node: &Inline) {
        self.members.push(Member {
            role,
            name_id: name_id.cloned(),
            name: normalize(&node.text()),
        });
    }
}

impl InlineVisitor for SponsorCollector {
    fn enter_element(&mut self, node: &Inline) -> Option<Self> {
        match node {
            Inline::Sponsor(s) => self.record(SponsorRole::Sponsor, s.name_id.as_ref(), node),
            Inline::Cosponsor(m) => self.record(SponsorRole::Cosponsor, m.name_id.as_ref(), node),
            Inline::Nonsponsor(m) => {
                self.record(SponsorRole::Nonsponsor, m.name_id.as_ref(), node)
            }
            _ => return Some(SponsorCollector::default()),
        }
        None
    }

    fn exit_element(&mut self, _node: &Inline, sub: Self) {
        self.members.extend(sub.members);
    }
}

impl StructuralVisitor for SponsorCollector {
    type Inline = SponsorCollector;
    type Toc = Skip;
    type Table = Skip;
    type List = Skip;

    fn enter_structural(&mut self, _node: &Structural) -> Option<Self> {
        Some(SponsorCollector::default())
    }

    fn exit_structural(&mut self, _node: &Structural, sub: Self) {
        self.members.extend(sub.members);
    }

    fn enter_header(&mut self, _header: &InlineMarkup) -> Option<SponsorCollector> {
        Some(SponsorCollector::default())
    }

    fn exit_header(&mut self, _header: &InlineMarkup, sub: SponsorCollector) {
        self.members.extend(sub.members);
    }

    fn enter_text(&mut self, _text: &InlineMarkup) -> Option<SponsorCollector> {
        Some(SponsorCollector::default())
    }

    fn exit_text(&mut self, _text: &InlineMarkup, sub: SponsorCollector) {
        self.members.extend(sub.members);
    }

    fn enter_continuation_text(&mut self, _text: &InlineMarkup) -> Option<SponsorCollector> {
        Some(SponsorCollector::default())
    }

    fn exit_continuation_text(&mut self, _text: &InlineMarkup, sub: SponsorCollector) {
        self.members.extend(sub.members);
    }

    fn enter_quoted_block(&mut self, _block: &QuotedBlock) -> Option<Self> {
        Some(SponsorCollector::default())
    }

    fn exit_quoted_block(&mut self, _block: &QuotedBlock, sub: Self) {
        self.members.extend(sub.members);
    }

    fn enter_quoted_text(&mut self, _text: &InlineMarkup) -> Option<SponsorCollector> {
        Some(SponsorCollector::default())
    }

    fn exit_quoted_text(&mut self, _text: &InlineMarkup, sub: SponsorCollector) {
        self.members.extend(sub.members);
    }
}
