//! Markup nodes and their serialization.
//!
//! Every node implements [`MarkupNode`]. Leaf nodes render a single tag with fixed attributes and
//! an optional escaped body. Container nodes hold a [`ContentList`] of text runs and child nodes,
//! rendered in the order they were appended.
//!
//! Free-form text (bodies, fallback text) is escaped when rendered. Structural attribute values
//! such as URLs, identifiers, tags, and durations are written verbatim and are not validated. See
//! the [`validate`](crate::validate) module for opt-in checks.

use std::borrow::Cow;
use std::fmt;

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

use crate::escape::escape_into;

mod container;
mod leaf;
mod types;

pub use container::{Emphasis, LanguageSpan, Paragraph, Prosody, Sentence};
pub use leaf::{
    AudioDuration, AudioRef, BackgroundAudio, Bookmark, ExpressAs, Lexicon, Math, Pause,
    Phoneme, SayAs, Silence, SpeakerEmbedding, Substitute, Viseme, VoiceConversion,
};
pub use types::{
    BreakStrength, EmphasisLevel, ExpressRole, ExpressStyle, InterpretAs, PhonemeAlphabet,
    SilenceType, VoiceEffect,
};

/// A piece of markup that can serialize itself.
///
/// Rendering is pure: it never mutates the node, and rendering the same node twice produces the
/// same string.
pub trait MarkupNode: fmt::Debug {
    /// Appends the serialized form of this node to `out`.
    fn render_into(&self, out: &mut String);

    /// Returns the serialized form of this node.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}

impl<N: MarkupNode + ?Sized> MarkupNode for Box<N> {
    fn render_into(&self, out: &mut String) {
        (**self).render_into(out)
    }
}

/// A single entry of a [`ContentList`].
#[derive(Debug)]
pub enum Content {
    /// Raw text, escaped when rendered.
    Text(String),
    /// A nested node, rendered recursively.
    Node(Box<dyn MarkupNode>),
}

impl Content {
    /// Wraps a node.
    pub fn node<N: MarkupNode + 'static>(node: N) -> Self {
        Self::Node(Box::new(node))
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl MarkupNode for Content {
    fn render_into(&self, out: &mut String) {
        match self {
            Self::Text(text) => escape_into(text, out),
            Self::Node(node) => node.render_into(out),
        }
    }
}

/// An append-only sequence of text runs and nodes. Rendering concatenates the entries in
/// insertion order without separators.
#[derive(Debug, Default)]
pub struct ContentList {
    items: Vec<Content>,
}

impl ContentList {
    /// Constructs a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text run.
    pub fn push_text<S: Into<String>>(&mut self, text: S) {
        self.items.push(Content::Text(text.into()));
    }

    /// Appends a node.
    pub fn push_node<N: MarkupNode + 'static>(&mut self, node: N) {
        self.items.push(Content::node(node));
    }

    /// Appends an entry.
    pub fn push(&mut self, content: Content) {
        self.items.push(content);
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Content> {
        self.items.iter()
    }
}

impl MarkupNode for ContentList {
    fn render_into(&self, out: &mut String) {
        for item in &self.items {
            item.render_into(out);
        }
    }
}

/// Serializes one element. Attributes are pushed onto a [`BytesStart`] in order, and optional
/// attributes that are absent are simply never added, so each node only has to state its
/// attribute order once.
///
/// Attribute values are pushed raw: they are written exactly as given, without escaping.
pub(crate) struct Element<'a> {
    start: BytesStart<'a>,
}

impl<'a> Element<'a> {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            start: BytesStart::new(name),
        }
    }

    pub(crate) fn attr(mut self, name: &'static str, value: &'a str) -> Self {
        self.start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Borrowed(value.as_bytes()),
        });
        self
    }

    pub(crate) fn opt_attr(self, name: &'static str, value: Option<&'a str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// `<name attrs/>`
    pub(crate) fn write_empty(&self, out: &mut String) {
        write_event(Event::Empty(self.start.borrow()), out);
    }

    /// `<name attrs>` + escaped `text` + `</name>`
    pub(crate) fn write_text(&self, text: &str, out: &mut String) {
        self.write_start(out);
        escape_into(text, out);
        self.write_end(out);
    }

    /// `<name attrs>` + `raw` verbatim + `</name>`
    pub(crate) fn write_raw(&self, raw: &str, out: &mut String) {
        self.write_start(out);
        out.push_str(raw);
        self.write_end(out);
    }

    /// `<name attrs>` + rendered `content` + `</name>`
    pub(crate) fn write_content(&self, content: &dyn MarkupNode, out: &mut String) {
        self.write_start(out);
        content.render_into(out);
        self.write_end(out);
    }

    pub(crate) fn write_start(&self, out: &mut String) {
        write_event(Event::Start(self.start.borrow()), out);
    }

    pub(crate) fn write_end(&self, out: &mut String) {
        write_event(Event::End(self.start.to_end()), out);
    }
}

fn write_event(event: Event<'_>, out: &mut String) {
    let mut writer = Writer::new(Vec::new());
    // Writing to a `Vec` cannot fail, and every event is built from `&str`, so it stays UTF-8.
    if writer.write_event(event).is_ok() {
        out.push_str(&String::from_utf8_lossy(&writer.into_inner()));
    }
}
