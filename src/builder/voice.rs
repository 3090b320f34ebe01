use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::warn;

use crate::node::{
    AudioDuration, Content, ContentList, Element, ExpressAs, Lexicon, MarkupNode, Math, Silence,
    SilenceType, SpeakerEmbedding, Viseme, VoiceEffect,
};
use crate::{Error, Result};

use super::speak::{build_document, Document};

#[derive(Debug)]
pub(crate) struct VoiceSection {
    name: String,
    effect: Option<VoiceEffect>,
    content: ContentList,
}

impl VoiceSection {
    pub(crate) fn new(name: String, effect: Option<VoiceEffect>) -> Self {
        Self {
            name,
            effect,
            content: ContentList::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl MarkupNode for VoiceSection {
    fn render_into(&self, out: &mut String) {
        Element::new("voice")
            .attr("name", &self.name)
            .opt_attr("effect", self.effect.as_ref().map(VoiceEffect::as_str))
            .write_content(&self.content, out)
    }
}

/// Appends content to one voice section of a document.
///
/// A builder obtained from [`SpeakBuilder::add_voice`](super::SpeakBuilder::add_voice) keeps a
/// weak reference to its document, so it can [`build`](VoiceBuilder::build) the whole document
/// or [`switch_voice`](VoiceBuilder::switch_voice) to a new section. A builder constructed with
/// [`VoiceBuilder::new`] stands alone: it renders as a single `<voice>` element, and both of
/// those calls fail with [`Error::Detached`].
///
/// ```
/// use ssml_lite::builder::SpeakBuilder;
/// use ssml_lite::node::{ExpressAs, ExpressStyle};
///
/// let mut speak = SpeakBuilder::new("en-US");
/// let xml = speak
///     .add_voice("en-US-AvaNeural")
///     .express_as(ExpressAs::new("Good news!", ExpressStyle::Cheerful))
///     .switch_voice("en-US-AndrewNeural")?
///     .text("Indeed.")
///     .build()?;
///
/// assert!(xml.contains("<voice name=\"en-US-AndrewNeural\">Indeed.</voice>"));
/// # Ok::<(), ssml_lite::Error>(())
/// ```
///
/// Voice sections do not nest. A builder is not a node, so it cannot be appended into another
/// section:
///
/// ```compile_fail
/// use ssml_lite::builder::SpeakBuilder;
///
/// let mut speak = SpeakBuilder::new("en-US");
/// let mut first = speak.add_voice("en-US-AvaNeural");
/// let second = first.switch_voice("en-US-AndrewNeural").unwrap();
/// first.node(second);
/// ```
#[derive(Debug)]
pub struct VoiceBuilder {
    section: Rc<RefCell<VoiceSection>>,
    root: Option<Weak<RefCell<Document>>>,
}

impl VoiceBuilder {
    /// Constructs a standalone voice section that is not part of any document.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self::detached(name.into(), None)
    }

    /// Constructs a standalone voice section with an audio effect.
    pub fn with_effect<S: Into<String>>(name: S, effect: VoiceEffect) -> Self {
        Self::detached(name.into(), Some(effect))
    }

    fn detached(name: String, effect: Option<VoiceEffect>) -> Self {
        Self {
            section: Rc::new(RefCell::new(VoiceSection::new(name, effect))),
            root: None,
        }
    }

    pub(crate) fn attached(
        section: Rc<RefCell<VoiceSection>>,
        root: Weak<RefCell<Document>>,
    ) -> Self {
        Self {
            section,
            root: Some(root),
        }
    }

    /// Returns the voice name.
    pub fn name(&self) -> String {
        self.section.borrow().name.clone()
    }

    /// Renders this voice section alone, as a single `<voice>` element.
    pub fn render(&self) -> String {
        self.section.borrow().render()
    }

    inline_methods!();
    paragraph_method!();
    sentence_method!();

    /// Appends a silence of type `kind` lasting `value`, e.g. `"200ms"`.
    pub fn silence<S: Into<String>>(&mut self, kind: SilenceType, value: S) -> &mut Self {
        self.node(Silence::new(kind, value))
    }

    /// Appends text spoken in an emotional style.
    pub fn express_as(&mut self, express_as: ExpressAs) -> &mut Self {
        self.node(express_as)
    }

    /// Appends a reference to an external lexicon.
    pub fn lexicon<S: Into<String>>(&mut self, uri: S) -> &mut Self {
        self.node(Lexicon::new(uri))
    }

    /// Appends a MathML expression. The markup is embedded verbatim.
    pub fn math<S: Into<String>>(&mut self, markup: S) -> &mut Self {
        self.node(Math::new(markup))
    }

    /// Appends the desired duration of the synthesized audio, e.g. `"10s"`.
    pub fn audio_duration<S: Into<String>>(&mut self, value: S) -> &mut Self {
        self.node(AudioDuration::new(value))
    }

    /// Appends text spoken with the speaker profile `profile_id`.
    pub fn speaker_embedding<P: Into<String>, S: Into<String>>(
        &mut self,
        profile_id: P,
        text: S,
    ) -> &mut Self {
        self.node(SpeakerEmbedding::new(profile_id, text))
    }

    /// Requests viseme events of type `kind`.
    pub fn viseme<S: Into<String>>(&mut self, kind: S) -> &mut Self {
        self.node(Viseme::new(kind))
    }

    /// Registers a new voice section after the existing ones in the owning document and returns
    /// a builder for it.
    pub fn switch_voice<S: Into<String>>(&self, name: S) -> Result<VoiceBuilder> {
        let doc = self.document()?;
        Ok(Document::add_voice(&doc, name.into(), None))
    }

    /// Like [`switch_voice`](VoiceBuilder::switch_voice), with an audio effect on the new section.
    pub fn switch_voice_with_effect<S: Into<String>>(
        &self,
        name: S,
        effect: VoiceEffect,
    ) -> Result<VoiceBuilder> {
        let doc = self.document()?;
        Ok(Document::add_voice(&doc, name.into(), Some(effect)))
    }

    /// Renders the whole owning document, including sections added after this one.
    pub fn build(&self) -> Result<String> {
        let doc = self.document()?;
        let doc = doc.borrow();
        Ok(build_document(&doc))
    }

    fn document(&self) -> Result<Rc<RefCell<Document>>> {
        let result = match &self.root {
            None => Err(Error::Detached {
                voice: self.name(),
            }),
            Some(root) => root.upgrade().ok_or_else(|| Error::DocumentDropped {
                voice: self.name(),
            }),
        };
        if let Err(err) = &result {
            warn!("{}", err);
        }
        result
    }

    fn push_content(&mut self, content: Content) -> &mut Self {
        self.section.borrow_mut().content.push(content);
        self
    }
}

impl fmt::Display for VoiceBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl_text_write!(VoiceBuilder);
