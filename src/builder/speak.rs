use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::node::{BackgroundAudio, Element, MarkupNode, VoiceConversion, VoiceEffect};

use super::voice::{VoiceBuilder, VoiceSection};

/// The SSML version written to documents by default.
pub const SSML_VERSION: &str = "1.0";

/// The W3C speech synthesis namespace.
pub const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

/// The Microsoft `mstts` extension namespace.
pub const MSTTS_NAMESPACE: &str = "https://www.w3.org/2001/mstts";

const CHILD_SEPARATOR: &str = "\n  ";

/// Attributes of the root `<speak>` element.
///
/// The language is required. The version and both namespaces default to [`SSML_VERSION`],
/// [`SSML_NAMESPACE`], and [`MSTTS_NAMESPACE`].
///
/// With the `serde` feature enabled, this type can be serialized and deserialized. Missing
/// version and namespace fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeakConfig {
    lang: String,
    #[cfg_attr(feature = "serde", serde(default = "default_version"))]
    version: String,
    #[cfg_attr(feature = "serde", serde(default = "default_xmlns"))]
    xmlns: String,
    #[cfg_attr(feature = "serde", serde(default = "default_mstts_xmlns"))]
    mstts_xmlns: String,
}

#[cfg(feature = "serde")]
fn default_version() -> String {
    SSML_VERSION.to_string()
}

#[cfg(feature = "serde")]
fn default_xmlns() -> String {
    SSML_NAMESPACE.to_string()
}

#[cfg(feature = "serde")]
fn default_mstts_xmlns() -> String {
    MSTTS_NAMESPACE.to_string()
}

impl SpeakConfig {
    /// Constructs a configuration for the language `lang`, e.g. `"en-US"`, with default version
    /// and namespaces.
    pub fn new<S: Into<String>>(lang: S) -> Self {
        Self {
            lang: lang.into(),
            version: SSML_VERSION.to_string(),
            xmlns: SSML_NAMESPACE.to_string(),
            mstts_xmlns: MSTTS_NAMESPACE.to_string(),
        }
    }

    /// Overrides the SSML version.
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }

    /// Overrides the primary namespace.
    pub fn with_xmlns<S: Into<String>>(mut self, xmlns: S) -> Self {
        self.xmlns = xmlns.into();
        self
    }

    /// Overrides the `mstts` extension namespace.
    pub fn with_mstts_xmlns<S: Into<String>>(mut self, xmlns: S) -> Self {
        self.mstts_xmlns = xmlns.into();
        self
    }

    /// Returns the document language.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Returns the SSML version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the primary namespace.
    pub fn xmlns(&self) -> &str {
        &self.xmlns
    }

    /// Returns the `mstts` extension namespace.
    pub fn mstts_xmlns(&self) -> &str {
        &self.mstts_xmlns
    }
}

#[derive(Debug)]
pub(crate) struct Document {
    config: SpeakConfig,
    background_audio: Option<BackgroundAudio>,
    voice_conversion: Option<VoiceConversion>,
    voices: Vec<Rc<RefCell<VoiceSection>>>,
}

impl Document {
    pub(crate) fn add_voice(
        doc: &Rc<RefCell<Self>>,
        name: String,
        effect: Option<VoiceEffect>,
    ) -> VoiceBuilder {
        let section = Rc::new(RefCell::new(VoiceSection::new(name, effect)));
        let mut this = doc.borrow_mut();
        this.voices.push(section.clone());
        debug!(
            "registered voice section `{}` ({} in document)",
            section.borrow().name(),
            this.voices.len()
        );
        VoiceBuilder::attached(section, Rc::downgrade(doc))
    }
}

impl MarkupNode for Document {
    fn render_into(&self, out: &mut String) {
        let speak = Element::new("speak")
            .attr("version", &self.config.version)
            .attr("xmlns", &self.config.xmlns)
            .attr("xmlns:mstts", &self.config.mstts_xmlns)
            .attr("xml:lang", &self.config.lang);
        speak.write_start(out);
        if let Some(audio) = &self.background_audio {
            out.push_str(CHILD_SEPARATOR);
            audio.render_into(out);
        }
        if let Some(conversion) = &self.voice_conversion {
            out.push_str(CHILD_SEPARATOR);
            conversion.render_into(out);
        }
        for voice in &self.voices {
            out.push_str(CHILD_SEPARATOR);
            voice.borrow().render_into(out);
        }
        out.push('\n');
        speak.write_end(out);
    }
}

/// Helper type that owns a document and renders it as SSML.
///
/// The document is made of voice sections, added with [`add_voice`](SpeakBuilder::add_voice),
/// plus at most one background audio and one voice conversion directive. Setting a directive
/// again replaces the previous one.
///
/// NOTE: Text is escaped, but the builder performs no validation of attribute values such as
/// durations, URLs, or tags; they are written exactly as given. Use the
/// [`validate`](crate::validate) helpers to check them beforehand.
///
/// ```
/// use ssml_lite::builder::SpeakBuilder;
/// use ssml_lite::node::BreakStrength;
///
/// let mut speak = SpeakBuilder::new("en-US");
/// speak
///     .add_voice("en-US-AvaNeural")
///     .text("Hello,")
///     .pause(BreakStrength::Weak)
///     .text("world!");
///
/// assert_eq!(
///     speak.build(),
///     "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" \
///      xmlns:mstts=\"https://www.w3.org/2001/mstts\" xml:lang=\"en-US\">\n  \
///      <voice name=\"en-US-AvaNeural\">Hello,<break strength=\"weak\"/>world!</voice>\n\
///      </speak>"
/// );
/// ```
///
/// A document is not a node, so it cannot be appended into one of its own voice sections:
///
/// ```compile_fail
/// use ssml_lite::builder::SpeakBuilder;
///
/// let mut speak = SpeakBuilder::new("en-US");
/// let mut voice = speak.add_voice("en-US-AvaNeural");
/// voice.node(speak);
/// ```
#[derive(Debug)]
pub struct SpeakBuilder {
    doc: Rc<RefCell<Document>>,
}

impl SpeakBuilder {
    /// Constructs an empty document in the language `lang`, e.g. `"en-US"`.
    pub fn new<S: Into<String>>(lang: S) -> Self {
        Self::with_config(SpeakConfig::new(lang))
    }

    /// Constructs an empty document with the given root attributes.
    pub fn with_config(config: SpeakConfig) -> Self {
        Self {
            doc: Rc::new(RefCell::new(Document {
                config,
                background_audio: None,
                voice_conversion: None,
                voices: Vec::new(),
            })),
        }
    }

    /// Returns a copy of the root attributes.
    pub fn config(&self) -> SpeakConfig {
        self.doc.borrow().config.clone()
    }

    /// Registers a new voice section after the existing ones and returns a builder for it.
    pub fn add_voice<S: Into<String>>(&mut self, name: S) -> VoiceBuilder {
        Document::add_voice(&self.doc, name.into(), None)
    }

    /// Registers a new voice section with an audio effect and returns a builder for it.
    pub fn add_voice_with_effect<S: Into<String>>(
        &mut self,
        name: S,
        effect: VoiceEffect,
    ) -> VoiceBuilder {
        Document::add_voice(&self.doc, name.into(), Some(effect))
    }

    /// Sets the background audio, replacing any previous one.
    pub fn set_background_audio(&mut self, audio: BackgroundAudio) -> &mut Self {
        let previous = self.doc.borrow_mut().background_audio.replace(audio);
        if let Some(previous) = previous {
            debug!("replaced background audio `{}`", previous.src());
        }
        self
    }

    /// Sets the voice conversion model, replacing any previous one.
    pub fn set_voice_conversion<S: Into<String>>(&mut self, url: S) -> &mut Self {
        let previous = self.doc.borrow_mut().voice_conversion.replace(VoiceConversion::new(url));
        if let Some(previous) = previous {
            debug!("replaced voice conversion `{}`", previous.url());
        }
        self
    }

    /// Returns the number of voice sections registered so far.
    pub fn voice_count(&self) -> usize {
        self.doc.borrow().voices.len()
    }

    /// Renders the document as it currently stands. The builder is left untouched, so more
    /// content can be added and the document built again.
    pub fn build(&self) -> String {
        build_document(&self.doc.borrow())
    }
}

pub(crate) fn build_document(doc: &Document) -> String {
    let xml = doc.render();
    debug!("built document with {} voice sections ({} bytes)", doc.voices.len(), xml.len());
    xml
}

impl fmt::Display for SpeakBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<&SpeakBuilder> for String {
    fn from(builder: &SpeakBuilder) -> Self {
        builder.build()
    }
}
