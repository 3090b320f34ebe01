use std::time::Duration;

use crate::validate::format_duration;

use super::{
    BreakStrength, Element, ExpressRole, ExpressStyle, InterpretAs, MarkupNode, PhonemeAlphabet,
    SilenceType,
};

/// A pause in speech.
///
/// Without a strength or a time, renders as a bare `<break/>` and the engine picks a medium pause.
/// If both are set, both attributes are written and engines honor the time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pause {
    strength: Option<BreakStrength>,
    time: Option<String>,
}

impl Pause {
    /// Constructs a pause with neither a strength nor a time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the relative strength of the pause.
    pub fn with_strength(mut self, strength: BreakStrength) -> Self {
        self.strength = Some(strength);
        self
    }

    /// Sets the absolute duration of the pause, e.g. `"500ms"` or `"2s"`.
    pub fn with_time<S: Into<String>>(mut self, time: S) -> Self {
        self.time = Some(time.into());
        self
    }
}

impl From<BreakStrength> for Pause {
    fn from(strength: BreakStrength) -> Self {
        Self::new().with_strength(strength)
    }
}

impl From<&str> for Pause {
    fn from(time: &str) -> Self {
        Self::new().with_time(time)
    }
}

impl From<String> for Pause {
    fn from(time: String) -> Self {
        Self::new().with_time(time)
    }
}

impl From<Duration> for Pause {
    fn from(duration: Duration) -> Self {
        Self::new().with_time(format_duration(duration))
    }
}

impl MarkupNode for Pause {
    fn render_into(&self, out: &mut String) {
        Element::new("break")
            .opt_attr("strength", self.strength.as_ref().map(BreakStrength::as_str))
            .opt_attr("time", self.time.as_deref())
            .write_empty(out)
    }
}

/// A silence inserted at a class of positions, e.g. between sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Silence {
    kind: SilenceType,
    value: String,
}

impl Silence {
    /// Constructs a silence of the given type and duration, e.g. `"200ms"`.
    pub fn new<S: Into<String>>(kind: SilenceType, value: S) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl MarkupNode for Silence {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:silence")
            .attr("type", self.kind.as_str())
            .attr("value", &self.value)
            .write_empty(out)
    }
}

/// A named marker reported by the engine when speech reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    mark: String,
}

impl Bookmark {
    /// Constructs a bookmark. The mark is an identifier and is written unescaped.
    pub fn new<S: Into<String>>(mark: S) -> Self {
        Self {
            mark: mark.into(),
        }
    }
}

impl MarkupNode for Bookmark {
    fn render_into(&self, out: &mut String) {
        Element::new("bookmark").attr("mark", &self.mark).write_empty(out)
    }
}

/// A prerecorded audio clip, with text to speak if the clip is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRef {
    src: String,
    fallback: Option<String>,
}

impl AudioRef {
    /// Constructs a reference to the audio at `src`, with no fallback text.
    pub fn new<S: Into<String>>(src: S) -> Self {
        Self {
            src: src.into(),
            fallback: None,
        }
    }

    /// Sets the text spoken when the audio cannot be played.
    pub fn with_fallback<S: Into<String>>(mut self, text: S) -> Self {
        self.fallback = Some(text.into());
        self
    }
}

impl From<&str> for AudioRef {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

impl From<String> for AudioRef {
    fn from(src: String) -> Self {
        Self::new(src)
    }
}

impl MarkupNode for AudioRef {
    fn render_into(&self, out: &mut String) {
        Element::new("audio")
            .attr("src", &self.src)
            .write_text(self.fallback.as_deref().unwrap_or_default(), out)
    }
}

/// Text that is spoken as a different string, e.g. "WWW" as "World Wide Web".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitute {
    original: String,
    alias: String,
}

impl Substitute {
    /// Constructs a substitution that speaks `alias` in place of `original`.
    pub fn new<S: Into<String>, A: Into<String>>(original: S, alias: A) -> Self {
        Self {
            original: original.into(),
            alias: alias.into(),
        }
    }
}

impl MarkupNode for Substitute {
    fn render_into(&self, out: &mut String) {
        Element::new("sub").attr("alias", &self.alias).write_text(&self.original, out)
    }
}

/// Text with an explicit phonetic pronunciation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phoneme {
    text: String,
    alphabet: PhonemeAlphabet,
    ph: String,
}

impl Phoneme {
    /// Constructs a phoneme that pronounces `text` as the transcription `ph` in `alphabet`.
    pub fn new<S: Into<String>, P: Into<String>>(
        text: S,
        alphabet: PhonemeAlphabet,
        ph: P,
    ) -> Self {
        Self {
            text: text.into(),
            alphabet,
            ph: ph.into(),
        }
    }
}

impl MarkupNode for Phoneme {
    fn render_into(&self, out: &mut String) {
        Element::new("phoneme")
            .attr("alphabet", self.alphabet.as_str())
            .attr("ph", &self.ph)
            .write_text(&self.text, out)
    }
}

/// Text spoken in an emotional style, optionally role-playing a different speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressAs {
    text: String,
    style: ExpressStyle,
    degree: Option<String>,
    role: Option<ExpressRole>,
}

impl ExpressAs {
    /// Constructs an expressed segment with the default intensity.
    pub fn new<S: Into<String>>(text: S, style: ExpressStyle) -> Self {
        Self {
            text: text.into(),
            style,
            degree: None,
            role: None,
        }
    }

    /// Sets the style intensity, from `"0.01"` to `"2"`.
    pub fn with_degree<S: Into<String>>(mut self, degree: S) -> Self {
        self.degree = Some(degree.into());
        self
    }

    /// Sets the role the voice plays.
    pub fn with_role(mut self, role: ExpressRole) -> Self {
        self.role = Some(role);
        self
    }
}

impl MarkupNode for ExpressAs {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:express-as")
            .attr("style", self.style.as_str())
            .opt_attr("styledegree", self.degree.as_deref())
            .opt_attr("role", self.role.as_ref().map(ExpressRole::as_str))
            .write_text(&self.text, out)
    }
}

/// Text with a hint about how to interpret it, e.g. as a date or a telephone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayAs {
    text: String,
    interpret_as: InterpretAs,
    format: Option<String>,
    detail: Option<String>,
}

impl SayAs {
    /// Constructs a hint with no format or detail.
    pub fn new<S: Into<String>>(text: S, interpret_as: InterpretAs) -> Self {
        Self {
            text: text.into(),
            interpret_as,
            format: None,
            detail: None,
        }
    }

    /// Sets the format, e.g. `"mdy"` for a date.
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the level of detail.
    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl MarkupNode for SayAs {
    fn render_into(&self, out: &mut String) {
        Element::new("say-as")
            .attr("interpret-as", self.interpret_as.as_str())
            .opt_attr("format", self.format.as_deref())
            .opt_attr("detail", self.detail.as_deref())
            .write_text(&self.text, out)
    }
}

const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

/// A MathML expression. The markup is trusted and embedded without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Math {
    markup: String,
}

impl Math {
    /// Constructs a math node from the inner MathML markup.
    pub fn new<S: Into<String>>(markup: S) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

impl MarkupNode for Math {
    fn render_into(&self, out: &mut String) {
        Element::new("math").attr("xmlns", MATHML_NS).write_raw(&self.markup, out)
    }
}

/// The desired total duration of the synthesized audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDuration {
    value: String,
}

impl AudioDuration {
    /// Constructs a duration hint, e.g. `"10s"` or `"2500ms"`.
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl MarkupNode for AudioDuration {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:audioduration").attr("value", &self.value).write_empty(out)
    }
}

/// Text spoken with a personal voice speaker profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerEmbedding {
    profile_id: String,
    text: String,
}

impl SpeakerEmbedding {
    /// Constructs `text` spoken with the speaker profile `profile_id`.
    pub fn new<P: Into<String>, S: Into<String>>(profile_id: P, text: S) -> Self {
        Self {
            profile_id: profile_id.into(),
            text: text.into(),
        }
    }
}

impl MarkupNode for SpeakerEmbedding {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:ttsembedding")
            .attr("speakerProfileId", &self.profile_id)
            .write_text(&self.text, out)
    }
}

/// Requests viseme events of the given type, e.g. `"redlips_front"` or `"FacialExpression"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viseme {
    kind: String,
}

impl Viseme {
    /// Constructs a viseme request of type `kind`.
    pub fn new<S: Into<String>>(kind: S) -> Self {
        Self {
            kind: kind.into(),
        }
    }
}

impl MarkupNode for Viseme {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:viseme").attr("type", &self.kind).write_empty(out)
    }
}

/// Audio played behind the whole document.
///
/// With the `serde` feature enabled, this type can be serialized and deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundAudio {
    src: String,
    volume: Option<String>,
    fadein: Option<String>,
    fadeout: Option<String>,
}

impl BackgroundAudio {
    /// Constructs a directive playing the audio at `src` at its default volume, without fades.
    pub fn new<S: Into<String>>(src: S) -> Self {
        Self {
            src: src.into(),
            volume: None,
            fadein: None,
            fadeout: None,
        }
    }

    /// Sets the volume, from `"0"` to `"1"`.
    pub fn with_volume<S: Into<String>>(mut self, volume: S) -> Self {
        self.volume = Some(volume.into());
        self
    }

    /// Sets the fade-in duration in milliseconds.
    pub fn with_fadein<S: Into<String>>(mut self, fadein: S) -> Self {
        self.fadein = Some(fadein.into());
        self
    }

    /// Sets the fade-out duration in milliseconds.
    pub fn with_fadeout<S: Into<String>>(mut self, fadeout: S) -> Self {
        self.fadeout = Some(fadeout.into());
        self
    }

    /// Returns the audio source.
    pub fn src(&self) -> &str {
        &self.src
    }
}

impl MarkupNode for BackgroundAudio {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:backgroundaudio")
            .attr("src", &self.src)
            .opt_attr("volume", self.volume.as_deref())
            .opt_attr("fadein", self.fadein.as_deref())
            .opt_attr("fadeout", self.fadeout.as_deref())
            .write_empty(out)
    }
}

/// A voice conversion model applied to the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConversion {
    url: String,
}

impl VoiceConversion {
    /// Constructs a voice conversion directive for the model at `url`.
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
        }
    }

    /// Returns the model URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MarkupNode for VoiceConversion {
    fn render_into(&self, out: &mut String) {
        Element::new("mstts:voiceconversion").attr("url", &self.url).write_empty(out)
    }
}

/// A reference to an external pronunciation lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    uri: String,
}

impl Lexicon {
    /// Constructs a reference to the lexicon at `uri`.
    pub fn new<S: Into<String>>(uri: S) -> Self {
        Self {
            uri: uri.into(),
        }
    }
}

impl MarkupNode for Lexicon {
    fn render_into(&self, out: &mut String) {
        Element::new("lexicon").attr("uri", &self.uri).write_empty(out)
    }
}
