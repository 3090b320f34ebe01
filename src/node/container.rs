use super::{Content, ContentList, Element, EmphasisLevel, MarkupNode};

macro_rules! decl_block {
    {$(#[$meta:meta])* $name:ident => $tag:tt} => {
        $(#[$meta])*
        #[derive(Debug, Default)]
        pub struct $name {
            content: ContentList,
        }

        impl $name {
            /// Constructs a new, empty instance.
            pub fn new() -> Self {
                Self::default()
            }

            /// Appends a text run or a node.
            pub fn push<C: Into<Content>>(&mut self, content: C) {
                self.content.push(content.into());
            }

            /// Returns the content appended so far.
            pub fn content(&self) -> &ContentList {
                &self.content
            }
        }

        impl MarkupNode for $name {
            fn render_into(&self, out: &mut String) {
                Element::new($tag).write_content(&self.content, out)
            }
        }
    };
}

decl_block! {
    /// A sentence, `<s>`.
    Sentence => "s"
}

decl_block! {
    /// A paragraph, `<p>`.
    Paragraph => "p"
}

/// Content spoken in a different language than the rest of the document.
#[derive(Debug)]
pub struct LanguageSpan {
    lang: String,
    content: ContentList,
}

impl LanguageSpan {
    /// Constructs an empty span in the language `lang`, e.g. `"de-DE"`.
    pub fn new<S: Into<String>>(lang: S) -> Self {
        Self {
            lang: lang.into(),
            content: ContentList::new(),
        }
    }

    /// Appends a text run or a node.
    pub fn push<C: Into<Content>>(&mut self, content: C) {
        self.content.push(content.into());
    }

    /// Returns the content appended so far.
    pub fn content(&self) -> &ContentList {
        &self.content
    }

    /// Returns the language tag.
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl MarkupNode for LanguageSpan {
    fn render_into(&self, out: &mut String) {
        Element::new("lang").attr("xml:lang", &self.lang).write_content(&self.content, out)
    }
}

/// Emphasized text.
///
/// Without a level the attribute is omitted and engines apply `moderate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emphasis {
    text: String,
    level: Option<EmphasisLevel>,
}

impl Emphasis {
    /// Constructs an emphasis without an explicit level.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            level: None,
        }
    }

    /// Sets the level.
    pub fn with_level(mut self, level: EmphasisLevel) -> Self {
        self.level = Some(level);
        self
    }
}

impl From<&str> for Emphasis {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Emphasis {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl MarkupNode for Emphasis {
    fn render_into(&self, out: &mut String) {
        Element::new("emphasis")
            .opt_attr("level", self.level.as_ref().map(EmphasisLevel::as_str))
            .write_text(&self.text, out)
    }
}

/// Text with modified pitch, contour, range, rate, or volume.
///
/// The values are written as given, e.g. `"+10%"`, `"x-loud"`, `"1.2"`, or `"-2st"`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Prosody {
    text: String,
    pitch: Option<String>,
    contour: Option<String>,
    range: Option<String>,
    rate: Option<String>,
    volume: Option<String>,
}

impl Prosody {
    /// Constructs a prosody element that changes nothing until one of the `with_*` methods is
    /// called.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Sets the baseline pitch, e.g. `"+5%"` or `"high"`.
    pub fn with_pitch<S: Into<String>>(mut self, pitch: S) -> Self {
        self.pitch = Some(pitch.into());
        self
    }

    /// Sets the pitch contour, e.g. `"(0%,+20Hz) (50%,-10Hz)"`.
    pub fn with_contour<S: Into<String>>(mut self, contour: S) -> Self {
        self.contour = Some(contour.into());
        self
    }

    /// Sets the pitch range, e.g. `"x-high"`.
    pub fn with_range<S: Into<String>>(mut self, range: S) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Sets the speaking rate, e.g. `"-20%"` or `"fast"`.
    pub fn with_rate<S: Into<String>>(mut self, rate: S) -> Self {
        self.rate = Some(rate.into());
        self
    }

    /// Sets the volume, e.g. `"loud"` or `"+10"`.
    pub fn with_volume<S: Into<String>>(mut self, volume: S) -> Self {
        self.volume = Some(volume.into());
        self
    }
}

impl MarkupNode for Prosody {
    fn render_into(&self, out: &mut String) {
        Element::new("prosody")
            .opt_attr("pitch", self.pitch.as_deref())
            .opt_attr("contour", self.contour.as_deref())
            .opt_attr("range", self.range.as_deref())
            .opt_attr("rate", self.rate.as_deref())
            .opt_attr("volume", self.volume.as_deref())
            .write_text(&self.text, out)
    }
}
