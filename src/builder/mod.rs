//! Fluent builders that assemble a document.
//!
//! A [`SpeakBuilder`] owns the document. Each call to
//! [`add_voice`](SpeakBuilder::add_voice) registers a voice section and returns a
//! [`VoiceBuilder`] that appends to it. Paragraphs, sentences, and language spans are filled in by
//! callbacks that receive a fresh [`ParagraphBuilder`], [`SentenceBuilder`], or [`LangBuilder`];
//! the callback runs to completion before the finished element is appended.

macro_rules! inline_methods {
    () => {
        /// Appends text to pronounce. The text is escaped when rendered.
        pub fn text<S: Into<String>>(&mut self, text: S) -> &mut Self {
            self.push_content($crate::node::Content::Text(text.into()))
        }

        /// Appends a pause, given as a [`Pause`](crate::node::Pause), a
        /// [`BreakStrength`](crate::node::BreakStrength), a time string such as `"750ms"`, or a
        /// [`Duration`](std::time::Duration).
        pub fn pause<P: Into<$crate::node::Pause>>(&mut self, pause: P) -> &mut Self {
            self.node(pause.into())
        }

        /// Appends emphasized text, given as a string or a configured
        /// [`Emphasis`](crate::node::Emphasis).
        pub fn emphasis<E: Into<$crate::node::Emphasis>>(&mut self, emphasis: E) -> &mut Self {
            self.node(emphasis.into())
        }

        /// Appends text with modified prosody.
        pub fn prosody(&mut self, prosody: $crate::node::Prosody) -> &mut Self {
            self.node(prosody)
        }

        /// Appends text along with a hint on how to interpret it.
        pub fn say_as(&mut self, say_as: $crate::node::SayAs) -> &mut Self {
            self.node(say_as)
        }

        /// Appends a bookmark.
        pub fn bookmark<S: Into<String>>(&mut self, mark: S) -> &mut Self {
            self.node($crate::node::Bookmark::new(mark))
        }

        /// Appends a prerecorded audio clip, given as a source URL or a configured
        /// [`AudioRef`](crate::node::AudioRef).
        pub fn audio<A: Into<$crate::node::AudioRef>>(&mut self, audio: A) -> &mut Self {
            self.node(audio.into())
        }

        /// Appends `original`, to be spoken as `alias`.
        pub fn substitute<S: Into<String>, A: Into<String>>(
            &mut self,
            original: S,
            alias: A,
        ) -> &mut Self {
            self.node($crate::node::Substitute::new(original, alias))
        }

        /// Appends `text`, to be pronounced as the transcription `ph`.
        pub fn phoneme<S: Into<String>, P: Into<String>>(
            &mut self,
            text: S,
            alphabet: $crate::node::PhonemeAlphabet,
            ph: P,
        ) -> &mut Self {
            self.node($crate::node::Phoneme::new(text, alphabet, ph))
        }

        /// Appends a span in another language, filled in by `f`.
        pub fn lang<S, F>(&mut self, lang: S, f: F) -> &mut Self
        where
            S: Into<String>,
            F: FnOnce(&mut $crate::builder::LangBuilder),
        {
            let mut scope = $crate::builder::LangBuilder::new(lang);
            f(&mut scope);
            self.node(scope.into_node())
        }

        /// Appends any node.
        pub fn node<N: $crate::node::MarkupNode + 'static>(&mut self, node: N) -> &mut Self {
            self.push_content($crate::node::Content::node(node))
        }
    };
}

macro_rules! sentence_method {
    () => {
        /// Appends a sentence, filled in by `f`.
        pub fn sentence<F: FnOnce(&mut $crate::builder::SentenceBuilder)>(
            &mut self,
            f: F,
        ) -> &mut Self {
            let mut scope = $crate::builder::SentenceBuilder::new();
            f(&mut scope);
            self.node(scope.into_node())
        }
    };
}

macro_rules! paragraph_method {
    () => {
        /// Appends a paragraph, filled in by `f`.
        pub fn paragraph<F: FnOnce(&mut $crate::builder::ParagraphBuilder)>(
            &mut self,
            f: F,
        ) -> &mut Self {
            let mut scope = $crate::builder::ParagraphBuilder::new();
            f(&mut scope);
            self.node(scope.into_node())
        }
    };
}

macro_rules! impl_text_write {
    ($name:ty) => {
        impl std::fmt::Write for $name {
            fn write_str(&mut self, s: &str) -> std::fmt::Result {
                self.text(s);
                Ok(())
            }
        }
    };
}

mod scope;
mod speak;
mod voice;

pub use scope::{LangBuilder, ParagraphBuilder, SentenceBuilder};
pub use speak::{SpeakBuilder, SpeakConfig, MSTTS_NAMESPACE, SSML_NAMESPACE, SSML_VERSION};
pub use voice::VoiceBuilder;
