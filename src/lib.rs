#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A simplified builder for SSML documents, the markup that tells a speech synthesizer how to
//! render text: which voices to use, where to pause, how to pronounce words, and in what style.
//!
//! # Features
//!
//! The goal of this crate is to make it easy to assemble well-formed SSML in Rust, including the
//! Microsoft `mstts` extensions (speaking styles, silences, background audio, and so on). It does
//! not parse SSML, talk to any speech service, or check that an engine will accept the result.
//!
//! ## Building documents
//!
//! The [builder] module provides the fluent API. You start with a
//! [`SpeakBuilder`](builder::SpeakBuilder) for a given language, add one or more voice sections
//! to it, and fill each section with text, pauses, emphasis, pronunciation hints, and nested
//! paragraphs or sentences. Calling `build` renders the whole document, and can be repeated as
//! more content is added.
//!
//! ```
//! use ssml_lite::builder::SpeakBuilder;
//! use ssml_lite::node::{BackgroundAudio, InterpretAs, SayAs};
//!
//! let mut speak = SpeakBuilder::new("en-US");
//! speak.set_background_audio(BackgroundAudio::new("rain.mp3").with_volume("0.5"));
//! speak
//!     .add_voice("en-US-AvaNeural")
//!     .paragraph(|p| {
//!         p.sentence(|s| {
//!             s.text("Your order ships on ")
//!                 .say_as(SayAs::new("2024-05-01", InterpretAs::Date).with_format("ymd"))
//!                 .text(".");
//!         });
//!     })
//!     .pause("500ms")
//!     .text("Thanks & goodbye!");
//!
//! let xml = speak.build();
//! assert!(xml.contains("<mstts:backgroundaudio src=\"rain.mp3\" volume=\"0.5\"/>"));
//! assert!(xml.contains("Thanks &amp; goodbye!"));
//! assert!(ssml_lite::validate::is_well_formed(&xml));
//! ```
//!
//! ## Nodes
//!
//! Everything the builders append is a [`MarkupNode`](node::MarkupNode) from the [node]
//! module. Nodes can also be constructed directly, rendered on their own, or appended with the
//! builders' `node` method.
//!
//! # Escaping and Validation
//!
//! Free-form text is escaped with [`escape`] when rendered. Attribute values that are structural
//! (URLs, identifiers, tags, durations, transcriptions) are written verbatim, and malformed values
//! are not rejected. The [validate] module offers predicates for callers who want to check them
//! first.

use thiserror::Error;

pub mod builder;
mod escape;
pub mod node;
pub mod validate;

pub use escape::escape;

/// The error type returned by the builders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A voice builder that was not obtained from a document was asked to act on one.
    #[error("voice `{voice}` is not part of a document")]
    Detached {
        /// Name of the voice section.
        voice: String,
    },
    /// The document owning a voice builder has already been dropped.
    #[error("the document containing voice `{voice}` has been dropped")]
    DocumentDropped {
        /// Name of the voice section.
        voice: String,
    },
}

/// The type returned by fallible builder methods.
pub type Result<T> = std::result::Result<T, Error>;
