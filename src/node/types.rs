use std::fmt::{self, Display};

use strum_macros::EnumString;

macro_rules! decl_tag {
    {$(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $tag:tt,)* }} => {
        $(#[$meta])*
        ///
        /// Parsing from a string is case-insensitive and never fails. Unknown tags are kept as
        /// `Custom`.
        #[derive(Debug, Hash, PartialEq, Eq, Clone, EnumString)]
        #[strum(ascii_case_insensitive)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[strum(serialize = $tag)]
                $variant,
            )*
            /// A tag outside the predefined set. It is written to the markup verbatim.
            #[strum(default)]
            Custom(String),
        }

        impl $name {
            /// Returns the tag exactly as it is written to the markup.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)*
                    Self::Custom(s) => s.as_str(),
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

decl_tag! {
    /// Relative duration of a pause, used when no explicit time is given.
    BreakStrength {
        /// Same as `weak` on most engines.
        XWeak => "x-weak",
        #[allow(missing_docs)]
        Weak => "weak",
        /// The default strength.
        Medium => "medium",
        #[allow(missing_docs)]
        Strong => "strong",
        #[allow(missing_docs)]
        XStrong => "x-strong",
    }
}

decl_tag! {
    /// Where a silence is inserted relative to the surrounding text.
    SilenceType {
        /// Extra silence at the beginning of the text.
        Leading => "Leading",
        /// Silence at the beginning of the text, replacing the natural one.
        LeadingExact => "Leading-exact",
        /// Extra silence at the end of the text.
        Tailing => "Tailing",
        /// Silence at the end of the text, replacing the natural one.
        TailingExact => "Tailing-exact",
        /// Extra silence between adjacent sentences.
        SentenceBoundary => "Sentenceboundary",
        /// Silence between adjacent sentences, replacing the natural one.
        SentenceBoundaryExact => "Sentenceboundary-exact",
        /// Silence at commas.
        CommaExact => "Comma-exact",
        /// Silence at semicolons.
        SemicolonExact => "Semicolon-exact",
        /// Silence at enumeration commas.
        EnumerationCommaExact => "Enumerationcomma-exact",
    }
}

decl_tag! {
    /// Phonetic alphabet of a phoneme transcription.
    PhonemeAlphabet {
        /// International Phonetic Alphabet.
        Ipa => "ipa",
        /// SAPI phone set.
        Sapi => "sapi",
        /// Universal Phone Set.
        Ups => "ups",
    }
}

decl_tag! {
    /// Provides a hint about how to pronounce the associated content.
    InterpretAs {
        /// A postal address.
        Address => "address",
        /// A cardinal number, e.g. "1024" as "one thousand twenty-four".
        Cardinal => "cardinal",
        /// Spell out individual characters.
        Characters => "characters",
        /// A date; the format is given by the `format` attribute.
        Date => "date",
        /// Read a number digit by digit.
        Digits => "digits",
        /// A fraction, e.g. "3/8" as "three eighths".
        Fraction => "fraction",
        /// A person's name.
        Name => "name",
        /// A number, read as a cardinal.
        Number => "number",
        /// An ordinal number, e.g. "3rd" as "third".
        Ordinal => "ordinal",
        /// Spell out individual letters.
        SpellOut => "spell-out",
        /// A telephone number.
        Telephone => "telephone",
        /// A time of day.
        Time => "time",
    }
}

decl_tag! {
    /// Strength of emphasis. Engines treat an absent level as `moderate`.
    EmphasisLevel {
        #[allow(missing_docs)]
        Reduced => "reduced",
        #[allow(missing_docs)]
        Moderate => "moderate",
        #[allow(missing_docs)]
        Strong => "strong",
    }
}

decl_tag! {
    /// Speaking style of an expressed segment. Support varies by voice.
    #[allow(missing_docs)]
    ExpressStyle {
        AdvertisementUpbeat => "advertisement_upbeat",
        Affectionate => "affectionate",
        Angry => "angry",
        Assistant => "assistant",
        Calm => "calm",
        Chat => "chat",
        Cheerful => "cheerful",
        CustomerService => "customerservice",
        Depressed => "depressed",
        Disgruntled => "disgruntled",
        DocumentaryNarration => "documentary-narration",
        Embarrassed => "embarrassed",
        Empathetic => "empathetic",
        Envious => "envious",
        Excited => "excited",
        Fearful => "fearful",
        Friendly => "friendly",
        Gentle => "gentle",
        Hopeful => "hopeful",
        Lyrical => "lyrical",
        NarrationProfessional => "narration-professional",
        NarrationRelaxed => "narration-relaxed",
        Newscast => "newscast",
        NewscastCasual => "newscast-casual",
        NewscastFormal => "newscast-formal",
        PoetryReading => "poetry-reading",
        Sad => "sad",
        Serious => "serious",
        Shouting => "shouting",
        SportsCommentary => "sports_commentary",
        SportsCommentaryExcited => "sports_commentary_excited",
        Terrified => "terrified",
        Unfriendly => "unfriendly",
        Whispering => "whispering",
    }
}

decl_tag! {
    /// Age and gender a voice imitates while keeping its own timbre.
    #[allow(missing_docs)]
    ExpressRole {
        Girl => "Girl",
        Boy => "Boy",
        YoungAdultFemale => "YoungAdultFemale",
        YoungAdultMale => "YoungAdultMale",
        OlderAdultFemale => "OlderAdultFemale",
        OlderAdultMale => "OlderAdultMale",
        SeniorFemale => "SeniorFemale",
        SeniorMale => "SeniorMale",
    }
}

decl_tag! {
    /// Audio post-processing applied to a voice.
    VoiceEffect {
        /// Optimized for car speakers.
        EqCar => "eq_car",
        /// Optimized for narrowband telephony.
        EqTelecomhp8k => "eq_telecomhp8k",
    }
}
