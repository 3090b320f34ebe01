use std::fmt::Write;

use ssml_lite::builder::{SpeakBuilder, SpeakConfig, VoiceBuilder};
use ssml_lite::node::{
    AudioRef, BackgroundAudio, BreakStrength, Emphasis, EmphasisLevel, ExpressAs, ExpressRole,
    ExpressStyle, InterpretAs, PhonemeAlphabet, Prosody, SayAs, SilenceType,
    VoiceEffect,
};
use ssml_lite::{validate, Error};

const HEAD: &str = r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" xmlns:mstts="https://www.w3.org/2001/mstts" xml:lang="en-US">"#;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn document(children: &[&str]) -> String {
    let mut xml = HEAD.to_string();
    for child in children {
        xml.push_str("\n  ");
        xml.push_str(child);
    }
    xml.push_str("\n</speak>");
    xml
}

#[test]
fn test_hello_world() {
    init_logging();
    let mut speak = SpeakBuilder::new("en-US");
    speak.add_voice("en-US-AvaNeural").text("Hello, world!");

    assert_eq!(
        speak.build(),
        document(&[r#"<voice name="en-US-AvaNeural">Hello, world!</voice>"#])
    );
}

#[test]
fn test_empty_document() {
    let speak = SpeakBuilder::new("en-US");
    assert_eq!(speak.build(), format!("{}\n</speak>", HEAD));
    assert_eq!(speak.voice_count(), 0);
}

#[test]
fn test_text_is_escaped() {
    let mut speak = SpeakBuilder::new("en-US");
    speak.add_voice("Ava").text(r#"Hello & "world""#);

    assert_eq!(
        speak.build(),
        document(&[r#"<voice name="Ava">Hello &amp; &quot;world&quot;</voice>"#])
    );
}

#[test]
fn test_voices_render_in_registration_order() {
    let mut speak = SpeakBuilder::new("en-US");
    speak.add_voice("Ava").text("First.");
    speak.add_voice("Andrew").text("Second.");

    let xml = speak.build();
    assert_eq!(
        xml,
        document(&[
            r#"<voice name="Ava">First.</voice>"#,
            r#"<voice name="Andrew">Second.</voice>"#,
        ])
    );
    assert_eq!(xml.matches("<voice name=\"Ava\">").count(), 1);
    assert_eq!(xml.matches("<voice name=\"Andrew\">").count(), 1);
    assert_eq!(speak.voice_count(), 2);
}

#[test]
fn test_voice_effect() {
    let mut speak = SpeakBuilder::new("en-US");
    speak.add_voice_with_effect("Ava", VoiceEffect::EqCar).text("Drive safe.");

    assert_eq!(
        speak.build(),
        document(&[r#"<voice name="Ava" effect="eq_car">Drive safe.</voice>"#])
    );
}

#[test]
fn test_directives_come_first_and_last_write_wins() {
    init_logging();
    let mut speak = SpeakBuilder::new("en-US");
    speak.add_voice("Ava").text("Hi");
    speak
        .set_background_audio(BackgroundAudio::new("first.mp3"))
        .set_voice_conversion("https://example.com/one")
        .set_background_audio(BackgroundAudio::new("second.mp3").with_volume("0.5"))
        .set_voice_conversion("https://example.com/two");

    let xml = speak.build();
    assert_eq!(
        xml,
        document(&[
            r#"<mstts:backgroundaudio src="second.mp3" volume="0.5"/>"#,
            r#"<mstts:voiceconversion url="https://example.com/two"/>"#,
            r#"<voice name="Ava">Hi</voice>"#,
        ])
    );
    assert!(!xml.contains("first.mp3"));
    assert!(!xml.contains("https://example.com/one"));
}

#[test]
fn test_build_is_repeatable() {
    let mut speak = SpeakBuilder::new("en-US");
    let mut voice = speak.add_voice("Ava");
    voice.text("One.");

    let first = speak.build();
    assert_eq!(first, speak.build());
    assert_eq!(first, voice.build().unwrap());

    voice.text(" Two.");
    let second = speak.build();
    assert_ne!(first, second);
    assert!(second.contains("One. Two."));
}

#[test]
fn test_config_overrides() {
    let config = SpeakConfig::new("de-DE")
        .with_version("1.1")
        .with_xmlns("urn:synthesis")
        .with_mstts_xmlns("urn:mstts");
    let speak = SpeakBuilder::with_config(config.clone());

    assert_eq!(speak.config(), config);
    assert_eq!(
        speak.build(),
        "<speak version=\"1.1\" xmlns=\"urn:synthesis\" xmlns:mstts=\"urn:mstts\" \
         xml:lang=\"de-DE\">\n</speak>"
    );
}

#[test]
fn test_attached_voice_builds_whole_document() {
    let mut speak = SpeakBuilder::new("en-US");
    let mut ava = speak.add_voice("Ava");
    ava.text("Hi.");
    speak.add_voice("Andrew").text("Hello.");

    assert_eq!(ava.build().unwrap(), speak.build());
    assert!(ava.build().unwrap().contains("<voice name=\"Andrew\">Hello.</voice>"));
}

#[test]
fn test_switch_voice_adds_sibling_section() {
    let mut speak = SpeakBuilder::new("en-US");
    let xml = speak
        .add_voice("Ava")
        .text("Question?")
        .switch_voice("Andrew")
        .unwrap()
        .text("Answer.")
        .switch_voice_with_effect("Emma", VoiceEffect::EqTelecomhp8k)
        .unwrap()
        .text("Call me.")
        .build()
        .unwrap();

    assert_eq!(
        xml,
        document(&[
            r#"<voice name="Ava">Question?</voice>"#,
            r#"<voice name="Andrew">Answer.</voice>"#,
            r#"<voice name="Emma" effect="eq_telecomhp8k">Call me.</voice>"#,
        ])
    );
    assert_eq!(speak.voice_count(), 3);
}

#[test]
fn test_standalone_voice_fails_to_build_or_switch() {
    init_logging();
    let mut voice = VoiceBuilder::new("Ava");
    voice.text("Alone.");

    assert_eq!(
        voice.build(),
        Err(Error::Detached {
            voice: "Ava".to_string()
        })
    );
    assert!(matches!(voice.switch_voice("Andrew"), Err(Error::Detached { .. })));
    assert_eq!(voice.render(), r#"<voice name="Ava">Alone.</voice>"#);

    let effected = VoiceBuilder::with_effect("Ava", VoiceEffect::EqCar);
    assert_eq!(effected.render(), r#"<voice name="Ava" effect="eq_car"></voice>"#);
}

#[test]
fn test_voice_outliving_document_fails_to_build() {
    let mut speak = SpeakBuilder::new("en-US");
    let voice = speak.add_voice("Ava");
    drop(speak);

    assert!(matches!(voice.build(), Err(Error::DocumentDropped { .. })));
    assert!(matches!(voice.switch_voice("Andrew"), Err(Error::DocumentDropped { .. })));
    assert_eq!(
        voice.build().unwrap_err().to_string(),
        "the document containing voice `Ava` has been dropped"
    );
}

#[test]
fn test_voice_methods() {
    let mut voice = VoiceBuilder::new("Ava");
    voice
        .text("a")
        .pause(BreakStrength::Strong)
        .silence(SilenceType::Leading, "100ms")
        .emphasis(Emphasis::new("b").with_level(EmphasisLevel::Reduced))
        .prosody(Prosody::new("c").with_rate("slow"))
        .say_as(SayAs::new("3", InterpretAs::Ordinal))
        .bookmark("m")
        .audio(AudioRef::new("d.wav").with_fallback("d"))
        .substitute("e", "ee")
        .phoneme("f", PhonemeAlphabet::Sapi, "f ah")
        .express_as(ExpressAs::new("g", ExpressStyle::Sad).with_role(ExpressRole::Boy))
        .lexicon("lex.xml")
        .math("<mn>1</mn>")
        .audio_duration("5s")
        .speaker_embedding("p1", "h")
        .viseme("FacialExpression");

    assert_eq!(
        voice.render(),
        concat!(
            r#"<voice name="Ava">a<break strength="strong"/>"#,
            r#"<mstts:silence type="Leading" value="100ms"/>"#,
            r#"<emphasis level="reduced">b</emphasis>"#,
            r#"<prosody rate="slow">c</prosody>"#,
            r#"<say-as interpret-as="ordinal">3</say-as>"#,
            r#"<bookmark mark="m"/>"#,
            r#"<audio src="d.wav">d</audio>"#,
            r#"<sub alias="ee">e</sub>"#,
            r#"<phoneme alphabet="sapi" ph="f ah">f</phoneme>"#,
            r#"<mstts:express-as style="sad" role="Boy">g</mstts:express-as>"#,
            r#"<lexicon uri="lex.xml"/>"#,
            r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mn>1</mn></math>"#,
            r#"<mstts:audioduration value="5s"/>"#,
            r#"<mstts:ttsembedding speakerProfileId="p1">h</mstts:ttsembedding>"#,
            r#"<mstts:viseme type="FacialExpression"/>"#,
            "</voice>"
        )
    );
}

#[test]
fn test_nested_scopes() {
    let mut voice = VoiceBuilder::new("Ava");
    voice
        .paragraph(|p| {
            p.text("Intro.").sentence(|s| {
                s.text("One").pause("250ms").emphasis("two");
            });
        })
        .lang("fr-FR", |l| {
            l.sentence(|s| {
                s.text("Bonjour");
            })
            .paragraph(|p| {
                p.substitute("Mme", "Madame");
            });
        })
        .sentence(|s| {
            s.lang("de-DE", |l| {
                l.text("Tschüss");
            });
        });

    assert_eq!(
        voice.render(),
        concat!(
            r#"<voice name="Ava">"#,
            r#"<p>Intro.<s>One<break time="250ms"/><emphasis>two</emphasis></s></p>"#,
            r#"<lang xml:lang="fr-FR"><s>Bonjour</s><p><sub alias="Madame">Mme</sub></p></lang>"#,
            r#"<s><lang xml:lang="de-DE">Tschüss</lang></s>"#,
            "</voice>"
        )
    );
}

#[test]
fn test_callbacks_run_before_method_returns() {
    let mut calls = Vec::new();
    let mut voice = VoiceBuilder::new("Ava");
    voice
        .paragraph(|p| {
            calls.push("paragraph");
            p.text("x");
        })
        .sentence(|_| calls.push("sentence"));
    calls.push("after");

    assert_eq!(calls, ["paragraph", "sentence", "after"]);
    assert_eq!(voice.render(), r#"<voice name="Ava"><p>x</p><s></s></voice>"#);
}

#[test]
fn test_write_appends_text() {
    let mut voice = VoiceBuilder::new("Ava");
    write!(voice, "{} < {}", 1, 2).unwrap();
    voice.paragraph(|p| {
        write!(p, "it's {}", "fine").unwrap();
    });

    assert_eq!(
        voice.render(),
        r#"<voice name="Ava">1 &lt; 2<p>it&apos;s fine</p></voice>"#
    );
}

#[test]
fn test_display_matches_build() {
    let mut speak = SpeakBuilder::new("en-US");
    speak.add_voice("Ava").text("Hi");

    assert_eq!(speak.to_string(), speak.build());
    assert_eq!(String::from(&speak), speak.build());
}

#[test]
fn test_each_section_renders_once() {
    let mut speak = SpeakBuilder::new("en-US");
    let mut first = speak.add_voice("Ava");
    let mut second = first.switch_voice("Andrew").unwrap();
    first.text("One.");
    second.text("Two.");
    first.pause(BreakStrength::Weak);

    let xml = speak.build();
    assert_eq!(xml.matches("<voice ").count(), 2);
    assert_eq!(
        xml,
        document(&[
            r#"<voice name="Ava">One.<break strength="weak"/></voice>"#,
            r#"<voice name="Andrew">Two.</voice>"#,
        ])
    );
    assert_eq!(second.to_string(), second.render());
}

#[test]
fn test_rich_document_is_well_formed() {
    let mut speak = SpeakBuilder::new("en-US");
    speak.set_background_audio(
        BackgroundAudio::new("https://example.com/bg.mp3")
            .with_volume("0.3")
            .with_fadein("1000"),
    );
    speak
        .add_voice("Ava")
        .express_as(
            ExpressAs::new("Tom & Jerry's <show>", ExpressStyle::Excited).with_degree("2"),
        )
        .silence(SilenceType::CommaExact, "50ms")
        .paragraph(|p| {
            p.say_as(SayAs::new("555-1234", InterpretAs::Telephone))
                .audio("https://example.com/ding.wav");
        })
        .math("<mi>x</mi><mo>+</mo><mn>1</mn>")
        .switch_voice("Andrew")
        .unwrap()
        .lang("es-ES", |l| {
            l.text("¡Hola!");
        });

    assert!(validate::is_well_formed(&speak.build()));
}
