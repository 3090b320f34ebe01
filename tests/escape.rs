use ssml_lite::escape;
use xml::reader::{EventReader, XmlEvent};

#[test]
fn test_escapes_reserved_characters() {
    assert_eq!(escape("&"), "&amp;");
    assert_eq!(escape("<"), "&lt;");
    assert_eq!(escape(">"), "&gt;");
    assert_eq!(escape("\""), "&quot;");
    assert_eq!(escape("'"), "&apos;");
    assert_eq!(escape(r#"Hello & "world""#), "Hello &amp; &quot;world&quot;");
    assert_eq!(escape("<b>it's</b>"), "&lt;b&gt;it&apos;s&lt;/b&gt;");
}

#[test]
fn test_leaves_other_characters_alone() {
    assert_eq!(escape(""), "");
    assert_eq!(escape("plain text"), "plain text");
    assert_eq!(escape("Grüße, 世界 🎉\n\t"), "Grüße, 世界 🎉\n\t");
    assert_eq!(escape("#;=/\\"), "#;=/\\");
}

#[test]
fn test_entities_are_not_escaped_again_in_one_pass() {
    assert_eq!(escape("a<b"), "a&lt;b");
    assert_eq!(escape("&<>"), "&amp;&lt;&gt;");
}

#[test]
fn test_escaping_twice_double_escapes() {
    let once = escape("Tom & Jerry");
    assert_eq!(once, "Tom &amp; Jerry");
    assert_eq!(escape(&once), "Tom &amp;amp; Jerry");
}

#[test]
fn test_escaped_text_has_no_bare_reserved_characters() {
    let samples = [
        "&&&",
        "<<>>",
        r#""''""#,
        "x & y < z > w \" v ' u",
        "&amp; is already an entity",
        "' or 1=1; --",
    ];
    for sample in samples {
        let escaped = escape(sample);
        assert!(!escaped.contains(['<', '>', '"', '\'']), "{}", escaped);
        for (pos, _) in escaped.match_indices('&') {
            let rest = &escaped[pos..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]
                    .iter()
                    .any(|entity| rest.starts_with(entity)),
                "bare ampersand in {}",
                escaped
            );
        }
    }
}

#[test]
fn test_escaped_text_decodes_back() {
    let samples = [
        "Hello & \"world\"",
        "<script>alert('x')</script>",
        "a && b || c > d",
        "it's 5 < 6",
        "&lt; stays literal",
    ];
    for sample in samples {
        assert_eq!(decode(&escape(sample)), sample);
    }
}

fn decode(escaped: &str) -> String {
    let xml = format!("<t>{}</t>", escaped);
    let mut text = String::new();
    for event in EventReader::from_str(&xml) {
        match event.unwrap() {
            XmlEvent::Characters(s) | XmlEvent::Whitespace(s) => text.push_str(&s),
            _ => {}
        }
    }
    text
}

#[test]
fn test_matches_quick_xml_escape() {
    let samples = [
        r#"Hello & "world""#,
        "<a href='x'>&amp;</a>",
        "",
        "plain ü 世界\n",
    ];
    for sample in samples {
        assert_eq!(escape(sample), quick_xml::escape::escape(sample).into_owned());
    }
}
