use quick_xml::escape::escape as escape_xml;

/// Escapes the five XML-reserved characters in free-form text.
///
/// The substitutions are `&` to `&amp;`, `<` to `&lt;`, `>` to `&gt;`, `"` to `&quot;`, and `'` to
/// `&apos;`. All other characters pass through unchanged.
///
/// This function is not idempotent: escaping `&amp;` yields `&amp;amp;`. Escape each raw value
/// exactly once.
///
/// ```
/// assert_eq!(ssml_lite::escape(r#"Hello & "world""#), "Hello &amp; &quot;world&quot;");
/// ```
pub fn escape(text: &str) -> String {
    escape_xml(text).into_owned()
}

pub(crate) fn escape_into(text: &str, out: &mut String) {
    out.push_str(&escape_xml(text));
}
