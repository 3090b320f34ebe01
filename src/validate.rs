//! Opt-in checks for attribute values and rendered documents.
//!
//! The builders never call these. They exist for callers who want to reject malformed values
//! before putting them into a document.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use xml::reader::EventReader;

static DURATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d+)?(ms|s)$").expect("failed to compile DURATION_REGEX")
});

static VOLUME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(silent|x-soft|soft|medium|loud|x-loud|default|[+-]?\d+(\.\d+)?%?)$")
        .expect("failed to compile VOLUME_REGEX")
});

static RATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(x-slow|slow|medium|fast|x-fast|default|[+-]?\d+(\.\d+)?%|\d+(\.\d+)?)$")
        .expect("failed to compile RATE_REGEX")
});

static PITCH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(x-low|low|medium|high|x-high|default|\d+(\.\d+)?Hz|[+-]\d+(\.\d+)?(Hz|st|%))$")
        .expect("failed to compile PITCH_REGEX")
});

static LANGUAGE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$")
        .expect("failed to compile LANGUAGE_TAG_REGEX")
});

/// Checks a duration such as `"500ms"`, `"2s"`, or `"1.5s"`.
pub fn is_duration(value: &str) -> bool {
    DURATION_REGEX.is_match(value)
}

/// Checks a prosody volume: a named level (`"x-soft"` to `"x-loud"`, `"silent"`, `"default"`),
/// an absolute number, or a relative change such as `"+10"` or `"-20%"`.
pub fn is_volume(value: &str) -> bool {
    VOLUME_REGEX.is_match(value)
}

/// Checks a prosody rate: a named speed (`"x-slow"` to `"x-fast"`, `"default"`), a multiplier such
/// as `"1.5"`, or a relative change such as `"+30%"`.
pub fn is_rate(value: &str) -> bool {
    RATE_REGEX.is_match(value)
}

/// Checks a prosody pitch: a named level (`"x-low"` to `"x-high"`, `"default"`), an absolute
/// frequency such as `"600Hz"`, or a relative change such as `"+80Hz"`, `"-2st"`, or `"+10%"`.
pub fn is_pitch(value: &str) -> bool {
    PITCH_REGEX.is_match(value)
}

/// Checks an express-as style degree, a number from 0.01 to 2.
pub fn is_style_degree(value: &str) -> bool {
    in_range(value, 0.01, 2.0)
}

/// Checks a background audio volume, a number from 0 to 1.
pub fn is_background_volume(value: &str) -> bool {
    in_range(value, 0.0, 1.0)
}

/// Checks a background audio fade duration, a whole number of milliseconds from 0 to 10000.
pub fn is_fade_millis(value: &str) -> bool {
    matches!(value.parse::<u32>(), Ok(millis) if millis <= 10_000)
}

/// Checks the shape of a language tag such as `"en-US"` or `"zh-Hans-CN"`.
pub fn is_language_tag(value: &str) -> bool {
    LANGUAGE_TAG_REGEX.is_match(value)
}

/// Checks that a rendered document parses as XML, including its namespace prefixes.
///
/// Fragments that use the `mstts:` prefix are not well-formed on their own; check complete
/// documents.
pub fn is_well_formed(xml: &str) -> bool {
    EventReader::from_str(xml).into_iter().all(|event| event.is_ok())
}

/// Formats a duration as whole milliseconds, e.g. `"1500ms"`.
pub fn format_duration(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

fn in_range(value: &str, min: f64, max: f64) -> bool {
    matches!(value.parse::<f64>(), Ok(v) if (min..=max).contains(&v))
}
