//! Parsing of textual HSL(A) color functions.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;
use crate::ops::Channel;
use crate::record::{round3, HslRecord, HUE_MAX, PERCENT_MAX};

// Comma-separated body: `hsl(H[deg], S%, L%[, A])`. The alpha literal is a
// fraction in [0, 1]; integer forms other than 0 and 1 do not match.
static LEGACY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsla?\(\s*(\d+)(?:deg)?\s*,\s*(\d+)%?\s*,\s*(\d+)%?(?:\s*,\s*(0|1|0?\.\d+))?\s*\)$")
        .expect("valid regex")
});

// Space-separated body: `hsl(H[deg] S% L% [/ A%])`. The alpha is an integer
// percentage.
static MODERN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsla?\(\s*(\d+)(?:deg)?\s*(\d+)%?\s*(\d+)%?\s*(?:/\s*(\d+)%?)?\s*\)$")
        .expect("valid regex")
});

/// Parses an HSL(A) color string in either the legacy (comma-separated) or
/// modern (space-separated) syntax. The function name may be `hsl` or
/// `hsla`, case-insensitive.
///
/// Supported forms:
/// - Legacy: `hsl(120, 100%, 50%)`, `hsla(120, 100%, 50%, 0.5)`
/// - Modern: `hsl(120 100% 50%)`, `hsl(120 100% 50% / 50%)`
///
/// A string containing a comma is parsed as legacy, anything else as modern.
/// An absent alpha means fully opaque. The returned alpha is rounded to 3
/// decimal places and always explicit.
///
/// # Errors
///
/// [`ParseError::BadFormat`] when the string matches neither grammar, and
/// [`ParseError::OutOfRange`] when a matched value lies outside its semantic
/// range.
pub fn parse_hsl_string(text: &str) -> Result<HslRecord, ParseError> {
    let legacy = text.contains(',');
    let re = if legacy { &LEGACY_RE } else { &MODERN_RE };
    let caps = re
        .captures(text)
        .ok_or_else(|| ParseError::BadFormat(text.to_string()))?;

    let hue = matched_number(&caps[1]);
    let sat = matched_number(&caps[2]);
    let lum = matched_number(&caps[3]);
    let mut alpha = caps
        .get(4)
        .map(|m| matched_number(m.as_str()))
        .unwrap_or(if legacy { 1.0 } else { 100.0 });
    if !legacy {
        alpha /= 100.0;
    }

    check_range(Channel::Hue, hue, HUE_MAX)?;
    check_range(Channel::Sat, sat, PERCENT_MAX)?;
    check_range(Channel::Lum, lum, PERCENT_MAX)?;
    check_range(Channel::Alpha, alpha, 1.0)?;

    Ok(HslRecord {
        hue: Some(hue),
        sat: Some(sat),
        lum: Some(lum),
        alpha: Some(round3(alpha)),
    })
}

impl FromStr for HslRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hsl_string(s)
    }
}

// The grammars only capture digit runs and fraction literals, which the f64
// parser always accepts; absurdly long digit runs saturate to infinity and
// fail the range check.
fn matched_number(s: &str) -> f64 {
    s.parse().unwrap_or(f64::INFINITY)
}

fn check_range(channel: Channel, value: f64, max: f64) -> Result<(), ParseError> {
    if (0.0..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParseError::OutOfRange { channel, value })
    }
}
