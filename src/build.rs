//! Rendering of records back into textual HSL(A) color functions.

use crate::error::FormatError;
use crate::ops::Channel;
use crate::record::{HslRecord, HUE_MAX, PERCENT_MAX};

/// Renders a record as an HSL(A) color string.
///
/// The natural defaults are `omit_alpha_when_opaque = true` and
/// `legacy = false`. With `omit_alpha_when_opaque` set, an effective alpha
/// of exactly `1` is left out of the output in both formats.
///
/// Modern output is `hsl(H S L)` or `hsl(H S L / A%)`, with the alpha
/// percentage rounded to one decimal and rendered without a trailing `.0`
/// (`50%`, `51.2%`). Legacy output is `hsl(H, S%, L%)` or
/// `hsl(H, S%, L%, A)` with the alpha printed to exactly 3 decimal places.
///
/// # Errors
///
/// [`FormatError::MissingChannels`] when the record lacks any of `hue`,
/// `sat`, `lum`; [`FormatError::InvalidValue`] when a channel is fractional
/// or out of range.
pub fn build_hsl_string(
    hsl: &HslRecord,
    omit_alpha_when_opaque: bool,
    legacy: bool,
) -> Result<String, FormatError> {
    let mut missing = Vec::new();
    if hsl.hue.is_none() {
        missing.push("hue");
    }
    if hsl.sat.is_none() {
        missing.push("sat");
    }
    if hsl.lum.is_none() {
        missing.push("lum");
    }
    if !missing.is_empty() {
        return Err(FormatError::MissingChannels(missing.join(", ")));
    }

    let hue = integral_channel(Channel::Hue, hsl.hue, HUE_MAX)?;
    let sat = integral_channel(Channel::Sat, hsl.sat, PERCENT_MAX)?;
    let lum = integral_channel(Channel::Lum, hsl.lum, PERCENT_MAX)?;

    let alpha = hsl.effective_alpha();
    if !(0.0..=1.0).contains(&alpha) {
        return Err(FormatError::InvalidValue {
            channel: Channel::Alpha,
            value: alpha,
        });
    }

    let omit_alpha = omit_alpha_when_opaque && alpha == 1.0;
    let out = match (legacy, omit_alpha) {
        (true, true) => format!("hsl({hue}, {sat}%, {lum}%)"),
        (true, false) => format!("hsl({hue}, {sat}%, {lum}%, {alpha:.3})"),
        (false, true) => format!("hsl({hue} {sat} {lum})"),
        (false, false) => format!("hsl({hue} {sat} {lum} / {}%)", alpha_percent(alpha)),
    };
    Ok(out)
}

fn integral_channel(channel: Channel, value: Option<f64>, max: f64) -> Result<i64, FormatError> {
    // Channels were checked for presence above.
    let value = value.unwrap_or(f64::NAN);
    if value.fract() == 0.0 && (0.0..=max).contains(&value) {
        Ok(value as i64)
    } else {
        Err(FormatError::InvalidValue { channel, value })
    }
}

/// Alpha as a percentage with at most one decimal digit: `0`, `50`, `51.2`.
fn alpha_percent(alpha: f64) -> String {
    let pct = (alpha * 1000.0).round() / 10.0;
    if pct.fract() == 0.0 {
        format!("{}", pct as i64)
    } else {
        format!("{pct:.1}")
    }
}
