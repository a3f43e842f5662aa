//! The HSL(A) component record and its shape/range normalization.

use crate::error::ShapeError;

/// Inclusive ceiling of the hue channel, in degrees.
pub const HUE_MAX: f64 = 360.0;
/// Inclusive ceiling of the saturation and lightness channels, in percent.
pub const PERCENT_MAX: f64 = 100.0;

/// An HSL(A) color as loose numeric components.
///
/// Channels are optional so that un-normalized records can be represented:
/// a record fresh from a caller may lack channels, hold fractional values,
/// or sit outside the semantic ranges until it passes through [`hsl_clamp`].
/// An absent `alpha` means fully opaque.
///
/// Records are plain values. No operation in this crate mutates one in
/// place; every transformation returns a new record.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslRecord {
    /// Hue in degrees, `[0, 360]`.
    pub hue: Option<f64>,
    /// Saturation in percent, `[0, 100]`.
    pub sat: Option<f64>,
    /// Lightness in percent, `[0, 100]`.
    pub lum: Option<f64>,
    /// Opacity fraction, `[0, 1]`. `None` is treated as `1`.
    pub alpha: Option<f64>,
}

impl HslRecord {
    /// Creates a record with no explicit alpha.
    pub const fn new(hue: i32, sat: i32, lum: i32) -> Self {
        Self {
            hue: Some(hue as f64),
            sat: Some(sat as f64),
            lum: Some(lum as f64),
            alpha: None,
        }
    }

    /// Creates a record with an explicit alpha.
    pub const fn with_alpha(hue: i32, sat: i32, lum: i32, alpha: f64) -> Self {
        Self {
            hue: Some(hue as f64),
            sat: Some(sat as f64),
            lum: Some(lum as f64),
            alpha: Some(alpha),
        }
    }

    /// The alpha used for arithmetic and formatting: the stored value, or
    /// `1` when the channel is absent.
    pub fn effective_alpha(&self) -> f64 {
        self.alpha.unwrap_or(1.0)
    }

    /// See [`is_hsl_shaped`].
    pub fn is_shaped(&self) -> bool {
        is_hsl_shaped(self)
    }

    /// See [`is_valid_hsl_record`].
    pub fn is_valid(&self) -> bool {
        is_valid_hsl_record(self)
    }
}

/// Structural check: `true` iff the `hue`, `sat`, and `lum` channels are all
/// present. Ranges are not inspected.
pub fn is_hsl_shaped(hsl: &HslRecord) -> bool {
    hsl.hue.is_some() && hsl.sat.is_some() && hsl.lum.is_some()
}

/// `true` iff the record is shaped and every channel, after integer coercion
/// of `hue`/`sat`/`lum` and defaulting an absent `alpha` to `1`, lies within
/// its semantic range.
pub fn is_valid_hsl_record(hsl: &HslRecord) -> bool {
    let (Some(hue), Some(sat), Some(lum)) = (hsl.hue, hsl.sat, hsl.lum) else {
        return false;
    };
    in_range(hue.trunc(), HUE_MAX)
        && in_range(sat.trunc(), PERCENT_MAX)
        && in_range(lum.trunc(), PERCENT_MAX)
        && in_range(hsl.effective_alpha(), 1.0)
}

/// Normalizes a record into the semantic ranges.
///
/// `hue`, `sat`, and `lum` are coerced to integers (truncating) and clamped
/// into `[0, 360]` / `[0, 100]` / `[0, 100]`. A present `alpha` is rounded
/// to 3 decimal places and clamped into `[0, 1]`; an absent `alpha` stays
/// absent. Returns a new record.
///
/// Idempotent: clamping a clamped record is a no-op. Every arithmetic
/// operation routes its result through this normalization before returning.
pub fn hsl_clamp(hsl: &HslRecord) -> Result<HslRecord, ShapeError> {
    if !is_hsl_shaped(hsl) {
        return Err(ShapeError);
    }
    Ok(clamp_channels(hsl))
}

/// The numeric half of [`hsl_clamp`], for records already known to be
/// shaped.
pub(crate) fn clamp_channels(hsl: &HslRecord) -> HslRecord {
    HslRecord {
        hue: hsl.hue.map(|v| v.trunc().clamp(0.0, HUE_MAX)),
        sat: hsl.sat.map(|v| v.trunc().clamp(0.0, PERCENT_MAX)),
        lum: hsl.lum.map(|v| v.trunc().clamp(0.0, PERCENT_MAX)),
        alpha: hsl.alpha.map(|v| round3(v).clamp(0.0, 1.0)),
    }
}

pub(crate) fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn in_range(v: f64, max: f64) -> bool {
    (0.0..=max).contains(&v)
}
