//! Channel arithmetic and the op-string micro language.
//!
//! `hsl_set`/`hsl_add`/`hsl_mul` change channels directly; [`hsl_ops`] folds
//! a sequence of textual micro-operations such as `"hue+20"` or `"alpha=0.5"`
//! over a record, left to right. Every result is range-clamped before it is
//! returned.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::InvalidRecordError;
use crate::record::{clamp_channels, is_valid_hsl_record, HslRecord};

/// One of the four named channels of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    Hue,
    Sat,
    Lum,
    Alpha,
}

impl Channel {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "hue" => Some(Self::Hue),
            "sat" => Some(Self::Sat),
            "lum" => Some(Self::Lum),
            "alpha" => Some(Self::Alpha),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hue => "hue",
            Self::Sat => "saturation",
            Self::Lum => "lightness",
            Self::Alpha => "alpha",
        })
    }
}

/// Operator token of an op string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HslOperator {
    /// `=` — replace the channel value.
    Set,
    /// `+` — add to the channel value.
    Add,
    /// `-` — subtract from the channel value.
    Sub,
    /// `*` — multiply the channel value.
    Mul,
    /// `/` — divide the channel value. Dividing by zero produces an
    /// infinite delta, which the clamp pins to the range boundary.
    Div,
}

impl HslOperator {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Set),
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }
}

/// A single parsed micro-operation: one channel, one operator, one operand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HslOp {
    pub channel: Channel,
    pub operator: HslOperator,
    pub value: f64,
}

static OP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(hue|sat|lum|alpha)\s*([+\-*/=])\s*(-?\d+(?:\.\d+)?)$").expect("valid regex")
});

/// Parses one op string of the form `<channel><op><number>`, e.g. `"hue+20"`
/// or `"lum * 0.5"`. Whitespace is allowed around the operator only; any
/// padding before the channel or trailing content after the number fails the
/// match.
///
/// Returns `None` on a mismatch rather than an error, so op lists can carry
/// no-op entries.
pub fn parse_hsl_op(op: &str) -> Option<HslOp> {
    let caps = OP_RE.captures(op)?;
    Some(HslOp {
        channel: Channel::from_token(&caps[1])?,
        operator: HslOperator::from_token(&caps[2])?,
        value: caps[3].parse().ok()?,
    })
}

/// Replaces each channel for which an argument is given. The result is
/// clamped into the semantic ranges.
pub fn hsl_set(
    hsl: &HslRecord,
    hue: Option<f64>,
    sat: Option<f64>,
    lum: Option<f64>,
    alpha: Option<f64>,
) -> Result<HslRecord, InvalidRecordError> {
    let mut out = require_valid(hsl)?;
    if let Some(v) = hue {
        out.hue = Some(v);
    }
    if let Some(v) = sat {
        out.sat = Some(v);
    }
    if let Some(v) = lum {
        out.lum = Some(v);
    }
    if let Some(v) = alpha {
        out.alpha = Some(v);
    }
    Ok(clamp_channels(&out))
}

/// Adds each given delta to its channel. An absent `alpha` is treated as `1`
/// and the sum is written back as an explicit channel. The result is
/// clamped.
pub fn hsl_add(
    hsl: &HslRecord,
    hue: Option<f64>,
    sat: Option<f64>,
    lum: Option<f64>,
    alpha: Option<f64>,
) -> Result<HslRecord, InvalidRecordError> {
    let mut out = require_valid(hsl)?;
    if let Some(v) = hue {
        out.hue = out.hue.map(|c| c + v);
    }
    if let Some(v) = sat {
        out.sat = out.sat.map(|c| c + v);
    }
    if let Some(v) = lum {
        out.lum = out.lum.map(|c| c + v);
    }
    if let Some(v) = alpha {
        out.alpha = Some(out.effective_alpha() + v);
    }
    Ok(clamp_channels(&out))
}

/// Multiplies each channel by its given factor. An absent `alpha` is treated
/// as `1` and the product is written back as an explicit channel. The result
/// is clamped.
pub fn hsl_mul(
    hsl: &HslRecord,
    hue: Option<f64>,
    sat: Option<f64>,
    lum: Option<f64>,
    alpha: Option<f64>,
) -> Result<HslRecord, InvalidRecordError> {
    let mut out = require_valid(hsl)?;
    if let Some(v) = hue {
        out.hue = out.hue.map(|c| c * v);
    }
    if let Some(v) = sat {
        out.sat = out.sat.map(|c| c * v);
    }
    if let Some(v) = lum {
        out.lum = out.lum.map(|c| c * v);
    }
    if let Some(v) = alpha {
        out.alpha = Some(out.effective_alpha() * v);
    }
    Ok(clamp_channels(&out))
}

/// Applies a sequence of op strings to a record, left to right.
///
/// Each string is parsed with [`parse_hsl_op`]; strings that do not parse
/// are skipped (logged at debug level), not errors. A final clamp pass runs
/// after the whole sequence.
pub fn hsl_ops<I, S>(hsl: &HslRecord, ops: I) -> Result<HslRecord, InvalidRecordError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = require_valid(hsl)?;
    for op in ops {
        let op = op.as_ref();
        let Some(parsed) = parse_hsl_op(op) else {
            debug!("skipping unparseable HSL op {op:?}");
            continue;
        };
        out = apply_op(&out, parsed)?;
    }
    Ok(clamp_channels(&out))
}

fn apply_op(hsl: &HslRecord, op: HslOp) -> Result<HslRecord, InvalidRecordError> {
    match op.operator {
        HslOperator::Set => spread(hsl, op.channel, op.value, hsl_set),
        HslOperator::Add => spread(hsl, op.channel, op.value, hsl_add),
        HslOperator::Sub => spread(hsl, op.channel, -op.value, hsl_add),
        HslOperator::Mul => spread(hsl, op.channel, op.value, hsl_mul),
        HslOperator::Div => spread(hsl, op.channel, op.value.recip(), hsl_mul),
    }
}

/// Routes `value` to the argument slot of `channel` and calls `f` with the
/// other three slots empty.
fn spread<F>(hsl: &HslRecord, channel: Channel, value: f64, f: F) -> Result<HslRecord, InvalidRecordError>
where
    F: Fn(
        &HslRecord,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
    ) -> Result<HslRecord, InvalidRecordError>,
{
    let (mut hue, mut sat, mut lum, mut alpha) = (None, None, None, None);
    match channel {
        Channel::Hue => hue = Some(value),
        Channel::Sat => sat = Some(value),
        Channel::Lum => lum = Some(value),
        Channel::Alpha => alpha = Some(value),
    }
    f(hsl, hue, sat, lum, alpha)
}

fn require_valid(hsl: &HslRecord) -> Result<HslRecord, InvalidRecordError> {
    if is_valid_hsl_record(hsl) {
        Ok(*hsl)
    } else {
        Err(InvalidRecordError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> HslRecord {
        HslRecord::new(120, 50, 75)
    }

    #[test]
    fn op_grammar_accepts_exact_token_forms() {
        assert_eq!(
            parse_hsl_op("hue+20"),
            Some(HslOp {
                channel: Channel::Hue,
                operator: HslOperator::Add,
                value: 20.0,
            })
        );
        assert_eq!(
            parse_hsl_op("hue + 20"),
            Some(HslOp {
                channel: Channel::Hue,
                operator: HslOperator::Add,
                value: 20.0,
            })
        );
        assert_eq!(
            parse_hsl_op("alpha=-0.25"),
            Some(HslOp {
                channel: Channel::Alpha,
                operator: HslOperator::Set,
                value: -0.25,
            })
        );
        assert_eq!(
            parse_hsl_op("lum/2"),
            Some(HslOp {
                channel: Channel::Lum,
                operator: HslOperator::Div,
                value: 2.0,
            })
        );
    }

    #[test]
    fn op_grammar_rejects_padding_and_junk() {
        assert_eq!(parse_hsl_op(" hue+20"), None);
        assert_eq!(parse_hsl_op("hue+20 "), None);
        assert_eq!(parse_hsl_op("hue+20px"), None);
        assert_eq!(parse_hsl_op("hue+"), None);
        assert_eq!(parse_hsl_op("chroma+20"), None);
        assert_eq!(parse_hsl_op("lorem"), None);
        assert_eq!(parse_hsl_op(""), None);
    }

    #[test]
    fn set_replaces_only_given_channels() {
        let out = hsl_set(&base(), Some(10.0), None, None, Some(0.5)).unwrap();
        assert_eq!(out, HslRecord::with_alpha(10, 50, 75, 0.5));
    }

    #[test]
    fn set_clamps_out_of_range_values() {
        let out = hsl_set(&base(), Some(500.0), None, None, Some(2.0)).unwrap();
        assert_eq!(out, HslRecord::with_alpha(360, 50, 75, 1.0));
    }

    #[test]
    fn add_applies_deltas_and_clamps() {
        let out = hsl_add(&base(), Some(20.0), Some(-60.0), None, None).unwrap();
        assert_eq!(out, HslRecord::new(140, 0, 75));
    }

    #[test]
    fn add_to_absent_alpha_starts_from_one() {
        let out = hsl_add(&base(), None, None, None, Some(0.25)).unwrap();
        assert_eq!(out.alpha, Some(1.0));

        let out = hsl_add(&base(), None, None, None, Some(-0.25)).unwrap();
        assert_eq!(out.alpha, Some(0.75));
    }

    #[test]
    fn mul_scales_and_clamps() {
        let out = hsl_mul(&base(), None, None, Some(1.5), None).unwrap();
        assert_eq!(out.lum, Some(100.0));

        let out = hsl_mul(&base(), None, Some(0.5), None, None).unwrap();
        assert_eq!(out.sat, Some(25.0));
    }

    #[test]
    fn mul_on_absent_alpha_starts_from_one() {
        let out = hsl_mul(&base(), None, None, None, Some(0.5)).unwrap();
        assert_eq!(out.alpha, Some(0.5));
    }

    #[test]
    fn operations_require_a_valid_record() {
        let bad = HslRecord::new(444, 50, 75);
        assert_eq!(hsl_set(&bad, Some(1.0), None, None, None), Err(InvalidRecordError));
        assert_eq!(hsl_add(&bad, Some(1.0), None, None, None), Err(InvalidRecordError));
        assert_eq!(hsl_mul(&bad, Some(1.0), None, None, None), Err(InvalidRecordError));
        assert_eq!(hsl_ops(&bad, ["hue+1"]), Err(InvalidRecordError));
    }

    #[test]
    fn ops_fold_left_to_right() {
        let out = hsl_ops(&base(), ["hue+20"]).unwrap();
        assert_eq!(out.hue, Some(140.0));

        let out = hsl_ops(&base(), ["hue=300", "hue+100", "hue-40"]).unwrap();
        // 300, then clamped 360, then 320.
        assert_eq!(out.hue, Some(320.0));
    }

    #[test]
    fn ops_cover_every_operator() {
        let out = hsl_ops(&base(), ["sat*2", "lum/2", "alpha-0.4", "hue=90"]).unwrap();
        assert_eq!(out, HslRecord::with_alpha(90, 100, 37, 0.6));
    }

    #[test]
    fn ops_skip_unparseable_tokens() {
        let out = hsl_ops(&base(), ["lorem"]).unwrap();
        assert_eq!(out, base());

        let out = hsl_ops(&base(), ["??", "hue+20", ""]).unwrap();
        assert_eq!(out.hue, Some(140.0));
    }

    #[test]
    fn division_by_zero_clamps_to_the_ceiling() {
        let out = hsl_ops(&base(), ["sat/0"]).unwrap();
        assert_eq!(out.sat, Some(100.0));
    }
}
