use crate::ops::Channel;

/// The input text matched neither the legacy nor the modern HSL grammar, or
/// a matched value fell outside its semantic range.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("invalid HSL color format: {0}")]
    BadFormat(String),

    #[error("{channel} value out of range: {value}")]
    OutOfRange { channel: Channel, value: f64 },
}

/// The record handed to the formatter is missing channels or holds a value
/// that cannot be rendered.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Lists the missing channel names, comma separated.
    #[error("missing HSL channels: {0}")]
    MissingChannels(String),

    #[error("invalid {channel} value: {value}")]
    InvalidValue { channel: Channel, value: f64 },
}

/// The record lacks one of the `hue`, `sat`, or `lum` channels. Structural
/// only; raised before any numeric validation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("record is missing one or more of the hue, sat, and lum channels")]
pub struct ShapeError;

/// The record is shaped but fails numeric range validation. Raised by the
/// arithmetic operations' precondition check.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("record fails HSL range validation")]
pub struct InvalidRecordError;
