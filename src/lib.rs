//! A small HSL(A) color-value library.
//!
//! Parses textual HSL color functions into an [`HslRecord`], renders records
//! back into canonical textual form, and applies set/add/multiply channel
//! arithmetic with range clamping. Both the legacy comma-separated syntax
//! (`hsl(120, 50%, 75%)`) and the modern space-separated syntax
//! (`hsl(120 50% 75% / 50%)`) are supported.
//!
//! Everything here is a pure function over plain `Copy` values; no record is
//! ever mutated in place, so the whole crate is trivially thread-safe.
//!
//! ```
//! use hslkit::{build_hsl_string, hsl_ops, parse_hsl_string};
//!
//! let teal = parse_hsl_string("hsl(180, 62%, 45%)")?;
//! let darker = hsl_ops(&teal, ["lum*0.5", "alpha=0.9"])?;
//! assert_eq!(build_hsl_string(&darker, true, false)?, "hsl(180 62 22 / 90%)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! This crate only manipulates HSL components and their textual encoding; it
//! does not convert between color spaces.

mod build;
pub mod error;
mod ops;
mod parse;
mod record;

pub use build::build_hsl_string;
pub use error::{FormatError, InvalidRecordError, ParseError, ShapeError};
pub use ops::{
    hsl_add, hsl_mul, hsl_ops, hsl_set, parse_hsl_op, Channel, HslOp, HslOperator,
};
pub use parse::parse_hsl_string;
pub use record::{
    hsl_clamp, is_hsl_shaped, is_valid_hsl_record, HslRecord, HUE_MAX, PERCENT_MAX,
};
