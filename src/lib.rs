//! # Schubfach
//!
//! Shortest round-trip decimal conversion for IEEE 754 floating-point values.
//!
//! Given a finite, nonzero float this crate produces the decimal triple
//! `(significand, exponent, sign)` with the fewest significant digits that,
//! parsed back under round-to-nearest-even, reproduces the exact original
//! bit pattern. It is the numeric half of a float printer: rendering the
//! triple as text (decimal point placement, fixed vs. scientific notation)
//! is left to the caller, as is filtering out zero, infinity and NaN.
//!
//! The conversion follows Raffaello Giulietti's Schubfach algorithm
//! ("The Schubfach way to render doubles", 2020): fixed-point arithmetic
//! against a precomputed table of power-of-ten mantissas, with a
//! round-to-odd intermediate step so that the one final rounding over the
//! whole computation is correct. Supported formats are binary16
//! ([`half::f16`]), binary32 (`f32`) and binary64 (`f64`).
//!
//! ```
//! use schubfach::shortest_decimal;
//!
//! let d = shortest_decimal(0.1f64);
//! assert_eq!((d.significand, d.exponent, d.sign), (1, -1, 1));
//!
//! let d = shortest_decimal(-2.5f32);
//! assert_eq!((d.significand, d.exponent, d.sign), (25, -1, -1));
//! ```

pub mod convert;
pub mod layout;
pub mod pow10;

pub use convert::{shortest_decimal, FloatTriple};
pub use layout::FloatLayout;
