// Bit-layout descriptors for the supported IEEE 754 interchange formats.
// Everything here is a compile-time constant; the widths of the three bit
// fields determine the storage width, the exponent bias and the extraction
// masks, so each format only has to state its primary parameters.

use half::f16;

use crate::pow10::Carrier;

/// Compile-time description of a floating-point bit layout.
///
/// Implemented by `f32`, `f64` and [`half::f16`]. An implementation supplies
/// the significand width (hidden bit included), the exponent field width and
/// the largest base-2 exponent; every other constant is derived.
pub trait FloatLayout: Copy {
    /// Unsigned integer path the rounding core runs on for this format.
    ///
    /// binary32 and binary64 use their own storage width; binary16 shares
    /// the 32-bit path and its power-of-ten table.
    type Carrier: Carrier;

    /// Significand width in bits, hidden bit included.
    const SIGNIFICAND_WIDTH: u32;
    /// Exponent field width in bits.
    const EXPONENT_WIDTH: u32;
    /// Sign field width in bits.
    const SIGN_WIDTH: u32 = 1;
    /// Whether the leading significand bit is implied by the encoding.
    const HAS_HIDDEN_BIT: bool = true;
    /// Largest base-2 exponent of the format, as in `f32::MAX_EXP`.
    const MAX_EXPONENT: i32;

    /// Width in bits of one encoded value.
    const STORAGE_WIDTH: u32 = Self::SIGN_WIDTH + Self::EXPONENT_WIDTH + Self::SIGNIFICAND_WIDTH
        - Self::HAS_HIDDEN_BIT as u32;
    /// Bias of the exponent field once the significand is read as an
    /// integer rather than a fixed-point fraction.
    const EXPONENT_BIAS: i32 = Self::MAX_EXPONENT + Self::SIGNIFICAND_WIDTH as i32 - 2;

    /// Right-shift that brings the exponent field to bit 0.
    const EXPONENT_SHIFT: u32 = Self::STORAGE_WIDTH - Self::SIGN_WIDTH - Self::EXPONENT_WIDTH;
    /// Right-shift that brings the sign bit to bit 0.
    const SIGN_SHIFT: u32 = Self::STORAGE_WIDTH - Self::SIGN_WIDTH;
    /// Mask of the stored significand field.
    const SIGNIFICAND_MASK: u64 =
        (1u64 << (Self::SIGNIFICAND_WIDTH - Self::HAS_HIDDEN_BIT as u32)) - 1;
    /// Mask of the exponent field.
    const EXPONENT_MASK: u64 = ((1u64 << Self::EXPONENT_WIDTH) - 1) << Self::EXPONENT_SHIFT;
    /// Mask of the sign bit.
    const SIGN_MASK: u64 = 1u64 << Self::SIGN_SHIFT;

    /// The raw encoding, widened to `u64`.
    fn bits(self) -> u64;
}

impl FloatLayout for f32 {
    type Carrier = u32;

    const SIGNIFICAND_WIDTH: u32 = 24;
    const EXPONENT_WIDTH: u32 = 8;
    const MAX_EXPONENT: i32 = 128;

    fn bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl FloatLayout for f64 {
    type Carrier = u64;

    const SIGNIFICAND_WIDTH: u32 = 53;
    const EXPONENT_WIDTH: u32 = 11;
    const MAX_EXPONENT: i32 = 1024;

    fn bits(self) -> u64 {
        self.to_bits()
    }
}

impl FloatLayout for f16 {
    type Carrier = u32;

    const SIGNIFICAND_WIDTH: u32 = 11;
    const EXPONENT_WIDTH: u32 = 5;
    const MAX_EXPONENT: i32 = 16;

    fn bits(self) -> u64 {
        u64::from(self.to_bits())
    }
}
