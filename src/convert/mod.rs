// Binary-to-decimal conversion: decomposing an encoded value into a
// normalized (significand, exponent, sign) triple, and the Schubfach
// rounding step that rewrites that triple in place into the shortest
// decimal that parses back to the original value.

use crate::layout::FloatLayout;
use crate::pow10::{floor_log2_pow10, Carrier};

/// The one value threaded through a conversion.
///
/// After [`FloatTriple::new`] the fields describe the binary magnitude
/// `significand * 2^exponent`; after [`FloatTriple::to_decimal`] they
/// describe the decimal `significand * 10^exponent`. The sign is +1 or -1
/// throughout and is never consumed by the conversion itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatTriple<F: FloatLayout> {
    pub significand: F::Carrier,
    pub exponent: i32,
    pub sign: i8,
}

impl<F: FloatLayout> FloatTriple<F> {
    /// Decomposes a finite, nonzero value.
    ///
    /// # Panics
    ///
    /// Zero, infinity and NaN are precondition violations: callers classify
    /// and render those before a conversion is ever constructed.
    pub fn new(value: F) -> Self {
        Self::from_bits(value.bits())
    }

    /// Decomposes a raw encoding, widened to `u64`.
    ///
    /// Subnormals are normalized: the significand is shifted until its
    /// leading bit sits where a normal value's hidden bit would, and the
    /// exponent absorbs the shift. Normals get the hidden bit restored.
    /// Either way the result satisfies
    /// `magnitude == significand * 2^exponent` at full precision.
    ///
    /// # Panics
    ///
    /// See [`FloatTriple::new`].
    pub fn from_bits(bits: u64) -> Self {
        let mut significand = bits & F::SIGNIFICAND_MASK;
        let mut exponent = ((bits & F::EXPONENT_MASK) >> F::EXPONENT_SHIFT) as i32;
        let sign = if bits & F::SIGN_MASK == 0 { 1 } else { -1 };

        assert!(
            exponent != (1i32 << F::EXPONENT_WIDTH) - 1,
            "infinity or NaN has no decimal form; filter non-finite values first"
        );
        assert!(
            exponent != 0 || significand != 0,
            "zero has no normalized triple; handle it before converting"
        );

        if exponent == 0 {
            // Subnormal: bit_length(significand) is below the hidden-bit
            // position; shift up and charge the shift to the exponent.
            let shift = F::SIGNIFICAND_WIDTH - (64 - significand.leading_zeros());
            significand <<= shift;
            exponent = 1 - F::EXPONENT_BIAS - shift as i32;
        } else {
            if F::HAS_HIDDEN_BIT {
                significand |= 1u64 << (F::SIGNIFICAND_WIDTH - 1);
            }
            exponent -= F::EXPONENT_BIAS;
        }

        FloatTriple {
            significand: F::Carrier::from_u64(significand),
            exponent,
            sign,
        }
    }

    /// Rewrites the binary triple into its shortest decimal form.
    ///
    /// On return `significand * 10^exponent` is the decimal value with the
    /// fewest significant digits that lies inside the input's rounding
    /// interval, so parsing it under round-to-nearest-even restores the
    /// exact original bits.
    pub fn to_decimal(&mut self) -> &mut Self {
        let c = self.significand.widen();
        let q = self.exponent;

        // An odd significand owns neither half-ulp boundary: the decimal
        // sitting exactly on one would parse back to the even neighbor.
        let is_even = c % 2 == 0;
        let accept_bounds = is_even;

        // A significand of exactly one set bit has a shorter gap below it,
        // because its predecessor lives in the next binary exponent range.
        let lower_boundary_is_closer = c.is_power_of_two();

        // Scale by 4: two low bits of headroom for the half-ulp boundary
        // offsets and the asymmetric lower gap.
        let cbl = 4 * c - 2 + u64::from(lower_boundary_is_closer);
        let cb = 4 * c;
        let cbr = 4 * c + 2;

        // k = floor(log10(2^q)), shifted to floor(log10(3/4 * 2^q)) when
        // the lower boundary is closer; both constants are log10(2) and
        // log10(4/3) in 2^22 fixed point.
        let k = (q * 1262611 - if lower_boundary_is_closer { 524031 } else { 0 }) >> 22;
        let h = q + floor_log2_pow10(-k) + 1;
        debug_assert!((1..=4).contains(&h));
        self.exponent = k;

        let g = F::Carrier::pow10(-k);
        let vbl = F::Carrier::round_to_odd(g, cbl << h);
        let vb = F::Carrier::round_to_odd(g, cb << h);
        let vbr = F::Carrier::round_to_odd(g, cbr << h);

        let lower = vbl + u64::from(!accept_bounds);
        let upper = vbr - u64::from(!accept_bounds);

        let mut s = vb / 4;

        // One digit fewer: if exactly one of the two candidates with a
        // truncated last digit falls inside [lower, upper], the shorter
        // representation is unambiguous and wins.
        if s >= 10 {
            let sp = s / 10;
            let up_inside = lower <= 40 * sp;
            let wp_inside = 40 * sp + 40 <= upper;
            if up_inside != wp_inside {
                self.exponent += 1;
                return self.adopt(sp + u64::from(wp_inside));
            }
        }

        // Same digit count: the analogous test on the untruncated
        // candidate and its successor.
        let u_inside = lower <= 4 * s;
        let w_inside = 4 * s + 4 <= upper;
        if u_inside != w_inside {
            return self.adopt(s + u64::from(w_inside));
        }

        // Both tests ambiguous: round to nearest against the exact
        // midpoint, ties to the candidate with an even last digit.
        let mid = 4 * s + 2;
        if vb > mid || (vb == mid && s % 2 != 0) {
            s += 1;
        }
        self.adopt(s)
    }

    // Trailing zeros carry no information; folding them into the exponent
    // is what turns 10000000 * 10^-5 into 1 * 10^2.
    fn adopt(&mut self, mut s: u64) -> &mut Self {
        debug_assert!(s > 0);
        while s % 10 == 0 {
            s /= 10;
            self.exponent += 1;
        }
        self.significand = F::Carrier::from_u64(s);
        self
    }
}

/// Decomposes `value` and converts it to decimal in one step.
pub fn shortest_decimal<F: FloatLayout>(value: F) -> FloatTriple<F> {
    let mut triple = FloatTriple::new(value);
    triple.to_decimal();
    triple
}

#[cfg(test)]
mod tests;
