use super::*;
use crate::layout::FloatLayout;
use half::f16;
use rand::{thread_rng, Rng};

fn roundtrip_f64(bits: u64) {
    let x = f64::from_bits(bits);
    if !x.is_finite() || x == 0.0 {
        return;
    }
    let mut triple = FloatTriple::<f64>::from_bits(bits);
    triple.to_decimal();
    let text = format!("{}e{}", triple.significand, triple.exponent);
    let magnitude: f64 = text.parse().unwrap();
    let parsed = if triple.sign < 0 { -magnitude } else { magnitude };
    assert_eq!(
        parsed.to_bits(),
        bits,
        "round-trip failed for {:e} (bits {:#018x}) via {}",
        x,
        bits,
        text
    );
}

fn roundtrip_f32(bits: u32) {
    let x = f32::from_bits(bits);
    if !x.is_finite() || x == 0.0 {
        return;
    }
    let mut triple = FloatTriple::<f32>::from_bits(u64::from(bits));
    triple.to_decimal();
    let text = format!("{}e{}", triple.significand, triple.exponent);
    let magnitude: f32 = text.parse().unwrap();
    let parsed = if triple.sign < 0 { -magnitude } else { magnitude };
    assert_eq!(
        parsed.to_bits(),
        bits,
        "round-trip failed for {:e} (bits {:#010x}) via {}",
        x,
        bits,
        text
    );
}

fn roundtrip_f16(bits: u16) {
    let wide = u64::from(bits);
    let exponent_field = (wide & f16::EXPONENT_MASK) >> f16::EXPONENT_SHIFT;
    if exponent_field == (1 << f16::EXPONENT_WIDTH) - 1
        || wide & (f16::EXPONENT_MASK | f16::SIGNIFICAND_MASK) == 0
    {
        return;
    }
    let mut triple = FloatTriple::<f16>::from_bits(wide);
    triple.to_decimal();
    let text = format!("{}e{}", triple.significand, triple.exponent);
    // Parse at binary64 precision, then round once to binary16; with at
    // most five significant digits the intermediate is never a hidden
    // second rounding.
    let magnitude: f64 = text.parse().unwrap();
    let parsed = f16::from_f64(if triple.sign < 0 { -magnitude } else { magnitude });
    assert_eq!(
        parsed.to_bits(),
        bits,
        "round-trip failed for f16 bits {:#06x} via {}",
        bits,
        text
    );
}

// Significant digits of a std shortest-`Display` rendering.
fn significant_digits(text: &str) -> usize {
    let mantissa = text.split(|c: char| c == 'e' || c == 'E').next().unwrap();
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let trimmed = digits.trim_start_matches('0').trim_end_matches('0');
    if trimmed.is_empty() {
        1
    } else {
        trimmed.len()
    }
}

#[test]
fn decomposition_restores_the_hidden_bit() {
    let one = FloatTriple::<f32>::new(1.0);
    assert_eq!(one.significand, 1 << 23);
    assert_eq!(one.exponent, -23);
    assert_eq!(one.sign, 1);

    let one = FloatTriple::<f64>::new(1.0);
    assert_eq!(one.significand, 1 << 52);
    assert_eq!(one.exponent, -52);

    let pi = FloatTriple::<f64>::new(std::f64::consts::PI);
    assert_eq!(pi.significand, 7074237752028440);
    assert_eq!(pi.exponent, -51);
}

#[test]
fn decomposition_normalizes_subnormals() {
    // Smallest subnormal of each format: one stored bit, shifted all the
    // way up to the hidden-bit position.
    let tiny = FloatTriple::<f32>::from_bits(1);
    assert_eq!(tiny.significand, 1 << 23);
    assert_eq!(tiny.exponent, -172);

    let tiny = FloatTriple::<f64>::from_bits(1);
    assert_eq!(tiny.significand, 1 << 52);
    assert_eq!(tiny.exponent, -1126);

    let tiny = FloatTriple::<f16>::from_bits(1);
    assert_eq!(tiny.significand, 1 << 10);
    assert_eq!(tiny.exponent, -34);

    // A wider subnormal only shifts by the gap to its leading bit.
    let sub = FloatTriple::<f32>::from_bits(0x0040_0000);
    assert_eq!(sub.significand, 1 << 23);
    assert_eq!(sub.exponent, -150);
}

#[test]
fn decomposition_extracts_the_sign() {
    assert_eq!(FloatTriple::<f32>::new(2.5).sign, 1);
    assert_eq!(FloatTriple::<f32>::new(-2.5).sign, -1);
    assert_eq!(FloatTriple::<f32>::from_bits(0x8000_0001).sign, -1);
    assert_eq!(FloatTriple::<f64>::new(-0.375).sign, -1);
}

#[test]
#[should_panic(expected = "infinity or NaN")]
fn nan_input_panics() {
    FloatTriple::<f64>::new(f64::NAN);
}

#[test]
#[should_panic(expected = "infinity or NaN")]
fn infinite_input_panics() {
    FloatTriple::<f32>::new(f32::NEG_INFINITY);
}

#[test]
#[should_panic(expected = "zero has no normalized triple")]
fn zero_input_panics() {
    FloatTriple::<f64>::new(0.0);
}

#[test]
fn shortest_decimal_known_answers_f64() {
    let cases: [(f64, u64, i32); 15] = [
        (1.0, 1, 0),
        (0.5, 5, -1),
        (1.5, 15, -1),
        (0.1, 1, -1),
        (0.3, 3, -1),
        (2.5, 25, -1),
        (100.0, 1, 2),
        (123.456, 123456, -3),
        (1e23, 1, 23),
        (6.02214076e23, 602214076, 15),
        (9.109383632e-31, 9109383632, -40),
        (std::f64::consts::PI, 3141592653589793, -15),
        (f64::MAX, 17976931348623157, 292),
        (f64::MIN_POSITIVE, 22250738585072014, -324),
        (5e-324, 49406564584124654, -340),
    ];
    for &(value, significand, exponent) in &cases {
        let d = shortest_decimal(value);
        assert_eq!(
            (d.significand, d.exponent, d.sign),
            (significand, exponent, 1),
            "wrong decimal for {:e}",
            value
        );
    }

    let d = shortest_decimal(-0.375f64);
    assert_eq!((d.significand, d.exponent, d.sign), (375, -3, -1));
}

#[test]
fn shortest_decimal_known_answers_f32() {
    let cases: [(f32, u32, i32); 9] = [
        (1.0, 1, 0),
        (0.5, 5, -1),
        (0.25, 25, -2),
        (0.1, 1, -1),
        (100.0, 1, 2),
        (16777216.0, 16777216, 0),
        (f32::MAX, 34028235, 31),
        (f32::MIN_POSITIVE, 11754944, -45),
        (1e-45, 14012985, -52),
    ];
    for &(value, significand, exponent) in &cases {
        let d = shortest_decimal(value);
        assert_eq!(
            (d.significand, d.exponent, d.sign),
            (significand, exponent, 1),
            "wrong decimal for {:e}",
            value
        );
    }
}

#[test]
fn shortest_decimal_known_answers_f16() {
    let cases: [(u16, u32, i32, i8); 6] = [
        (0x3C00, 1, 0, 1),      // 1.0
        (0x3555, 3333, -4, 1),  // nearest to 1/3
        (0x0400, 6104, -8, 1),  // smallest normal
        (0x0001, 596, -10, 1),  // smallest subnormal
        (0x7BFF, 655, 2, 1),    // largest finite, 65504
        (0xC000, 2, 0, -1),     // -2.0
    ];
    for &(bits, significand, exponent, sign) in &cases {
        let mut d = FloatTriple::<f16>::from_bits(u64::from(bits));
        d.to_decimal();
        assert_eq!(
            (d.significand, d.exponent, d.sign),
            (significand, exponent, sign),
            "wrong decimal for f16 bits {:#06x}",
            bits
        );
    }
}

#[test]
fn exact_midpoints_round_to_the_even_digit() {
    // 1915074.75 scaled to eight digits sits exactly between 19150747 and
    // 19150748; ties-to-even must pick the even candidate.
    let d = shortest_decimal(f32::from_bits(0x49E9_C616));
    assert_eq!((d.significand, d.exponent, d.sign), (19150748, -1, 1));

    let d = shortest_decimal(f32::from_bits(0xC9E9_C616));
    assert_eq!((d.significand, d.exponent, d.sign), (19150748, -1, -1));
}

#[test]
fn ambiguous_candidates_fall_back_to_nearest() {
    // Neither digit-count test is decisive here; the final comparison
    // against the midpoint settles the last digit.
    let d = shortest_decimal(f64::from_bits(0x0741_C7A8_7CE4_2C82));
    assert_eq!((d.significand, d.exponent), (10270784629388736, -289));

    let d = shortest_decimal(f32::from_bits(3));
    assert_eq!((d.significand, d.exponent), (42038954, -52));
}

#[test]
fn power_of_two_significands_use_the_tighter_lower_gap() {
    // One set bit means the gap below is half the gap above; the corrected
    // exponent estimate still lands on the shortest form.
    let d = shortest_decimal(1.0f64);
    assert_eq!((d.significand, d.exponent), (1, 0));
    let d = shortest_decimal(2.0f64);
    assert_eq!((d.significand, d.exponent), (2, 0));
    let d = shortest_decimal(0.5f32);
    assert_eq!((d.significand, d.exponent), (5, -1));

    // Every power of two in both formats survives the round trip.
    for shift in 0..52 {
        roundtrip_f64(1u64 << shift); // subnormal powers
    }
    for raw_exponent in 1..=2046u64 {
        roundtrip_f64(raw_exponent << 52);
    }
    for shift in 0..23 {
        roundtrip_f32(1u32 << shift);
    }
    for raw_exponent in 1..=254u32 {
        roundtrip_f32(raw_exponent << 23);
    }
}

#[test]
fn exponent_extremes_stay_inside_the_pow10_tables() {
    // Sweep the whole exponent field with edge significands; a table miss
    // would panic, so finishing the sweep is the assertion (the parse
    // check comes along for free).
    for raw_exponent in 0..=2046u64 {
        for significand in [0u64, 1, 0x000F_FFFF_FFFF_FFFF] {
            roundtrip_f64((raw_exponent << 52) | significand);
        }
    }
    for raw_exponent in 0..=254u32 {
        for significand in [0u32, 1, 0x007F_FFFF] {
            roundtrip_f32((raw_exponent << 23) | significand);
        }
    }
}

#[test]
fn round_trip_random_f64() {
    let mut rng = thread_rng();
    for _ in 0..10_000 {
        let bits: u64 = rng.gen();
        roundtrip_f64(bits);
    }
}

#[test]
fn round_trip_random_f32() {
    let mut rng = thread_rng();
    for _ in 0..10_000 {
        let bits: u32 = rng.gen();
        roundtrip_f32(bits);
    }
}

#[test]
fn round_trip_every_finite_f16() {
    for bits in 1..=u16::MAX {
        roundtrip_f16(bits);
    }
}

#[test]
fn digit_count_matches_std_shortest_display() {
    // The standard library prints the shortest round-trip decimal, so for
    // normal values the digit counts must agree exactly.
    let mut rng = thread_rng();
    let mut checked = 0;
    while checked < 10_000 {
        let bits: u64 = rng.gen();
        let x = f64::from_bits(bits);
        if !x.is_finite() || x.abs() < f64::MIN_POSITIVE {
            continue;
        }
        let d = shortest_decimal(x);
        assert_eq!(
            d.significand.to_string().len(),
            significant_digits(&format!("{}", x)),
            "digit count mismatch for {:e}",
            x
        );
        checked += 1;
    }

    let mut checked = 0;
    while checked < 10_000 {
        let bits: u32 = rng.gen();
        let x = f32::from_bits(bits);
        if !x.is_finite() || x.abs() < f32::MIN_POSITIVE {
            continue;
        }
        let d = shortest_decimal(x);
        assert_eq!(
            d.significand.to_string().len(),
            significant_digits(&format!("{}", x)),
            "digit count mismatch for {:e}",
            x
        );
        checked += 1;
    }
}

#[test]
fn conversion_rewrites_the_triple_in_place() {
    let mut triple = FloatTriple::<f64>::new(123.456);
    assert_eq!(triple.exponent, -46); // binary exponent before conversion

    let converted = triple.to_decimal();
    assert_eq!(converted.significand, 123456);
    assert_eq!(converted.exponent, -3); // decimal exponent afterwards

    // The borrow returns the same value; the fields stay readable.
    assert_eq!(triple.significand, 123456);
    assert_eq!(triple.sign, 1);
}
