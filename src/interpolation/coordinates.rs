//! Exact parsing of coordinate text into [`BigRational`].
//!
//! Accepted forms, surrounding whitespace ignored:
//! - integers     `42`, `-7`, `+3`
//! - fractions    `7/4`, `-1/3`
//! - decimals     `0.125`, `.5`, `2.`, optionally with an exponent: `1.5e-3`, `2E4`
//!
//! Exponents are limited to [`MAX_EXPONENT`] in magnitude. A zero mantissa
//! parses to zero whatever its exponent.
//!
//! Decimals are converted digit by digit, so `0.1` is exactly `1/10`
//! rather than the nearest binary float.

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{pow::pow, One, ToPrimitive, Zero};

use crate::interpolation::errors::InterpolationError;

/// Largest accepted `|e|` in `<mantissa>e<e>`.
pub const MAX_EXPONENT: u64 = 10_000;


fn invalid(s: &str) -> InterpolationError {
    InterpolationError::InvalidCoordinate { input: s.to_string() }
}


fn parse_integer(s: &str) -> Option<BigInt> {
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::from_str(s).ok()
}


fn parse_fraction(s: &str, num: &str, den: &str) -> Result<BigRational, InterpolationError> {
    let num = parse_integer(num.trim()).ok_or_else(|| invalid(s))?;
    let den = parse_integer(den.trim()).ok_or_else(|| invalid(s))?;
    if den.is_zero() {
        return Err(invalid(s));
    }
    Ok(BigRational::new(num, den))
}


fn parse_decimal(s: &str) -> Result<BigRational, InterpolationError> {
    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None      => (s, None),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _          => (false, mantissa),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None         => (unsigned, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid(s));
    }
    if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid(s));
    }

    let exp = match exponent {
        Some(e) => parse_integer(e).ok_or_else(|| invalid(s))?,
        None    => BigInt::zero(),
    };

    let digits = format!("{}{}", int_part, frac_part);
    if digits.bytes().all(|b| b == b'0') {
        return Ok(BigRational::zero());
    }

    let exp = exp
        .to_i64()
        .filter(|e| e.unsigned_abs() <= MAX_EXPONENT)
        .ok_or_else(|| invalid(s))?;

    let mut numer = BigInt::from_str(&digits).map_err(|_| invalid(s))?;
    if negative {
        numer = -numer;
    }

    let shift = exp - frac_part.len() as i64;
    let ten = BigInt::from(10);
    let value = if shift >= 0 {
        BigRational::new(numer * pow(ten, shift as usize), BigInt::one())
    } else {
        BigRational::new(numer, pow(ten, shift.unsigned_abs() as usize))
    };

    Ok(value)
}


/// Parses one coordinate.
///
/// # Errors
/// - [`InterpolationError::InvalidCoordinate`] for anything that is not an
///   integer, fraction or decimal, for zero denominators, and for exponents
///   beyond [`MAX_EXPONENT`] on a non-zero mantissa.
pub fn parse_coordinate(s: &str) -> Result<BigRational, InterpolationError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(invalid(s));
    }

    match t.split_once('/') {
        Some((num, den)) => parse_fraction(s, num, den),
        None             => parse_decimal(t).map_err(|_| invalid(s)),
    }
}


/// Parses every entry with [`parse_coordinate`], stopping at the first failure.
pub fn parse_coordinates(items: &[&str]) -> Result<Vec<BigRational>, InterpolationError> {
    items.iter().map(|s| parse_coordinate(s)).collect()
}
