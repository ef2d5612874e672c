//! Conversions from unit-interval floats to integer sample values

use num_traits::{Bounded, NumCast, ToPrimitive};

/// Quantize a value in `[0, 1]` by flooring onto `max + 1` levels
///
/// `floor(value * (max + 1))` clamped to `[0, max]`; for `u8` this is the
/// same rule that turns ranks into intensities. Non-finite input maps to
/// the minimum of `T`.
pub fn from_unit<T>(value: f64) -> T
where
    T: Bounded + NumCast + ToPrimitive,
{
    let max = T::max_value().to_f64().unwrap_or(f64::MAX);
    if !value.is_finite() {
        return T::min_value();
    }
    let scaled = (value * (max + 1.0)).floor().clamp(0.0, max);
    <T as NumCast>::from(scaled).unwrap_or_else(T::max_value)
}

/// Quantize a value in `[0, 1]` by rounding onto `[0, max]`
///
/// `round(value * max)` clamped; 0.0 maps to 0 and 1.0 maps to `max`.
/// Non-finite input maps to the minimum of `T`.
pub fn rounded_from_unit<T>(value: f64) -> T
where
    T: Bounded + NumCast + ToPrimitive,
{
    let max = T::max_value().to_f64().unwrap_or(f64::MAX);
    if !value.is_finite() {
        return T::min_value();
    }
    let scaled = (value * max).round().clamp(0.0, max);
    <T as NumCast>::from(scaled).unwrap_or_else(T::max_value)
}
