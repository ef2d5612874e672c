//! Tests for unit-interval quantization

#[cfg(test)]
mod tests {
    use bluenoise::math::quantize::{from_unit, rounded_from_unit};

    // Tests floor quantization onto 256 levels
    // Verified at the ends, the middle and for out-of-range input
    #[test]
    fn test_from_unit() {
        assert_eq!(from_unit::<u8>(0.0), 0);
        assert_eq!(from_unit::<u8>(0.5), 128);
        assert_eq!(from_unit::<u8>(0.999), 255);
        assert_eq!(from_unit::<u8>(1.0), 255);
        assert_eq!(from_unit::<u8>(-0.5), 0);
        assert_eq!(from_unit::<u8>(f64::NAN), 0);
        assert_eq!(from_unit::<u16>(1.0), u16::MAX);
    }

    // Tests rounding quantization
    // Verified by exact ends and a half-way value rounding up
    #[test]
    fn test_rounded_from_unit() {
        assert_eq!(rounded_from_unit::<u8>(0.0), 0);
        assert_eq!(rounded_from_unit::<u8>(1.0), 255);
        assert_eq!(rounded_from_unit::<u8>(0.5), 128);
        assert_eq!(rounded_from_unit::<u8>(0.2), 51);
        assert_eq!(rounded_from_unit::<u8>(f64::INFINITY), 0);
    }
}
