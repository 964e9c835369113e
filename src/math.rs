//! Bit-math primitives shared by the register codec.

/// Mask covering the `bits` least significant bits.
#[inline]
pub const fn field_mask(bits: u8) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Splits a value into its signed-magnitude parts `(negative, magnitude)`.
///
/// `i32::MIN` is handled without overflow.
#[inline]
pub const fn split_sign(value: i32) -> (bool, u32) {
    (value < 0, value.unsigned_abs())
}

/// Rebuilds a two's complement value from signed-magnitude parts.
///
/// Wraps instead of panicking when the magnitude does not fit an `i32`.
#[inline]
pub const fn apply_sign(negative: bool, magnitude: u32) -> i32 {
    let value = magnitude as i32;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks() {
        assert_eq!(field_mask(0), 0);
        assert_eq!(field_mask(6), 0x3F);
        assert_eq!(field_mask(15), 0x7FFF);
        assert_eq!(field_mask(32), u32::MAX);
    }

    #[test]
    fn split() {
        assert_eq!(split_sign(-5), (true, 5));
        assert_eq!(split_sign(0), (false, 0));
        assert_eq!(split_sign(i32::MIN), (true, 0x8000_0000));
    }

    #[test]
    fn apply() {
        assert_eq!(apply_sign(true, 5), -5);
        assert_eq!(apply_sign(false, 5), 5);
        // negative zero is still zero
        assert_eq!(apply_sign(true, 0), 0);
        assert_eq!(apply_sign(true, 0x8000_0000), i32::MIN);
    }
}
