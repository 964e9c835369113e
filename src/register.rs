//! 32-bit node registers and the fields packed into them.
//!
//! A field is addressed by its mask inside the register; values are shifted
//! by the mask's trailing zeros and truncated to its width.

use crate::quantity::Kind;

pub const REGISTER_SIZE_BITS: u32 = u32::BITS;
pub const REGISTER_SIZE_BYTES: usize = core::mem::size_of::<u32>();

pub const REGISTER_MASK_NONE: u32 = 0;
pub const REGISTER_MASK_ALL: u32 = u32::MAX;

/// Reads the field selected by `field_mask`.
pub const fn read_field(register: u32, field_mask: u32) -> u32 {
    if field_mask == REGISTER_MASK_NONE {
        return 0;
    }
    (register & field_mask) >> field_mask.trailing_zeros()
}

/// Writes `value` into the field selected by `field_mask`.
///
/// `written_mask` accumulates every field touched, so the caller can send a
/// masked register write covering exactly those bits.
pub fn write_field(register: &mut u32, written_mask: &mut u32, value: u32, field_mask: u32) {
    if field_mask == REGISTER_MASK_NONE {
        return;
    }
    let shifted = (value << field_mask.trailing_zeros()) & field_mask;
    *register = (*register & !field_mask) | shifted;
    *written_mask |= field_mask;
}

/// Encodes a physical value of `kind` straight into a register field.
pub fn write_quantity(
    register: &mut u32,
    written_mask: &mut u32,
    kind: Kind,
    value: i32,
    field_mask: u32,
) {
    write_field(register, written_mask, kind.encode(value), field_mask);
}

/// Decodes the physical value of `kind` held in a register field.
pub fn read_quantity(register: u32, kind: Kind, field_mask: u32) -> i32 {
    kind.decode(read_field(register, field_mask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_round_trip() {
        let mut register = 0xFFFF_0000;
        let mut written = REGISTER_MASK_NONE;
        write_field(&mut register, &mut written, 0xAB, 0x0000_FF00);
        assert_eq!(register, 0xFFFF_AB00);
        assert_eq!(written, 0x0000_FF00);
        assert_eq!(read_field(register, 0x0000_FF00), 0xAB);
    }

    #[test]
    fn value_truncated_to_field() {
        let mut register = 0;
        let mut written = 0;
        write_field(&mut register, &mut written, 0x1FF, 0x0000_00F0);
        assert_eq!(register, 0xF0);
    }

    #[test]
    fn empty_mask_is_noop() {
        let mut register = 0x1234;
        let mut written = 0;
        write_field(&mut register, &mut written, 0xFF, REGISTER_MASK_NONE);
        assert_eq!(register, 0x1234);
        assert_eq!(written, 0);
        assert_eq!(read_field(register, REGISTER_MASK_NONE), 0);
    }

    #[test]
    fn two_quantities_share_a_register() {
        let mut register = 0;
        let mut written = 0;
        write_quantity(&mut register, &mut written, Kind::Voltage, 12_000, 0x0000_FFFF);
        write_quantity(&mut register, &mut written, Kind::Current, 250_000, 0xFFFF_0000);
        assert_eq!(written, REGISTER_MASK_ALL);
        assert_eq!(read_quantity(register, Kind::Voltage, 0x0000_FFFF), 12_000);
        assert_eq!(read_quantity(register, Kind::Current, 0xFFFF_0000), 250_000);
    }
}
