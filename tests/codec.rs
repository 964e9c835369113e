use una::codec::*;
use una::quantity::{Encoding, Kind};

fn ladder_kinds() -> impl Iterator<Item = (Kind, una::quantity::Ladder)> {
    Kind::ALL
        .into_iter()
        .filter_map(|kind| match kind.quantity().encoding {
            Encoding::Ladder(ladder) => Some((kind, ladder)),
            Encoding::Offset(_) => None,
        })
}

#[test]
fn exact_within_finest_unit() {
    for (kind, ladder) in ladder_kinds() {
        let max = (1i32 << ladder.value_bits) - 1;
        let step = (max / 97).max(1);
        for value in (0..=max).step_by(step as usize).chain([max]) {
            assert_eq!(kind.decode(kind.encode(value)), value, "{:?} {}", kind, value);
            if ladder.signed {
                assert_eq!(kind.decode(kind.encode(-value)), -value, "{:?} {}", kind, -value);
            }
        }
    }
}

#[test]
fn coarser_unit_rounds_down() {
    assert_eq!(decode_voltage(encode_voltage(123_456)), 123_400);
    // 100_000 s -> 27 h
    assert_eq!(decode_time(encode_time(100_000)), 27 * 3_600);
    // -1_234_567 mW -> -1_234 W
    assert_eq!(
        decode_electrical_power(encode_electrical_power(-1_234_567)),
        -1_234_000
    );
    assert_eq!(
        decode_electrical_energy(encode_electrical_energy(50_000)),
        50_000
    );
}

#[test]
fn unit_never_regresses() {
    for (kind, ladder) in ladder_kinds() {
        let mut previous = 0;
        let mut value: i32 = 1;
        while value < i32::MAX / 3 {
            let unit = ladder.unit(kind.encode(value));
            assert!(unit >= previous, "{:?} {}", kind, value);
            previous = unit;
            value = value * 3 + 1;
        }
    }
}

#[test]
fn packed_value_stays_in_register() {
    for (kind, ladder) in ladder_kinds() {
        for value in [0, 1, 999, 65_535, 1_000_000, 99_999_999, i32::MAX, i32::MIN] {
            let raw = kind.encode(value);
            assert!(raw < 1 << ladder.packed_bits(), "{:?} {}", kind, value);
            assert!(ladder.unit(raw) < ladder.units(), "{:?} {}", kind, value);
        }
    }
}

#[test]
fn temperature_keeps_sign() {
    assert_eq!(decode_temperature(encode_temperature(-500)), -500);
    assert_eq!(decode_temperature(encode_temperature(2_047)), 2_047);
    assert_eq!(encode_temperature(-1), 0x801);
}

#[test]
fn power_factor_boundaries() {
    assert_eq!(encode_power_factor(127), 0x7F);
    assert_eq!(encode_power_factor(-127), 0xFF);
    assert_eq!(decode_power_factor(0xFF), -127);
    // single unit: the magnitude wraps to the field width
    assert_eq!(encode_power_factor(128), 0x00);
    assert_eq!(encode_power_factor(-128), 0x80);
    assert_eq!(decode_power_factor(encode_power_factor(-128)), 0);
}

#[test]
fn unsigned_kinds_drop_the_sign() {
    assert_eq!(encode_voltage(-3_300), encode_voltage(3_300));
    assert_eq!(decode_current(encode_current(-42)), 42);
    assert_eq!(decode_time(encode_time(-30)), 30);
}

#[test]
fn fixed_offsets() {
    assert_eq!(encode_rf_power(-40), 134);
    assert_eq!(decode_rf_power(encode_rf_power(-40)), -40);
    assert_eq!(decode_rf_power(0), -174);
    assert_eq!(encode_year(2024), 24);
    assert_eq!(decode_year(encode_year(2024)), 2024);
}

#[test]
fn sentinels_decode_as_plain_values() {
    assert_eq!(decode_voltage(VOLTAGE_ERROR_VALUE), 3_276_700);
    assert_eq!(decode_power_factor(POWER_FACTOR_ERROR_VALUE), 127);
    assert!(Kind::Current.quantity().is_error(CURRENT_ERROR_VALUE));
    assert_eq!(HUMIDITY_ERROR_VALUE, 0xFF);
    assert_eq!(MAINS_FREQUENCY_ERROR_VALUE, 0xFFFF);
}
