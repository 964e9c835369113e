//! Register representation of each physical quantity.
//!
//! `encode_*` functions return the raw register value (at most
//! [`Quantity::register_bits`] wide for in-range input), `decode_*` functions
//! rebuild the physical value in the finest unit. Precision is lost only when
//! a coarser unit had to be selected.
//!
//! [`Quantity::register_bits`]: crate::quantity::Quantity::register_bits

use crate::quantity::{
    CURRENT, ELECTRICAL_ENERGY, ELECTRICAL_POWER, POWER_FACTOR, RF_POWER, TEMPERATURE, TIME,
    VOLTAGE, YEAR,
};

pub const TIME_ERROR_VALUE: u32 = TIME.error_value;
pub const TEMPERATURE_ERROR_VALUE: u32 = TEMPERATURE.error_value;
pub const HUMIDITY_ERROR_VALUE: u32 = 0xFF;
pub const VOLTAGE_ERROR_VALUE: u32 = VOLTAGE.error_value;
pub const CURRENT_ERROR_VALUE: u32 = CURRENT.error_value;
pub const ELECTRICAL_POWER_ERROR_VALUE: u32 = ELECTRICAL_POWER.error_value;
pub const ELECTRICAL_ENERGY_ERROR_VALUE: u32 = ELECTRICAL_ENERGY.error_value;
pub const POWER_FACTOR_ERROR_VALUE: u32 = POWER_FACTOR.error_value;
pub const RF_POWER_ERROR_VALUE: u32 = RF_POWER.error_value;
pub const MAINS_FREQUENCY_ERROR_VALUE: u32 = 0xFFFF;
pub const YEAR_ERROR_VALUE: u32 = YEAR.error_value;

/// Duration in seconds. Negative input is taken as its absolute value.
pub fn encode_time(seconds: i32) -> u32 {
    TIME.encode(seconds)
}

pub fn decode_time(raw: u32) -> i32 {
    TIME.decode(raw)
}

/// Temperature in tenths of degree.
pub fn encode_temperature(tenth_degrees: i32) -> u32 {
    TEMPERATURE.encode(tenth_degrees)
}

pub fn decode_temperature(raw: u32) -> i32 {
    TEMPERATURE.decode(raw)
}

/// Voltage in mV. Negative input is taken as its absolute value.
pub fn encode_voltage(mv: i32) -> u32 {
    VOLTAGE.encode(mv)
}

pub fn decode_voltage(raw: u32) -> i32 {
    VOLTAGE.decode(raw)
}

/// Current in uA. Negative input is taken as its absolute value.
pub fn encode_current(ua: i32) -> u32 {
    CURRENT.encode(ua)
}

pub fn decode_current(raw: u32) -> i32 {
    CURRENT.decode(raw)
}

/// Active power in mW or apparent power in mVA.
pub fn encode_electrical_power(mw_mva: i32) -> u32 {
    ELECTRICAL_POWER.encode(mw_mva)
}

pub fn decode_electrical_power(raw: u32) -> i32 {
    ELECTRICAL_POWER.decode(raw)
}

/// Active energy in mWh or apparent energy in mVAh.
pub fn encode_electrical_energy(mwh_mvah: i32) -> u32 {
    ELECTRICAL_ENERGY.encode(mwh_mvah)
}

pub fn decode_electrical_energy(raw: u32) -> i32 {
    ELECTRICAL_ENERGY.decode(raw)
}

/// Power factor in hundredths, `-100..=100` in practice.
pub fn encode_power_factor(power_factor: i32) -> u32 {
    POWER_FACTOR.encode(power_factor)
}

pub fn decode_power_factor(raw: u32) -> i32 {
    POWER_FACTOR.decode(raw)
}

pub fn encode_rf_power(dbm: i32) -> u32 {
    RF_POWER.encode(dbm)
}

pub fn decode_rf_power(raw: u32) -> i32 {
    RF_POWER.decode(raw)
}

pub fn encode_year(year: i32) -> u32 {
    YEAR.encode(year)
}

pub fn decode_year(raw: u32) -> i32 {
    YEAR.decode(raw)
}
