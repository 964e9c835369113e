//! Quantity descriptors and the generic scale-selection codec.
//!
//! Every physical quantity carried in a register is described by a
//! [`Quantity`]: either a unit ladder (magnitude field, unit selector, optional
//! sign) or a plain additive offset. Wire layout, least significant first:
//!
//! ```text
//! | magnitude (value_bits) | unit (unit_bits) | sign (0 or 1 bit) |
//! ```

use log::warn;
use serde_derive::{Deserialize, Serialize};

use crate::math;

/// Unit ladder layout of a scaled quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ladder {
    /// Width of the magnitude field.
    pub value_bits: u8,
    /// Width of the unit selector, 0 for single-unit quantities.
    pub unit_bits: u8,
    /// Conversion ratio from each unit to the next coarser one, finest first.
    pub ratios: &'static [u32],
    /// Whether a sign bit sits above the unit selector.
    pub signed: bool,
}

impl Ladder {
    /// Number of units on the ladder.
    pub const fn units(&self) -> usize {
        self.ratios.len() + 1
    }

    const fn sign_offset(&self) -> u8 {
        self.value_bits + self.unit_bits
    }

    /// Total number of bits used by the packed representation.
    pub const fn packed_bits(&self) -> u8 {
        self.sign_offset() + self.signed as u8
    }

    /// Multiplier from the finest unit to `unit`.
    ///
    /// Selectors past the end of the ladder scale like the coarsest unit.
    pub fn scale(&self, unit: usize) -> u32 {
        self.ratios
            .iter()
            .take(unit)
            .fold(1u32, |scale, ratio| scale.wrapping_mul(*ratio))
    }

    /// Unit selector held in a raw register value.
    pub const fn unit(&self, raw: u32) -> usize {
        ((raw >> self.value_bits) & math::field_mask(self.unit_bits)) as usize
    }

    pub fn encode(&self, value: i32) -> u32 {
        let (negative, mut magnitude) = math::split_sign(value);
        let limit = math::field_mask(self.value_bits);
        let mut unit = 0;
        while magnitude > limit && unit < self.ratios.len() {
            magnitude /= self.ratios[unit];
            unit += 1;
        }
        if magnitude > limit {
            warn!(
                "magnitude {} exceeds the coarsest unit, truncated to {} bits",
                magnitude, self.value_bits
            );
            magnitude &= limit;
        }
        self.pack(negative && self.signed, unit as u32, magnitude)
    }

    pub fn decode(&self, raw: u32) -> i32 {
        let magnitude = raw & math::field_mask(self.value_bits);
        let negative = self.signed && (raw >> self.sign_offset()) & 0b1 != 0;
        math::apply_sign(negative, magnitude.wrapping_mul(self.scale(self.unit(raw))))
    }

    const fn pack(&self, negative: bool, unit: u32, magnitude: u32) -> u32 {
        magnitude | (unit << self.value_bits) | ((negative as u32) << self.sign_offset())
    }
}

/// How a quantity maps onto its register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Auto-scaled over a unit ladder.
    Ladder(Ladder),
    /// `raw = value + offset`, no scaling and no sign field.
    Offset(i32),
}

/// Fixed configuration of one quantity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    /// Register width the transport writes.
    pub register_bits: u8,
    /// Reserved raw value meaning "no data".
    pub error_value: u32,
    pub encoding: Encoding,
}

impl Quantity {
    pub fn encode(&self, value: i32) -> u32 {
        match &self.encoding {
            Encoding::Ladder(ladder) => ladder.encode(value),
            Encoding::Offset(offset) => value.wrapping_add(*offset) as u32,
        }
    }

    pub fn decode(&self, raw: u32) -> i32 {
        match &self.encoding {
            Encoding::Ladder(ladder) => ladder.decode(raw),
            Encoding::Offset(offset) => (raw as i32).wrapping_sub(*offset),
        }
    }

    /// Whether `raw` is the reserved "no data" value of this quantity.
    pub const fn is_error(&self, raw: u32) -> bool {
        raw == self.error_value
    }
}

/// Seconds, auto-scaled up to days.
pub const TIME: Quantity = Quantity {
    register_bits: 8,
    error_value: 0xFF,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 6,
        unit_bits: 2,
        ratios: &[60, 60, 24],
        signed: false,
    }),
};

/// Tenths of degree Celsius.
pub const TEMPERATURE: Quantity = Quantity {
    register_bits: 12,
    // all ones: -204.7 degrees, outside any sensor range
    error_value: 0xFFF,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 11,
        unit_bits: 0,
        ratios: &[],
        signed: true,
    }),
};

/// Millivolts, switching to decivolts.
pub const VOLTAGE: Quantity = Quantity {
    register_bits: 16,
    error_value: 0xFFFF,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 15,
        unit_bits: 1,
        ratios: &[100],
        signed: false,
    }),
};

/// Microamps, auto-scaled up to deciamps.
pub const CURRENT: Quantity = Quantity {
    register_bits: 16,
    error_value: 0xFFFF,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 14,
        unit_bits: 2,
        ratios: &[100, 10, 100],
        signed: false,
    }),
};

/// Milliwatts or millivolt-amperes, auto-scaled up to decawatts.
pub const ELECTRICAL_POWER: Quantity = Quantity {
    register_bits: 16,
    error_value: 0x7FFF,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 13,
        unit_bits: 2,
        ratios: &[100, 10, 10],
        signed: true,
    }),
};

/// Milliwatt-hours or millivolt-ampere-hours, auto-scaled up to decawatt-hours.
pub const ELECTRICAL_ENERGY: Quantity = Quantity {
    register_bits: 16,
    error_value: 0x7FFF,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 13,
        unit_bits: 2,
        ratios: &[100, 10, 10],
        signed: true,
    }),
};

/// Power factor in hundredths.
pub const POWER_FACTOR: Quantity = Quantity {
    register_bits: 8,
    error_value: 0x7F,
    encoding: Encoding::Ladder(Ladder {
        value_bits: 7,
        unit_bits: 0,
        ratios: &[],
        signed: true,
    }),
};

/// dBm, offset so that the thermal noise floor maps to zero.
pub const RF_POWER: Quantity = Quantity {
    register_bits: 8,
    error_value: 0xFF,
    encoding: Encoding::Offset(174),
};

/// Calendar year, counted from 2000.
pub const YEAR: Quantity = Quantity {
    register_bits: 8,
    error_value: 0xFF,
    encoding: Encoding::Offset(-2000),
};

/// Quantity kinds carried by node registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Kind {
    Time = 0,
    Temperature = 1,
    Voltage = 2,
    Current = 3,
    ElectricalPower = 4,
    ElectricalEnergy = 5,
    PowerFactor = 6,
    RfPower = 7,
    Year = 8,
}

impl Kind {
    pub const ALL: [Kind; 9] = [
        Kind::Time,
        Kind::Temperature,
        Kind::Voltage,
        Kind::Current,
        Kind::ElectricalPower,
        Kind::ElectricalEnergy,
        Kind::PowerFactor,
        Kind::RfPower,
        Kind::Year,
    ];

    pub const fn quantity(self) -> &'static Quantity {
        match self {
            Kind::Time => &TIME,
            Kind::Temperature => &TEMPERATURE,
            Kind::Voltage => &VOLTAGE,
            Kind::Current => &CURRENT,
            Kind::ElectricalPower => &ELECTRICAL_POWER,
            Kind::ElectricalEnergy => &ELECTRICAL_ENERGY,
            Kind::PowerFactor => &POWER_FACTOR,
            Kind::RfPower => &RF_POWER,
            Kind::Year => &YEAR,
        }
    }

    pub fn encode(self, value: i32) -> u32 {
        self.quantity().encode(value)
    }

    pub fn decode(self, raw: u32) -> i32 {
        self.quantity().decode(raw)
    }
}
