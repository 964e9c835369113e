//! Register access descriptors exchanged with the bus transport.

use serde_derive::{Deserialize, Serialize};

use crate::node::NodeAddress;
use crate::Error;

/// Whether a register can be written by the master.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegisterAccess {
    ReadOnly = 0,
    ReadWrite = 1,
}

impl TryFrom<u8> for RegisterAccess {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RegisterAccess::ReadOnly),
            1 => Ok(RegisterAccess::ReadWrite),
            _ => Err(Error::InvalidRegisterAccess(value)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccessType {
    Read = 0,
    Write = 1,
}

/// Reply expected from a node after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ReplyType {
    None = 0,
    Ok = 1,
    Value = 2,
}

impl TryFrom<u8> for ReplyType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReplyType::None),
            1 => Ok(ReplyType::Ok),
            2 => Ok(ReplyType::Value),
            _ => Err(Error::InvalidReplyType(value)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReplyParameters {
    pub reply_type: ReplyType,
    pub timeout_ms: u32,
}

/// Single register read or write.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccessParameters {
    pub node_addr: NodeAddress,
    pub reg_addr: u8,
    pub reply_params: ReplyParameters,
}

/// Raw text command sent to a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CommandParameters<'a> {
    pub node_addr: NodeAddress,
    pub command: &'a str,
}

/// Outcome of a register access, as one status byte.
///
/// ```text
///  7      6..4     3                 2              1             0
/// | type | unused | sequence timeout | reply timeout | parser error | error received |
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccessStatus(u8);

impl AccessStatus {
    const TYPE: u8 = 1 << 7;
    const FLAGS: u8 = !Self::TYPE;

    pub const SEQUENCE_TIMEOUT: u8 = 1 << 3;
    pub const REPLY_TIMEOUT: u8 = 1 << 2;
    pub const PARSER_ERROR: u8 = 1 << 1;
    pub const ERROR_RECEIVED: u8 = 1 << 0;

    pub const fn new(access_type: AccessType) -> Self {
        Self((access_type as u8) << 7)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn into_bits(self) -> u8 {
        self.0
    }

    pub const fn access_type(self) -> AccessType {
        if self.0 & Self::TYPE != 0 {
            AccessType::Write
        } else {
            AccessType::Read
        }
    }

    /// Error flags, type bit excluded.
    pub const fn flags(self) -> u8 {
        self.0 & Self::FLAGS
    }

    pub const fn is_error(self) -> bool {
        self.flags() != 0
    }

    pub const fn with_flag(self, flag: u8) -> Self {
        Self(self.0 | (flag & Self::FLAGS))
    }

    pub const fn sequence_timeout(self) -> bool {
        self.0 & Self::SEQUENCE_TIMEOUT != 0
    }

    pub const fn reply_timeout(self) -> bool {
        self.0 & Self::REPLY_TIMEOUT != 0
    }

    pub const fn parser_error(self) -> bool {
        self.0 & Self::PARSER_ERROR != 0
    }

    pub const fn error_received(self) -> bool {
        self.0 & Self::ERROR_RECEIVED != 0
    }
}

/// Two-bit encoding of a digital signal read back from a node.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BitRepresentation {
    Bit0 = 0b00,
    Bit1 = 0b01,
    ForcedHardware = 0b10,
    Error = 0b11,
}

impl BitRepresentation {
    /// Reads the two low bits; upper bits are ignored.
    pub const fn from_bits_truncating(bits: u32) -> Self {
        match bits & 0b11 {
            0b00 => BitRepresentation::Bit0,
            0b01 => BitRepresentation::Bit1,
            0b10 => BitRepresentation::ForcedHardware,
            _ => BitRepresentation::Error,
        }
    }

    pub const fn into_bits(self) -> u32 {
        self as u32
    }
}

impl From<bool> for BitRepresentation {
    fn from(value: bool) -> Self {
        if value {
            BitRepresentation::Bit1
        } else {
            BitRepresentation::Bit0
        }
    }
}
