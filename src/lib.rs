//! Unified node access
//!
//! Shared between the bus master and the node boards: the fixed-width
//! register representation of physical quantities, the node address map and
//! the register access descriptors.
//!
//! Every measurement is auto-scaled into its register: the finest unit whose
//! magnitude fits the value field is selected, and the unit index is sent
//! along with the value.
//!
//! ```
//! use una::codec::{decode_voltage, encode_voltage};
//!
//! // fits in mV
//! assert_eq!(decode_voltage(encode_voltage(12_345)), 12_345);
//! // sent in dV, sub-100 mV precision is dropped
//! assert_eq!(decode_voltage(encode_voltage(123_456)), 123_400);
//! ```
#![no_std]

pub mod access;
pub mod codec;
mod error;
pub mod marshal;
pub mod math;
pub mod node;
pub mod quantity;
pub mod register;

pub use error::Error;
pub use node::{BoardId, Node, NodeAddress, NodeList};
pub use quantity::{Kind, Quantity};
