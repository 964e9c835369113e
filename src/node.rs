//! Node boards and the node list held by the master.
//!
//! Board families with a fixed number of instances own a single address;
//! families that can be stacked own a contiguous address range.

use core::ops::RangeInclusive;

use log::{debug, trace, warn};
use serde_derive::{Deserialize, Serialize};

use crate::Error;

pub const NODE_ADDRESS_RANGE_LVRM: u8 = 8;
pub const NODE_ADDRESS_RANGE_DDRM: u8 = 8;
pub const NODE_ADDRESS_RANGE_RRM: u8 = 8;
pub const NODE_ADDRESS_RANGE_R4S8CR: u8 = 15;

/// Board identifier reported by each node.
///
/// Marshalled as its protocol code, not as a variant index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum BoardId {
    Lvrm = 0,
    Bpsm = 1,
    Ddrm = 2,
    Uhfm = 3,
    Gpsm = 4,
    Sm = 5,
    Dim = 6,
    Rrm = 7,
    Dmm = 8,
    Mpmcm = 9,
    R4s8cr = 10,
    /// Unassigned slot or unreadable board.
    Error = 0xFF,
}

impl BoardId {
    /// Number of real board identifiers.
    pub const COUNT: usize = 11;

    pub const ALL: [BoardId; Self::COUNT] = [
        BoardId::Lvrm,
        BoardId::Bpsm,
        BoardId::Ddrm,
        BoardId::Uhfm,
        BoardId::Gpsm,
        BoardId::Sm,
        BoardId::Dim,
        BoardId::Rrm,
        BoardId::Dmm,
        BoardId::Mpmcm,
        BoardId::R4s8cr,
    ];

    pub const fn try_from_u8(code: u8) -> Option<BoardId> {
        match code {
            0 => Some(BoardId::Lvrm),
            1 => Some(BoardId::Bpsm),
            2 => Some(BoardId::Ddrm),
            3 => Some(BoardId::Uhfm),
            4 => Some(BoardId::Gpsm),
            5 => Some(BoardId::Sm),
            6 => Some(BoardId::Dim),
            7 => Some(BoardId::Rrm),
            8 => Some(BoardId::Dmm),
            9 => Some(BoardId::Mpmcm),
            10 => Some(BoardId::R4s8cr),
            0xFF => Some(BoardId::Error),
            _ => None,
        }
    }

    pub const fn into_u8(self) -> u8 {
        self as u8
    }

    /// Addresses the board family may occupy. The master board (DMM) sits at
    /// the master address.
    pub const fn address_range(self) -> Option<RangeInclusive<NodeAddress>> {
        let (start, end) = match self {
            BoardId::Lvrm => (NodeAddress::LVRM_START, NodeAddress::LVRM_END),
            BoardId::Ddrm => (NodeAddress::DDRM_START, NodeAddress::DDRM_END),
            BoardId::Rrm => (NodeAddress::RRM_START, NodeAddress::RRM_END),
            BoardId::R4s8cr => (NodeAddress::R4S8CR_START, NodeAddress::R4S8CR_END),
            BoardId::Bpsm => (NodeAddress::BPSM, NodeAddress::BPSM),
            BoardId::Uhfm => (NodeAddress::UHFM, NodeAddress::UHFM),
            BoardId::Gpsm => (NodeAddress::GPSM, NodeAddress::GPSM),
            BoardId::Sm => (NodeAddress::SM, NodeAddress::SM),
            BoardId::Dim => (NodeAddress::DIM, NodeAddress::DIM),
            BoardId::Dmm => (NodeAddress::MASTER, NodeAddress::MASTER),
            BoardId::Mpmcm => (NodeAddress::MPMCM, NodeAddress::MPMCM),
            BoardId::Error => return None,
        };
        Some(RangeInclusive::new(start, end))
    }

    #[cfg(feature = "board-name")]
    pub const fn name(self) -> &'static str {
        match self {
            BoardId::Error => "UNKNOWN",
            id => BOARD_NAMES[id as usize],
        }
    }
}

#[cfg(feature = "board-name")]
pub const BOARD_NAMES: [&str; BoardId::COUNT] = [
    "LVRM",
    "BPSM",
    "DDRM",
    "UHFM",
    "GPSM",
    "SM",
    "RS485-BRIDGE",
    "RRM",
    "DMM",
    "MPMCM",
    "R4S8CR",
];

impl From<BoardId> for u8 {
    fn from(value: BoardId) -> Self {
        value.into_u8()
    }
}

impl TryFrom<u8> for BoardId {
    type Error = Error;

    // `Self::Error` would clash with the `BoardId::Error` variant
    fn try_from(value: u8) -> Result<Self, Error> {
        Self::try_from_u8(value).ok_or(Error::InvalidBoardId(value))
    }
}

/// Bus address of a node.
///
/// Deserialization goes through the same range check as [`NodeAddress::new`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(into = "u8", try_from = "u8")]
pub struct NodeAddress(u8);

impl NodeAddress {
    pub const MASTER: Self = Self(0x00);
    pub const DIM: Self = Self(0x01);
    pub const BPSM: Self = Self(0x02);
    pub const UHFM: Self = Self(0x03);
    pub const GPSM: Self = Self(0x04);
    pub const SM: Self = Self(0x05);
    pub const MPMCM: Self = Self(0x06);
    pub const LVRM_START: Self = Self(0x20);
    pub const LVRM_END: Self = Self(Self::LVRM_START.0 + NODE_ADDRESS_RANGE_LVRM - 1);
    pub const DDRM_START: Self = Self(Self::LVRM_END.0 + 1);
    pub const DDRM_END: Self = Self(Self::DDRM_START.0 + NODE_ADDRESS_RANGE_DDRM - 1);
    pub const RRM_START: Self = Self(Self::DDRM_END.0 + 1);
    pub const RRM_END: Self = Self(Self::RRM_START.0 + NODE_ADDRESS_RANGE_RRM - 1);
    pub const R4S8CR_START: Self = Self(0x70);
    pub const R4S8CR_END: Self = Self(Self::R4S8CR_START.0 + NODE_ADDRESS_RANGE_R4S8CR - 1);
    /// Size of the address space.
    pub const LAST: u8 = Self::R4S8CR_END.0 + 1;
    /// Unassigned address.
    pub const ERROR: Self = Self(0xFF);

    pub const fn new(raw: u8) -> Option<Self> {
        if raw < Self::LAST {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn into_u8(self) -> u8 {
        self.0
    }

    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }

    /// Board family owning this address, if any.
    pub fn board_family(self) -> Option<BoardId> {
        BoardId::ALL.into_iter().find(|id| {
            id.address_range()
                .map_or(false, |range| range.contains(&self))
        })
    }
}

impl From<NodeAddress> for u8 {
    fn from(value: NodeAddress) -> Self {
        value.into_u8()
    }
}

impl TryFrom<u8> for NodeAddress {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(Error::InvalidNodeAddress(value))
    }
}

/// A board found on the bus.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Node {
    pub address: NodeAddress,
    pub board_id: BoardId,
}

impl Node {
    pub const UNASSIGNED: Node = Node {
        address: NodeAddress::ERROR,
        board_id: BoardId::Error,
    };

    pub const fn new(address: NodeAddress, board_id: BoardId) -> Self {
        Self { address, board_id }
    }

    pub const fn is_unassigned(&self) -> bool {
        self.address.is_error()
    }
}

pub const NODE_LIST_CAPACITY: usize = NodeAddress::LAST as usize;

/// Fixed capacity list of the nodes discovered on the bus.
///
/// The list itself does no locking; share it behind the caller's own mutex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeList {
    list: [Node; NODE_LIST_CAPACITY],
    count: u8,
}

impl NodeList {
    pub const fn new() -> Self {
        Self {
            list: [Node::UNASSIGNED; NODE_LIST_CAPACITY],
            count: 0,
        }
    }

    /// Marks every slot unassigned and empties the list.
    pub fn reset(&mut self) {
        trace!("reset node list ({} nodes)", self.count);
        self.list.fill(Node::UNASSIGNED);
        self.count = 0;
    }

    /// Appends a discovered node.
    pub fn push(&mut self, node: Node) -> Result<(), Error> {
        let raw = node.address.into_u8();
        if NodeAddress::new(raw).is_none() {
            warn!("rejected node with invalid address {:#04x}", raw);
            return Err(Error::InvalidNodeAddress(raw));
        }
        if self.find(node.address).is_some() {
            warn!("node {:#04x} already listed", raw);
            return Err(Error::DuplicateNode(raw));
        }
        // capacity is the whole address space, so a unique valid address
        // always finds a free slot
        let slot = self
            .list
            .get_mut(self.count as usize)
            .ok_or(Error::NodeListFull)?;
        *slot = node;
        self.count += 1;
        debug!("node {:#04x} board {} added", raw, node.board_id.into_u8());
        Ok(())
    }

    pub const fn len(&self) -> usize {
        self.count as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.iter().nth(index)
    }

    pub fn find(&self, address: NodeAddress) -> Option<&Node> {
        self.iter().find(|node| node.address == address)
    }

    /// Listed nodes, in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.list[..self.len()].iter()
    }

    /// Every slot, including the unassigned ones past the end of the list.
    pub fn slots(&self) -> &[Node] {
        &self.list
    }
}

impl Default for NodeList {
    fn default() -> Self {
        Self::new()
    }
}
