use core::fmt;

/// Errors reported by the fallible conversions and the node list.
///
/// The value codec itself is total and never produces one of these.
#[derive(Debug)]
pub enum Error {
    /// Byte is not a known board identifier.
    InvalidBoardId(u8),
    /// Byte is outside the node address space.
    InvalidNodeAddress(u8),
    InvalidReplyType(u8),
    InvalidRegisterAccess(u8),
    /// Every slot of the node list is taken.
    NodeListFull,
    /// A node with this address is already listed.
    DuplicateNode(u8),
    /// Byte buffer shorter than the value needs.
    BufferTooSmall { needed: usize, available: usize },
    Marshal(ssmarshal::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBoardId(id) => write!(f, "invalid board id {:#04x}", id),
            Error::InvalidNodeAddress(addr) => write!(f, "invalid node address {:#04x}", addr),
            Error::InvalidReplyType(code) => write!(f, "invalid reply type {}", code),
            Error::InvalidRegisterAccess(code) => write!(f, "invalid register access {}", code),
            Error::NodeListFull => f.write_str("node list is full"),
            Error::DuplicateNode(addr) => write!(f, "node {:#04x} already listed", addr),
            Error::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: {} bytes needed, {} available", needed, available)
            }
            Error::Marshal(err) => write!(f, "marshal error: {:?}", err),
        }
    }
}

impl From<ssmarshal::Error> for Error {
    fn from(err: ssmarshal::Error) -> Self {
        Error::Marshal(err)
    }
}
