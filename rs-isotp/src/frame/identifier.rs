use bitflags::bitflags;
use crate::constant::{EFF_MASK, SFF_MASK};

bitflags! {
    /// Identifier flags carried in the upper bits of a raw 32-bit CAN identifier.
    ///
    /// Flag values correspond to the format used by the Linux [SocketCAN][socketcan] library,
    /// so an all-in-one identifier read from a socket can be turned into an [`Id`] directly.
    ///
    /// [socketcan]: https://www.kernel.org/doc/Documentation/networking/can.txt
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IdentifierFlags: u32 {
        /// The frame is using the extended format i.e. 29-bit extended identifiers.
        const EXTENDED = 0x8000_0000;
        /// The frame is a remote transmission request.
        const REMOTE = 0x4000_0000;
        /// The frame is an error frame.
        const ERROR = 0x2000_0000;
    }
}

/// CAN identifier. The variant is the addressing mode seen by the ISO-TP decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Id {
    Standard(u16),
    Extended(u32),
}

impl From<Id> for u32 {
    #[inline]
    fn from(id: Id) -> Self {
        id.into_bits()
    }
}

impl From<u32> for Id {
    #[inline]
    fn from(id: u32) -> Self {
        Self::_from_bits(id)
    }
}

impl From<u16> for Id {
    #[inline]
    fn from(id: u16) -> Self {
        Self::_from_bits(id as u32)
    }
}

impl Id {
    #[inline]
    pub fn new_standard(id: u16) -> Self {
        Self::Standard(id & SFF_MASK as u16)
    }

    #[inline]
    pub fn new_extended(id: u32) -> Self {
        Self::Extended(id & EFF_MASK)
    }

    #[inline]
    pub fn from_bits(id: u32, force_extend: Option<bool>) -> Self {
        match force_extend {
            Some(true) => Self::new_extended(id),
            _ => Self::_from_bits(id)
        }
    }

    #[inline]
    pub fn into_bits(self) -> u32 {
        match self {
            Self::Standard(id) => id as u32,
            Self::Extended(id) => id,
        }
    }

    #[inline]
    pub fn from_hex(hex_str: &str, force_extend: Option<bool>) -> Option<Self> {
        let bits = u32::from_str_radix(hex_str, 16).ok()?;

        Some(Self::from_bits(bits, force_extend))
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        matches!(self, Self::Extended(_))
    }

    #[inline]
    fn _from_bits(id: u32) -> Self {
        match id & IdentifierFlags::EXTENDED.bits() {
            0 => if id & EFF_MASK > SFF_MASK {
                Self::new_extended(id)
            } else {
                Self::new_standard(id as u16)
            }
            _ => Self::new_extended(id),
        }
    }
}
