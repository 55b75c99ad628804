mod identifier;
pub use identifier::*;

use std::fmt::{Display, Formatter, Write};
use crate::constant::{CANFD_FRAME_MAX_SIZE, CAN_FRAME_MAX_SIZE};
use crate::error::CanError;
use crate::utils::can_dlc;

/// One raw CAN or CAN-FD message as handed over by the transport.
///
/// The payload is only reachable through [`CanMessage::data`], so a decoded
/// [`Pdu`](crate::isotp::Pdu) can never observe it changing underneath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanMessage {
    id: Id,
    data: Vec<u8>,
    can_fd: bool,
}

impl CanMessage {
    /// Create a classic CAN message, payloads above 8 bytes need [`CanMessage::new_fd`].
    pub fn new(id: impl Into<Id>, data: &[u8]) -> Result<Self, CanError> {
        let length = data.len();
        if length > CAN_FRAME_MAX_SIZE {
            return Err(CanError::DataOutOfRange(length));
        }
        Ok(Self { id: id.into(), data: data.to_vec(), can_fd: false })
    }

    /// Create a CAN-FD message.
    ///
    /// `data` is the logical payload of up to 64 bytes; [`CanMessage::dlc`] reports the
    /// DLC it is padded to on the wire.
    pub fn new_fd(id: impl Into<Id>, data: &[u8]) -> Result<Self, CanError> {
        let length = data.len();
        if length > CANFD_FRAME_MAX_SIZE {
            return Err(CanError::DataOutOfRange(length));
        }
        Ok(Self { id: id.into(), data: data.to_vec(), can_fd: true })
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Extended (29-bit) identifiers select extended addressing.
    #[inline]
    pub fn is_extended(&self) -> bool {
        self.id.is_extended()
    }

    #[inline]
    pub fn is_can_fd(&self) -> bool {
        self.can_fd
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn dlc(&self) -> Option<usize> {
        can_dlc(self.length(), self.can_fd)
    }
}

impl Display for CanMessage {
    /// Output message as a short `asc`-like line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let data_str = self.data
            .iter()
            .fold(String::new(), |mut out, &b| {
                let _ = write!(out, "{b:02x} ");
                out
            });

        write!(f, "{}{: >8x}{: <4} d {: >2} {}",
               if self.can_fd { "CANFD " } else { "" },
               self.id.into_bits(),
               if self.is_extended() { "x" } else { "" },
               self.dlc().unwrap_or_default(),
               data_str.trim_end(),
        )
    }
}
