//! **`rs-isotp`**, ISO 15765-2 (ISO-TP) PDU decoding on top of CAN and CAN-FD messages.
//!
//! ```
//! use rs_isotp::{CanMessage, isotp::{FrameType, Pdu}};
//!
//! let message = CanMessage::new(0x7E8_u16, &[0x03, 0x22, 0xF1, 0x90]).unwrap();
//! let pdu = Pdu::decode(&message).unwrap();
//! assert_eq!(pdu.frame_type(), FrameType::Single);
//! assert_eq!(pdu.data(), &[0x22, 0xF1, 0x90]);
//! ```

mod constant;
pub use constant::*;
mod frame;
pub use frame::*;

pub mod config;
pub mod error;
pub mod isotp;
pub mod utils;
