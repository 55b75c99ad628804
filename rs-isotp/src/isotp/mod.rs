//! ISO 15765-2 PDU classification and decoding.
//!
//! A [`Pdu`] is decoded from exactly one [`CanMessage`] and borrows its payload. Reassembly of
//! first and consecutive frames, and pacing according to flow control, is left to the caller.

mod constant;
pub use constant::*;
mod encode;
pub use encode::*;
mod parser;

use std::fmt::{Display, Formatter};
use std::time::Duration;
use derive_getters::Getters;
use crate::config::DecodeConfig;
use crate::error::IsoTpError;
use crate::frame::CanMessage;
use crate::utils::nibbles;
use parser::Header;

/// ISO-TP frame type, valued as the high nibble of the first byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum FrameType {
    Single = 0x00,
    First = 0x10,
    Consecutive = 0x20,
    FlowControl = 0x30,
}

impl TryFrom<u8> for FrameType {
    type Error = IsoTpError;
    /// Classify from the whole first byte, the low nibble is ignored.
    fn try_from(byte0: u8) -> Result<Self, Self::Error> {
        match nibbles(byte0).0 {
            0x00 => Ok(Self::Single),
            0x01 => Ok(Self::First),
            0x02 => Ok(Self::Consecutive),
            0x03 => Ok(Self::FlowControl),
            v => Err(IsoTpError::InvalidFrameType(v)),
        }
    }
}

impl From<FrameType> for u8 {
    #[inline]
    fn from(value: FrameType) -> Self {
        value as u8
    }
}

impl Display for FrameType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => f.write_str("single frame"),
            Self::First => f.write_str("first frame"),
            Self::Consecutive => f.write_str("consecutive frame"),
            Self::FlowControl => f.write_str("flow control frame"),
        }
    }
}

impl FrameType {
    /// Determine the frame type of a message from the high nibble of its first byte.
    pub fn classify(message: &CanMessage) -> Result<Self, IsoTpError> {
        match message.data().first() {
            Some(&byte0) => Self::try_from(byte0),
            None => Err(IsoTpError::TruncatedHeader { expect: 1, actual: 0 }),
        }
    }
}

/// Flow control flag (FS), the low nibble of a flow control frame's first byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum FlowControlState {
    #[default]
    Continues = 0x00,
    Wait = 0x01,
    Overload = 0x02,
}

impl TryFrom<u8> for FlowControlState {
    type Error = IsoTpError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Continues),
            0x01 => Ok(Self::Wait),
            0x02 => Ok(Self::Overload),
            v => Err(IsoTpError::InvalidFlowControlFlag(v)),
        }
    }
}

impl From<FlowControlState> for u8 {
    #[inline]
    fn from(value: FlowControlState) -> Self {
        value as u8
    }
}

/// Minimum separation time (ST_min) requested by a flow control frame.
///
/// Keeps the raw byte, which is always one of the two valid ranges:
/// * `0x00..=0x7F`: milliseconds
/// * `0xF1..=0xF9`: `(value - 0xF0) * 100` microseconds
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct SeparationTime(u8);

impl TryFrom<u8> for SeparationTime {
    type Error = IsoTpError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            ..=ST_MIN_MILLIS_MAX | ST_MIN_MICROS_MIN..=ST_MIN_MICROS_MAX => Ok(Self(value)),
            v => Err(IsoTpError::InvalidSeparationTime(v)),
        }
    }
}

impl From<SeparationTime> for u8 {
    #[inline]
    fn from(value: SeparationTime) -> Self {
        value.0
    }
}

impl From<SeparationTime> for Duration {
    #[inline]
    fn from(value: SeparationTime) -> Self {
        value.as_duration()
    }
}

impl SeparationTime {
    /// Pick the ST_min byte that encodes `duration` exactly, if there is one.
    pub fn from_duration(duration: Duration) -> Option<Self> {
        let micros = duration.as_micros();
        let step = ST_MIN_MICROS_STEP as u128;
        match micros {
            1..=999 if micros % step == 0 => Some(Self(ST_MIN_MICROS_BASE + (micros / step) as u8)),
            _ if micros % 1_000 == 0 && micros / 1_000 <= ST_MIN_MILLIS_MAX as u128 => {
                Some(Self((micros / 1_000) as u8))
            },
            _ => None,
        }
    }

    #[inline]
    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        match self.0 {
            ..=ST_MIN_MILLIS_MAX => Duration::from_millis(self.0 as u64),
            v => Duration::from_micros((v - ST_MIN_MICROS_BASE) as u64 * ST_MIN_MICROS_STEP),
        }
    }
}

/// One decoded ISO-TP frame.
///
/// `data` is a view into the payload of `raw`. Fields that do not belong to
/// `frame_type` are `None`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Getters)]
pub struct Pdu<'a> {
    #[getter(copy)]
    frame_type: FrameType,
    #[getter(copy)]
    raw: &'a CanMessage,
    /// Declared length for single and first frames, bytes after the header for consecutive
    /// frames, zero for flow control.
    #[getter(copy)]
    length: usize,
    /// Index of the first data byte in the raw payload.
    #[getter(copy)]
    offset: usize,
    #[getter(copy)]
    data: &'a [u8],
    #[getter(copy)]
    sequence: Option<u8>,
    #[getter(copy)]
    flag: Option<FlowControlState>,
    #[getter(copy)]
    block_size: Option<u8>,
    #[getter(copy)]
    st_min: Option<SeparationTime>,
}

impl<'a> Pdu<'a> {
    /// Decode with the default [`DecodeConfig`].
    #[inline]
    pub fn decode(message: &'a CanMessage) -> Result<Self, IsoTpError> {
        Self::decode_with(message, &DecodeConfig::default())
    }

    pub fn decode_with(message: &'a CanMessage, config: &DecodeConfig) -> Result<Self, IsoTpError> {
        match Self::decode_inner(message, config) {
            Ok(pdu) => {
                log::trace!("ISO-TP - decoded {} from {}: length: {}, offset: {}",
                    pdu.frame_type, hex::encode(message.data()), pdu.length, pdu.offset);
                Ok(pdu)
            },
            Err(e) => {
                log::debug!("ISO-TP - rejected {}: {}", hex::encode(message.data()), e);
                Err(e)
            },
        }
    }

    /// Separation time as a [`Duration`], flow control frames only.
    #[inline]
    pub fn separation_time(&self) -> Option<Duration> {
        self.st_min.map(|st| st.as_duration())
    }

    fn decode_inner(message: &'a CanMessage, config: &DecodeConfig) -> Result<Self, IsoTpError> {
        let frame_type = FrameType::classify(message)?;
        let payload = message.data();
        let size = payload.len();
        if !config.allow_can_fd() && (message.is_can_fd() || size > config.classic_frame_size()) {
            return Err(IsoTpError::InvalidLength { frame_type, length: size });
        }

        let extended = message.is_extended();
        let header = match frame_type {
            FrameType::Single => parser::decode_single(payload, extended)?,
            FrameType::First => parser::decode_first(payload, extended, config.classic_frame_size())?,
            FrameType::Consecutive => parser::decode_consecutive(payload)?,
            FrameType::FlowControl => parser::decode_flow_control(payload)?,
        };

        let mut pdu = Self {
            frame_type,
            raw: message,
            length: 0,
            offset: size,
            data: &payload[size..],
            sequence: None,
            flag: None,
            block_size: None,
            st_min: None,
        };
        match header {
            Header::Single { length, offset } => {
                pdu.length = length;
                pdu.offset = offset;
            },
            Header::First { length, offset } => {
                pdu.length = length as usize;
                pdu.offset = offset;
            },
            Header::Consecutive { sequence, offset } => {
                pdu.length = size - offset;
                pdu.offset = offset;
                pdu.sequence = Some(sequence);
            },
            Header::FlowControl { state, block_size, st_min } => {
                pdu.flag = Some(state);
                pdu.block_size = Some(block_size);
                pdu.st_min = Some(st_min);
            },
        }
        pdu.data = &payload[pdu.offset..];

        Ok(pdu)
    }
}
