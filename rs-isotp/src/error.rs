use crate::isotp::FrameType;

#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum CanError {
    #[error("RUST-CAN - data length: {0} is too large")]
    DataOutOfRange(usize),

    #[error("RUST-CAN - configuration error: {0}")]
    ConfigError(String),
}

/// Errors reported by a single ISO-TP decode attempt.
///
/// None of them leave state behind; the caller drops the frame and moves on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum IsoTpError {
    /// High nibble of the first byte is not one of the four frame types.
    #[error("ISO-TP - invalid frame type: {0:#X}")]
    InvalidFrameType(u8),
    /// Payload is too short to hold the header of the frame being parsed.
    #[error("ISO-TP - truncated header, expect at least {expect} bytes but got {actual}")]
    TruncatedHeader { expect: usize, actual: usize },
    /// Declared length is out of bounds for the frame, its form or its addressing mode.
    #[error("ISO-TP - invalid {frame_type} length: {length}")]
    InvalidLength { frame_type: FrameType, length: usize },
    /// First frame declares no more data than a single frame could carry.
    #[error("ISO-TP - first frame length: {length} is less than {minimum}")]
    LengthTooSmall { length: u32, minimum: u32 },
    #[error("ISO-TP - invalid flow control flag: {0:#X}")]
    InvalidFlowControlFlag(u8),
    #[error("ISO-TP - invalid separation time: {0:#04X}")]
    InvalidSeparationTime(u8),
}
