//! Build ISO-TP payloads that [`Pdu::decode`](super::Pdu::decode) accepts.
//!
//! Payloads are never padded: a padded single frame would move its data offset.

use crate::constant::CAN_FRAME_MAX_SIZE;
use crate::error::IsoTpError;
use super::{FlowControlState, FrameType, SeparationTime};
use super::constant::*;
use super::parser::minimum_length;

/// Encode a single frame.
///
/// Short form for up to 7 bytes (6 under extended addressing), escape form for longer data,
/// which needs a CAN-FD frame.
pub fn encode_single(data: &[u8], extended: bool) -> Result<Vec<u8>, IsoTpError> {
    let length = data.len();
    let mut result = match length {
        0 => return Err(IsoTpError::InvalidLength { frame_type: FrameType::Single, length }),
        SINGLE_FRAME_MAX_LENGTH if extended => {
            vec![FrameType::Single as u8, length as u8]
        },
        ..=SINGLE_FRAME_MAX_LENGTH => vec![FrameType::Single as u8 | length as u8],
        ..=SINGLE_FRAME_ESCAPE_MAX_LENGTH => vec![FrameType::Single as u8, length as u8],
        _ => return Err(IsoTpError::InvalidLength { frame_type: FrameType::Single, length }),
    };
    result.extend_from_slice(data);

    Ok(result)
}

/// Encode a first frame announcing `length` bytes in total and carrying the first chunk `data`.
///
/// Fails when `length` is not above what a single frame of the resulting size could carry.
pub fn encode_first(length: u32, data: &[u8], extended: bool) -> Result<Vec<u8>, IsoTpError> {
    let mut result = match length {
        1..=FIRST_FRAME_MAX_SHORT_LENGTH => {
            let len_h = ((length & 0x0F00) >> 8) as u8;
            let len_l = (length & 0x00FF) as u8;
            vec![FrameType::First as u8 | len_h, len_l]
        },
        _ => {
            let mut temp = vec![FrameType::First as u8, 0x00];
            temp.extend(length.to_be_bytes());
            temp
        },
    };
    result.extend_from_slice(data);

    let minimum = minimum_length(result.len(), extended, CAN_FRAME_MAX_SIZE);
    if length < minimum {
        return Err(IsoTpError::LengthTooSmall { length, minimum });
    }

    Ok(result)
}

/// Encode a consecutive frame, `sequence` wraps modulo 16.
pub fn encode_consecutive(sequence: u8, data: &[u8]) -> Vec<u8> {
    let mut result = vec![FrameType::Consecutive as u8 | (sequence & CONSECUTIVE_SEQUENCE_MASK)];
    result.extend_from_slice(data);
    result
}

pub fn encode_flow_control(state: FlowControlState,
                           block_size: u8,
                           st_min: SeparationTime,
) -> [u8; FLOW_CONTROL_FRAME_SIZE] {
    let byte0_h: u8 = FrameType::FlowControl.into();
    let byte0_l: u8 = state.into();
    [byte0_h | byte0_l, block_size, st_min.into()]
}
