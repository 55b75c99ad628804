use crate::error::IsoTpError;
use crate::isotp::{CONSECUTIVE_FRAME_HEADER_SIZE, CONSECUTIVE_SEQUENCE_MASK};
use super::{ensure_len, Header};

/// Sequence continuity is checked by whoever reassembles the message.
pub(crate) fn decode_consecutive(data: &[u8]) -> Result<Header, IsoTpError> {
    ensure_len(data, CONSECUTIVE_FRAME_HEADER_SIZE)?;

    Ok(Header::Consecutive {
        sequence: data[0] & CONSECUTIVE_SEQUENCE_MASK,
        offset: CONSECUTIVE_FRAME_HEADER_SIZE,
    })
}
