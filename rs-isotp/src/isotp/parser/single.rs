use crate::error::IsoTpError;
use crate::isotp::{FrameType, SINGLE_FRAME_ESCAPE_MIN_LENGTH, SINGLE_FRAME_MAX_LENGTH};
use crate::utils::nibbles;
use super::{ensure_len, Header};

/// Decode the SF_DL of a single frame.
///
/// A non-zero low nibble is the short form; zero selects the escape form where byte 1 holds
/// the length. Data always occupies the trailing `length` bytes of the payload.
pub(crate) fn decode_single(data: &[u8], extended: bool) -> Result<Header, IsoTpError> {
    ensure_len(data, 1)?;
    let size = data.len();
    let length = match nibbles(data[0]).1 {
        0 => escape_length(data, extended)?,
        v => short_length(v as usize, size, extended)?,
    };

    Ok(Header::Single { length, offset: size - length })
}

fn short_length(length: usize, size: usize, extended: bool) -> Result<usize, IsoTpError> {
    if length > SINGLE_FRAME_MAX_LENGTH
        || length > size - 1
        // extended addressing leaves six data bytes in a classic frame
        || (length == SINGLE_FRAME_MAX_LENGTH && extended) {
        return Err(invalid(length));
    }

    Ok(length)
}

fn escape_length(data: &[u8], extended: bool) -> Result<usize, IsoTpError> {
    ensure_len(data, 2)?;
    let length = data[1] as usize;
    if length < SINGLE_FRAME_ESCAPE_MIN_LENGTH
        || (length == SINGLE_FRAME_MAX_LENGTH && !extended)
        || length > data.len() - 2 {
        return Err(invalid(length));
    }

    Ok(length)
}

#[inline]
fn invalid(length: usize) -> IsoTpError {
    IsoTpError::InvalidLength { frame_type: FrameType::Single, length }
}
