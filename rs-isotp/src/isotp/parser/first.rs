use crate::error::IsoTpError;
use crate::isotp::{FIRST_FRAME_ESCAPE_HEADER_SIZE, FIRST_FRAME_HEADER_SIZE, FIRST_FRAME_MIN_LENGTH, FIRST_FRAME_MIN_LENGTH_EXTENDED};
use crate::utils::nibbles;
use super::{ensure_len, Header};

/// Decode the FF_DL of a first frame.
///
/// The 12-bit length spans the low nibble of byte 0 and byte 1. When it is zero the real
/// length follows as a big-endian `u32` in bytes 2..6. A first frame must announce more data
/// than a single frame of the same size could carry.
pub(crate) fn decode_first(data: &[u8],
                           extended: bool,
                           classic_frame_size: usize,
) -> Result<Header, IsoTpError> {
    let size = data.len();
    let minimum = minimum_length(size, extended, classic_frame_size);

    ensure_len(data, FIRST_FRAME_HEADER_SIZE)?;
    let ff_dl = (nibbles(data[0]).1 as u32) << 8 | data[1] as u32;
    let (length, offset) = match ff_dl {
        0 => {
            ensure_len(data, FIRST_FRAME_ESCAPE_HEADER_SIZE)?;
            let length = u32::from_be_bytes([data[2], data[3], data[4], data[5]]);
            (length, FIRST_FRAME_ESCAPE_HEADER_SIZE)
        },
        v => (v, FIRST_FRAME_HEADER_SIZE),
    };

    if length < minimum {
        return Err(IsoTpError::LengthTooSmall { length, minimum });
    }

    Ok(Header::First { length, offset })
}

/// CAN-FD sized frames scale the floor with the frame itself.
pub(crate) fn minimum_length(size: usize, extended: bool, classic_frame_size: usize) -> u32 {
    if size > classic_frame_size {
        let reserved = if extended { 2 } else { 1 };
        size.saturating_sub(reserved) as u32
    }
    else if extended {
        FIRST_FRAME_MIN_LENGTH_EXTENDED
    }
    else {
        FIRST_FRAME_MIN_LENGTH
    }
}
