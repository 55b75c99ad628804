use crate::constant::{CANFD_FRAME_MAX_SIZE, CAN_FRAME_MAX_SIZE};

/// Split a byte into its two nibbles, high nibble first.
///
/// ```
/// assert_eq!(rs_isotp::utils::nibbles(0x3A), (0x03, 0x0A));
/// ```
#[inline]
pub const fn nibbles(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & 0x0F)
}

/// get CAN dlc
#[inline]
pub fn can_dlc(length: usize, fd: bool) -> Option<usize> {
    if fd {
        match length {
            ..=CAN_FRAME_MAX_SIZE => Some(length),
            9..=12 =>  Some(12),
            13..=16 => Some(16),
            17..=20 => Some(20),
            21..=24 => Some(24),
            25..=32 => Some(32),
            33..=48 => Some(48),
            49..=CANFD_FRAME_MAX_SIZE => Some(64),
            _ => None,
        }
    }
    else {
        match length {
            ..=CAN_FRAME_MAX_SIZE => Some(length),
            _ => None,
        }
    }
}
