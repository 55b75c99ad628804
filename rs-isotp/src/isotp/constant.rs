use crate::constant::CANFD_FRAME_MAX_SIZE;

/// Largest length the single frame short form (SF_DL nibble) may carry.
pub const SINGLE_FRAME_MAX_LENGTH: usize = 7;
/// Smallest length accepted in the single frame escape form.
pub const SINGLE_FRAME_ESCAPE_MIN_LENGTH: usize = 6;
/// Largest length accepted in the single frame escape form.
pub const SINGLE_FRAME_ESCAPE_MAX_LENGTH: usize = CANFD_FRAME_MAX_SIZE - 2;

/// Minimum first frame length under standard addressing.
pub const FIRST_FRAME_MIN_LENGTH: u32 = 8;
/// Minimum first frame length under extended addressing.
pub const FIRST_FRAME_MIN_LENGTH_EXTENDED: u32 = 7;
/// Largest length the 12-bit FF_DL field can carry.
pub const FIRST_FRAME_MAX_SHORT_LENGTH: u32 = 0x0FFF;
pub const FIRST_FRAME_HEADER_SIZE: usize = 2;
pub const FIRST_FRAME_ESCAPE_HEADER_SIZE: usize = 6;

pub const CONSECUTIVE_FRAME_HEADER_SIZE: usize = 1;
pub const CONSECUTIVE_SEQUENCE_MASK: u8 = 0x0F;

pub const FLOW_CONTROL_FRAME_SIZE: usize = 3;

/// ST_min values up to this byte are whole milliseconds.
pub const ST_MIN_MILLIS_MAX: u8 = 0x7F;
/// ST_min values in `ST_MIN_MICROS_MIN..=ST_MIN_MICROS_MAX` are multiples of 100us.
pub const ST_MIN_MICROS_MIN: u8 = 0xF1;
pub const ST_MIN_MICROS_MAX: u8 = 0xF9;
pub(crate) const ST_MIN_MICROS_BASE: u8 = 0xF0;
pub(crate) const ST_MIN_MICROS_STEP: u64 = 100;
