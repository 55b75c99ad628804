mod single;
pub(crate) use single::*;
mod first;
pub(crate) use first::*;
mod consecutive;
pub(crate) use consecutive::*;
mod flow_control;
pub(crate) use flow_control::*;

use crate::error::IsoTpError;
use super::{FlowControlState, SeparationTime};

/// Type specific header fields produced by one parser.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Header {
    Single { length: usize, offset: usize },
    First { length: u32, offset: usize },
    Consecutive { sequence: u8, offset: usize },
    FlowControl { state: FlowControlState, block_size: u8, st_min: SeparationTime },
}

#[inline]
fn ensure_len(data: &[u8], expect: usize) -> Result<(), IsoTpError> {
    let actual = data.len();
    if actual < expect {
        return Err(IsoTpError::TruncatedHeader { expect, actual });
    }
    Ok(())
}
