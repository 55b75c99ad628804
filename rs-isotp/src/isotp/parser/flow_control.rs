use crate::error::IsoTpError;
use crate::isotp::{FlowControlState, FrameType, SeparationTime, FLOW_CONTROL_FRAME_SIZE};
use crate::utils::nibbles;
use super::Header;

pub(crate) fn decode_flow_control(data: &[u8]) -> Result<Header, IsoTpError> {
    let length = data.len();
    if length != FLOW_CONTROL_FRAME_SIZE {
        return Err(IsoTpError::InvalidLength { frame_type: FrameType::FlowControl, length });
    }

    let state = FlowControlState::try_from(nibbles(data[0]).1)?;
    let st_min = SeparationTime::try_from(data[2])?;

    Ok(Header::FlowControl { state, block_size: data[1], st_min })
}
