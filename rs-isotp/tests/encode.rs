use rand::Rng;
use rs_isotp::{CanMessage, Id, error::IsoTpError, isotp::*};

#[test]
fn test_single_round_trip() -> anyhow::Result<()> {
    let mut rng = rand::rng();
    for length in 1..=7_usize {
        let data: Vec<u8> = (0..length).map(|_| rng.random()).collect();
        let frame = encode_single(&data, false)?;
        assert_eq!(frame[0], length as u8);
        assert_eq!(&frame[1..], data.as_slice());

        let message = CanMessage::new(0x7E0_u16, &frame)?;
        let pdu = Pdu::decode(&message)?;
        assert_eq!(pdu.frame_type(), FrameType::Single);
        assert_eq!(pdu.length(), length);
        assert_eq!(pdu.offset(), frame.len() - length);
        assert_eq!(pdu.data(), data.as_slice());
    }
    Ok(())
}

#[test]
fn test_single_escape_form() -> anyhow::Result<()> {
    let data = hex::decode("01020304050607")?;
    assert_eq!(encode_single(&data, false)?, hex::decode("0701020304050607")?);

    let frame = encode_single(&data, true)?;
    assert_eq!(frame, hex::decode("000701020304050607")?);
    let message = CanMessage::new_fd(Id::new_extended(0x18DA_10F1), &frame)?;
    assert_eq!(Pdu::decode(&message)?.data(), data.as_slice());

    let data = vec![0x5A; 20];
    let frame = encode_single(&data, false)?;
    assert_eq!(&frame[..2], &[0x00, 20]);
    let message = CanMessage::new_fd(0x7E0_u16, &frame)?;
    let pdu = Pdu::decode(&message)?;
    assert_eq!((pdu.length(), pdu.offset()), (20, 2));

    assert_eq!(
        encode_single(&[], false),
        Err(IsoTpError::InvalidLength { frame_type: FrameType::Single, length: 0 })
    );
    assert_eq!(
        encode_single(&[0x00; 63], false),
        Err(IsoTpError::InvalidLength { frame_type: FrameType::Single, length: 63 })
    );
    Ok(())
}

#[test]
fn test_first() -> anyhow::Result<()> {
    let data = hex::decode("62f187445643")?;
    assert_eq!(encode_first(0x0f, &data, false)?, hex::decode("100f62f187445643")?);
    assert_eq!(encode_first(0x0FFF, &[], false)?, hex::decode("1fff")?);

    let frame = encode_first(4096, &[0xAA, 0xBB], false)?;
    assert_eq!(frame, hex::decode("100000001000aabb")?);
    let message = CanMessage::new(0x7E0_u16, &frame)?;
    let pdu = Pdu::decode(&message)?;
    assert_eq!(pdu.length(), 4096);
    assert_eq!(pdu.offset(), 6);
    Ok(())
}

#[test]
fn test_first_length_too_small() -> anyhow::Result<()> {
    assert_eq!(
        encode_first(5, &[0x01, 0x02, 0x03], false),
        Err(IsoTpError::LengthTooSmall { length: 5, minimum: 8 })
    );
    assert_eq!(encode_first(0, &[], false), Err(IsoTpError::LengthTooSmall { length: 0, minimum: 8 }));

    let data = hex::decode("010203040506")?;
    assert_eq!(encode_first(7, &data, false), Err(IsoTpError::LengthTooSmall { length: 7, minimum: 8 }));
    let frame = encode_first(7, &data, true)?;
    let message = CanMessage::new(Id::new_extended(0x18DA_10F1), &frame)?;
    assert_eq!(Pdu::decode(&message)?.length(), 7);

    // a 64 byte frame has to announce more than a 64 byte single frame carries
    let data = vec![0x33; 62];
    assert_eq!(encode_first(62, &data, false), Err(IsoTpError::LengthTooSmall { length: 62, minimum: 63 }));
    let frame = encode_first(63, &data, false)?;
    let message = CanMessage::new_fd(0x7E0_u16, &frame)?;
    assert_eq!(Pdu::decode(&message)?.length(), 63);
    Ok(())
}

#[test]
fn test_consecutive() -> anyhow::Result<()> {
    let data = hex::decode("37453230303030")?;
    assert_eq!(encode_consecutive(1, &data), hex::decode("2137453230303030")?);

    let frame = encode_consecutive(0x11, &data);
    assert_eq!(frame[0], 0x21);
    let message = CanMessage::new(0x7E0_u16, &frame)?;
    assert_eq!(Pdu::decode(&message)?.sequence(), Some(1));
    Ok(())
}

#[test]
fn test_flow_control() -> anyhow::Result<()> {
    let st_min = SeparationTime::try_from(0xF5)?;
    let frame = encode_flow_control(FlowControlState::Wait, 8, st_min);
    assert_eq!(frame, [0x31, 0x08, 0xF5]);

    let message = CanMessage::new(0x7E0_u16, &frame)?;
    let pdu = Pdu::decode(&message)?;
    assert_eq!(pdu.flag(), Some(FlowControlState::Wait));
    assert_eq!(pdu.block_size(), Some(8));
    assert_eq!(pdu.st_min(), Some(st_min));

    let frame = encode_flow_control(FlowControlState::default(), 0, SeparationTime::default());
    assert_eq!(frame, [0x30, 0x00, 0x00]);
    Ok(())
}

#[test]
fn test_separation_time_from_duration() {
    use std::time::Duration;

    let raw = |duration| SeparationTime::from_duration(duration).map(|st| st.raw());
    assert_eq!(raw(Duration::ZERO), Some(0x00));
    assert_eq!(raw(Duration::from_millis(20)), Some(0x14));
    assert_eq!(raw(Duration::from_millis(127)), Some(0x7F));
    assert_eq!(raw(Duration::from_micros(100)), Some(0xF1));
    assert_eq!(raw(Duration::from_micros(500)), Some(0xF5));
    assert_eq!(raw(Duration::from_micros(900)), Some(0xF9));
    assert_eq!(raw(Duration::from_micros(150)), None);
    assert_eq!(raw(Duration::from_micros(1_500)), None);
    assert_eq!(raw(Duration::from_millis(128)), None);

    for value in (0x00..=0x7F).chain(0xF1..=0xF9_u8) {
        let st = SeparationTime::try_from(value).unwrap();
        assert_eq!(SeparationTime::from_duration(st.as_duration()), Some(st));
    }
}
