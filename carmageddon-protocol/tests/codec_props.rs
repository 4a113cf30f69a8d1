//! Property tests for the panel line codec

use carmageddon_protocol::{
    format_outbound, parse_inbound, ButtonMask, LineAssembler, ParseError, MAX_LINE_LEN,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn outbound_fields_survive_parse(sensor in any::<u16>(), mask in any::<u8>()) {
        let mut buf = [0u8; 16];
        let len = format_outbound(sensor, ButtonMask::new(mask), &mut buf).unwrap();

        // Same field order, so the inbound parser reads it back verbatim
        let msg = parse_inbound(&buf[..len]).unwrap();
        prop_assert_eq!(msg.speed, sensor as f32);
        prop_assert_eq!(msg.collectible_count, mask as u32);

        let reformatted = format_outbound(msg.speed as u16, ButtonMask::new(msg.collectible_count as u8), &mut buf).unwrap();
        prop_assert_eq!(reformatted, len);
    }

    #[test]
    fn formatted_speed_and_count_parse_back(tenths in 0u32..=9990, count in 0u32..=100_000) {
        let speed = tenths as f32 / 10.0;
        let text = format!("{:.1},{}\n", speed, count);
        let msg = parse_inbound(text.as_bytes()).unwrap();
        prop_assert!((msg.speed - speed).abs() < 0.05);
        prop_assert_eq!(msg.collectible_count, count);
    }

    #[test]
    fn negative_counts_rejected(speed in 0.0f32..999.0, count in i32::MIN..0) {
        let text = format!("{},{}\n", speed, count);
        prop_assert_eq!(parse_inbound(text.as_bytes()), Err(ParseError::NegativeCount));
    }

    #[test]
    fn assembler_never_yields_overlong(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        let mut asm = LineAssembler::new();
        for byte in data {
            if let Ok(Some(line)) = asm.feed(byte) {
                prop_assert!(line.len() <= MAX_LINE_LEN);
                prop_assert!(!line.contains(&b'\n'));
            }
        }
    }

    #[test]
    fn too_small_buffer_always_fails(sensor in any::<u16>(), mask in any::<u8>(), cap in 0usize..4) {
        let mut buf = vec![0u8; cap];
        let result = format_outbound(sensor, ButtonMask::new(mask), &mut buf);
        prop_assert!(result.is_err());
    }
}
