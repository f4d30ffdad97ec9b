//! Property-based tests for report framing.
//! Verifies invariants hold for ALL valid inputs, not just fixed examples.

use anime_protocol::{Command, Packet, MAX_WRITE_LEN, REPORT_ID, REPORT_LEN};

proptest::proptest! {
    /// Every write-range report is exactly one full report with the tag first
    /// and zero padding after the data.
    #[test]
    fn write_range_report_is_fixed_size(
        start in 0u16..2000u16,
        data in proptest::collection::vec(1u8..=255u8, 0..=MAX_WRITE_LEN),
    ) {
        let packet = Command::WriteRange { start, data: &data }.to_packet().unwrap();
        let bytes = packet.as_bytes();

        assert_eq!(bytes.len(), REPORT_LEN);
        assert_eq!(bytes[0], REPORT_ID);
        let used = 1 + 6 + data.len();
        assert!(bytes[used..].iter().all(|&b| b == 0));
    }

    /// A captured write-range report decodes to the same offset and bytes.
    #[test]
    fn captured_write_range_decodes(
        start in 0u16..2000u16,
        data in proptest::collection::vec(0u8..=255u8, 1..=MAX_WRITE_LEN),
    ) {
        let sent = Command::WriteRange { start, data: &data }.to_packet().unwrap();
        let captured = Packet::from_report(sent.as_bytes()).unwrap();

        match Command::from_packet(&captured).unwrap() {
            Command::WriteRange { start: s, data: d } => {
                assert_eq!(s, start);
                assert_eq!(d, &data[..]);
            }
            other => panic!("decoded {:?}", other),
        }
    }
}
