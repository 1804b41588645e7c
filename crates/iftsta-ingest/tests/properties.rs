//! Property tests for consignment grouping.

use iftsta_ingest::decode;
use proptest::prelude::*;

/// Segments that may appear inside a consignment group.
fn body_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("STS+1+21'".to_string()),
        Just("GIN+BN+00340434161234567890'".to_string()),
        Just("FTX+AAO+++note'".to_string()),
        Just("DTM+334:20240115:102'".to_string()),
        Just("LOC+5+DEHAM'".to_string()),
        Just("stray'".to_string()),
    ]
}

/// A message with `count` consignment groups, each a CNI segment followed by body segments.
fn message() -> impl Strategy<Value = (usize, String)> {
    prop::collection::vec(prop::collection::vec(body_segment(), 0..5), 0..8).prop_map(|groups| {
        let body: String = groups
            .iter()
            .enumerate()
            .map(|(index, segments)| format!("CNI+{index}+C{index}'{}", segments.concat()))
            .collect();
        (
            groups.len(),
            format!("UNB+UNOC:3+S+R+240115:1230+1'BGM+23'{body}UNT+1+1'"),
        )
    })
}

proptest! {
    #[test]
    fn group_count_matches_group_starts((count, text) in message()) {
        let document = decode(&text).expect("decode message");
        prop_assert_eq!(document.len(), count);
    }

    #[test]
    fn consignment_order_matches_source((count, text) in message()) {
        let document = decode(&text).expect("decode message");
        let numbers: Vec<String> = document.consignments.into_iter().map(|c| c.number).collect();
        let expected: Vec<String> = (0..count).map(|i| format!("C{i}")).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn decode_never_panics_on_noise(text in "[A-Z+:' ]{0,64}") {
        // DTM+334 cannot be formed from this alphabet, so decoding always succeeds.
        prop_assert!(decode(&text).is_ok());
    }
}
