//! Property tests for the Base64URL codec and JSON helpers

use cryypt_jwt_editor::{codec, json};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = codec::encode(&bytes);
        prop_assert!(!encoded.contains(['=', '+', '/']));
        prop_assert_eq!(codec::decode(&encoded).ok(), Some(bytes));
    }

    #[test]
    fn test_decode_never_panics(text in "\\PC{0,64}") {
        let _ = codec::decode(&text);
    }

    #[test]
    fn test_format_is_stable(n in any::<i64>(), s in "[a-z]{0,12}") {
        let text = format!("{{\"n\":{n},\"s\":\"{s}\"}}");
        let once = json::format(&text, 2);
        prop_assert_eq!(json::format(&once, 2), once.clone());
        prop_assert!(json::can_parse(&once));
    }
}
