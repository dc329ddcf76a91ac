//! Property tests for envelope parsing.

use proptest::prelude::*;
use serde::Deserialize;
use vet_advice_bot::{parse_envelope, BotError};

#[derive(Debug, Deserialize, PartialEq)]
struct Data {
    value: i64,
}

proptest! {
    #[test]
    fn noise_around_object_is_ignored(
        prefix in "[^{}]{0,24}",
        suffix in "[^{}]{0,24}",
        value in any::<i64>(),
    ) {
        let body = format!("{}{{\"success\":true,\"data\":{{\"value\":{}}}}}{}", prefix, value, suffix);
        let data: Data = parse_envelope(&body).unwrap();
        prop_assert_eq!(data, Data { value });
    }

    #[test]
    fn bodies_without_objects_are_invalid(body in "[^{}]{0,40}") {
        prop_assert!(matches!(
            parse_envelope::<Data>(&body),
            Err(BotError::InvalidFormat(_))
        ));
    }
}
