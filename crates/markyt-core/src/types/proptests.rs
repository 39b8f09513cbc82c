//! Property-based tests for core types.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::{CustomValue, LeadId, SequenceId};
    use proptest::prelude::*;
    use uuid::Uuid;

    proptest! {
        #[test]
        fn test_lead_id_roundtrip(s in "\\PC+") {
            let id = LeadId::new(s.clone());
            assert_eq!(id.as_str(), &s);
        }

        #[test]
        fn test_lead_id_numeric_and_string_json_agree(n in any::<i64>()) {
            let from_number: LeadId =
                serde_json::from_str(&n.to_string()).unwrap();
            let from_string: LeadId =
                serde_json::from_str(&format!("\"{n}\"")).unwrap();
            assert_eq!(from_number, from_string);
        }

        #[test]
        fn test_sequence_id_roundtrip(uuid in any::<u128>()) {
            let uuid = Uuid::from_u128(uuid);
            let id = SequenceId::from_uuid(uuid);
            assert_eq!(id.into_uuid(), uuid);
        }

        #[test]
        fn test_sequence_id_display_parse_roundtrip(uuid in any::<u128>()) {
            let uuid = Uuid::from_u128(uuid);
            let id = SequenceId::from_uuid(uuid);
            let string = id.to_string();
            let parsed: SequenceId = string.parse().unwrap();
            assert_eq!(id, parsed);
        }

        #[test]
        fn test_custom_value_list_render_joins_every_element(
            items in prop::collection::vec("[a-z]{1,8}", 1..6)
        ) {
            let rendered = CustomValue::List(items.clone()).render();
            for item in &items {
                assert!(rendered.contains(item));
            }
            assert_eq!(rendered.matches(", ").count(), items.len() - 1);
        }
    }
}
