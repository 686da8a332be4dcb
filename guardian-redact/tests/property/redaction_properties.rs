use guardian_core::models::{FieldMap, Record};
use guardian_core::traits::{IFieldRedactor, IRecordRedactor};
use guardian_redact::patterns::masks;
use guardian_redact::{FieldRedactor, RecordRedactor};
use proptest::prelude::*;
use serde_json::Value;

// ── Raw PII never survives ────────────────────────────────────────────────

proptest! {
    #[test]
    fn phone_number_never_survives(phone in "[6-9][0-9]{9}") {
        let input = format!("call {phone} now");
        let result = FieldRedactor::new().redact_field(&input);
        prop_assert!(result.matched_any);
        prop_assert!(!result.text.contains(&phone), "raw phone in {}", result.text);
    }

    #[test]
    fn national_id_never_survives(a in "[0-5][0-9]{3}", b in "[0-9]{4}", c in "[0-9]{4}") {
        let input = format!("id {a} {b} {c}");
        let result = FieldRedactor::new().redact_field(&input);
        prop_assert_eq!(result.text, "id XXXX XXXX XXXX");
    }

    #[test]
    fn ipv4_keeps_network_prefix(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let input = format!("host {a}.{b}.{c}.{d}");
        let result = FieldRedactor::new().redact_field(&input);
        prop_assert_eq!(result.text, format!("host {a}.{b}.{c}.x"));
    }
}

// ── Redaction is idempotent on its own output ─────────────────────────────

proptest! {
    #[test]
    fn idempotent_with_email(user in "[a-z]{3,8}", domain in "[a-z]{3,8}") {
        let input = format!("contact: {user}@{domain}.com");
        let redactor = FieldRedactor::new();
        let first = redactor.redact_field(&input);
        let second = redactor.redact_field(&first.text);
        prop_assert_eq!(&first.text, &second.text);
        prop_assert!(!second.matched_any);
    }

    #[test]
    fn idempotent_with_long_device_id(token in "[0-9a-f]{20,64}") {
        let input = format!("device {token}");
        let redactor = FieldRedactor::new();
        let first = redactor.redact_field(&input);
        let second = redactor.redact_field(&first.text);
        prop_assert_eq!(&first.text, &second.text);
    }
}

// ── Clean text and shape ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn plain_words_are_untouched(text in "[a-z]{1,10}( [a-z]{1,10}){0,5}") {
        let result = FieldRedactor::new().redact_field(&text);
        prop_assert_eq!(&result.text, &text);
        prop_assert!(!result.matched_any);
    }

    #[test]
    fn device_mask_preserves_char_length(token in "[A-Za-z0-9\\-]{0,64}") {
        let masked = masks::mask_device_id(&token);
        prop_assert_eq!(masked.chars().count(), token.chars().count());
    }

    #[test]
    fn record_shape_is_preserved(
        entries in prop::collection::vec(("[a-z]{1,8}", any::<i64>(), any::<bool>()), 0..10)
    ) {
        let mut fields = FieldMap::new();
        for (key, n, as_text) in entries {
            let value = if as_text {
                Value::String(format!("n{n}"))
            } else {
                Value::from(n)
            };
            fields.insert(key, value);
        }
        let record = Record::new("prop", fields);
        let result = RecordRedactor::new().redact_record(&record);

        let in_keys: Vec<&String> = record.fields.keys().collect();
        let out_keys: Vec<&String> = result.redacted.keys().collect();
        prop_assert_eq!(in_keys, out_keys);
        for (key, value) in &record.fields {
            if !value.is_string() {
                prop_assert_eq!(&result.redacted[key.as_str()], value);
            }
        }
    }
}
