//! Base64 + JSON codec for the managed file, matching the transfer encoding
//! used by the GitHub Contents API.

use base64::{Engine as _, engine::general_purpose};

use crate::error::DecodeError;
use crate::model::record::{Fields, Record};

/// Decodes a Contents API `content` body into the document's rows.
///
/// The API wraps base64 at 60 columns, so ASCII whitespace is stripped before
/// decoding. The decoded bytes must parse as a JSON array of objects.
pub fn decode_document(encoded: &str) -> Result<Vec<Fields>, DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| DecodeError::Json(e.to_string()))
}

/// Serializes the rows as a pretty-printed JSON array and base64-encodes the
/// result for the conditional write. Local row keys are not part of the file.
pub fn encode_document(records: &[Record]) -> String {
    let doc: Vec<&Fields> = records.iter().map(|r| &r.fields).collect();
    let json = serde_json::to_string_pretty(&doc)
        .expect("a field map always serializes to JSON");
    general_purpose::STANDARD.encode(json)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn fields(pairs: &[(&str, Value)]) -> Fields {
        let mut map = Fields::new();
        for (name, value) in pairs {
            map.insert(name.to_string(), value.clone());
        }
        map
    }

    #[test]
    fn round_trip_preserves_rows_order_and_value_types() {
        let rows = vec![
            fields(&[("id", Value::from(1)), ("Name", Value::from("A"))]),
            fields(&[("Name", Value::from("B")), ("phone", Value::from("555"))]),
        ];
        let records: Vec<Record> = rows
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, fields)| Record { key: i as u64, fields })
            .collect();

        let decoded = decode_document(&encode_document(&records)).unwrap();
        assert_eq!(decoded, rows);
    }

    #[test]
    fn decode_accepts_line_wrapped_base64() {
        let records = vec![Record {
            key: 1,
            fields: fields(&[("Name", Value::from("wrapped around the sixty column mark"))]),
        }];
        let encoded = encode_document(&records);
        let wrapped: String = encoded
            .chars()
            .enumerate()
            .flat_map(|(i, c)| {
                if i > 0 && i % 60 == 0 {
                    vec!['\n', c]
                } else {
                    vec![c]
                }
            })
            .collect();

        let decoded = decode_document(&(wrapped + "\n")).unwrap();
        assert_eq!(decoded[0], records[0].fields);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(matches!(
            decode_document("not-base64!"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn decode_rejects_json_that_is_not_an_array_of_objects() {
        let encoded = general_purpose::STANDARD.encode(r#"{"Name":"A"}"#);
        assert!(matches!(decode_document(&encoded), Err(DecodeError::Json(_))));
    }

    #[test]
    fn encode_is_pretty_printed() {
        let records = vec![Record {
            key: 1,
            fields: fields(&[("Name", Value::from("A"))]),
        }];
        let json = general_purpose::STANDARD
            .decode(encode_document(&records))
            .unwrap();
        let json = String::from_utf8(json).unwrap();
        assert!(json.contains("\n  {"));
    }
}
