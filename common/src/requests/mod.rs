//! Wire types for the GitHub Contents API plus pure response interpretation.
//!
//! The interpretation functions take the HTTP status and raw body so the
//! conflict, malformed-response, and missing-marker paths can be exercised
//! without a browser; the frontend client only does transport.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{RemoteReadError, RemoteWriteError};
use crate::model::record::{Fields, Record};

/// Commit message attached to every conditional write.
pub const COMMIT_MESSAGE: &str = "Update records via web editor";

/// Status the API uses to signal a stale revision marker on write.
const CONFLICT_STATUS: u16 = 409;

#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
}

/// Body of the conditional `PUT`: new encoded content plus the revision
/// marker obtained from the most recent read or save.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest {
    pub message: String,
    pub content: String,
    pub sha: String,
}

impl UpdateRequest {
    pub fn new(records: &[Record], sha: &str) -> Self {
        Self {
            message: COMMIT_MESSAGE.to_string(),
            content: codec::encode_document(records),
            sha: sha.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub content: Option<UpdatedContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedContent {
    #[serde(default)]
    pub sha: Option<String>,
}

/// Interprets a `GET contents` response as rows plus the revision marker.
pub fn parse_contents(status: u16, body: &str) -> Result<(Vec<Fields>, String), RemoteReadError> {
    if !(200..300).contains(&status) {
        return Err(RemoteReadError::Status {
            status,
            body: body.trim().to_string(),
        });
    }
    let response: ContentsResponse =
        serde_json::from_str(body).map_err(|e| RemoteReadError::Malformed(e.to_string()))?;
    let sha = response
        .sha
        .filter(|s| !s.is_empty())
        .ok_or(RemoteReadError::MissingRevision)?;
    let rows = codec::decode_document(response.content.as_deref().unwrap_or_default())?;
    Ok((rows, sha))
}

/// Interprets a `PUT contents` response as the new revision marker.
///
/// A missing `content` object is a failure regardless of HTTP status, and a
/// 409 is reported as a distinct conflict so the user sees that the marker
/// went stale rather than a generic transport error.
pub fn parse_update(status: u16, body: &str) -> Result<String, RemoteWriteError> {
    if status == CONFLICT_STATUS {
        return Err(RemoteWriteError::Conflict);
    }
    if !(200..300).contains(&status) {
        return Err(RemoteWriteError::Rejected {
            status,
            body: body.trim().to_string(),
        });
    }
    let response: UpdateResponse =
        serde_json::from_str(body).map_err(|e| RemoteWriteError::Malformed(e.to_string()))?;
    response
        .content
        .and_then(|c| c.sha)
        .filter(|s| !s.is_empty())
        .ok_or(RemoteWriteError::MissingRevision)
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose};
    use serde_json::Value;

    use super::*;

    fn contents_body(json: &str, sha: &str) -> String {
        serde_json::json!({
            "content": general_purpose::STANDARD.encode(json),
            "sha": sha,
        })
        .to_string()
    }

    #[test]
    fn parse_contents_returns_rows_and_marker() {
        let body = contents_body(r#"[{"id":1,"Name":"A"}]"#, "abc");
        let (rows, sha) = parse_contents(200, &body).unwrap();

        assert_eq!(sha, "abc");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("id"), Some(&Value::from(1)));
        assert_eq!(rows[0].get("Name"), Some(&Value::from("A")));
    }

    #[test]
    fn parse_contents_requires_a_revision_marker() {
        let body = serde_json::json!({
            "content": general_purpose::STANDARD.encode("[]"),
        })
        .to_string();
        assert_eq!(
            parse_contents(200, &body),
            Err(RemoteReadError::MissingRevision)
        );
    }

    #[test]
    fn parse_contents_rejects_http_errors() {
        let err = parse_contents(404, r#"{"message":"Not Found"}"#).unwrap_err();
        assert!(matches!(err, RemoteReadError::Status { status: 404, .. }));
    }

    #[test]
    fn parse_contents_rejects_undeserializable_bodies() {
        assert!(matches!(
            parse_contents(200, "<html>"),
            Err(RemoteReadError::Malformed(_))
        ));
    }

    #[test]
    fn parse_contents_rejects_undecodable_content() {
        let body = serde_json::json!({ "content": "?!", "sha": "abc" }).to_string();
        assert!(matches!(
            parse_contents(200, &body),
            Err(RemoteReadError::Decode(_))
        ));
    }

    #[test]
    fn stale_marker_conflict_is_distinct_from_other_failures() {
        let err = parse_update(409, r#"{"message":"sha does not match"}"#).unwrap_err();
        assert_eq!(err, RemoteWriteError::Conflict);
        assert_ne!(
            err,
            RemoteWriteError::Rejected {
                status: 409,
                body: String::new()
            }
        );
    }

    #[test]
    fn parse_update_rejects_other_http_errors() {
        let err = parse_update(422, r#"{"message":"Invalid request"}"#).unwrap_err();
        assert!(matches!(err, RemoteWriteError::Rejected { status: 422, .. }));
    }

    #[test]
    fn parse_update_requires_content_even_on_success_status() {
        assert_eq!(
            parse_update(200, r#"{"commit":{"sha":"zzz"}}"#),
            Err(RemoteWriteError::MissingRevision)
        );
    }

    #[test]
    fn parse_update_returns_the_new_marker() {
        let body = r#"{"content":{"sha":"def"},"commit":{"sha":"zzz"}}"#;
        assert_eq!(parse_update(200, body).unwrap(), "def");
    }

    // Wire-level walk of the happy path: load with marker "abc", save the
    // edited row, and continue with the returned marker "def".
    #[test]
    fn marker_rotates_across_a_load_edit_save_cycle() {
        let body = contents_body(r#"[{"id":1,"Name":"A"}]"#, "abc");
        let (rows, sha) = parse_contents(200, &body).unwrap();
        assert_eq!(sha, "abc");

        let mut store = crate::store::RecordStore::from_fields(rows);
        store.update_field(0, "Name", "B".to_string());

        let request = UpdateRequest::new(store.records(), &sha);
        assert_eq!(request.sha, "abc");
        let sent = codec::decode_document(&request.content).unwrap();
        assert_eq!(sent[0].get("Name"), Some(&Value::from("B")));
        assert_eq!(sent[0].get("id"), Some(&Value::from(1)));

        let new_sha = parse_update(200, r#"{"content":{"sha":"def"}}"#).unwrap();
        assert_eq!(new_sha, "def");
        assert_ne!(new_sha, sha);
    }

    // Add-then-save on an empty document: exactly one row, fixed fields
    // empty, identifier present.
    #[test]
    fn add_then_save_serializes_the_single_fresh_row() {
        let (rows, sha) = parse_contents(200, &contents_body("[]", "abc")).unwrap();
        let mut store = crate::store::RecordStore::from_fields(rows);
        store.add_record();

        let request = UpdateRequest::new(store.records(), &sha);
        let sent = codec::decode_document(&request.content).unwrap();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].get("id").is_some_and(|id| !id.is_null()));
        assert_eq!(sent[0].get("Name"), Some(&Value::from("")));
    }
}
