//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Post body accepted by create and update.
///
/// Text fields are optional on the wire so that a missing field surfaces
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostPayload {
    #[serde(default)]
    #[validate(range(min = 1))]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(required, length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1, message = "author must not be empty"))]
    pub author: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> PostPayload {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn complete_body_is_valid() {
        let body = payload(serde_json::json!({
            "title": "title", "content": "content", "author": "author"
        }));
        assert!(body.validate().is_ok());
        assert_eq!(body.id, None);
    }

    #[test]
    fn empty_field_is_rejected() {
        let body = payload(serde_json::json!({
            "id": 1, "title": "title", "content": "content", "author": ""
        }));
        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("author"));
    }

    #[test]
    fn missing_field_is_rejected() {
        let body = payload(serde_json::json!({ "title": "title", "author": "author" }));
        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn non_positive_id_is_rejected() {
        let body = payload(serde_json::json!({
            "id": 0, "title": "title", "content": "content", "author": "author"
        }));
        assert!(body.validate().is_err());
    }
}
