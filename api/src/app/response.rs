//! Response formatter
//!
//! Turns a lookup result into a caller-agnostic `{kind, payload}` value.
//! Records pass through untouched for the caller to render; every message
//! variant (informational, not found, invalid input) passes through verbatim.

use serde::Serialize;

use super::lookup_service::{LookupResult, Records};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Records,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Records(Records),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub kind: ResponseKind,
    pub payload: Payload,
}

impl Response {
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Message,
            payload: Payload::Text(text.into()),
        }
    }

    pub fn records(records: Records) -> Self {
        Self {
            kind: ResponseKind::Records,
            payload: Payload::Records(records),
        }
    }

    /// The message text, for message responses
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            Payload::Records(_) => None,
        }
    }
}

impl From<LookupResult> for Response {
    fn from(result: LookupResult) -> Self {
        match result {
            LookupResult::Records(records) => Response::records(records),
            LookupResult::Message(text)
            | LookupResult::NotFound(text)
            | LookupResult::Invalid(text) => Response::message(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Branch;

    #[test]
    fn messages_pass_through_verbatim() {
        for result in [
            LookupResult::Message("hello".to_string()),
            LookupResult::NotFound("hello".to_string()),
            LookupResult::Invalid("hello".to_string()),
        ] {
            let response = Response::from(result);
            assert_eq!(response.kind, ResponseKind::Message);
            assert_eq!(response.text(), Some("hello"));
        }
    }

    #[test]
    fn records_serialize_as_plain_list() {
        let response = Response::from(LookupResult::Records(Records::Branches(vec![Branch {
            branch_name: "Pune Central".to_string(),
            address: "1 FC Road".to_string(),
        }])));
        assert_eq!(response.kind, ResponseKind::Records);
        assert_eq!(response.text(), None);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "kind": "records",
                "payload": [{"branch_name": "Pune Central", "address": "1 FC Road"}]
            })
        );
    }

    #[test]
    fn message_serializes_as_string_payload() {
        let json = serde_json::to_value(Response::message("Order not found.")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "message", "payload": "Order not found."})
        );
    }
}
