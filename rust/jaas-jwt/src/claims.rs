//! Claim names and values as they appear on the wire.
//!
//! Token header fields are plain strings. Payload claims are a
//! [`ClaimValue`], which serializes untagged so that a string stays a JSON
//! string, an integer stays a JSON number and a mapping becomes a JSON
//! object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const AUDIENCE: &str = "jitsi";
pub const ISSUER: &str = "chat";
pub const TOKEN_TYPE: &str = "JWT";
/// Room name that grants access to every room of the tenant
pub const ANY_ROOM: &str = "*";

pub const TYPE_HEADER: &str = "typ";
pub const ALGORITHM_HEADER: &str = "alg";
pub const KEY_ID_HEADER: &str = "kid";

pub const AUDIENCE_CLAIM: &str = "aud";
pub const ISSUER_CLAIM: &str = "iss";
pub const EXPIRATION_CLAIM: &str = "exp";
pub const NOT_BEFORE_CLAIM: &str = "nbf";
pub const ROOM_CLAIM: &str = "room";
pub const SUBJECT_CLAIM: &str = "sub";
pub const CONTEXT_CLAIM: &str = "context";

/// Claims that [crate::TokenBuilder::set_claim] refuses to write: `aud` and
/// `iss` are fixed for every JaaS token, and `context` is assembled from the
/// user and feature claims at signing time.
pub const RESERVED_CLAIMS: &[&str] = &[AUDIENCE_CLAIM, ISSUER_CLAIM, CONTEXT_CLAIM];

pub const USER_CONTEXT: &str = "user";
pub const FEATURES_CONTEXT: &str = "features";

pub const USER_ID_CLAIM: &str = "id";
pub const USER_AVATAR_CLAIM: &str = "avatar";
pub const USER_NAME_CLAIM: &str = "name";
pub const USER_EMAIL_CLAIM: &str = "email";
pub const MODERATOR_CLAIM: &str = "moderator";

pub const LIVESTREAMING_FEATURE: &str = "livestreaming";
pub const RECORDING_FEATURE: &str = "recording";
pub const OUTBOUND_CALL_FEATURE: &str = "outbound-call";
pub const TRANSCRIPTION_FEATURE: &str = "transcription";

pub type ClaimsMap = BTreeMap<String, ClaimValue>;
pub type HeaderMap = BTreeMap<String, String>;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum ClaimValue {
    String(String),
    Integer(i64),
    Mapping(ClaimsMap),
}

impl ClaimValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ClaimValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&ClaimsMap> {
        match self {
            ClaimValue::Mapping(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::String(value)
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_owned())
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Integer(value)
    }
}

/// JaaS consumers expect flags as the strings `"true"` and `"false"`, never
/// as JSON booleans.
impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::String(value.to_string())
    }
}

impl From<ClaimsMap> for ClaimValue {
    fn from(value: ClaimsMap) -> Self {
        ClaimValue::Mapping(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClaimValue, ClaimsMap};
    use serde_json::json;

    #[test]
    fn it_serializes_values_without_a_tag() {
        let mapping = ClaimsMap::from([
            ("name".to_owned(), ClaimValue::from("someone")),
            ("exp".to_owned(), ClaimValue::from(1_700_000_000i64)),
            ("moderator".to_owned(), ClaimValue::from(true)),
        ]);

        assert_eq!(
            serde_json::to_value(ClaimValue::from(mapping)).unwrap(),
            json!({
                "name": "someone",
                "exp": 1_700_000_000i64,
                "moderator": "true"
            })
        );
    }

    #[test]
    fn it_reads_back_nested_mappings() {
        let value: ClaimValue =
            serde_json::from_value(json!({ "user": { "id": "u-1" }, "nbf": 10 })).unwrap();
        let mapping = value.as_mapping().unwrap();

        assert_eq!(mapping["nbf"].as_integer(), Some(10));
        assert_eq!(
            mapping["user"].as_mapping().unwrap()["id"].as_str(),
            Some("u-1")
        );
    }
}
