use strum_macros::Display;
use thiserror::Error;

/// The segment of a token that failed to encode
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum TokenPart {
    Header,
    Payload,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Could not configure token: {0}")]
    Configuration(String),

    #[error("Could not encode token {part}: {source}")]
    Encoding {
        part: TokenPart,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not sign token: {0}")]
    Signing(anyhow::Error),
}

impl JwtError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        JwtError::Configuration(message.into())
    }
}
