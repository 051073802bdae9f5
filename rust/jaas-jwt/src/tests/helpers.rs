use base64::Engine;
use serde_json::Value;
use std::sync::Once;

static INITIALIZE_TRACING: Once = Once::new();

pub fn initialize_tracing() {
    use tracing_subscriber::prelude::*;
    INITIALIZE_TRACING.call_once(|| {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "jaas_jwt=debug".into()),
            ))
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

/// The pieces of a compact token: decoded header and payload JSON, the
/// signed `header.payload` string and the raw signature.
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    pub signed_data: String,
    pub signature: Vec<u8>,
}

pub fn decode_token(token: &str) -> DecodedToken {
    let parts: Vec<&str> = token.split('.').collect();
    assert_eq!(parts.len(), 3, "Expected three token segments in {token}");

    let decode = |part: &str| {
        base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(part)
            .unwrap()
    };

    DecodedToken {
        header: serde_json::from_slice(&decode(parts[0])).unwrap(),
        payload: serde_json::from_slice(&decode(parts[1])).unwrap(),
        signed_data: format!("{}.{}", parts[0], parts[1]),
        signature: decode(parts[2]),
    }
}
