//! Compact JWS serialization of a token's header and claims.

use crate::{
    claims::{ClaimsMap, HeaderMap, ALGORITHM_HEADER},
    crypto::KeyMaterial,
    error::{JwtError, TokenPart},
};
use base64::Engine;
use serde::Serialize;

/// Helper trait to encode structs as base64 as part of creating a JWT
pub trait Base64Encode: Serialize {
    fn jwt_base64_encode(&self) -> Result<String, serde_json::Error> {
        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(serde_json::to_vec(self)?))
    }
}

impl<T> Base64Encode for T where T: Serialize {}

/// Turns a header map and a claim set into a signed token string.
pub trait TokenSigner {
    fn sign(
        &self,
        headers: &HeaderMap,
        payload: &ClaimsMap,
        key: &dyn KeyMaterial,
    ) -> Result<String, JwtError>;
}

/// Produces `base64url(header).base64url(payload).base64url(signature)`,
/// with the `alg` header taken from the signing key.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompactJws;

impl TokenSigner for CompactJws {
    fn sign(
        &self,
        headers: &HeaderMap,
        payload: &ClaimsMap,
        key: &dyn KeyMaterial,
    ) -> Result<String, JwtError> {
        let mut header = headers.clone();
        header.insert(ALGORITHM_HEADER.into(), key.get_jwt_algorithm_name());

        let header_base64 = header
            .jwt_base64_encode()
            .map_err(|source| JwtError::Encoding {
                part: TokenPart::Header,
                source,
            })?;
        let payload_base64 = payload
            .jwt_base64_encode()
            .map_err(|source| JwtError::Encoding {
                part: TokenPart::Payload,
                source,
            })?;

        let signed_data = format!("{header_base64}.{payload_base64}");
        let signature = key
            .sign(signed_data.as_bytes())
            .map_err(JwtError::Signing)?;
        let signature_base64 =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature.as_slice());

        Ok(format!("{signed_data}.{signature_base64}"))
    }
}
