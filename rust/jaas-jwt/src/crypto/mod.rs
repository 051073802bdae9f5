//! The signing seam between a token and the key that vouches for it.
//!
//! A [`KeyMaterial`] implementation encapsulates a keypair (or just the
//! public half of one). Anything that can name its JWT algorithm and
//! produce a signature over a byte string can be used to sign a JaaS token;
//! the crate ships an RSA implementation in [`crate::key_material::rsa`].

mod signature;

pub use signature::JwtSignatureAlgorithm;

use anyhow::Result;

/// This trait must be implemented by a struct that encapsulates cryptographic
/// keypair data. The trait represents the minimum required API capability for
/// producing a signed token from a cryptographic keypair, and verifying such
/// signatures.
pub trait KeyMaterial: Send + Sync {
    /// The algorithm that will be used to produce the signature returned by the
    /// sign method in this implementation
    fn get_jwt_algorithm_name(&self) -> String;

    /// Sign some data with this key
    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>>;

    /// Verify the alleged signature of some data against this key
    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<()>;
}
