use crate::crypto::{JwtSignatureAlgorithm, KeyMaterial};
use anyhow::{anyhow, Result};
use rsa::{traits::PublicKeyParts, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

/// The smallest RSA modulus (in bits) that will be used to sign a token
pub const MINIMUM_RSA_MODULUS_BITS: usize = 2048;

/// RSA key material that signs with RS256 (RSASSA-PKCS1-v1_5 over SHA-256).
///
/// The private half is optional so that a public key alone can be used to
/// verify signatures; attempting to sign without it is an error.
#[derive(Clone)]
pub struct RsaKeyMaterial(pub RsaPublicKey, pub Option<RsaPrivateKey>);

impl RsaKeyMaterial {
    pub fn from_private_key(private_key: RsaPrivateKey) -> Self {
        RsaKeyMaterial(RsaPublicKey::from(&private_key), Some(private_key))
    }

    /// Size of the modulus in significant bits
    pub fn modulus_bits(&self) -> usize {
        self.0.n().bits()
    }

    pub fn has_private_key(&self) -> bool {
        self.1.is_some()
    }
}

impl From<RsaPrivateKey> for RsaKeyMaterial {
    fn from(private_key: RsaPrivateKey) -> Self {
        RsaKeyMaterial::from_private_key(private_key)
    }
}

impl KeyMaterial for RsaKeyMaterial {
    fn get_jwt_algorithm_name(&self) -> String {
        JwtSignatureAlgorithm::RS256.to_string()
    }

    fn sign(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let private_key = self
            .1
            .as_ref()
            .ok_or_else(|| anyhow!("No private key; cannot sign data"))?;

        let modulus_bits = self.modulus_bits();
        if modulus_bits < MINIMUM_RSA_MODULUS_BITS {
            tracing::warn!("Refusing to sign with a {}-bit RSA key", modulus_bits);
            return Err(anyhow!(
                "RSA modulus is {modulus_bits} bits; at least {MINIMUM_RSA_MODULUS_BITS} bits are required"
            ));
        }

        let hashed = Sha256::digest(payload);
        let padding = Pkcs1v15Sign::new::<Sha256>();

        Ok(private_key.sign(padding, hashed.as_ref())?)
    }

    fn verify(&self, payload: &[u8], signature: &[u8]) -> Result<()> {
        let hashed = Sha256::digest(payload);
        let padding = Pkcs1v15Sign::new::<Sha256>();

        self.0
            .verify(padding, hashed.as_ref(), signature)
            .map_err(|error| anyhow!(error))
    }
}
