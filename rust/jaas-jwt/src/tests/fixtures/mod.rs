use crate::key_material::rsa::RsaKeyMaterial;
use rsa::{pkcs8::DecodePrivateKey, RsaPrivateKey};

pub fn rsa_key() -> RsaKeyMaterial {
    RsaKeyMaterial::from_private_key(
        RsaPrivateKey::from_pkcs8_der(include_bytes!("./rsa_2048.pk8")).unwrap(),
    )
}

/// A 1024-bit key; too small to sign a token with
pub fn undersized_rsa_key() -> RsaKeyMaterial {
    RsaKeyMaterial::from_private_key(
        RsaPrivateKey::from_pkcs8_der(include_bytes!("./rsa_1024.pk8")).unwrap(),
    )
}

/// A 2044-bit key; its modulus still occupies 256 bytes
pub fn short_modulus_rsa_key() -> RsaKeyMaterial {
    RsaKeyMaterial::from_private_key(
        RsaPrivateKey::from_pkcs8_der(include_bytes!("./rsa_2044.pk8")).unwrap(),
    )
}
