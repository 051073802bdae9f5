use anyhow::{anyhow, Result};
use jaas_jwt::key_material::rsa::{RsaKeyMaterial, MINIMUM_RSA_MODULUS_BITS};
use rsa::{
    pkcs1::DecodeRsaPrivateKey,
    pkcs8::{DecodePrivateKey, EncodePrivateKey, LineEnding},
    RsaPrivateKey,
};
use std::path::{Path, PathBuf};
use tokio::fs;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
#[cfg(unix)]
/// `chmod`-like permission given to private key files on unix systems.
const PRIVATE_KEY_PERMISSIONS: u32 = 0o100600;

/// Where the signing key is looked for when none is configured
pub const DEFAULT_KEY_PATH: &str = "./rsa-private.pem";
pub const DEFAULT_KEY_BITS: usize = 4096;

/// An RSA private key kept as PEM on disk.
///
/// ⚠️ The key is stored in clear text. Keep the file out of version control
/// and readable only by its owner.
#[derive(Clone, Debug)]
pub struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        KeyFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the key, or `None` if there is no file at the path. Both PKCS#8
    /// (`BEGIN PRIVATE KEY`) and PKCS#1 (`BEGIN RSA PRIVATE KEY`) PEM are
    /// accepted.
    pub async fn read_key(&self) -> Result<Option<RsaKeyMaterial>> {
        let pem = match fs::read_to_string(&self.path).await {
            Ok(pem) => pem,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        let private_key = RsaPrivateKey::from_pkcs8_pem(&pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(&pem))
            .map_err(|error| {
                anyhow!(
                    "Could not parse an RSA private key from {}: {}",
                    self.path.display(),
                    error
                )
            })?;

        let key_material = RsaKeyMaterial::from_private_key(private_key);
        if key_material.modulus_bits() < MINIMUM_RSA_MODULUS_BITS {
            warn!(
                "Key at {} is only {} bits; it will be refused for signing",
                self.path.display(),
                key_material.modulus_bits()
            );
        }

        Ok(Some(key_material))
    }

    pub async fn require_key(&self) -> Result<RsaKeyMaterial> {
        match self.read_key().await? {
            Some(key_material) => Ok(key_material),
            None => Err(anyhow!("No key found at {}", self.path.display())),
        }
    }

    /// Generate a key with a modulus of the given size and write it to the
    /// path. If a key already exists there, it is returned instead.
    pub async fn create_key(&self, bits: usize) -> Result<RsaKeyMaterial> {
        if bits < MINIMUM_RSA_MODULUS_BITS {
            return Err(anyhow!(
                "Refusing to create a {bits}-bit key; at least {MINIMUM_RSA_MODULUS_BITS} bits are required"
            ));
        }

        if let Some(key_material) = self.read_key().await? {
            return Ok(key_material);
        }

        debug!("Generating a {}-bit RSA key", bits);
        let private_key = tokio::task::spawn_blocking(move || {
            RsaPrivateKey::new(&mut rand::thread_rng(), bits)
        })
        .await??;

        let pem = private_key.to_pkcs8_pem(LineEnding::LF)?;
        fs::write(&self.path, pem.as_bytes()).await?;

        #[cfg(unix)]
        fs::set_permissions(
            &self.path,
            std::fs::Permissions::from_mode(PRIVATE_KEY_PERMISSIONS),
        )
        .await?;

        Ok(RsaKeyMaterial::from_private_key(private_key))
    }
}
