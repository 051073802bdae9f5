//! Concrete implementation of the subcommand that creates signing keys
use anyhow::Result;
use std::path::Path;

use crate::native::key::KeyFile;

/// Create an RSA signing key at the given path
pub async fn key_create(path: &Path, bits: usize) -> Result<()> {
    let key_file = KeyFile::new(path);
    let key_material = key_file.create_key(bits).await?;

    info!(
        "Key at {} has a {}-bit modulus",
        key_file.path().display(),
        key_material.modulus_bits()
    );

    Ok(())
}
