//! Concrete implementation of the subcommand that signs tokens
use anyhow::Result;
use jaas_jwt::TokenBuilder;

use crate::native::{cli::SignArgs, config::TokenConfig, key::KeyFile};

/// Resolve the token settings, load the signing key and produce a signed
/// token. Settings from the `--config` file are applied first, flags last.
pub async fn sign(args: SignArgs) -> Result<String> {
    let file_config = match &args.config {
        Some(config_path) => TokenConfig::read(config_path).await?,
        None => TokenConfig::default(),
    };
    let config = file_config.overlay(TokenConfig::from(args));

    let key_file = KeyFile::new(config.key_path());
    let key_material = key_file.require_key().await?;

    let mut builder = TokenBuilder::new(config.options())?;
    let token = builder.sign_with(&key_material)?;

    info!(
        "Signed token with key {} for room {}",
        key_file.path().display(),
        config.room.as_deref().unwrap_or("*")
    );

    Ok(token)
}
