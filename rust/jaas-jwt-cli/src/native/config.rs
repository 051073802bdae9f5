use anyhow::{anyhow, Result};
use jaas_jwt::builder::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::{cli::SignArgs, key::DEFAULT_KEY_PATH};

/// Token settings, as read from a TOML file and/or the `sign` flags.
///
/// ```toml
/// key = "./rsa-private.pem"
/// api_key = "vpaas-magic-cookie-1234/abcdef"
/// tenant = "vpaas-magic-cookie-1234"
/// room = "*"
///
/// [user]
/// name = "someone"
/// moderator = true
///
/// [features]
/// recording = false
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TokenConfig {
    pub key: Option<PathBuf>,
    pub api_key: Option<String>,
    pub tenant: Option<String>,
    pub room: Option<String>,
    pub lifetime: Option<i64>,
    pub user: UserConfig,
    pub features: FeatureConfig,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub moderator: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FeatureConfig {
    pub livestreaming: Option<bool>,
    pub recording: Option<bool>,
    pub outbound_call: Option<bool>,
    pub transcription: Option<bool>,
}

impl TokenConfig {
    pub async fn read(path: &Path) -> Result<Self> {
        let toml_str = tokio::fs::read_to_string(path).await?;
        toml::from_str(&toml_str)
            .map_err(|error| anyhow!("Invalid configuration in {}: {}", path.display(), error))
    }

    /// Layer `other` on top of this configuration; values set in `other` win.
    pub fn overlay(self, other: TokenConfig) -> TokenConfig {
        TokenConfig {
            key: other.key.or(self.key),
            api_key: other.api_key.or(self.api_key),
            tenant: other.tenant.or(self.tenant),
            room: other.room.or(self.room),
            lifetime: other.lifetime.or(self.lifetime),
            user: UserConfig {
                id: other.user.id.or(self.user.id),
                name: other.user.name.or(self.user.name),
                email: other.user.email.or(self.user.email),
                avatar: other.user.avatar.or(self.user.avatar),
                moderator: other.user.moderator.or(self.user.moderator),
            },
            features: FeatureConfig {
                livestreaming: other.features.livestreaming.or(self.features.livestreaming),
                recording: other.features.recording.or(self.features.recording),
                outbound_call: other.features.outbound_call.or(self.features.outbound_call),
                transcription: other.features.transcription.or(self.features.transcription),
            },
        }
    }

    pub fn key_path(&self) -> PathBuf {
        self.key
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_PATH))
    }

    /// The builder options for this configuration: the defaults preset
    /// first, then every configured value.
    pub fn options(&self) -> Vec<BuilderOption> {
        let mut options = vec![with_defaults()];

        if let Some(lifetime) = self.lifetime {
            options.push(with_lifetime(lifetime));
        }
        if let Some(api_key) = &self.api_key {
            options.push(with_api_key(api_key.as_str()));
        }
        if let Some(tenant) = &self.tenant {
            options.push(with_tenant_name(tenant.as_str()));
        }
        if let Some(room) = &self.room {
            options.push(with_room_name(room.as_str()));
        }

        let user = &self.user;
        if let Some(id) = &user.id {
            options.push(with_user_id(id.as_str()));
        }
        if let Some(name) = &user.name {
            options.push(with_user_name(name.as_str()));
        }
        if let Some(email) = &user.email {
            options.push(with_user_email(email.as_str()));
        }
        if let Some(avatar) = &user.avatar {
            options.push(with_user_avatar(avatar.as_str()));
        }
        if let Some(moderator) = user.moderator {
            options.push(with_moderator(moderator));
        }

        let features = &self.features;
        if let Some(enabled) = features.livestreaming {
            options.push(with_livestreaming_enabled(enabled));
        }
        if let Some(enabled) = features.recording {
            options.push(with_recording_enabled(enabled));
        }
        if let Some(enabled) = features.outbound_call {
            options.push(with_outbound_enabled(enabled));
        }
        if let Some(enabled) = features.transcription {
            options.push(with_transcription_enabled(enabled));
        }

        options
    }
}

impl From<SignArgs> for TokenConfig {
    fn from(args: SignArgs) -> Self {
        TokenConfig {
            key: args.key,
            api_key: args.api_key,
            tenant: args.tenant,
            room: args.room,
            lifetime: args.lifetime,
            user: UserConfig {
                id: args.user_id,
                name: args.user_name,
                email: args.user_email,
                avatar: args.user_avatar,
                moderator: args.moderator,
            },
            features: FeatureConfig {
                livestreaming: args.livestreaming,
                recording: args.recording,
                outbound_call: args.outbound_call,
                transcription: args.transcription,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaas_jwt::TokenBuilder;

    #[test]
    fn it_parses_a_configuration_file() {
        let config: TokenConfig = toml::from_str(
            r#"
            key = "keys/jaas.pem"
            api_key = "kid-1"
            tenant = "tenant-1"
            lifetime = 600

            [user]
            name = "someone"
            moderator = false

            [features]
            outbound_call = false
            "#,
        )
        .unwrap();

        assert_eq!(config.key_path(), PathBuf::from("keys/jaas.pem"));
        assert_eq!(config.api_key.as_deref(), Some("kid-1"));
        assert_eq!(config.lifetime, Some(600));
        assert_eq!(config.user.name.as_deref(), Some("someone"));
        assert_eq!(config.user.moderator, Some(false));
        assert_eq!(config.features.outbound_call, Some(false));
        assert_eq!(config.room, None);
    }

    #[test]
    fn it_rejects_unknown_settings() {
        assert!(toml::from_str::<TokenConfig>("romo = \"*\"").is_err());
        assert!(toml::from_str::<TokenConfig>("[user]\nmoderater = true").is_err());
    }

    #[test]
    fn it_lets_flags_override_the_file() {
        let file = TokenConfig {
            room: Some("from-file".into()),
            tenant: Some("tenant-1".into()),
            ..Default::default()
        };
        let flags = TokenConfig::from(SignArgs {
            room: Some("from-flag".into()),
            moderator: Some(false),
            ..Default::default()
        });

        let config = file.overlay(flags);

        assert_eq!(config.room.as_deref(), Some("from-flag"));
        assert_eq!(config.tenant.as_deref(), Some("tenant-1"));
        assert_eq!(config.user.moderator, Some(false));
        assert_eq!(config.key_path(), PathBuf::from(DEFAULT_KEY_PATH));
    }

    #[test]
    fn it_lists_defaults_before_configured_values() {
        let config = TokenConfig {
            room: Some("standup".into()),
            user: UserConfig {
                id: Some("u-1".into()),
                moderator: Some(false),
                ..Default::default()
            },
            features: FeatureConfig {
                transcription: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };

        let builder = TokenBuilder::new(config.options()).unwrap();

        assert_eq!(builder.payload()["room"].as_str(), Some("standup"));
        assert_eq!(builder.user_claims()["id"].as_str(), Some("u-1"));
        assert_eq!(builder.user_claims()["moderator"].as_str(), Some("false"));
        assert_eq!(
            builder.feature_claims()["transcription"].as_str(),
            Some("false")
        );
        assert_eq!(builder.feature_claims()["recording"].as_str(), Some("true"));
    }
}
