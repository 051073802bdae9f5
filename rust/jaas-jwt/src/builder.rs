use crate::{
    claims::*,
    crypto::KeyMaterial,
    encoding::{CompactJws, TokenSigner},
    error::JwtError,
    time::now,
};
use tracing::debug;
use uuid::Uuid;

/// Seconds from now until a token built with [with_defaults] expires
pub const EXPIRATION_DELAY_SECONDS: i64 = 7200;
/// Seconds before now that a token built with [with_defaults] becomes valid
pub const NOT_BEFORE_DELAY_SECONDS: i64 = 10;

/// A single configuration step for a [TokenBuilder]. Options write to
/// exactly one of the builder's claim mappings; when two options write the
/// same key, the one applied last wins.
pub trait ClaimsOption {
    fn apply(&self, builder: &mut TokenBuilder) -> Result<(), JwtError>;
}

impl<F> ClaimsOption for F
where
    F: Fn(&mut TokenBuilder) -> Result<(), JwtError>,
{
    fn apply(&self, builder: &mut TokenBuilder) -> Result<(), JwtError> {
        self(builder)
    }
}

pub type BuilderOption = Box<dyn ClaimsOption>;

/// A builder API for JaaS tokens
#[derive(Clone, Debug, PartialEq)]
pub struct TokenBuilder {
    payload: ClaimsMap,
    headers: HeaderMap,
    user_claims: ClaimsMap,
    feature_claims: ClaimsMap,
    finalized: bool,
}

impl Default for TokenBuilder {
    /// Create a builder holding only the fixed JaaS audience and issuer
    /// claims and the `typ` header.
    fn default() -> Self {
        TokenBuilder {
            payload: ClaimsMap::from([
                (AUDIENCE_CLAIM.into(), AUDIENCE.into()),
                (ISSUER_CLAIM.into(), ISSUER.into()),
            ]),
            headers: HeaderMap::from([(TYPE_HEADER.into(), TOKEN_TYPE.into())]),
            user_claims: ClaimsMap::new(),
            feature_claims: ClaimsMap::new(),
            finalized: false,
        }
    }
}

impl TokenBuilder {
    /// Create a builder and apply the given options in order. The first
    /// option that fails aborts construction with its error.
    pub fn new<I>(options: I) -> Result<Self, JwtError>
    where
        I: IntoIterator<Item = BuilderOption>,
    {
        let mut builder = TokenBuilder::default();
        builder.apply_all(options)?;

        debug!(
            "Configured token with {} user claims and {} feature claims",
            builder.user_claims.len(),
            builder.feature_claims.len()
        );

        Ok(builder)
    }

    /// Apply one more option to a builder that has not been signed yet.
    pub fn apply(&mut self, option: BuilderOption) -> Result<&mut Self, JwtError> {
        self.apply_option(option.as_ref())?;
        Ok(self)
    }

    fn apply_option(&mut self, option: &dyn ClaimsOption) -> Result<(), JwtError> {
        if self.finalized {
            return Err(JwtError::configuration(
                "Token has already been signed; no further claims may be set",
            ));
        }

        option.apply(self)
    }

    fn apply_all<I>(&mut self, options: I) -> Result<(), JwtError>
    where
        I: IntoIterator<Item = BuilderOption>,
    {
        for option in options {
            self.apply_option(option.as_ref())?;
        }
        Ok(())
    }

    pub fn set_header<V: Into<String>>(&mut self, name: &str, value: V) {
        self.headers.insert(name.to_owned(), value.into());
    }

    /// Set a top-level payload claim. Names in [RESERVED_CLAIMS] are
    /// refused, and `room` must be a non-empty string.
    pub fn set_claim<V: Into<ClaimValue>>(&mut self, name: &str, value: V) -> Result<(), JwtError> {
        if RESERVED_CLAIMS.contains(&name) {
            return Err(JwtError::configuration(format!(
                "The {name:?} claim is reserved and cannot be set directly"
            )));
        }

        let value = value.into();
        if name == ROOM_CLAIM && !matches!(value.as_str(), Some(room) if !room.is_empty()) {
            return Err(JwtError::configuration(
                "The room name must not be empty; use \"*\" for any room",
            ));
        }

        self.payload.insert(name.to_owned(), value);
        Ok(())
    }

    pub fn set_user_claim<V: Into<ClaimValue>>(&mut self, name: &str, value: V) {
        self.user_claims.insert(name.to_owned(), value.into());
    }

    pub fn set_feature_claim<V: Into<ClaimValue>>(&mut self, name: &str, value: V) {
        self.feature_claims.insert(name.to_owned(), value.into());
    }

    pub fn payload(&self) -> &ClaimsMap {
        &self.payload
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn user_claims(&self) -> &ClaimsMap {
        &self.user_claims
    }

    pub fn feature_claims(&self) -> &ClaimsMap {
        &self.feature_claims
    }

    /// True once the builder has been through a signing attempt
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Nest the user and feature claims under `context` and sign the token
    /// with the given key, producing a compact JWS string.
    pub fn sign_with<K>(&mut self, key: &K) -> Result<String, JwtError>
    where
        K: KeyMaterial,
    {
        self.sign_with_engine(&CompactJws, key)
    }

    /// Like [TokenBuilder::sign_with], but encoding and signing are
    /// delegated to the given [TokenSigner]. If signing fails the builder
    /// keeps its merged `context` claim but remains unusable for further
    /// configuration.
    pub fn sign_with_engine<S, K>(&mut self, signer: &S, key: &K) -> Result<String, JwtError>
    where
        S: TokenSigner + ?Sized,
        K: KeyMaterial,
    {
        let context = ClaimsMap::from([
            (
                USER_CONTEXT.into(),
                ClaimValue::Mapping(self.user_claims.clone()),
            ),
            (
                FEATURES_CONTEXT.into(),
                ClaimValue::Mapping(self.feature_claims.clone()),
            ),
        ]);
        self.payload
            .insert(CONTEXT_CLAIM.into(), ClaimValue::Mapping(context));
        self.finalized = true;

        debug!(
            "Signing token for room {:?} with {}",
            self.payload.get(ROOM_CLAIM).and_then(ClaimValue::as_str),
            key.get_jwt_algorithm_name()
        );

        signer.sign(&self.headers, &self.payload, key)
    }
}

/// Wrap a closure as a [BuilderOption], for claims this crate has no
/// dedicated option for.
pub fn with_custom<F>(apply: F) -> BuilderOption
where
    F: Fn(&mut TokenBuilder) -> Result<(), JwtError> + 'static,
{
    Box::new(apply)
}

/// The claims every JaaS token usually carries: a two hour lifetime that
/// started ten seconds ago, all features enabled, moderator rights, access
/// to any room and a random user id. List it first so that later options
/// can override any of these.
pub fn with_defaults() -> BuilderOption {
    with_custom(|builder| {
        let now = now()?;
        let user_id = Uuid::new_v4().to_string();

        builder.apply_all([
            with_expiration(now + EXPIRATION_DELAY_SECONDS),
            with_not_before(now - NOT_BEFORE_DELAY_SECONDS),
            with_livestreaming_enabled(true),
            with_recording_enabled(true),
            with_outbound_enabled(true),
            with_transcription_enabled(true),
            with_moderator(true),
            with_room_name(ANY_ROOM),
            with_user_id(user_id),
        ])
    })
}

/// Set the `kid` header to the JaaS API key that identifies the signing key.
pub fn with_api_key<S: Into<String>>(api_key: S) -> BuilderOption {
    let api_key = api_key.into();
    with_custom(move |builder| {
        if api_key.is_empty() {
            return Err(JwtError::configuration("The API key must not be empty"));
        }
        builder.set_header(KEY_ID_HEADER, api_key.as_str());
        Ok(())
    })
}

/// Set the POSIX timestamp (in seconds) for when the token should expire.
pub fn with_expiration(timestamp: i64) -> BuilderOption {
    with_custom(move |builder| builder.set_claim(EXPIRATION_CLAIM, timestamp))
}

/// Expire the token the given number of seconds from the moment the option
/// is applied. The lifetime must not be negative.
pub fn with_lifetime(seconds: i64) -> BuilderOption {
    with_custom(move |builder| {
        if seconds < 0 {
            return Err(JwtError::configuration(format!(
                "The token lifetime must not be negative (got {seconds} seconds)"
            )));
        }

        let expiration = now()?.checked_add(seconds).ok_or_else(|| {
            JwtError::configuration(format!(
                "A lifetime of {seconds} seconds overflows the expiration timestamp"
            ))
        })?;

        builder.set_claim(EXPIRATION_CLAIM, expiration)
    })
}

/// Set the POSIX timestamp (in seconds) of when the token becomes active.
pub fn with_not_before(timestamp: i64) -> BuilderOption {
    with_custom(move |builder| builder.set_claim(NOT_BEFORE_CLAIM, timestamp))
}

/// Restrict the token to one room; `"*"` allows every room.
pub fn with_room_name<S: Into<String>>(room_name: S) -> BuilderOption {
    let room_name = room_name.into();
    with_custom(move |builder| builder.set_claim(ROOM_CLAIM, room_name.as_str()))
}

/// Set the `sub` claim to the tenant (JaaS AppID).
pub fn with_tenant_name<S: Into<String>>(tenant_name: S) -> BuilderOption {
    let tenant_name = tenant_name.into();
    with_custom(move |builder| builder.set_claim(SUBJECT_CLAIM, tenant_name.as_str()))
}

/// Set an arbitrary top-level claim.
pub fn with_claim<S, V>(name: S, value: V) -> BuilderOption
where
    S: Into<String>,
    V: Into<ClaimValue>,
{
    let name = name.into();
    let value = value.into();
    with_custom(move |builder| builder.set_claim(&name, value.clone()))
}

pub fn with_user_id<S: Into<String>>(user_id: S) -> BuilderOption {
    user_claim(USER_ID_CLAIM, ClaimValue::String(user_id.into()))
}

/// A publicly reachable URL of the user's avatar picture
pub fn with_user_avatar<S: Into<String>>(avatar_url: S) -> BuilderOption {
    user_claim(USER_AVATAR_CLAIM, ClaimValue::String(avatar_url.into()))
}

/// The name displayed for the user in the meeting
pub fn with_user_name<S: Into<String>>(user_name: S) -> BuilderOption {
    user_claim(USER_NAME_CLAIM, ClaimValue::String(user_name.into()))
}

pub fn with_user_email<S: Into<String>>(user_email: S) -> BuilderOption {
    user_claim(USER_EMAIL_CLAIM, ClaimValue::String(user_email.into()))
}

pub fn with_moderator(is_moderator: bool) -> BuilderOption {
    user_claim(MODERATOR_CLAIM, ClaimValue::from(is_moderator))
}

pub fn with_livestreaming_enabled(is_enabled: bool) -> BuilderOption {
    feature_claim(LIVESTREAMING_FEATURE, is_enabled)
}

pub fn with_recording_enabled(is_enabled: bool) -> BuilderOption {
    feature_claim(RECORDING_FEATURE, is_enabled)
}

/// Allow dialing out of the meeting to phone numbers
pub fn with_outbound_enabled(is_enabled: bool) -> BuilderOption {
    feature_claim(OUTBOUND_CALL_FEATURE, is_enabled)
}

pub fn with_transcription_enabled(is_enabled: bool) -> BuilderOption {
    feature_claim(TRANSCRIPTION_FEATURE, is_enabled)
}

fn user_claim(name: &'static str, value: ClaimValue) -> BuilderOption {
    with_custom(move |builder| {
        builder.set_user_claim(name, value.clone());
        Ok(())
    })
}

fn feature_claim(name: &'static str, is_enabled: bool) -> BuilderOption {
    with_custom(move |builder| {
        builder.set_feature_claim(name, is_enabled);
        Ok(())
    })
}
