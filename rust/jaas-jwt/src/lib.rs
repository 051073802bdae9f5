//! Build and sign authorization tokens for JaaS (Jitsi as a Service).
//!
//! A JaaS token is an RS256-signed [JSON Web Token][JWT docs] whose payload
//! carries the room the bearer may join, the user's identity and the
//! conference features they are allowed to use. The JaaS authorization
//! service expects a fixed audience (`jitsi`) and issuer (`chat`), and it
//! expects the user and feature claims nested under a `context` claim.
//!
//! # Examples
//!
//! Tokens are assembled by a [`builder::TokenBuilder`] from an ordered list
//! of claim options. Options listed later override earlier ones, so the
//! [`builder::with_defaults`] preset is normally listed first:
//!
//! ```rust
//! use jaas_jwt::{
//!     builder::{
//!         with_api_key, with_defaults, with_moderator, with_tenant_name,
//!         with_user_email, with_user_name, TokenBuilder,
//!     },
//!     key_material::rsa::RsaKeyMaterial,
//!     JwtError,
//! };
//!
//! fn generate_token(key: &RsaKeyMaterial) -> Result<String, JwtError> {
//!     TokenBuilder::new([
//!         with_defaults(),
//!         with_api_key("vpaas-magic-cookie-1234/abcdef"),
//!         with_tenant_name("vpaas-magic-cookie-1234"),
//!         with_user_name("someone"),
//!         with_user_email("someone@example.com"),
//!         with_moderator(false),
//!     ])?
//!     .sign_with(key)
//! }
//! ```
//!
//! To sign, you need to provide a [`crypto::KeyMaterial`] implementation.
//! The crate ships [`key_material::rsa::RsaKeyMaterial`], which refuses to
//! sign with moduli smaller than
//! [`key_material::rsa::MINIMUM_RSA_MODULUS_BITS`].
//!
//! Encoding and signing are performed by a [`encoding::TokenSigner`]; the
//! default [`encoding::CompactJws`] produces the standard compact
//! `header.payload.signature` serialization.
//!
//! [JWT docs]: https://jwt.io/

pub mod builder;
pub mod claims;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod key_material;
pub mod time;

pub use self::builder::TokenBuilder;
pub use self::error::JwtError;

#[cfg(test)]
mod tests;
