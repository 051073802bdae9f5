//! Declarative definition for the end-user-facing CLI

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::key::DEFAULT_KEY_BITS;

#[derive(Debug, Parser)]
#[clap(name = "jaas-jwt")]
#[clap(about = "A CLI tool for signing JaaS authorization tokens", long_about = Some(
r#"The jaas-jwt CLI tool builds and signs the JSON Web Tokens that JaaS (Jitsi as
a Service) meetings use for authorization. It can also generate the RSA key
whose public half you upload to the JaaS console."#))]
pub struct Cli {
    #[clap(subcommand)]
    pub command: JwtCommand,
}

#[derive(Debug, Subcommand)]
pub enum JwtCommand {
    /// Build a token from the default claims, an optional configuration file
    /// and any flags given here (flags win), sign it and print it
    Sign(SignArgs),

    Key {
        #[clap(subcommand)]
        command: KeyCommand,
    },
}

/// Create the RSA keys that tokens are signed with
#[derive(Debug, Subcommand)]
pub enum KeyCommand {
    /// Generate a new RSA private key and write it as PKCS#8 PEM; an existing
    /// key at the same path is kept as is
    Create {
        /// Where to write the private key
        path: PathBuf,

        /// Size of the RSA modulus in bits
        #[clap(short, long, default_value_t = DEFAULT_KEY_BITS)]
        bits: usize,
    },
}

#[derive(Debug, Default, Args)]
pub struct SignArgs {
    /// Path to a TOML file holding token settings
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the PEM encoded RSA private key to sign with
    #[clap(short, long)]
    pub key: Option<PathBuf>,

    /// The JaaS API key, sent as the `kid` header
    #[clap(short, long)]
    pub api_key: Option<String>,

    /// The JaaS AppID (previously tenant name), sent as the `sub` claim
    #[clap(short, long)]
    pub tenant: Option<String>,

    /// The room the token grants access to; "*" for every room
    #[clap(short, long)]
    pub room: Option<String>,

    /// Seconds until the token expires
    #[clap(short, long)]
    pub lifetime: Option<i64>,

    #[clap(long)]
    pub user_id: Option<String>,

    /// The name displayed for the user in the meeting
    #[clap(long)]
    pub user_name: Option<String>,

    #[clap(long)]
    pub user_email: Option<String>,

    /// A publicly reachable URL of the user's avatar picture
    #[clap(long)]
    pub user_avatar: Option<String>,

    #[clap(long, value_name = "BOOL")]
    pub moderator: Option<bool>,

    #[clap(long, value_name = "BOOL")]
    pub livestreaming: Option<bool>,

    #[clap(long, value_name = "BOOL")]
    pub recording: Option<bool>,

    #[clap(long, value_name = "BOOL")]
    pub outbound_call: Option<bool>,

    #[clap(long, value_name = "BOOL")]
    pub transcription: Option<bool>,
}
