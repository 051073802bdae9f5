pub mod cli;
pub mod commands;
pub mod config;
pub mod key;
pub mod tracing;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, JwtCommand, KeyCommand};
use commands::{key::key_create, sign::sign};

// Sign a token with the default claims and a key in the working directory:
//   jaas-jwt key create ./rsa-private.pem
//   jaas-jwt sign --api-key "$KID" --tenant "$APP_ID" --user-name someone
//
// Settings can also live in a TOML file:
//   jaas-jwt sign --config token.toml --room standup

pub async fn main() -> Result<()> {
    self::tracing::initialize_tracing();

    let args = Cli::parse();

    invoke_cli(args).await
}

pub async fn invoke_cli(cli: Cli) -> Result<()> {
    match cli.command {
        JwtCommand::Sign(args) => {
            let token = sign(args).await?;
            println!("{token}");
        }
        JwtCommand::Key { command } => match command {
            KeyCommand::Create { path, bits } => key_create(&path, bits).await?,
        },
    };

    Ok(())
}
