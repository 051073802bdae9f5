//! Logging setup for the `jaas-jwt` binary and its tests. Log lines go to
//! standard error so that standard output carries nothing but the token.
use std::sync::Once;

static INITIALIZE_TRACING: Once = Once::new();

pub fn initialize_tracing() {
    use tracing_subscriber::prelude::*;
    INITIALIZE_TRACING.call_once(|| {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG")
                    .unwrap_or_else(|_| "jaas_jwt=info,jaas_jwt_cli=info".into()),
            ))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}
