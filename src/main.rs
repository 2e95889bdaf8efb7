use anyhow::Result;
use tracing_subscriber::EnvFilter;
use urlhop::config::{self, AppEnv, Config};
use urlhop::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);

    tracing::info!(env = %config.env, "starting urlhop");

    server::run(config).await
}

/// Initializes the global tracing subscriber.
///
/// `local` gets human-readable output, `prod` gets JSON lines.
/// `RUST_LOG` overrides the level chosen by the environment.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.env {
        AppEnv::Local => builder.init(),
        AppEnv::Prod => builder.json().init(),
    }
}
