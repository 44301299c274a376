mod env;

use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use speech_relay::{RelayConfig, router};

use crate::env::AppEnv;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the relay (default).
    Serve,
    /// Print the OpenAPI document as JSON and exit.
    Openapi,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Openapi) = cli.command {
        println!("{}", serde_json::to_string_pretty(&speech_relay::openapi())?);
        return Ok(());
    }

    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (app_env, relay_env) = env::load()?;

    // Sentry must be initialized before the runtime starts.
    let _sentry = app_env.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(app_env, relay_env))
}

async fn serve(app_env: AppEnv, relay_env: speech_relay::Env) -> anyhow::Result<()> {
    relay_env.log_credentials();

    let config = RelayConfig::new(&relay_env);
    tracing::info!(
        favicon_url = %config.favicon_url,
        max_body_bytes = config.max_body_bytes,
        "relay_config_loaded"
    );

    let app = router(config).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind((app_env.host.as_str(), app_env.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "relay_listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("relay_stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "shutdown_signal_unavailable");
        std::future::pending::<()>().await;
    }
    tracing::info!("relay_shutting_down");
}
