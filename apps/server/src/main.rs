use clap::Parser;
use fxquote_server::{api::app_router, build_state, config::Config, init_tracing};

#[derive(Parser)]
#[command(version, about = "FX quote HTTP service")]
struct Cli {
    /// Port to listen on (overrides FXQ_PORT)
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    init_tracing(&config.log_format);
    let state = build_state(&config)?;

    let router = app_router(state, &config);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
