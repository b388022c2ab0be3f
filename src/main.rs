use clap::Parser;
use std::sync::Arc;
use tagwatch::config::Config;
use tagwatch::poller::{HttpProber, NoopNotifier, PollStatus, Poller, TokioClock};
use tagwatch::server::{create_metrics, run_server, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    let change_url = config.change_url();
    info!(
        version = %config.version,
        url = %change_url,
        addr = %config.http_addr,
        poll_secs = config.poll_secs,
        "starting tagwatch"
    );

    let metrics = create_metrics()?;
    let status = Arc::new(PollStatus::new(config.version.clone(), change_url));

    // Single background writer; the server tasks only read
    let poller = Poller::new(
        Arc::clone(&status),
        Arc::clone(&metrics),
        Arc::new(HttpProber::new()),
        Arc::new(TokioClock),
        Arc::new(NoopNotifier),
        config.poll_interval(),
    );
    tokio::spawn(poller.run());

    let state = AppState { status, metrics };

    // Bind failure is fatal; nothing to retry
    run_server(&config.http_addr, state).await?;

    Ok(())
}
