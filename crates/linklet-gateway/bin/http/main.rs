mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use linklet_core::Shortener;
use linklet_gateway::{App, AppState, PngQrRenderer, QrSettings};
use linklet_generator::{RandomGenerator, RandomGeneratorSettings, SeqGenerator};
use linklet_shortener::ShortenerService;
use linklet_storage::InMemoryRepository;
use tracing::info;

use crate::cli::{Cli, GeneratorArg, SEQ_GENERATOR_PREFIX};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();
    linklet_telemetry::init(config.log_format)?;

    let base_url = config.base_url();
    url::Url::parse(&base_url).with_context(|| format!("invalid base url: {base_url}"))?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %base_url,
        generator = %config.generator,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting linklet gateway"
    );

    let shortener: Arc<dyn Shortener> = match config.generator {
        GeneratorArg::Random => {
            let generator = RandomGenerator::new(
                RandomGeneratorSettings::builder()
                    .length(config.code_length)
                    .build(),
            )
            .context("invalid generator settings")?;
            Arc::new(
                ShortenerService::new(InMemoryRepository::new(), generator)
                    .with_max_attempts(config.max_attempts),
            )
        }
        GeneratorArg::Seq => Arc::new(
            ShortenerService::new(
                InMemoryRepository::new(),
                SeqGenerator::with_prefix(SEQ_GENERATOR_PREFIX),
            )
            .with_max_attempts(config.max_attempts),
        ),
    };

    let renderer = Arc::new(PngQrRenderer::new(
        QrSettings::builder().size(config.qr_size).build(),
    ));

    run_server(
        config.listen_addr,
        AppState::new(shortener, renderer, base_url),
    )
    .await
}

async fn run_server(listen_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("linklet gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
