use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use merge_queue::config::Config;
use merge_queue::github::GitHubClient;
use merge_queue::queue::run_pass;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "merge_queue=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let client = match GitHubClient::from_token(config.token.clone(), config.repo.clone()) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(%error, "failed to build GitHub client");
            return ExitCode::FAILURE;
        }
    };

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, aborting pass");
            signal_token.cancel();
        }
    });

    tracing::info!(repo = %config.repo, target_branch = %config.target_branch, "starting pass");
    match run_pass(&client, &config.target_branch, &cancel).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "pass failed");
            ExitCode::FAILURE
        }
    }
}
