use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::io::AsyncReadExt;

use crate::{
    api::ClassificationClient,
    config::AppConfig,
    ui::{InputTracker, SubmissionController, SubmitOutcome, TerminalPage},
};

/// Where the email body comes from: a file path argument, or stdin when the
/// argument is missing or `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailSource {
    Stdin,
    File(PathBuf),
}

impl EmailSource {
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        match args.next() {
            Some(arg) if arg != "-" => Self::File(PathBuf::from(arg)),
            _ => Self::Stdin,
        }
    }

    pub async fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("failed to read email text from stdin")?;
                Ok(text)
            }
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read email text from {}", path.display())),
        }
    }
}

pub struct SpamCheckApp {
    config: Arc<AppConfig>,
    client: Arc<ClassificationClient>,
    page: Arc<TerminalPage<io::Stdout>>,
}

impl SpamCheckApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("spam-check/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let client = Arc::new(ClassificationClient::new(http_client, &config.api)?);
        let page = Arc::new(TerminalPage::stdout(config.output));

        Ok(Self {
            config: Arc::new(config),
            client,
            page,
        })
    }

    pub async fn run(self, source: EmailSource) -> Result<SubmitOutcome> {
        let SpamCheckApp {
            config,
            client,
            page,
        } = self;

        tracing::info!(
            target: "app",
            base_url = %config.api.base_url,
            "email spam detector initialized"
        );

        let health = {
            let client = client.clone();
            tokio::spawn(async move {
                client.check_health().await;
            })
        };

        let raw = source.read().await?;

        InputTracker::new(page.clone()).on_input(&raw);
        let controller = SubmissionController::new(page, client);
        let outcome = controller.submit(&raw).await;

        if health.is_finished() {
            if let Err(err) = health.await {
                if err.is_panic() {
                    tracing::error!(target: "health", "health check task panicked");
                }
            }
        } else {
            tracing::debug!(target: "health", "health check still pending at exit; aborting");
            health.abort();
        }

        tracing::debug!(target: "app", ?outcome, "submission finished");
        Ok(outcome)
    }
}
