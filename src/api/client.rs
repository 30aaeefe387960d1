use anyhow::{Context, Result};
use futures::future::BoxFuture;
use reqwest::Client;
use url::Url;

use crate::{
    config::ApiConfig,
    domain::{ClassificationResult, HealthStatus},
};

use super::{
    error::ClassificationError,
    wire::{build_request, parse_error_detail},
    Classifier,
};

#[derive(Clone)]
pub struct ClassificationClient {
    http: Client,
    predict_url: Url,
    health_url: Url,
}

impl ClassificationClient {
    pub fn new(http: Client, config: &ApiConfig) -> Result<Self> {
        let base = directory_url(&config.base_url);
        let predict_url = base
            .join("predict")
            .with_context(|| format!("invalid predict endpoint under {}", base))?;
        let health_url = base
            .join("health")
            .with_context(|| format!("invalid health endpoint under {}", base))?;
        Ok(Self {
            http,
            predict_url,
            health_url,
        })
    }

    pub async fn predict(
        &self,
        email_text: &str,
    ) -> Result<ClassificationResult, ClassificationError> {
        let transport = |source| ClassificationError::Transport {
            endpoint: self.predict_url.to_string(),
            source,
        };

        let response = self
            .http
            .post(self.predict_url.clone())
            .json(&build_request(email_text))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            let detail = parse_error_detail(&body);
            tracing::warn!(
                target: "api",
                status = status.as_u16(),
                detail = detail.as_deref().unwrap_or("-"),
                "prediction rejected"
            );
            return Err(ClassificationError::Rejected { status, detail });
        }

        let result: ClassificationResult =
            serde_json::from_slice(&body).map_err(|err| ClassificationError::InvalidResponse {
                reason: err.to_string(),
            })?;

        tracing::info!(
            target: "api",
            prediction = %result.prediction,
            confidence = result.confidence,
            is_spam = result.is_spam,
            "prediction received"
        );
        Ok(result)
    }

    /// One-shot probe. Every outcome ends up in the log; nothing propagates.
    pub async fn check_health(&self) -> Option<HealthStatus> {
        match self.fetch_health().await {
            Ok(health) => {
                if health.is_ready() {
                    tracing::info!(target: "health", "API is healthy and model is loaded");
                } else {
                    tracing::warn!(
                        target: "health",
                        status = %health.status,
                        model_loaded = health.model_loaded,
                        "API health check failed"
                    );
                }
                Some(health)
            }
            Err(err) => {
                tracing::warn!(
                    target: "health",
                    error = %format!("{err:#}"),
                    url = %self.health_url,
                    "could not reach the API; is the classification server running?"
                );
                None
            }
        }
    }

    async fn fetch_health(&self) -> Result<HealthStatus> {
        let response = self
            .http
            .get(self.health_url.clone())
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.health_url))?;
        let health = response
            .json::<HealthStatus>()
            .await
            .context("health response was not valid JSON")?;
        Ok(health)
    }
}

impl Classifier for ClassificationClient {
    fn classify<'a>(
        &'a self,
        email_text: &'a str,
    ) -> BoxFuture<'a, Result<ClassificationResult, ClassificationError>> {
        Box::pin(self.predict(email_text))
    }
}

/// `Url::join` replaces the last path segment unless the base ends with `/`.
fn directory_url(base: &Url) -> Url {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
