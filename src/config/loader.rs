use std::env;

use url::Url;

use super::env::{
    ApiConfig, AppConfig, ConfigError, DirectoryConfig, LoggingConfig, OutputFormat,
    DEFAULT_API_BASE_URL,
};

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_env()
}

impl AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_base = lookup("SPAM_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api = ApiConfig {
            base_url: parse_base_url(&raw_base)?,
        };

        let directories = DirectoryConfig {
            logs_dir: lookup("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        let output = match lookup("OUTPUT_FORMAT") {
            None => OutputFormat::default(),
            Some(value) => parse_output_format(&value)?,
        };

        Ok(Self {
            api,
            directories,
            logging,
            output,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key: "SPAM_API_BASE_URL",
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("expected an http or https url".to_string()));
    }
    Ok(url)
}

fn parse_output_format(value: &str) -> Result<OutputFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "html" => Ok(OutputFormat::Html),
        _ => Err(ConfigError::Invalid {
            key: "OUTPUT_FORMAT",
            value: value.to_string(),
            reason: "expected `text` or `html`".to_string(),
        }),
    }
}
