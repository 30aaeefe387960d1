mod api;
mod app;
mod config;
mod domain;
mod infrastructure;
#[cfg(test)]
mod test_support;
mod ui;

use anyhow::Result;
use infrastructure::{directories, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let source = app::EmailSource::from_args(std::env::args().skip(1));
    let app = app::SpamCheckApp::initialize(config)?;
    app.run(source).await?;
    Ok(())
}
