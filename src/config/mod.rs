pub mod env;
mod loader;

pub use env::{ApiConfig, AppConfig, DirectoryConfig, LoggingConfig, OutputFormat};
pub use loader::load_config;
