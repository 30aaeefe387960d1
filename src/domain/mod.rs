pub mod email;
pub mod types;

pub use email::{EmailText, ValidationError};
pub use types::{ClassificationResult, HealthStatus};
