pub mod client;
pub mod error;
pub mod wire;

use futures::future::BoxFuture;

use crate::domain::ClassificationResult;

pub use client::ClassificationClient;
pub use error::ClassificationError;

/// Seam between the submission flow and whatever answers `/predict`.
pub trait Classifier: Send + Sync {
    fn classify<'a>(
        &'a self,
        email_text: &'a str,
    ) -> BoxFuture<'a, Result<ClassificationResult, ClassificationError>>;
}
