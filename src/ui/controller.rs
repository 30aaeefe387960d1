use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use parking_lot::Mutex;

use crate::{api::Classifier, domain::EmailText};

use super::{
    page::Page,
    render::{render_error, render_result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty after trimming; nothing was sent.
    Invalid,
    Classified,
    Failed,
    /// A newer submission was issued while this one was in flight; its reply was dropped.
    Superseded,
}

/// Drives one submission from validation through rendering.
///
/// Every submission takes a generation number. Only the reply belonging to
/// the most recently issued submission reaches the results container, so
/// overlapping submissions cannot leave an older verdict on screen. The
/// overlay stays up while any submission is in flight.
pub struct SubmissionController {
    page: Arc<dyn Page>,
    classifier: Arc<dyn Classifier>,
    latest: AtomicU64,
    in_flight: Mutex<usize>,
}

impl SubmissionController {
    pub fn new(page: Arc<dyn Page>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            page,
            classifier,
            latest: AtomicU64::new(0),
            in_flight: Mutex::new(0),
        }
    }

    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let email = match EmailText::parse(raw) {
            Ok(email) => email,
            Err(err) => {
                tracing::info!(target: "submit", "empty submission ignored");
                self.page.show_results(&render_error(&err.to_string()));
                return SubmitOutcome::Invalid;
            }
        };

        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let _loading = LoadingGuard::enter(self);
        tracing::debug!(
            target: "submit",
            generation,
            chars = email.as_str().chars().count(),
            "dispatching prediction"
        );

        let reply = self.classifier.classify(email.as_str()).await;

        if self.latest.load(Ordering::SeqCst) != generation {
            tracing::debug!(target: "submit", generation, "discarding superseded reply");
            return SubmitOutcome::Superseded;
        }

        match reply {
            Ok(result) => {
                self.page.show_results(&render_result(&result));
                SubmitOutcome::Classified
            }
            Err(err) => {
                tracing::error!(target: "submit", error = %err, "classification failed");
                self.page.show_results(&render_error(&err.user_message()));
                SubmitOutcome::Failed
            }
        }
    }
}

/// Holds the page in its loading state until dropped, on every exit path
/// including cancellation of the submitting future.
struct LoadingGuard<'a> {
    controller: &'a SubmissionController,
}

impl<'a> LoadingGuard<'a> {
    fn enter(controller: &'a SubmissionController) -> Self {
        let mut in_flight = controller.in_flight.lock();
        if *in_flight == 0 {
            controller.page.set_loading(true);
            controller.page.set_submit_enabled(false);
        }
        *in_flight += 1;
        Self { controller }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut in_flight = self.controller.in_flight.lock();
        *in_flight = in_flight.saturating_sub(1);
        if *in_flight == 0 {
            self.controller.page.set_loading(false);
            self.controller.page.set_submit_enabled(true);
        }
    }
}
