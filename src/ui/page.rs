use super::render::ResultDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterTone {
    #[default]
    Normal,
    Warning,
}

impl CounterTone {
    pub fn color(self) -> &'static str {
        match self {
            Self::Normal => "var(--text-muted)",
            Self::Warning => "#fa709a",
        }
    }
}

/// Handles to the page elements the client drives: the character counter,
/// the loading overlay, the submit control and the results container.
pub trait Page: Send + Sync {
    fn set_counter(&self, text: &str, tone: CounterTone);
    fn set_loading(&self, active: bool);
    fn set_submit_enabled(&self, enabled: bool);
    /// Replaces the whole results container.
    fn show_results(&self, display: &ResultDisplay);
}
