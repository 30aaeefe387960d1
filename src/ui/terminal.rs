use std::io::{self, Write};

use parking_lot::Mutex;

use crate::config::OutputFormat;

use super::{
    page::{CounterTone, Page},
    render::ResultDisplay,
};

/// Page backed by a terminal: the results container is written to `out`,
/// the other elements only surface in the log.
pub struct TerminalPage<W: Write + Send> {
    format: OutputFormat,
    out: Mutex<W>,
}

impl TerminalPage<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(format, io::stdout())
    }
}

impl<W: Write + Send> TerminalPage<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> Page for TerminalPage<W> {
    fn set_counter(&self, text: &str, tone: CounterTone) {
        match tone {
            CounterTone::Normal => tracing::debug!(target: "input", counter = text, "input length"),
            CounterTone::Warning => {
                tracing::warn!(target: "input", counter = text, "input is close to the length limit")
            }
        }
    }

    fn set_loading(&self, active: bool) {
        if active {
            tracing::info!(target: "submit", "analyzing email...");
        } else {
            tracing::debug!(target: "submit", "analysis finished");
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        tracing::trace!(target: "submit", enabled, "submit control toggled");
    }

    fn show_results(&self, display: &ResultDisplay) {
        let rendered = match self.format {
            OutputFormat::Text => display.to_text(),
            OutputFormat::Html => display.to_html(),
        };
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{rendered}").and_then(|_| out.flush()) {
            tracing::error!(target: "app", error = %err, "failed to write result");
        }
    }
}
