use std::sync::Arc;

use crate::domain::email::{MAX_EMAIL_CHARS, WARNING_THRESHOLD};

use super::page::{CounterTone, Page};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterState {
    pub length: usize,
    pub text: String,
    pub tone: CounterTone,
}

pub fn counter_state(input: &str) -> CounterState {
    // Unicode scalar values; a browser's `value.length` counts UTF-16 units.
    let length = input.chars().count();
    let tone = if length > WARNING_THRESHOLD {
        CounterTone::Warning
    } else {
        CounterTone::Normal
    };
    CounterState {
        length,
        text: format!(
            "{} / {}",
            group_thousands(length),
            group_thousands(MAX_EMAIL_CHARS)
        ),
        tone,
    }
}

pub struct InputTracker {
    page: Arc<dyn Page>,
}

impl InputTracker {
    pub fn new(page: Arc<dyn Page>) -> Self {
        Self { page }
    }

    pub fn on_input(&self, input: &str) -> CounterState {
        let state = counter_state(input);
        self.page.set_counter(&state.text, state.tone);
        state
    }
}

fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
