pub mod controller;
pub mod input;
pub mod markup;
pub mod page;
pub mod render;
pub mod terminal;

pub use controller::{SubmissionController, SubmitOutcome};
pub use input::InputTracker;
pub use page::Page;
pub use terminal::TerminalPage;
