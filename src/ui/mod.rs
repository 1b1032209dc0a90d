//! Terminal progress display

mod progress;

pub use progress::ProgressReporter;
