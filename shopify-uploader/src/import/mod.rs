//! Import runs: submitting built products and reporting the outcome

pub mod report;
pub mod runner;

pub use report::ConsoleReporter;
pub use runner::ImportRunner;
