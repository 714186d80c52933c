//! Per-product outcome reporting

use colored::*;
use thiserror::Error;

use crate::api::ProductPayload;
use crate::catalog::GroupError;

/// Product was built but not created on the shop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Why one product group did not make it to the shop
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupFailure {
    #[error(transparent)]
    Build(#[from] GroupError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of product groups found in the file
    pub total: usize,
    /// Created on the shop (HTTP 201)
    pub succeeded: usize,
    /// Submitted but rejected, or the request itself failed
    pub failed: usize,
    /// Payload could not be built, never submitted
    pub skipped: usize,
    /// Handles that did not succeed, in processing order
    pub failed_handles: Vec<String>,
}

/// Receives one notification per product group and a final summary
pub trait ImportReporter {
    fn product_created(&mut self, payload: &ProductPayload);

    /// `title` is `None` when the payload could not be built
    fn product_failed(&mut self, handle: &str, title: Option<&str>, failure: &GroupFailure);

    fn finished(&mut self, summary: &ImportSummary);
}

/// Prints outcomes to stdout for the operator
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ImportReporter for ConsoleReporter {
    fn product_created(&mut self, payload: &ProductPayload) {
        println!("✅ 登録成功: {}", payload.title.green());
    }

    fn product_failed(&mut self, handle: &str, title: Option<&str>, failure: &GroupFailure) {
        let name = title.unwrap_or(handle);
        eprintln!("❌ 登録失敗: {} → {}", name.red().bold(), failure);
    }

    fn finished(&mut self, summary: &ImportSummary) {
        println!();
        println!(
            "{}",
            format!("登録処理完了（成功：{}件）", summary.succeeded).bright_blue()
        );
        if summary.failed > 0 || summary.skipped > 0 {
            println!(
                "  {} failed, {} skipped of {} products",
                summary.failed.to_string().red(),
                summary.skipped.to_string().yellow(),
                summary.total
            );
            println!("  Not created: {}", summary.failed_handles.join(", ").dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages() {
        let rejected = GroupFailure::from(SubmissionError::Rejected {
            status: 422,
            body: "{\"errors\":\"handle taken\"}".to_string(),
        });
        assert_eq!(rejected.to_string(), "422: {\"errors\":\"handle taken\"}");

        let build = GroupFailure::from(GroupError::Conversion {
            column: "Variant Inventory Qty".to_string(),
            value: "ten".to_string(),
        });
        assert_eq!(
            build.to_string(),
            "'ten' in column 'Variant Inventory Qty' is not an integer"
        );
    }
}
