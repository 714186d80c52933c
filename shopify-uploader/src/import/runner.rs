//! Sequential import of product groups
//!
//! Groups are handled strictly one after another: build the payload,
//! submit it, report, then pause for the configured delay before the next
//! one. A failing group never stops the run.

use log::{debug, info, warn};
use std::time::Duration;

use super::report::{GroupFailure, ImportReporter, ImportSummary, SubmissionError};
use crate::api::{ProductPayload, ProductSubmitter};
use crate::catalog::{PayloadBuilder, ProductGroup};

/// Drives one import run against a submitter
pub struct ImportRunner<'a, S: ProductSubmitter + ?Sized> {
    submitter: &'a S,
    builder: PayloadBuilder,
    delay: Duration,
}

impl<'a, S: ProductSubmitter + ?Sized> ImportRunner<'a, S> {
    pub fn new(submitter: &'a S, builder: PayloadBuilder, delay: Duration) -> Self {
        Self {
            submitter,
            builder,
            delay,
        }
    }

    /// Import every group in order and return the final counts
    pub async fn run(
        &self,
        groups: &[ProductGroup],
        reporter: &mut dyn ImportReporter,
    ) -> ImportSummary {
        let mut summary = ImportSummary {
            total: groups.len(),
            ..Default::default()
        };
        info!("Importing {} products", groups.len());

        for (index, group) in groups.iter().enumerate() {
            debug!(
                "[{}/{}] {} ({} rows)",
                index + 1,
                groups.len(),
                group.handle(),
                group.len()
            );

            let payload = match self.builder.build_payload(group) {
                Ok(payload) => payload,
                Err(err) => {
                    warn!("Skipping {}: {}", group.handle(), err);
                    summary.skipped += 1;
                    summary.failed_handles.push(group.handle().to_string());
                    reporter.product_failed(group.handle(), None, &GroupFailure::Build(err));
                    continue;
                }
            };

            match self.submit(&payload).await {
                Ok(()) => {
                    summary.succeeded += 1;
                    reporter.product_created(&payload);
                }
                Err(err) => {
                    warn!("Product {} was not created: {}", payload.handle, err);
                    summary.failed += 1;
                    summary.failed_handles.push(payload.handle.clone());
                    reporter.product_failed(
                        &payload.handle,
                        Some(payload.title.as_str()),
                        &GroupFailure::Submission(err),
                    );
                }
            }

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(
            "Import finished: {} created, {} failed, {} skipped",
            summary.succeeded, summary.failed, summary.skipped
        );
        reporter.finished(&summary);
        summary
    }

    async fn submit(&self, payload: &ProductPayload) -> Result<(), SubmissionError> {
        let outcome = self
            .submitter
            .submit(payload)
            .await
            .map_err(|e| SubmissionError::Transport(format!("{:#}", e)))?;

        if outcome.succeeded {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: outcome.status_code,
                body: outcome.response_body,
            })
        }
    }
}
