//! Structured events for pipeline milestones

use reportlink_core::SubmissionObserver;
use reportlink_domain::{HubError, HubErrorCategory, StatusResult, SubmissionResult};
use tracing::{debug, info, warn};

/// [`SubmissionObserver`] that logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SubmissionObserver for TracingObserver {
    fn assertion_signed(&self, kid: &str, audience: &str) {
        debug!(kid, audience, "client_assertion_signed");
    }

    fn token_obtained(&self, audience: &str) {
        debug!(audience, "bearer_token_obtained");
    }

    fn submission_classified(&self, result: &SubmissionResult, error: Option<&HubError>) {
        let id = result.id.as_deref().unwrap_or_default();
        match error {
            None => info!(
                submission_id = id,
                warnings = result.warnings.len(),
                "report_submitted"
            ),
            Some(err) => warn!(
                submission_id = id,
                category = category_label(err.category()),
                status = err.status_code(),
                retryable = result.retryable,
                errors = result.errors.len(),
                error = %err,
                "report_submission_failed"
            ),
        }
    }

    fn status_classified(
        &self,
        submission_id: &str,
        result: &StatusResult,
        error: Option<&HubError>,
    ) {
        match error {
            None => info!(
                submission_id,
                status = result.status.as_str(),
                errors = result.errors.len(),
                warnings = result.warnings.len(),
                "submission_status_retrieved"
            ),
            Some(err) => warn!(
                submission_id,
                status = result.status.as_str(),
                category = category_label(err.category()),
                http_status = err.status_code(),
                error = %err,
                "submission_status_failed"
            ),
        }
    }
}

/// Stable label for log fields.
fn category_label(category: HubErrorCategory) -> &'static str {
    match category {
        HubErrorCategory::Credential => "credential",
        HubErrorCategory::Server => "server",
        HubErrorCategory::Client => "client",
        HubErrorCategory::Network => "network",
        HubErrorCategory::Unknown => "unknown",
    }
}
