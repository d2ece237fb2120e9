//! Hub provider port interfaces

use async_trait::async_trait;
use reportlink_domain::{HierarchicDesignator, HubError, StatusResult, SubmissionResult};

/// A public-health reporting hub a laboratory delivers reports to.
///
/// Neither operation fails: every error is folded into the returned result,
/// so callers only inspect results.
#[async_trait]
pub trait HubProvider: Send + Sync {
    /// MSH-5 receiving application for messages sent to this hub
    fn receiving_application_identifier(&self) -> &HierarchicDesignator;

    /// MSH-6 receiving facility for messages sent to this hub
    fn receiving_facility_identifier(&self) -> &HierarchicDesignator;

    fn is_using_production(&self) -> bool;

    /// Deliver one report payload.
    async fn submit_test(&self, payload: &[u8]) -> SubmissionResult;

    /// Look up the delivery status of an earlier submission.
    async fn retrieve_submission_result(&self, submission_id: &str) -> StatusResult;
}

/// Observer of pipeline milestones.
///
/// Observers see each step but never change results. All methods default to
/// doing nothing.
pub trait SubmissionObserver: Send + Sync {
    fn assertion_signed(&self, _kid: &str, _audience: &str) {}

    fn token_obtained(&self, _audience: &str) {}

    /// `error` is the pipeline failure behind an unsuccessful result
    fn submission_classified(&self, _result: &SubmissionResult, _error: Option<&HubError>) {}

    fn status_classified(
        &self,
        _submission_id: &str,
        _result: &StatusResult,
        _error: Option<&HubError>,
    ) {
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SubmissionObserver for NoopObserver {}
