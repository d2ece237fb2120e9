//! Result classification
//!
//! Every failure of the sign -> exchange -> call chain lands here exactly
//! once and leaves as a plain result value.
//!
//! | outcome               | successful | retryable | status        | errors                     |
//! |-----------------------|------------|-----------|---------------|----------------------------|
//! | 2xx                   | true       | false     | from history  | body `errors`              |
//! | signing failed        | false      | false     | `error`       | description                |
//! | 5xx, 408, 429         | false      | true      | `unavailable` | body `errors`, else description |
//! | 404                   | false      | false     | `notFound`    | body `errors`, else description |
//! | other non-2xx         | false      | false     | `error`       | body `errors`, else description |
//! | no response           | false      | true      | `unavailable` | description                |
//! | any other local fault | false      | false     | `error`       | description                |
//!
//! For a non-2xx whose body lists no errors (empty, HTML, plain text) the
//! failure description, e.g. `Client error: HTTP 422`, is the single entry
//! instead of an empty list.
//!
//! A failed token exchange is classified by the fault it wraps, except that
//! a 404 from the token endpoint never reports the submission as not found.
//!
//! A 2xx stays successful even when its body lists errors: the HTTP status
//! is the only success signal.

use reportlink_domain::{
    DeliveryStatus, HubError, HistoryBody, ResponseItem, Result, StatusResult, SubmissionBody,
    SubmissionResult,
};

use super::delivery::calculate_delivery_status;

/// Classify the outcome of a report submission.
pub fn classify_submission(outcome: Result<SubmissionBody>) -> SubmissionResult {
    match outcome {
        Ok(body) => SubmissionResult {
            successful: true,
            id: body.submission_id,
            retryable: false,
            errors: render_items(&body.errors),
            warnings: render_items(&body.warnings),
        },
        Err(error) => {
            let (errors, warnings) = failure_messages(&error);
            SubmissionResult {
                successful: false,
                id: error.body().and_then(|body| body.submission_id.clone()),
                retryable: error.is_retryable(),
                errors,
                warnings,
            }
        }
    }
}

/// Classify the outcome of a delivery status query for `requested_id`.
pub fn classify_status(requested_id: &str, outcome: Result<HistoryBody>) -> StatusResult {
    match outcome {
        Ok(history) => StatusResult {
            successful: true,
            status: calculate_delivery_status(&history),
            errors: render_items(&history.errors),
            warnings: render_items(&history.warnings),
            submission_id: history.submission_id.or_else(|| Some(requested_id.to_string())),
        },
        Err(error) => {
            let (errors, warnings) = failure_messages(&error);
            let submission_id = match &error {
                HubError::Unknown(_) => Some(requested_id.to_string()),
                other => other.body().and_then(|body| body.submission_id.clone()),
            };
            StatusResult {
                successful: false,
                submission_id,
                status: failure_status(&error),
                errors,
                warnings,
            }
        }
    }
}

/// Flatten hub error/warning entries into `Scope: {scope}; {message}`
/// strings, keeping their order.
pub fn render_items(items: &[ResponseItem]) -> Vec<String> {
    items.iter().map(ResponseItem::render).collect()
}

fn failure_status(error: &HubError) -> DeliveryStatus {
    match error {
        HubError::Client { status: 404, .. } => DeliveryStatus::NotFound,
        e if e.is_retryable() => DeliveryStatus::Unavailable,
        _ => DeliveryStatus::Error,
    }
}

/// Errors and warnings reported for a failure.
///
/// Hub-supplied entries come first-hand from the response body. When the
/// body has none, or the failure happened during token exchange, the error
/// description itself leads the list.
fn failure_messages(error: &HubError) -> (Vec<String>, Vec<String>) {
    let body = error.body();
    let mut errors = body.map(|b| render_items(&b.errors)).unwrap_or_default();
    let warnings = body.map(|b| render_items(&b.warnings)).unwrap_or_default();

    if errors.is_empty() || matches!(error, HubError::TokenExchange(_)) {
        errors.insert(0, error.to_string());
    }

    (errors, warnings)
}
