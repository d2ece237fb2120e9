//! Caller-facing outcomes of hub operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of submitting a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub successful: bool,
    /// Hub submission identifier, when one was returned
    pub id: Option<String>,
    /// Whether resending the same report later may succeed. Only meaningful
    /// when `successful` is false.
    pub retryable: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Outcome of querying the delivery status of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub successful: bool,
    pub submission_id: Option<String>,
    pub status: DeliveryStatus,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Coarse delivery state of a submission as seen by the hub.
///
/// The hub moves a report `Received` -> `Processing` -> `Processed`. The
/// other states describe a failed or unanswerable query. Nothing here tracks
/// transitions: each query computes the state from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliveryStatus {
    Received,
    Processing,
    Processed,
    Error,
    NotFound,
    Unavailable,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::Error => "error",
            Self::NotFound => "notFound",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
