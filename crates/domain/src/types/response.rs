//! Hub response bodies
//!
//! Every endpoint answers with its own JSON shape, so each one gets its own
//! type. Missing arrays and counters decode to their empty defaults.

use serde::{Deserialize, Deserializer, Serialize};

/// An entry of a body's `errors` or `warnings` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl ResponseItem {
    pub fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self { scope: scope.into(), message: message.into() }
    }

    /// Human-readable form: `Scope: {scope}; {message}`.
    pub fn render(&self) -> String {
        format!("Scope: {}; {}", self.scope, self.message)
    }
}

/// `POST /api/token` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenBody {
    pub access_token: String,
}

/// `POST /api/waters` success body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionBody {
    #[serde(default, deserialize_with = "submission_id")]
    pub submission_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<ResponseItem>,
}

/// Body of any non-2xx hub response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "submission_id")]
    pub submission_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<ResponseItem>,
}

impl ErrorBody {
    /// Decode an error response leniently.
    ///
    /// Gateways and load balancers answer with HTML or plain text, so a body
    /// that is not the hub's JSON shape yields an empty body instead of an
    /// error.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

/// `GET /api/waters/report/{id}/history` success body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryBody {
    #[serde(default, deserialize_with = "submission_id")]
    pub submission_id: Option<String>,
    #[serde(default)]
    pub destination_count: Option<u64>,
    #[serde(default)]
    pub report_item_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warning_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub destinations: Vec<Destination>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<ResponseItem>,
}

/// One routing destination inside a history body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_count: u64,
    /// Reports already sent to this destination; contents are opaque here.
    #[serde(default)]
    pub sent_reports: Option<Vec<serde_json::Value>>,
}

impl Destination {
    /// True once every item routed here has been sent. A destination that
    /// reports no `sentReports` array has not finished.
    pub fn is_delivered(&self) -> bool {
        self.sent_reports
            .as_ref()
            .is_some_and(|sent| u64::try_from(sent.len()).is_ok_and(|n| n == self.item_count))
    }
}

/// Explicit `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubmissionId {
    Number(serde_json::Number),
    Text(String),
}

/// The hub reports `submissionId` as a number; older deployments used a
/// string. Both become a string id.
fn submission_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawSubmissionId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawSubmissionId::Number(n) => n.to_string(),
        RawSubmissionId::Text(s) => s,
    }))
}
