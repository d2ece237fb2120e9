//! Authenticated calls to the waters API

use reportlink_domain::constants::{CLIENT_HEADER, HL7_V2_CONTENT_TYPE};
use reportlink_domain::{HistoryBody, Result, SubmissionBody};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::instrument;

use super::endpoints::HubEndpoints;
use crate::auth::BearerToken;
use crate::http::HttpClient;

/// Sends reports and history queries with an already issued bearer token.
#[derive(Clone)]
pub struct SubmissionClient {
    http: HttpClient,
    endpoints: HubEndpoints,
    client_id: String,
}

impl SubmissionClient {
    pub fn new(http: HttpClient, endpoints: HubEndpoints, client_id: impl Into<String>) -> Self {
        Self { http, endpoints, client_id: client_id.into() }
    }

    /// `POST /api/waters` with the raw HL7 v2 payload.
    #[instrument(skip(self, token, payload), fields(bytes = payload.len()))]
    pub async fn submit(&self, token: &BearerToken, payload: &[u8]) -> Result<SubmissionBody> {
        let request = self
            .http
            .request(Method::POST, self.endpoints.waters())
            .header(AUTHORIZATION, token.authorization())
            .header(CLIENT_HEADER, &self.client_id)
            .header(CONTENT_TYPE, HL7_V2_CONTENT_TYPE)
            .body(payload.to_vec());

        self.http.send_json(request).await
    }

    /// `GET /api/waters/report/{submission_id}/history`
    #[instrument(skip(self, token))]
    pub async fn fetch_history(
        &self,
        token: &BearerToken,
        submission_id: &str,
    ) -> Result<HistoryBody> {
        let request = self
            .http
            .request(Method::GET, self.endpoints.history(submission_id))
            .header(AUTHORIZATION, token.authorization())
            .header(CLIENT_HEADER, &self.client_id);

        self.http.send_json(request).await
    }
}
