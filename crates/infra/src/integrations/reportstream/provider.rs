//! ReportStream implementation of [`HubProvider`]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reportlink_core::{classify_status, classify_submission, HubProvider, SubmissionObserver};
use reportlink_domain::{
    ConfigError, HierarchicDesignator, HistoryBody, HubConfig, Result, StatusResult,
    SubmissionBody, SubmissionResult,
};
use tracing::{info, instrument};

use super::client::SubmissionClient;
use super::endpoints::HubEndpoints;
use crate::auth::{AssertionBuilder, BearerToken, TokenExchangeClient};
use crate::http::HttpClient;
use crate::observability::TracingObserver;

/// Talks to one ReportStream deployment.
///
/// Every operation authenticates from scratch with a fresh client
/// assertion and bearer token. The provider holds no mutable state and can
/// be shared between tasks.
pub struct ReportStreamProvider {
    config: HubConfig,
    assertions: AssertionBuilder,
    tokens: TokenExchangeClient,
    submissions: SubmissionClient,
    observer: Arc<dyn SubmissionObserver>,
}

impl ReportStreamProvider {
    /// Build a provider for `config`.
    ///
    /// # Errors
    ///
    /// Fails when `base_url` is not an http(s) URL or the HTTP client cannot
    /// be built. Key material is only checked when the first assertion is
    /// signed.
    pub fn new(config: HubConfig) -> std::result::Result<Self, ConfigError> {
        let endpoints = HubEndpoints::parse(&config.origin())?;
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("reportlink/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            production = config.is_production(),
            audience = config.audience(),
            origin = %config.origin(),
            "ReportStream provider configured"
        );

        Ok(Self {
            assertions: AssertionBuilder::new(),
            tokens: TokenExchangeClient::new(http.clone(), endpoints.token()),
            submissions: SubmissionClient::new(
                http,
                endpoints,
                config.credentials.client_id.clone(),
            ),
            observer: Arc::new(TracingObserver),
            config,
        })
    }

    /// Replace the default tracing observer.
    pub fn with_observer(mut self, observer: Arc<dyn SubmissionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replace the assertion builder, e.g. to pin its clock.
    pub fn with_assertion_builder(mut self, assertions: AssertionBuilder) -> Self {
        self.assertions = assertions;
        self
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    /// Sign a client assertion and redeem it for a bearer token.
    ///
    /// A signing failure returns before any request is sent.
    pub async fn authenticate(&self) -> Result<BearerToken> {
        let credentials = &self.config.credentials;
        let audience = self.config.audience();

        let assertion = self.assertions.sign(credentials, audience)?;
        self.observer.assertion_signed(&credentials.kid, audience);

        let token = self.tokens.exchange(&credentials.scope, &assertion).await?;
        self.observer.token_obtained(audience);
        Ok(token)
    }

    async fn submit(&self, payload: &[u8]) -> Result<SubmissionBody> {
        let token = self.authenticate().await?;
        self.submissions.submit(&token, payload).await
    }

    async fn history(&self, submission_id: &str) -> Result<HistoryBody> {
        let token = self.authenticate().await?;
        self.submissions.fetch_history(&token, submission_id).await
    }
}

#[async_trait]
impl HubProvider for ReportStreamProvider {
    fn receiving_application_identifier(&self) -> &HierarchicDesignator {
        &self.config.receiving_application
    }

    fn receiving_facility_identifier(&self) -> &HierarchicDesignator {
        &self.config.receiving_facility
    }

    fn is_using_production(&self) -> bool {
        self.config.is_production()
    }

    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn submit_test(&self, payload: &[u8]) -> SubmissionResult {
        let outcome = self.submit(payload).await;
        let error = outcome.as_ref().err().cloned();
        let result = classify_submission(outcome);
        self.observer.submission_classified(&result, error.as_ref());
        result
    }

    #[instrument(skip(self))]
    async fn retrieve_submission_result(&self, submission_id: &str) -> StatusResult {
        let outcome = self.history(submission_id).await;
        let error = outcome.as_ref().err().cloned();
        let result = classify_status(submission_id, outcome);
        self.observer.status_classified(submission_id, &result, error.as_ref());
        result
    }
}
