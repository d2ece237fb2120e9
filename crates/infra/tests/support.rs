use std::sync::{Arc, Mutex};

use reportlink_core::SubmissionObserver;
use reportlink_domain::{
    ClientCredentialConfig, HubConfig, HubError, SigningAlgorithm, StatusResult, SubmissionResult,
};
use reportlink_infra::ReportStreamProvider;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EC_PRIVATE_PEM: &str = include_str!("fixtures/ec_private.pem");
pub const EC_SEC1_PRIVATE_PEM: &str = include_str!("fixtures/ec_sec1_private.pem");
pub const EC_PUBLIC_PEM: &str = include_str!("fixtures/ec_public.pem");
pub const RSA_PRIVATE_PEM: &str = include_str!("fixtures/rsa_private.pem");

pub const CLIENT_ID: &str = "flowlab";
pub const KID: &str = "flowlab.default";
pub const SCOPE: &str = "flowlab.*.report";
pub const ACCESS_TOKEN: &str = "issued-token";

/// ES384 credentials for the `flowlab` test client.
pub fn credentials() -> ClientCredentialConfig {
    ClientCredentialConfig::new(CLIENT_ID, KID, SCOPE, EC_PRIVATE_PEM, SigningAlgorithm::Es384)
}

/// Staging config whose requests go to `server`.
pub fn config_for(server: &MockServer) -> HubConfig {
    HubConfig::new(credentials(), false).with_base_url(server.uri())
}

pub fn provider_for(server: &MockServer) -> ReportStreamProvider {
    ReportStreamProvider::new(config_for(server)).expect("provider should build")
}

/// Answer every token request with [`ACCESS_TOKEN`].
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "bearer",
            "expires_in": 300
        })))
        .mount(server)
        .await;
}

/// Milestones seen by a [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Milestone {
    AssertionSigned { kid: String, audience: String },
    TokenObtained,
    SubmissionClassified { successful: bool, failed: bool },
    StatusClassified { submission_id: String, failed: bool },
}

#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Milestone>>,
}

impl RecordingObserver {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<Milestone> {
        self.events.lock().expect("observer mutex poisoned").clone()
    }

    fn push(&self, milestone: Milestone) {
        self.events.lock().expect("observer mutex poisoned").push(milestone);
    }
}

impl SubmissionObserver for RecordingObserver {
    fn assertion_signed(&self, kid: &str, audience: &str) {
        self.push(Milestone::AssertionSigned { kid: kid.into(), audience: audience.into() });
    }

    fn token_obtained(&self, _audience: &str) {
        self.push(Milestone::TokenObtained);
    }

    fn submission_classified(&self, result: &SubmissionResult, error: Option<&HubError>) {
        self.push(Milestone::SubmissionClassified {
            successful: result.successful,
            failed: error.is_some(),
        });
    }

    fn status_classified(
        &self,
        submission_id: &str,
        _result: &StatusResult,
        error: Option<&HubError>,
    ) {
        self.push(Milestone::StatusClassified {
            submission_id: submission_id.into(),
            failed: error.is_some(),
        });
    }
}
