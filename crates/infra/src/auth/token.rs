//! Client assertion -> bearer token exchange

use std::fmt;

use reportlink_domain::constants::{
    CLIENT_ASSERTION_TYPE_JWT_BEARER, GRANT_TYPE_CLIENT_CREDENTIALS,
};
use reportlink_domain::{HubError, TokenBody};
use reqwest::Method;
use tracing::{debug, instrument};
use url::Url;

use super::assertion::SignedAssertion;
use crate::http::HttpClient;

/// Opaque bearer credential for one hub call.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `authorization` header
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

/// Redeems signed client assertions at the hub's token endpoint.
#[derive(Clone)]
pub struct TokenExchangeClient {
    http: HttpClient,
    token_url: Url,
}

impl TokenExchangeClient {
    pub fn new(http: HttpClient, token_url: Url) -> Self {
        Self { http, token_url }
    }

    /// Exchange `assertion` for a bearer token scoped to `scope`.
    ///
    /// # Errors
    ///
    /// Every failure, whether a rejection, a network fault or an unreadable
    /// body, is returned as [`HubError::TokenExchange`] wrapping the
    /// underlying fault.
    #[instrument(skip(self, assertion), fields(url = %self.token_url))]
    pub async fn exchange(
        &self,
        scope: &str,
        assertion: &SignedAssertion,
    ) -> Result<BearerToken, HubError> {
        let form = [
            ("scope", scope),
            ("grant_type", GRANT_TYPE_CLIENT_CREDENTIALS),
            ("client_assertion_type", CLIENT_ASSERTION_TYPE_JWT_BEARER),
            ("client_assertion", assertion.as_str()),
        ];

        let request = self.http.request(Method::POST, self.token_url.clone()).form(&form);
        let body: TokenBody =
            self.http.send_json(request).await.map_err(HubError::token_exchange)?;

        debug!("bearer token issued");
        Ok(BearerToken::new(body.access_token))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reportlink_core::{Clock, JtiGenerator};
    use reportlink_domain::{ClientCredentialConfig, HubErrorCategory, SigningAlgorithm};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::auth::AssertionBuilder;

    const EC_PRIVATE: &str = include_str!("../../tests/fixtures/ec_private.pem");

    struct FixedClock;

    impl Clock for FixedClock {
        fn unix_timestamp(&self) -> i64 {
            1_700_000_000
        }
    }

    struct FixedJti;

    impl JtiGenerator for FixedJti {
        fn generate(&self) -> String {
            "fixed".to_string()
        }
    }

    fn assertion() -> SignedAssertion {
        let config = ClientCredentialConfig::new(
            "lab",
            "lab.default",
            "lab.*.report",
            EC_PRIVATE,
            SigningAlgorithm::Es384,
        );
        AssertionBuilder::with_sources(Arc::new(FixedClock), Arc::new(FixedJti))
            .sign(&config, "staging.prime.cdc.gov")
            .expect("assertion")
    }

    fn client(server: &MockServer) -> TokenExchangeClient {
        let url = Url::parse(&format!("{}/api/token", server.uri())).expect("url");
        TokenExchangeClient::new(HttpClient::new().expect("http client"), url)
    }

    #[tokio::test]
    async fn posts_form_and_returns_access_token() {
        let server = MockServer::start().await;
        let assertion = assertion();

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("scope=lab.*.report"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains(
                "client_assertion_type=urn%3Aietf%3Aparams%3Aoauth%3Aclient-assertion-type%3Ajwt-bearer",
            ))
            .and(body_string_contains(format!("client_assertion={}", assertion.as_str())))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "token-123",
                "token_type": "bearer",
                "expires_in": 300
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = client(&server).exchange("lab.*.report", &assertion).await.expect("token");
        assert_eq!(token.as_str(), "token-123");
        assert_eq!(token.authorization(), "Bearer token-123");
    }

    #[tokio::test]
    async fn rejection_is_wrapped_as_token_exchange_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client(&server).exchange("lab.*.report", &assertion()).await.unwrap_err();
        assert!(matches!(err, HubError::TokenExchange(_)), "got {err:?}");
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.category(), HubErrorCategory::Client);
    }

    #[tokio::test]
    async fn missing_access_token_is_wrapped_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let err = client(&server).exchange("lab.*.report", &assertion()).await.unwrap_err();
        assert_eq!(err.category(), HubErrorCategory::Unknown);
    }

    #[test]
    fn debug_output_hides_token() {
        assert_eq!(format!("{:?}", BearerToken::new("secret")), "BearerToken([REDACTED])");
    }
}
