use std::time::Duration;

use reportlink_domain::constants::DEFAULT_TIMEOUT_SECS;
use reportlink_domain::{ConfigError, ErrorBody, HubError};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Single-shot HTTP client for hub calls.
///
/// Each request is sent exactly once. Whether a failure is worth resending
/// is reported to the caller through [`HubError::is_retryable`]; nothing is
/// retried here.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder once.
    ///
    /// Any response, whatever its status, is returned as `Ok`. `Err` means
    /// no response arrived (`Network`) or the request never left
    /// (`Unknown`).
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, HubError> {
        let request = builder
            .build()
            .map_err(|err| HubError::Unknown(format!("failed to build request: {err}")))?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                let status = response.status();
                debug!(%method, %url, %status, "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "HTTP request failed");
                Err(map_transport_error(err))
            }
        }
    }

    /// Send once and decode the response with [`decode_response`].
    pub async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, HubError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;
        decode_response(response).await
    }
}

/// Decode a hub response.
///
/// 2xx bodies decode into `T`; a body that does not match is an
/// `Unknown` failure. Any other status becomes `Server` or `Client` with the
/// leniently decoded [`ErrorBody`].
pub async fn decode_response<T>(response: Response) -> Result<T, HubError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let text = response.text().await.map_err(map_transport_error)?;

    if status.is_success() {
        serde_json::from_str(&text)
            .map_err(|err| HubError::Unknown(format!("Failed to parse response: {err}")))
    } else {
        Err(HubError::from_status(status.as_u16(), ErrorBody::from_text(&text)))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, ConfigError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| ConfigError::Transport(err.to_string()))?;

        Ok(HttpClient { client })
    }
}

/// Map a reqwest failure onto the hub taxonomy.
///
/// Connection, timeout and body transfer failures mean the request may have
/// left without a reply arriving: `Network`. Builder, redirect and decode
/// failures are local: `Unknown`.
fn map_transport_error(err: reqwest::Error) -> HubError {
    if err.is_builder() || err.is_redirect() || err.is_decode() {
        return HubError::Unknown(err.to_string());
    }
    HubError::Network(err.to_string())
}
