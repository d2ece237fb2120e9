//! Hub client configuration
//!
//! Everything here is built once when a provider is constructed and read
//! only afterwards, so a provider can be shared between concurrent callers
//! without locking.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMEOUT_SECS, PRODUCTION_AUDIENCE, STAGING_AUDIENCE};
use crate::errors::ConfigError;
use crate::types::HierarchicDesignator;

/// JWS algorithm used to sign the client assertion.
///
/// Must match the family of the registered key pair: RSA for `RS256`,
/// P-384 ECDSA for `ES384`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigningAlgorithm {
    #[serde(rename = "RS256")]
    Rs256,
    #[serde(rename = "ES384")]
    Es384,
}

impl SigningAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rs256 => "RS256",
            Self::Es384 => "ES384",
        }
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RS256" => Ok(Self::Rs256),
            "ES384" => Ok(Self::Es384),
            other => Err(ConfigError::invalid("algorithm", format!("unsupported algorithm {other:?}"))),
        }
    }
}

/// Credentials issued to a laboratory during hub onboarding.
#[derive(Clone, Serialize, Deserialize)]
pub struct ClientCredentialConfig {
    /// Client identifier, sent as the assertion issuer and `client` header
    pub client_id: String,
    /// Key identifier, `<client_id>.<suffix>` (usually `<client_id>.default`)
    pub kid: String,
    /// Authorization scope requested during token exchange
    pub scope: String,
    /// PEM-encoded private key matching `algorithm`
    #[serde(skip_serializing)]
    pub private_key: String,
    pub algorithm: SigningAlgorithm,
}

impl ClientCredentialConfig {
    pub fn new(
        client_id: impl Into<String>,
        kid: impl Into<String>,
        scope: impl Into<String>,
        private_key: impl Into<String>,
        algorithm: SigningAlgorithm,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            kid: kid.into(),
            scope: scope.into(),
            private_key: private_key.into(),
            algorithm,
        }
    }
}

impl fmt::Debug for ClientCredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentialConfig")
            .field("client_id", &self.client_id)
            .field("kid", &self.kid)
            .field("scope", &self.scope)
            .field("private_key", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

/// Hub deployment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HubEnvironment {
    #[default]
    Staging,
    Production,
}

impl HubEnvironment {
    pub fn from_production_flag(use_production: bool) -> Self {
        if use_production {
            Self::Production
        } else {
            Self::Staging
        }
    }

    /// Hostname used as the assertion audience and request origin.
    pub fn audience(&self) -> &'static str {
        match self {
            Self::Staging => STAGING_AUDIENCE,
            Self::Production => PRODUCTION_AUDIENCE,
        }
    }
}

/// Full configuration of a hub provider.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub credentials: ClientCredentialConfig,
    pub environment: HubEnvironment,
    /// Replaces the environment's audience hostname in the assertion
    pub audience: Option<String>,
    /// Replaces `https://{audience}` as the origin requests are sent to
    pub base_url: Option<String>,
    pub timeout_secs: u64,
    pub receiving_application: HierarchicDesignator,
    pub receiving_facility: HierarchicDesignator,
}

impl HubConfig {
    pub fn new(credentials: ClientCredentialConfig, use_production: bool) -> Self {
        Self {
            credentials,
            environment: HubEnvironment::from_production_flag(use_production),
            audience: None,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            receiving_application: HierarchicDesignator::cdc_prime(),
            receiving_facility: HierarchicDesignator::cdc_prime(),
        }
    }

    /// Send requests to `base_url` instead of the environment's hub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_receiving_identifiers(
        mut self,
        application: HierarchicDesignator,
        facility: HierarchicDesignator,
    ) -> Self {
        self.receiving_application = application;
        self.receiving_facility = facility;
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == HubEnvironment::Production
    }

    /// Audience claim for client assertions.
    pub fn audience(&self) -> &str {
        self.audience.as_deref().unwrap_or_else(|| self.environment.audience())
    }

    /// Origin every hub endpoint is resolved against, without trailing slash.
    pub fn origin(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.audience()),
        }
    }
}
