//! Protocol constants
//!
//! Values fixed by the ReportStream hub. Anything a deployment may need to
//! change (audience, origin, identifiers) lives in [`crate::config`] instead.

// Audiences
pub const STAGING_AUDIENCE: &str = "staging.prime.cdc.gov";
pub const PRODUCTION_AUDIENCE: &str = "prime.cdc.gov";

// Client assertion
pub const ASSERTION_LIFETIME_SECS: i64 = 300;
pub const ASSERTION_TYPE: &str = "JWT";

// Token exchange form fields
pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";
pub const CLIENT_ASSERTION_TYPE_JWT_BEARER: &str =
    "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

// Endpoint path segments (relative to the hub origin)
pub const TOKEN_PATH_SEGMENTS: [&str; 2] = ["api", "token"];
pub const WATERS_PATH_SEGMENTS: [&str; 2] = ["api", "waters"];
pub const REPORT_SEGMENT: &str = "report";
pub const HISTORY_SEGMENT: &str = "history";

// Submission headers
pub const CLIENT_HEADER: &str = "client";
pub const HL7_V2_CONTENT_TYPE: &str = "application/hl7-v2";

// Retry classification: 4xx statuses that are still worth resending
pub const RETRYABLE_CLIENT_STATUSES: [u16; 2] = [408, 429];

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Receiving application / facility published by CDC PRIME
pub const CDC_PRIME_NAMESPACE_ID: &str = "CDC PRIME";
pub const CDC_PRIME_UNIVERSAL_ID: &str = "2.16.840.1.114222.4.1.237821";
pub const ISO_UNIVERSAL_ID_TYPE: &str = "ISO";
