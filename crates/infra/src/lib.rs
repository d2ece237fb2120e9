//! # ReportLink Infrastructure
//!
//! Infrastructure implementations of the core hub ports.
//!
//! This crate contains:
//! - Client assertion signing (`jsonwebtoken`)
//! - The single-shot HTTP client (`reqwest`)
//! - The ReportStream token exchange, submission and history clients
//! - `ReportStreamProvider`, the concrete `HubProvider`
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `reportlink-core`
//! - Contains all "impure" code (network I/O, key parsing, files)

pub mod auth;
pub mod config;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use auth::{AssertionBuilder, BearerToken, SignedAssertion, TokenExchangeClient};
pub use http::HttpClient;
pub use integrations::reportstream::{ReportStreamProvider, SubmissionClient};
pub use observability::TracingObserver;
