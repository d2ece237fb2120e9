//! ReportStream hub integration
//!
//! - **Endpoints**: `HubEndpoints` resolves token, waters and history URLs
//! - **Client**: `SubmissionClient` sends authenticated waters calls
//! - **Provider**: `ReportStreamProvider` runs sign -> exchange -> call and
//!   folds every outcome into a result
//!
//! # Usage
//!
//! ```no_run
//! use reportlink_core::HubProvider;
//! use reportlink_infra::config;
//! use reportlink_infra::ReportStreamProvider;
//!
//! # async fn example(payload: Vec<u8>) -> Result<(), reportlink_domain::ConfigError> {
//! let provider = ReportStreamProvider::new(config::load()?)?;
//!
//! let submitted = provider.submit_test(&payload).await;
//! if let Some(id) = submitted.id.as_deref() {
//!     let status = provider.retrieve_submission_result(id).await;
//!     println!("{id}: {}", status.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod provider;

pub use client::SubmissionClient;
pub use endpoints::HubEndpoints;
pub use provider::ReportStreamProvider;
