//! # ReportLink Core
//!
//! Pure decision logic of the hub pipeline - no HTTP, no key parsing.
//!
//! This crate contains:
//! - The result classifier turning pipeline outcomes into caller results
//! - The delivery status calculator for history snapshots
//! - Port interfaces (traits) implemented by `reportlink-infra`
//!
//! ## Architecture Principles
//! - Only depends on `reportlink-domain`
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod outcome;

// Ports
pub mod assertion_ports;
pub mod hub_ports;

pub use assertion_ports::{Clock, JtiGenerator};
pub use hub_ports::{HubProvider, NoopObserver, SubmissionObserver};
pub use outcome::{calculate_delivery_status, classify_status, classify_submission, render_items};
