//! Turning pipeline outcomes into caller-facing results
//!
//! - [`classifier`]: success / HTTP failure / network failure / local
//!   failure -> [`reportlink_domain::SubmissionResult`] and
//!   [`reportlink_domain::StatusResult`]
//! - [`delivery`]: history snapshot -> [`reportlink_domain::DeliveryStatus`]

pub mod classifier;
pub mod delivery;

pub use classifier::{classify_status, classify_submission, render_items};
pub use delivery::calculate_delivery_status;
