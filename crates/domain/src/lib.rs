//! # ReportLink Domain
//!
//! Data types shared by every ReportLink crate.
//!
//! This crate contains:
//! - Hub client configuration (credentials, environment, identifiers)
//! - Submission and status result shapes
//! - Decoded hub response bodies
//! - The hub error taxonomy and Result definitions
//! - Protocol constants
//!
//! ## Architecture
//! - No dependencies on other ReportLink crates
//! - Only external dependencies allowed
//! - Pure data structures, no I/O

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
