//! Logging and tracing setup
//!
//! - `init_tracing` installs the process-wide `tracing` subscriber
//! - `TracingObserver` turns pipeline milestones into structured events
//!
//! Secrets never reach a log line: key material, client assertions, bearer
//! tokens and report payloads are skipped by every span and event.

pub mod logging;
pub mod observer;

pub use logging::init_tracing;
pub use observer::TracingObserver;
