//! External service integrations

pub mod reportstream;
