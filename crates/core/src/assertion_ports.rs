//! Ports feeding the client assertion builder
//!
//! Signing reads the clock once and draws one `jti` per assertion. Both are
//! injected so a fixed clock and id sequence make signing deterministic.

/// Wall-clock source for assertion timestamps
pub trait Clock: Send + Sync {
    /// Seconds since the UNIX epoch
    fn unix_timestamp(&self) -> i64;
}

/// Source of unique JWT ids
///
/// Ids only need high-probability uniqueness; the hub rejects a repeated
/// `jti` as a replay.
pub trait JtiGenerator: Send + Sync {
    fn generate(&self) -> String;
}
