//! Hub authentication
//!
//! Every hub call authenticates from scratch: sign a client assertion, then
//! redeem it for a bearer token. Nothing is cached between calls.

pub mod assertion;
pub mod token;

pub use assertion::{AssertionBuilder, AssertionClaims, SignedAssertion, SystemClock, UuidJtiGenerator};
pub use token::{BearerToken, TokenExchangeClient};
