//! HL7 hierarchic designators

use serde::{Deserialize, Serialize};

use crate::constants::{CDC_PRIME_NAMESPACE_ID, CDC_PRIME_UNIVERSAL_ID, ISO_UNIVERSAL_ID_TYPE};

/// HL7 v2 hierarchic designator (HD data type).
///
/// Callers building the outer message envelope put the hub's receiving
/// application and facility designators in MSH-5 / MSH-6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchicDesignator {
    pub namespace_id: String,
    pub universal_id: String,
    pub universal_id_type: String,
}

impl HierarchicDesignator {
    /// Designator whose universal id is an ISO OID.
    pub fn iso(namespace_id: impl Into<String>, universal_id: impl Into<String>) -> Self {
        Self {
            namespace_id: namespace_id.into(),
            universal_id: universal_id.into(),
            universal_id_type: ISO_UNIVERSAL_ID_TYPE.to_string(),
        }
    }

    /// The receiving application and facility published for CDC PRIME.
    pub fn cdc_prime() -> Self {
        Self::iso(CDC_PRIME_NAMESPACE_ID, CDC_PRIME_UNIVERSAL_ID)
    }
}

impl Default for HierarchicDesignator {
    fn default() -> Self {
        Self::cdc_prime()
    }
}
