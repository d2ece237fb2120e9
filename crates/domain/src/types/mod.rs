//! Domain types and models

pub mod designator;
pub mod response;
pub mod result;

pub use designator::HierarchicDesignator;
pub use response::{Destination, ErrorBody, HistoryBody, ResponseItem, SubmissionBody, TokenBody};
pub use result::{DeliveryStatus, StatusResult, SubmissionResult};
