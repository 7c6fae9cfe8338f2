//! postcare-checkin
//!
//! Daily check-in recording, day-over-day trend classification, the templated
//! recovery summary, and the doctor dashboard's recovery classifier.
//!
//! Every derived value here is recomputed from stored documents on each call;
//! nothing is cached between requests.

pub mod dashboard;
pub mod error;
pub mod recorder;
pub mod summary;
pub mod trend;

pub use error::CheckInError;
