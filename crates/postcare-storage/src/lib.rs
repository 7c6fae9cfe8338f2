//! postcare-storage
//!
//! Document storage. JSON documents addressed by key, backed by S3 in
//! deployment and by an in-process map for local runs and tests.

pub mod client;
pub mod documents;
pub mod error;
pub mod memory;
pub mod objects;
pub mod records;
pub mod store;

pub use store::DocumentStore;
