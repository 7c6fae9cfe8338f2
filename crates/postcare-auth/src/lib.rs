//! postcare-auth
//!
//! Bearer token issuing and validation for patients and doctors.

pub mod error;
pub mod jwt;

pub use jwt::{Identity, TokenKeys};
