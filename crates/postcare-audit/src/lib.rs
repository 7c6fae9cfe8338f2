//! postcare-audit
//!
//! Application-level audit events, emitted through `tracing`.

pub mod events;

pub use events::{AuditAction, AuditEvent};
