//! External-facing APIs for the issuance system.
//!
//! This module provides the request/response types consumed by callers of
//! the tracking service and the facade service implementation:
//!
//! - **Tracking API**: issuance and listing operations for external callers
//! - **Store API**: the persistence contract the issuer is generic over

pub mod tracking;
pub mod types;

// Re-export all types for convenience
pub use types::*;
