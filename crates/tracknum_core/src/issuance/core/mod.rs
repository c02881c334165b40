//! Core components of the issuance pipeline.
//!
//! - **Candidate**: deterministic-looking, collision-resistant tracking
//!   number construction
//! - **Store**: bundled in-memory implementation of the store contract

pub mod candidate;
pub mod store;
