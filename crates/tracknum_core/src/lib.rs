//! Core library for the tracknum tracking-number issuance service.
//!
//! The crate exposes the issuance domain as a set of composable
//! [`tower::Service`]s: a facade API service orchestrating a request
//! validator and an injected store service. See the [`issuance`] module
//! for the architecture overview.

pub mod issuance;

#[cfg(feature = "tracknum_tracing")]
pub mod tracknum_tracing;

#[cfg(test)]
mod tests;
