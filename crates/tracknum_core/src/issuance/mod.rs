//! Issuance module.
//!
//! This module provides the complete tracking-number issuance pipeline:
//! turning raw shipment parameters into a persisted, globally-unique,
//! format-constrained tracking record.
//!
//! ## Core Architecture
//!
//! The pipeline is composed of two components behind a single API facade:
//!
//! ### Request Validator
//! Parses and type-checks raw issuance parameters (country codes, weight,
//! customer identity, optional slug and timestamp) into a well-typed
//! [`record::IssuanceRequest`]. Purely computational, no store access.
//!
//! ### Tracking Number Issuer
//! Given a validated request, generates candidate identifiers, checks each
//! against the store, retries on collision up to a fixed bound, and persists
//! the winning record through a single atomic store insert.
//!
//! ## Service Components
//!
//! - **Tracking API** ([`api::tracking::TrackingApiService`]): external
//!   facade handling `Issue` and `List` requests
//! - **Store** (any `Service<StoreRequest>`): injected persistence contract;
//!   [`core::store::InMemoryTrackingStore`] is the bundled implementation
//! - **Validation** ([`validation::RequestValidator`]): gatekeeper in front
//!   of the issuer
//!
//! ## Default Service Stacks
//!
//! [`TrackingApiDefaultStack`] combines the facade with the in-memory store
//! and is the standard deployment shape for a single-node service.

pub mod api;
pub mod core;
pub mod error;
pub mod record;
pub mod validation;

use crate::issuance::{api::tracking::TrackingApiService, core::store::InMemoryTrackingStore};

/// Standard tracking API stack backed by the bundled in-memory store.
///
/// Suitable for single-node deployments and tests. Cloning the stack shares
/// the underlying store state.
pub type TrackingApiDefaultStack = TrackingApiService<InMemoryTrackingStore>;

/// Initialize a tracking issuance stack with a fresh in-memory store.
pub fn init_tracking() -> TrackingApiDefaultStack {
    TrackingApiService::new(InMemoryTrackingStore::new())
}

/// Initialize a tracking issuance stack on top of a caller-provided store
/// service.
///
/// The store is the single shared mutable resource of the system; any
/// implementation honoring the [`api::StoreRequest`] contract can be
/// injected here.
pub fn init_tracking_with_store<S>(store: S) -> TrackingApiService<S> {
    TrackingApiService::new(store)
}
