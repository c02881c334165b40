//! Issuance data model.
//!
//! Two shapes flow through the pipeline: [`IssuanceRequest`], the validated
//! and immutable input produced by the request validator, and
//! [`TrackingRecord`], the persisted entity carrying the allocated tracking
//! number. A request yields at most one record; records are never mutated
//! and never deleted by this core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated issuance request.
///
/// Constructed exclusively by [`crate::issuance::validation::RequestValidator`];
/// every invariant the issuer relies on (2-letter uppercase country codes,
/// finite non-negative weight, non-empty name, populated slug and timestamp)
/// holds by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuanceRequest {
    /// Origin country code, 2 ASCII letters, uppercased on intake
    pub origin_country_id: String,
    /// Destination country code, 2 ASCII letters, uppercased on intake
    pub destination_country_id: String,
    /// Shipment weight in kilograms, finite and non-negative
    pub weight: f64,
    /// Opaque customer identity; no referential integrity enforced here
    pub customer_id: Uuid,
    /// Customer display name, non-empty
    pub customer_name: String,
    /// URL-safe derivation of the customer name, supplied or derived
    pub customer_slug: String,
    /// Issuance timestamp, supplied or the validation instant
    pub created_at: DateTime<Utc>,
}

impl IssuanceRequest {
    /// Binds an allocated tracking number to this request, producing the
    /// entity handed to the store.
    pub fn into_record(self, tracking_number: String) -> TrackingRecord {
        TrackingRecord {
            tracking_number,
            origin_country_id: self.origin_country_id,
            destination_country_id: self.destination_country_id,
            weight: self.weight,
            created_at: self.created_at,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            customer_slug: self.customer_slug,
        }
    }
}

/// A persisted tracking record.
///
/// `tracking_number` is unique across all records for the lifetime of the
/// store; the store's insert operation is the arbiter of that constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    /// Allocated identifier, matches `^[A-Z0-9]{1,16}$`, unique
    pub tracking_number: String,
    pub origin_country_id: String,
    pub destination_country_id: String,
    pub weight: f64,
    pub created_at: DateTime<Utc>,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub customer_slug: String,
}
