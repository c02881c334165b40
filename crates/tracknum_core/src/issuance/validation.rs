//! Issuance parameter validation.
//!
//! This module provides the gatekeeper that turns raw, untyped issuance
//! parameters into a well-typed [`IssuanceRequest`] before they reach the
//! issuer. Invalid input is rejected early with errors naming the offending
//! fields.
//!
//! ## Validation Rules
//!
//! - **Required fields**: origin and destination country codes, weight,
//!   customer id, customer name; every missing field is reported, not just
//!   the first
//! - **Country codes**: exactly two ASCII letters, uppercased on intake
//! - **Weight**: finite non-negative decimal
//! - **Customer id**: UUID
//! - **Customer slug**: derived from the name when absent or empty
//! - **Created at**: ISO-8601 timestamp, defaulting to the validation
//!   instant
//!
//! No store or network access occurs here; validation is pure given a fixed
//! clock instant.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::issuance::{api::IssuanceParams, error::TrackingError, record::IssuanceRequest};

/// Issuance request validator.
///
/// Stateless; the facade service holds one and applies it to every `Issue`
/// request before the issuance loop runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator;

impl RequestValidator {
    /// Validates raw parameters into an immutable [`IssuanceRequest`].
    ///
    /// # Errors
    ///
    /// [`TrackingError::MissingFields`] with every absent required field,
    /// or [`TrackingError::InvalidField`] for the first malformed one.
    pub fn validate(&self, params: &IssuanceParams) -> Result<IssuanceRequest, TrackingError> {
        let mut missing = Vec::new();
        let origin = required(&mut missing, "origin_country_id", &params.origin_country_id);
        let destination =
            required(&mut missing, "destination_country_id", &params.destination_country_id);
        let weight = required(&mut missing, "weight", &params.weight);
        let customer_id = required(&mut missing, "customer_id", &params.customer_id);
        let customer_name = required(&mut missing, "customer_name", &params.customer_name);
        if !missing.is_empty() {
            return Err(TrackingError::MissingFields(missing));
        }
        let (Some(origin), Some(destination), Some(weight), Some(customer_id), Some(customer_name)) =
            (origin, destination, weight, customer_id, customer_name)
        else {
            return Err(TrackingError::InternalIssuanceError);
        };

        let origin_country_id =
            country_code(origin).ok_or(TrackingError::InvalidField("origin_country_id"))?;
        let destination_country_id =
            country_code(destination).ok_or(TrackingError::InvalidField("destination_country_id"))?;
        let weight = parse_weight(weight).ok_or(TrackingError::InvalidField("weight"))?;
        let customer_id = Uuid::parse_str(customer_id.trim())
            .map_err(|_| TrackingError::InvalidField("customer_id"))?;
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(TrackingError::InvalidField("customer_name"));
        }
        // An empty supplied slug counts as absent, like the rest of the
        // optional parameters.
        let customer_slug = match params.customer_slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_owned(),
            _ => slugify(customer_name),
        };
        let created_at = match params.created_at.as_deref() {
            None => Utc::now(),
            Some(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .map(|ts| ts.with_timezone(&Utc))
                .map_err(|_| TrackingError::InvalidField("created_at"))?,
        };

        Ok(IssuanceRequest {
            origin_country_id,
            destination_country_id,
            weight,
            customer_id,
            customer_name: customer_name.to_owned(),
            customer_slug,
            created_at,
        })
    }
}

fn required<'a>(
    missing: &mut Vec<String>,
    name: &str,
    value: &'a Option<String>,
) -> Option<&'a str> {
    match value.as_deref() {
        Some(value) => Some(value),
        None => {
            missing.push(name.to_owned());
            None
        }
    }
}

fn country_code(raw: &str) -> Option<String> {
    let code = raw.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_uppercase())
    } else {
        None
    }
}

fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|w| w.is_finite() && *w >= 0.0)
}

/// Normalizes a display name into a URL-safe slug: lowercase, runs of
/// non-alphanumeric characters collapsed to a single hyphen, leading and
/// trailing hyphens trimmed.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
