use thiserror::Error;

use crate::issuance::api::tracking::MAX_ISSUANCE_ATTEMPTS;

#[derive(Debug, Error, PartialEq)]
pub enum TrackingError {
    #[error("issuance error, missing required parameters: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("issuance error, invalid value for parameter: {0}")]
    InvalidField(&'static str),

    #[error(
        "issuance error, unable to allocate a unique tracking number after {} attempts",
        MAX_ISSUANCE_ATTEMPTS
    )]
    ExhaustedRetries,

    #[error("store error, tracking number already exists: {0}")]
    DuplicateTrackingNumber(String),

    #[error("store error, persistence backend unavailable: {0}")]
    StoreUnavailable(String),

    #[error("issuance error, internal tracknum API error")]
    InternalIssuanceError,
}
