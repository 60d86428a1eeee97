//! Raw source-record shapes and the normalizer that resolves them into the
//! canonical [`dayscout_core::Place`] shape.
//!
//! Retrieval itself (HTTP, datastore reads) lives outside this crate; its
//! collaborators hand over already-fetched JSON payloads. This crate owns
//! the decision logic: tolerating missing fields, estimating budgets from
//! price tiers or category defaults, and synthesizing stable identifiers.

pub mod error;
pub mod normalize;
pub mod payload;
pub mod types;

pub use error::SourceError;
pub use normalize::{normalize, normalize_batch};
pub use payload::{
    parse_local_payload, parse_overpass_payload, parse_places_api_payload, parse_tagged_records,
};
pub use types::{ApiPlace, LocalPlaceRecord, OverpassElement, RawPlaceRecord};
