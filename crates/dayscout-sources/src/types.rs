//! Raw record shapes as observed on the wire, one set per source.
//!
//! ## Observed shapes
//!
//! ### Local datastore documents
//! Mongo-style documents with a string `_id`, camelCase field names and an
//! authoritative numeric `budget` per person. `openTime`/`closeTime` are
//! plain `"HH:MM"` strings. Any field may be missing on hand-entered
//! records, so everything is optional here.
//!
//! ### Overpass API elements
//! Each element is a node, way or relation. Nodes carry `lat`/`lon` at the
//! top level; ways and relations carry them under `center` (the query uses
//! `out center`). Names and addresses live in `tags`, keyed by OSM tag
//! names with colons (`addr:full`, `addr:street`); most elements have only
//! a `name`. No price signal of any kind exists.
//!
//! ### Places API (New) results
//! camelCase objects with `displayName.text`, `formattedAddress`, and a
//! `priceLevel` enum string. The API documents numeric forms
//! (`PRICE_LEVEL_0`..`PRICE_LEVEL_4`) but live responses use the named
//! forms (`PRICE_LEVEL_MODERATE` etc.); `PRICE_LEVEL_UNSPECIFIED` means no
//! signal. `regularOpeningHours.openNow` is present only for places with
//! hours on file.
//!
//! The `category` field on the Overpass and Places API shapes is NOT a wire
//! field: the retrieval layer stamps the category it queried for onto each
//! record, since neither API echoes it back.

use dayscout_core::Category;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A source-tagged raw record awaiting normalization.
///
/// Modelled as a tagged variant so downstream code never branches on
/// source-specific field names; [`crate::normalize`] is the only place that
/// looks inside.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "source", content = "record")]
pub enum RawPlaceRecord {
    Local(LocalPlaceRecord),
    MapQuery(OverpassElement),
    CommercialApi(ApiPlace),
}

/// A place document from the local datastore.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPlaceRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,

    /// Authoritative per-person budget. When present it is used as-is and
    /// estimation is skipped entirely.
    #[serde(default)]
    pub budget: Option<Decimal>,

    /// Opening time as `"HH:MM"`.
    #[serde(default)]
    pub open_time: Option<String>,

    /// Closing time as `"HH:MM"`.
    #[serde(default)]
    pub close_time: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// One element from an Overpass API response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassElement {
    /// OSM element ID, unique per element type.
    #[serde(default)]
    pub id: Option<i64>,

    /// `"node"`, `"way"` or `"relation"`.
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,

    /// Present on nodes only.
    #[serde(default)]
    pub lat: Option<f64>,

    /// Present on nodes only.
    #[serde(default)]
    pub lon: Option<f64>,

    /// Centroid for ways and relations (`out center`).
    #[serde(default)]
    pub center: Option<OverpassCenter>,

    #[serde(default)]
    pub tags: OverpassTags,

    /// Stamped by the retrieval layer: the category the Overpass query was
    /// built for. Not an Overpass field.
    #[serde(default)]
    pub category: Option<Category>,
}

/// Centroid coordinates attached to way/relation elements.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OverpassCenter {
    pub lat: f64,
    pub lon: f64,
}

/// The subset of OSM tags the normalizer reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverpassTags {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "addr:full", default)]
    pub addr_full: Option<String>,

    #[serde(rename = "addr:street", default)]
    pub addr_street: Option<String>,

    /// Raw OSM opening-hours expression (e.g. `"Mo-Su 09:00-21:00"`).
    /// Evaluating it against a clock is the presentation layer's problem.
    #[serde(default)]
    pub opening_hours: Option<String>,

    #[serde(default)]
    pub website: Option<String>,
}

/// One place object from a Places API (New) `places:searchNearby` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlace {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<LocalizedText>,

    #[serde(default)]
    pub formatted_address: Option<String>,

    /// API type tags (e.g. `["restaurant", "food"]`).
    #[serde(default)]
    pub types: Vec<String>,

    /// Average rating in `[1.0, 5.0]` when the place has reviews.
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub user_rating_count: Option<u64>,

    /// `PRICE_LEVEL_UNSPECIFIED`, a named level, or a numeric
    /// `PRICE_LEVEL_<n>` form.
    #[serde(default)]
    pub price_level: Option<String>,

    #[serde(default)]
    pub regular_opening_hours: Option<ApiOpeningHours>,

    #[serde(default)]
    pub website_uri: Option<String>,

    #[serde(default)]
    pub google_maps_uri: Option<String>,

    /// Stamped by the retrieval layer: the request category. Not an API
    /// field.
    #[serde(default)]
    pub category: Option<Category>,
}

/// Localized string wrapper used by the Places API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
}

/// Opening-hours summary from the Places API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
}
