//! Normalization from raw source records to [`dayscout_core::Place`].
//!
//! The normalizer is total: a corrupt record degrades to sentinels and
//! estimated budgets instead of aborting the batch. Budget estimation
//! policy, in order:
//!
//! 1. an explicit budget on the record (local datastore) is authoritative;
//! 2. a recognized price tier maps through [`PricingConfig::tier_budgets`];
//! 3. otherwise the per-category default applies, with a single global
//!    fallback for categories outside the vocabulary.

use dayscout_core::{
    Category, Place, PlaceSource, PricingConfig, NEARBY_LOCATION, UNKNOWN_PLACE_NAME,
};
use regex::Regex;
use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::types::{ApiPlace, LocalPlaceRecord, OverpassElement, RawPlaceRecord};

/// Normalize one raw record into the canonical shape.
///
/// Pure function of its inputs; never fails. Missing names become
/// [`UNKNOWN_PLACE_NAME`], unresolved addresses become [`NEARBY_LOCATION`],
/// and a missing identifier is synthesized deterministically from record
/// content.
#[must_use]
pub fn normalize(record: RawPlaceRecord, pricing: &PricingConfig) -> Place {
    match record {
        RawPlaceRecord::Local(local) => normalize_local(local, pricing),
        RawPlaceRecord::MapQuery(element) => normalize_overpass(element, pricing),
        RawPlaceRecord::CommercialApi(place) => normalize_api_place(place, pricing),
    }
}

/// Normalize a whole batch, in input order.
#[must_use]
pub fn normalize_batch(records: Vec<RawPlaceRecord>, pricing: &PricingConfig) -> Vec<Place> {
    records
        .into_iter()
        .map(|record| normalize(record, pricing))
        .collect()
}

fn normalize_local(record: LocalPlaceRecord, pricing: &PricingConfig) -> Place {
    let name = non_empty(record.name).unwrap_or_else(|| {
        tracing::debug!(source = %PlaceSource::Local, "record has no name, substituting sentinel");
        UNKNOWN_PLACE_NAME.to_string()
    });
    let category = record.category.unwrap_or_default();
    let location = non_empty(record.location).unwrap_or_else(|| NEARBY_LOCATION.to_string());

    // Datastore budgets are authoritative; estimation only covers the
    // corrupt-record case where the field is missing. Negatives clamp to
    // zero to uphold the non-negativity invariant.
    let budget_per_person = match record.budget {
        Some(budget) => budget.max(Decimal::ZERO),
        None => pricing.estimate(None, category),
    };

    let id = non_empty(record.id)
        .unwrap_or_else(|| synthesize_id(PlaceSource::Local, &name, &location));

    Place {
        id,
        name,
        category,
        location,
        budget_per_person,
        rating: None,
        rating_count: 0,
        open_now: false,
        external_url: String::new(),
        source: PlaceSource::Local,
    }
}

fn normalize_overpass(element: OverpassElement, pricing: &PricingConfig) -> Place {
    let name = non_empty(element.tags.name).unwrap_or_else(|| {
        tracing::debug!(
            source = %PlaceSource::MapQuery,
            element_id = element.id,
            "element has no name tag, substituting sentinel"
        );
        UNKNOWN_PLACE_NAME.to_string()
    });
    let category = element.category.unwrap_or_default();

    let location = non_empty(element.tags.addr_full)
        .or_else(|| non_empty(element.tags.addr_street))
        .unwrap_or_else(|| NEARBY_LOCATION.to_string());

    // OSM never carries a price signal, so this is always a category
    // estimate.
    let budget_per_person = pricing.estimate(None, category);

    let (id, external_url) = match (element.id, element.element_type.as_deref()) {
        (Some(osm_id), Some(kind)) => (
            format!("osm-{kind}-{osm_id}"),
            format!("https://www.openstreetmap.org/{kind}/{osm_id}"),
        ),
        _ => (
            synthesize_id(PlaceSource::MapQuery, &name, &location),
            String::new(),
        ),
    };

    Place {
        id,
        name,
        category,
        location,
        budget_per_person,
        rating: None,
        rating_count: 0,
        open_now: false,
        external_url,
        source: PlaceSource::MapQuery,
    }
}

fn normalize_api_place(place: ApiPlace, pricing: &PricingConfig) -> Place {
    let name = place
        .display_name
        .and_then(|d| non_empty(d.text))
        .unwrap_or_else(|| {
            tracing::debug!(
                source = %PlaceSource::CommercialApi,
                "result has no display name, substituting sentinel"
            );
            UNKNOWN_PLACE_NAME.to_string()
        });
    let category = place.category.unwrap_or_default();

    let location = place
        .formatted_address
        .as_deref()
        .and_then(extract_area)
        .unwrap_or_else(|| NEARBY_LOCATION.to_string());

    let tier = place.price_level.as_deref().and_then(parse_price_tier);
    let budget_per_person = pricing.estimate(tier, category);

    let id = non_empty(place.id)
        .unwrap_or_else(|| synthesize_id(PlaceSource::CommercialApi, &name, &location));

    let external_url = non_empty(place.google_maps_uri)
        .or_else(|| non_empty(place.website_uri))
        .unwrap_or_default();

    Place {
        id,
        name,
        category,
        location,
        budget_per_person,
        rating: place.rating.map(|r| r.clamp(0.0, 5.0)),
        rating_count: place.user_rating_count.unwrap_or(0),
        open_now: place
            .regular_opening_hours
            .and_then(|h| h.open_now)
            .unwrap_or(false),
        external_url,
        source: PlaceSource::CommercialApi,
    }
}

/// Parse a Places API `priceLevel` string into a 0..=4 tier.
///
/// Accepts both the numeric form (`PRICE_LEVEL_2`) and the named forms the
/// live API emits. `PRICE_LEVEL_UNSPECIFIED` and anything unrecognized map
/// to `None`, deferring to category defaults.
pub(crate) fn parse_price_tier(price_level: &str) -> Option<u8> {
    match price_level {
        "PRICE_LEVEL_FREE" => return Some(0),
        "PRICE_LEVEL_INEXPENSIVE" => return Some(1),
        "PRICE_LEVEL_MODERATE" => return Some(2),
        "PRICE_LEVEL_EXPENSIVE" => return Some(3),
        "PRICE_LEVEL_VERY_EXPENSIVE" => return Some(4),
        "PRICE_LEVEL_UNSPECIFIED" => return None,
        _ => {}
    }

    let re = Regex::new(r"^PRICE_LEVEL_(\d)$").expect("valid regex");
    re.captures(price_level)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u8>().ok())
}

/// Extract a human-readable area from a formatted address.
///
/// Addresses arrive as comma-separated components ending in region and
/// country; the third-from-last component is usually the neighbourhood.
/// Falls back to the first component, then to `None` for blank input.
fn extract_area(address: &str) -> Option<String> {
    let parts: Vec<&str> = address.split(',').map(str::trim).collect();

    let area = if parts.len() > 2 {
        let candidate = parts[parts.len() - 3];
        if candidate.is_empty() {
            parts[0]
        } else {
            candidate
        }
    } else {
        parts[0]
    };

    if area.is_empty() {
        None
    } else {
        Some(area.to_string())
    }
}

/// Deterministic identifier for records whose source provides none.
///
/// SHA-256 over the source tag and lower-cased name/location, hex-encoded
/// and truncated. Stable across runs so repeated normalization of the same
/// record yields the same id.
fn synthesize_id(source: PlaceSource, name: &str, location: &str) -> String {
    let input = format!(
        "{source}\x00{}\x00{}",
        name.trim().to_lowercase(),
        location.trim().to_lowercase()
    );
    let digest = format!("{:x}", Sha256::digest(input.as_bytes()));
    format!("gen-{}", &digest[..16])
}

/// Treat empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
