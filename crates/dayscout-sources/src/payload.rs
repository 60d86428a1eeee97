//! Decoding of fetched source payloads into [`RawPlaceRecord`] batches.
//!
//! Retrieval collaborators hand over whole response bodies; these helpers
//! unwrap each source's envelope (`elements` for Overpass, `places` for the
//! commercial API, a bare array for the datastore) and stamp the requested
//! category onto records whose wire format does not echo it back.

use dayscout_core::Category;
use serde::Deserialize;

use crate::error::SourceError;
use crate::types::{ApiPlace, LocalPlaceRecord, OverpassElement, RawPlaceRecord};

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct PlacesApiResponse {
    #[serde(default)]
    places: Vec<ApiPlace>,
}

/// Parse a mixed payload of source-tagged records.
///
/// Input is a JSON array of `{ "source": ..., "record": ... }` objects, the
/// shape the CLI reads from disk.
///
/// # Errors
///
/// Returns [`SourceError::Deserialize`] when the payload is not valid JSON
/// of that shape.
pub fn parse_tagged_records(bytes: &[u8]) -> Result<Vec<RawPlaceRecord>, SourceError> {
    serde_json::from_slice(bytes).map_err(|source| SourceError::Deserialize {
        context: "tagged record payload".to_string(),
        source,
    })
}

/// Parse a local datastore payload (a bare JSON array of place documents).
///
/// # Errors
///
/// Returns [`SourceError::Deserialize`] when the payload is not a valid
/// array of documents.
pub fn parse_local_payload(bytes: &[u8]) -> Result<Vec<RawPlaceRecord>, SourceError> {
    let records: Vec<LocalPlaceRecord> =
        serde_json::from_slice(bytes).map_err(|source| SourceError::Deserialize {
            context: "local datastore payload".to_string(),
            source,
        })?;

    Ok(records.into_iter().map(RawPlaceRecord::Local).collect())
}

/// Parse an Overpass API response body, stamping the requested category.
///
/// # Errors
///
/// Returns [`SourceError::Deserialize`] when the body is not a valid
/// Overpass JSON response.
pub fn parse_overpass_payload(
    bytes: &[u8],
    category: Option<Category>,
) -> Result<Vec<RawPlaceRecord>, SourceError> {
    let response: OverpassResponse =
        serde_json::from_slice(bytes).map_err(|source| SourceError::Deserialize {
            context: "Overpass response".to_string(),
            source,
        })?;

    tracing::debug!(count = response.elements.len(), "parsed Overpass elements");

    Ok(response
        .elements
        .into_iter()
        .map(|mut element| {
            element.category = element.category.or(category);
            RawPlaceRecord::MapQuery(element)
        })
        .collect())
}

/// Parse a Places API `places:searchNearby` response body, stamping the
/// requested category.
///
/// # Errors
///
/// Returns [`SourceError::Deserialize`] when the body is not a valid
/// Places API response.
pub fn parse_places_api_payload(
    bytes: &[u8],
    category: Option<Category>,
) -> Result<Vec<RawPlaceRecord>, SourceError> {
    let response: PlacesApiResponse =
        serde_json::from_slice(bytes).map_err(|source| SourceError::Deserialize {
            context: "Places API response".to_string(),
            source,
        })?;

    tracing::debug!(count = response.places.len(), "parsed Places API results");

    Ok(response
        .places
        .into_iter()
        .map(|mut place| {
            place.category = place.category.or(category);
            RawPlaceRecord::CommercialApi(place)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overpass_envelope_and_stamps_category() {
        let body = br#"{
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 42, "lat": 13.0, "lon": 80.2,
                 "tags": {"name": "Semmozhi Poonga"}},
                {"type": "way", "id": 7, "center": {"lat": 13.1, "lon": 80.3},
                 "tags": {"name": "Tower Park", "addr:street": "3rd Avenue"}}
            ]
        }"#;

        let records = parse_overpass_payload(body, Some(Category::Park)).unwrap();
        assert_eq!(records.len(), 2);
        let RawPlaceRecord::MapQuery(element) = &records[0] else {
            panic!("expected a map-query record");
        };
        assert_eq!(element.category, Some(Category::Park));
        assert_eq!(element.tags.name.as_deref(), Some("Semmozhi Poonga"));
    }

    #[test]
    fn parses_places_api_envelope() {
        let body = br#"{
            "places": [
                {"id": "ChIJx", "displayName": {"text": "PVR Cinemas"},
                 "formattedAddress": "Ampa Skywalk, Aminjikarai, Chennai, Tamil Nadu, India",
                 "rating": 4.4, "userRatingCount": 9000,
                 "priceLevel": "PRICE_LEVEL_MODERATE"}
            ]
        }"#;

        let records = parse_places_api_payload(body, Some(Category::Movie)).unwrap();
        assert_eq!(records.len(), 1);
        let RawPlaceRecord::CommercialApi(place) = &records[0] else {
            panic!("expected a commercial-api record");
        };
        assert_eq!(place.category, Some(Category::Movie));
        assert_eq!(place.price_level.as_deref(), Some("PRICE_LEVEL_MODERATE"));
    }

    #[test]
    fn stamp_does_not_override_existing_category() {
        let body = br#"{"elements": [{"type": "node", "id": 1, "category": "Beach", "tags": {}}]}"#;
        let records = parse_overpass_payload(body, Some(Category::Park)).unwrap();
        let RawPlaceRecord::MapQuery(element) = &records[0] else {
            panic!("expected a map-query record");
        };
        assert_eq!(element.category, Some(Category::Beach));
    }

    #[test]
    fn parses_local_array_payload() {
        let body = br#"[
            {"_id": "665f", "name": "Murugan Idli Shop", "category": "Food",
             "budget": 180, "openTime": "07:00", "closeTime": "23:00",
             "location": "T. Nagar, Chennai"}
        ]"#;

        let records = parse_local_payload(body).unwrap();
        assert_eq!(records.len(), 1);
        let RawPlaceRecord::Local(record) = &records[0] else {
            panic!("expected a local record");
        };
        assert_eq!(record.name.as_deref(), Some("Murugan Idli Shop"));
        assert_eq!(record.open_time.as_deref(), Some("07:00"));
    }

    #[test]
    fn parses_tagged_record_payload() {
        let body = br#"[
            {"source": "Local", "record": {"name": "Murugan Idli Shop",
             "category": "Food", "budget": 180}},
            {"source": "MapQuery", "record": {"type": "node", "id": 9,
             "category": "Park", "tags": {"name": "Tower Park"}}},
            {"source": "CommercialApi", "record": {"id": "ChIJx",
             "displayName": {"text": "PVR Cinemas"}, "category": "Movie"}}
        ]"#;

        let records = parse_tagged_records(body).unwrap();
        assert_eq!(records.len(), 3);
        assert!(matches!(records[0], RawPlaceRecord::Local(_)));
        assert!(matches!(records[1], RawPlaceRecord::MapQuery(_)));
        assert!(matches!(records[2], RawPlaceRecord::CommercialApi(_)));
    }

    #[test]
    fn malformed_payload_reports_context() {
        let err = parse_local_payload(b"{not json").unwrap_err();
        assert!(err.to_string().contains("local datastore payload"));
    }
}
