use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Sentinel name substituted when a source record carries no usable name.
pub const UNKNOWN_PLACE_NAME: &str = "Unknown place";

/// Sentinel location used when no address/area could be resolved.
pub const NEARBY_LOCATION: &str = "Nearby";

/// Which retrieval collaborator produced a record.
///
/// Retained on the canonical shape because the budget-estimation policy
/// differs by provenance: local datastore records carry an authoritative
/// budget, the others are estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceSource {
    Local,
    MapQuery,
    CommercialApi,
}

impl std::fmt::Display for PlaceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceSource::Local => write!(f, "local"),
            PlaceSource::MapQuery => write!(f, "map_query"),
            PlaceSource::CommercialApi => write!(f, "commercial_api"),
        }
    }
}

/// The canonical place record all downstream logic operates on.
///
/// Invariant: `budget_per_person` is always present and non-negative —
/// the normalizer either copies an authoritative amount or estimates one,
/// clamping negatives to zero. Downstream code may rely on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Stable identifier; synthesized from record content when the source
    /// provides none.
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Human-readable area/address; [`NEARBY_LOCATION`] when unresolved.
    pub location: String,
    /// Approximate cost per person, in the deployment currency.
    pub budget_per_person: Decimal,
    /// Rating in `[0, 5]`, when the source reports one.
    pub rating: Option<f64>,
    pub rating_count: u64,
    pub open_now: bool,
    /// Link to the source's canonical page for this place; empty when none
    /// can be constructed.
    pub external_url: String,
    pub source: PlaceSource,
}

impl Place {
    /// Total cost for a whole group at this place.
    #[must_use]
    pub fn total_cost(&self, group_size: u32) -> Decimal {
        self.budget_per_person * Decimal::from(group_size.max(1))
    }
}
