//! Plan, slot and slot-template types.

use dayscout_core::Place;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::buckets::Bucket;

/// One named position in a plan template, with its candidate buckets in
/// preference order.
///
/// Fallback chains are data, not branching: "Activity" preferring outdoor
/// places but accepting a paid venue is simply `[Outdoor, Indoor]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub title: String,
    pub buckets: Vec<Bucket>,
}

impl SlotSpec {
    #[must_use]
    pub fn new(title: impl Into<String>, buckets: Vec<Bucket>) -> Self {
        SlotSpec {
            title: title.into(),
            buckets,
        }
    }
}

/// One filled-or-empty position in a built plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub title: String,
    /// The slot's primary bucket, from the template.
    pub bucket: Bucket,
    /// The chosen place, or `None` when no candidate satisfied the slot.
    pub place: Option<Place>,
}

/// A single-day itinerary.
///
/// Built fresh on every request; callers treat it as an immutable value.
/// `ok` is false only when every slot came up empty, in which case
/// `diagnostics` explains what to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub ok: bool,
    /// Slots in template order; never reordered.
    pub slots: Vec<Slot>,
    /// Sum of per-person costs over filled slots.
    pub per_person_total: Decimal,
    /// `per_person_total` times the (coerced) group size.
    pub group_total: Decimal,
    pub diagnostics: Vec<String>,
}

/// The standard single-day template: three meals around an activity and an
/// evening outing.
#[must_use]
pub fn default_template() -> Vec<SlotSpec> {
    vec![
        SlotSpec::new("Breakfast", vec![Bucket::Meal]),
        SlotSpec::new("Activity", vec![Bucket::Outdoor, Bucket::Indoor]),
        SlotSpec::new("Lunch", vec![Bucket::Meal]),
        SlotSpec::new(
            "Evening",
            vec![Bucket::Screening, Bucket::Indoor, Bucket::Outdoor],
        ),
        SlotSpec::new("Dinner", vec![Bucket::Meal]),
    ]
}
