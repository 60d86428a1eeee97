//! The budget filter: keep affordable places, ranked by rating.

use std::cmp::Ordering;

use dayscout_core::Place;
use rust_decimal::Decimal;

/// Keep every place whose group cost fits the group budget, sorted by
/// rating descending.
///
/// The comparison multiplies both sides by the (coerced) group size. For
/// per-person pricing the factor cancels algebraically, and `Decimal`
/// arithmetic is exact so the two forms cannot drift apart; the factor is
/// kept so the comparison stays consistent with the plan builder's
/// total-cost arithmetic. A missing rating ranks as zero; ties keep their
/// input order. An empty result is a valid output, not a failure.
#[must_use]
pub fn filter_by_budget(
    mut places: Vec<Place>,
    budget_per_person: Decimal,
    group_size: u32,
) -> Vec<Place> {
    let ceiling = budget_per_person.max(Decimal::ZERO);
    let group_size = group_size.max(1);
    let group_ceiling = ceiling * Decimal::from(group_size);

    let before = places.len();
    places.retain(|place| place.total_cost(group_size) <= group_ceiling);
    places.sort_by(|a, b| {
        rating_or_zero(b)
            .partial_cmp(&rating_or_zero(a))
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        total = before,
        within_budget = places.len(),
        %ceiling,
        "filtered places by budget"
    );

    places
}

fn rating_or_zero(place: &Place) -> f64 {
    place.rating.unwrap_or(0.0)
}
