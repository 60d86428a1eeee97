//! The day-plan builder.
//!
//! 1. Partition the filtered places into buckets by category.
//! 2. Fill each template slot with the first unused, affordable candidate
//!    from its bucket chain.
//! 3. Aggregate per-person and group totals.
//! 4. Report the outcome, with diagnostics for anything left empty.
//!
//! The builder never re-sorts: within a bucket, candidates keep the budget
//! filter's rating-descending order, so identical inputs always produce
//! identical plans.

use std::collections::{BTreeMap, HashSet};

use dayscout_core::Place;
use rust_decimal::Decimal;

use crate::buckets::{bucket_for, Bucket};
use crate::plan::{Plan, Slot, SlotSpec};

/// Assemble a single-day plan from an ordered candidate list.
///
/// Total over all numeric inputs: a group size below 1 is coerced to 1 and
/// a negative ceiling to 0. No place fills more than one slot; a slot with
/// no affordable, unused candidate stays empty without failing the plan.
/// `ok` is false only when every slot stays empty.
#[must_use]
pub fn build_plan(
    places: &[Place],
    budget_per_person: Decimal,
    group_size: u32,
    template: &[SlotSpec],
) -> Plan {
    let ceiling = budget_per_person.max(Decimal::ZERO);
    let group_size = group_size.max(1);

    let mut buckets: BTreeMap<Bucket, Vec<&Place>> = BTreeMap::new();
    for place in places {
        buckets
            .entry(bucket_for(place.category))
            .or_default()
            .push(place);
    }

    let mut used: HashSet<&str> = HashSet::new();
    let mut slots: Vec<Slot> = Vec::with_capacity(template.len());

    for spec in template {
        let candidate = spec.buckets.iter().find_map(|bucket| {
            buckets.get(bucket).and_then(|candidates| {
                candidates
                    .iter()
                    .find(|place| {
                        !used.contains(place.id.as_str()) && place.budget_per_person <= ceiling
                    })
                    .copied()
            })
        });

        if let Some(place) = candidate {
            tracing::debug!(slot = %spec.title, place = %place.name, "filled slot");
            used.insert(place.id.as_str());
        } else {
            tracing::debug!(slot = %spec.title, "no candidate for slot");
        }

        slots.push(Slot {
            title: spec.title.clone(),
            bucket: spec.buckets.first().copied().unwrap_or(Bucket::Other),
            place: candidate.cloned(),
        });
    }

    let per_person_total: Decimal = slots
        .iter()
        .filter_map(|slot| slot.place.as_ref())
        .map(|place| place.budget_per_person)
        .sum();
    let group_total = per_person_total * Decimal::from(group_size);

    let ok = slots.iter().any(|slot| slot.place.is_some());

    let mut diagnostics: Vec<String> = Vec::new();
    if !ok {
        diagnostics.push(
            "no places fit your budget; try raising it or broadening the categories searched"
                .to_string(),
        );
    }
    for slot in slots.iter().filter(|slot| slot.place.is_none()) {
        diagnostics.push(format!(
            "no {} candidate for {} within budget",
            slot.bucket, slot.title
        ));
    }

    Plan {
        ok,
        slots,
        per_person_total,
        group_total,
        diagnostics,
    }
}
