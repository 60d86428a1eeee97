//! Classification of categories into plan buckets.

use dayscout_core::Category;
use serde::{Deserialize, Serialize};

/// A category-derived grouping used to fill one plan slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Bucket {
    /// Restaurants, cafes and other food stops.
    Meal,
    /// Low-cost passive outings: parks, beaches, places of worship.
    Outdoor,
    /// Paid indoor venues: arcades, malls, activity centres.
    Indoor,
    /// Cinemas.
    Screening,
    /// Everything a slot never targets (lodging, unrecognized categories).
    Other,
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Meal => write!(f, "meal"),
            Bucket::Outdoor => write!(f, "outdoor"),
            Bucket::Indoor => write!(f, "indoor"),
            Bucket::Screening => write!(f, "screening"),
            Bucket::Other => write!(f, "other"),
        }
    }
}

/// Total classification from the category vocabulary to a bucket.
///
/// Single fallback rule: categories that no slot should ever pick
/// (overnight lodging, anything outside the vocabulary) map to
/// [`Bucket::Other`].
#[must_use]
pub fn bucket_for(category: Category) -> Bucket {
    match category {
        Category::Food => Bucket::Meal,
        Category::Park | Category::Beach | Category::Pilgrimage => Bucket::Outdoor,
        Category::Fun | Category::Mall | Category::Activities => Bucket::Indoor,
        Category::Movie => Bucket::Screening,
        Category::Hotels | Category::Other => Bucket::Other,
    }
}
