use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::ConfigError;

/// Number of discrete price tiers exposed by commercial places APIs
/// (`PRICE_LEVEL_0` through `PRICE_LEVEL_4`).
pub const PRICE_TIER_COUNT: usize = 5;

/// Budget-estimation tables, passed explicitly through the pipeline.
///
/// The normalizer consults these when a source record carries no explicit
/// budget: a discrete price tier maps through `tier_budgets`, otherwise the
/// record's category maps through `category_defaults`, and anything else
/// lands on `fallback_budget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency band per price tier, index 0 (cheapest) to 4 (most
    /// expensive). Must be non-decreasing.
    pub tier_budgets: [Decimal; PRICE_TIER_COUNT],
    /// Per-category default used when no price signal exists at all.
    pub category_defaults: BTreeMap<Category, Decimal>,
    /// Global default for categories outside the vocabulary.
    pub fallback_budget: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let category_defaults = [
            (Category::Food, 400),
            (Category::Park, 50),
            (Category::Movie, 250),
            (Category::Fun, 500),
            (Category::Beach, 100),
            (Category::Mall, 800),
            (Category::Pilgrimage, 100),
            (Category::Hotels, 2000),
            (Category::Activities, 600),
        ]
        .into_iter()
        .map(|(category, amount)| (category, Decimal::from(amount)))
        .collect();

        PricingConfig {
            tier_budgets: [
                Decimal::from(150),
                Decimal::from(300),
                Decimal::from(600),
                Decimal::from(1200),
                Decimal::from(2500),
            ],
            category_defaults,
            fallback_budget: Decimal::from(500),
        }
    }
}

impl PricingConfig {
    /// Currency band for a price tier, or `None` when the tier is outside
    /// the known 0..=4 range.
    #[must_use]
    pub fn tier_budget(&self, tier: u8) -> Option<Decimal> {
        self.tier_budgets.get(usize::from(tier)).copied()
    }

    /// Default budget for a category, falling back to the global default
    /// for categories without an entry.
    #[must_use]
    pub fn default_for(&self, category: Category) -> Decimal {
        self.category_defaults
            .get(&category)
            .copied()
            .unwrap_or(self.fallback_budget)
    }

    /// Estimate a per-person budget from whatever price signal is available.
    ///
    /// A recognized tier wins over the category default; an unrecognized or
    /// missing tier falls back to [`PricingConfig::default_for`].
    #[must_use]
    pub fn estimate(&self, tier: Option<u8>, category: Category) -> Decimal {
        tier.and_then(|t| self.tier_budget(t))
            .unwrap_or_else(|| self.default_for(category))
    }
}

/// Load and validate pricing tables from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (negative amounts, decreasing tier bands).
pub fn load_pricing(path: &Path) -> Result<PricingConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::PricingFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let pricing: PricingConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::PricingFileParse)?;

    validate_pricing(&pricing)?;

    Ok(pricing)
}

fn validate_pricing(pricing: &PricingConfig) -> Result<(), ConfigError> {
    for window in pricing.tier_budgets.windows(2) {
        if window[1] < window[0] {
            return Err(ConfigError::Validation(format!(
                "tier budgets must be non-decreasing, got {} before {}",
                window[0], window[1]
            )));
        }
    }

    if pricing.tier_budgets[0] < Decimal::ZERO {
        return Err(ConfigError::Validation(format!(
            "tier budgets must be non-negative, got {}",
            pricing.tier_budgets[0]
        )));
    }

    for (category, amount) in &pricing.category_defaults {
        if *amount < Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "default for category '{category}' must be non-negative, got {amount}"
            )));
        }
    }

    if pricing.fallback_budget < Decimal::ZERO {
        return Err(ConfigError::Validation(format!(
            "fallback budget must be non-negative, got {}",
            pricing.fallback_budget
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_budget_in_range() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.tier_budget(0), Some(Decimal::from(150)));
        assert_eq!(pricing.tier_budget(4), Some(Decimal::from(2500)));
    }

    #[test]
    fn tier_budget_out_of_range_is_none() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.tier_budget(5), None);
    }

    #[test]
    fn default_tiers_are_monotonic() {
        let pricing = PricingConfig::default();
        assert!(pricing
            .tier_budgets
            .windows(2)
            .all(|w| w[0] <= w[1]));
    }

    #[test]
    fn estimate_prefers_tier_over_category() {
        let pricing = PricingConfig::default();
        assert_eq!(
            pricing.estimate(Some(2), Category::Food),
            Decimal::from(600)
        );
    }

    #[test]
    fn estimate_unrecognized_tier_uses_category_default() {
        let pricing = PricingConfig::default();
        assert_eq!(
            pricing.estimate(Some(9), Category::Park),
            Decimal::from(50)
        );
    }

    #[test]
    fn estimate_without_signal_uses_category_default() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.estimate(None, Category::Movie), Decimal::from(250));
    }

    #[test]
    fn estimate_unknown_category_uses_fallback() {
        let pricing = PricingConfig::default();
        assert_eq!(pricing.estimate(None, Category::Other), Decimal::from(500));
    }

    #[test]
    fn validate_rejects_decreasing_tiers() {
        let mut pricing = PricingConfig::default();
        pricing.tier_budgets[3] = Decimal::from(100);
        let err = validate_pricing(&pricing).unwrap_err();
        assert!(err.to_string().contains("non-decreasing"));
    }

    #[test]
    fn validate_rejects_negative_category_default() {
        let mut pricing = PricingConfig::default();
        pricing
            .category_defaults
            .insert(Category::Beach, Decimal::from(-10));
        let err = validate_pricing(&pricing).unwrap_err();
        assert!(err.to_string().contains("Beach"));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(validate_pricing(&PricingConfig::default()).is_ok());
    }

    #[test]
    fn load_pricing_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("pricing.yaml");
        assert!(
            path.exists(),
            "pricing.yaml missing at {path:?} — required for this test"
        );
        let pricing = load_pricing(&path).expect("pricing.yaml should load");
        assert_eq!(pricing, PricingConfig::default());
    }
}
