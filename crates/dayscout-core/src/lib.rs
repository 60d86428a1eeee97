//! Shared domain types and configuration for the dayscout pipeline.
//!
//! Everything downstream of the source normalizers operates on the canonical
//! [`Place`] shape defined here; the pricing tables used for budget
//! estimation live in [`pricing`] as explicit configuration rather than
//! module-level constants so tests can substitute alternate tables.

pub mod category;
pub mod config;
pub mod error;
pub mod place;
pub mod pricing;

pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env, AppConfig};
pub use error::ConfigError;
pub use place::{Place, PlaceSource, NEARBY_LOCATION, UNKNOWN_PLACE_NAME};
pub use pricing::{load_pricing, PricingConfig};
