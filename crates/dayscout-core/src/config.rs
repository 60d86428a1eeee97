use std::path::PathBuf;

use rust_decimal::Decimal;

use crate::ConfigError;

/// Application configuration for the dayscout binaries.
///
/// Every knob has a default; configuration can never be "missing", only
/// invalid.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Path to the YAML pricing tables; falls back to built-in defaults
    /// when the file does not exist.
    pub pricing_path: PathBuf,
    pub default_group_size: u32,
    pub default_budget_per_person: Decimal,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any set variable has an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any set variable has an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_decimal = |var: &str, default: &str| -> Result<Decimal, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("DAYSCOUT_LOG_LEVEL", "info");
    let pricing_path = PathBuf::from(or_default("DAYSCOUT_PRICING_PATH", "./config/pricing.yaml"));
    let default_group_size = parse_u32("DAYSCOUT_DEFAULT_GROUP_SIZE", "2")?.max(1);
    let default_budget_per_person = parse_decimal("DAYSCOUT_DEFAULT_BUDGET", "800")?;

    if default_budget_per_person < Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar {
            var: "DAYSCOUT_DEFAULT_BUDGET".to_string(),
            reason: "budget must be non-negative".to_string(),
        });
    }

    Ok(AppConfig {
        log_level,
        pricing_path,
        default_group_size,
        default_budget_per_person,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn empty_env_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.pricing_path, PathBuf::from("./config/pricing.yaml"));
        assert_eq!(cfg.default_group_size, 2);
        assert_eq!(cfg.default_budget_per_person, Decimal::from(800));
    }

    #[test]
    fn overrides_are_respected() {
        let mut map = HashMap::new();
        map.insert("DAYSCOUT_LOG_LEVEL", "debug");
        map.insert("DAYSCOUT_DEFAULT_GROUP_SIZE", "4");
        map.insert("DAYSCOUT_DEFAULT_BUDGET", "1500");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.default_group_size, 4);
        assert_eq!(cfg.default_budget_per_person, Decimal::from(1500));
    }

    #[test]
    fn zero_group_size_is_coerced_to_one() {
        let mut map = HashMap::new();
        map.insert("DAYSCOUT_DEFAULT_GROUP_SIZE", "0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.default_group_size, 1);
    }

    #[test]
    fn invalid_group_size_is_an_error() {
        let mut map = HashMap::new();
        map.insert("DAYSCOUT_DEFAULT_GROUP_SIZE", "many");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAYSCOUT_DEFAULT_GROUP_SIZE"),
            "expected InvalidEnvVar(DAYSCOUT_DEFAULT_GROUP_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn negative_default_budget_is_an_error() {
        let mut map = HashMap::new();
        map.insert("DAYSCOUT_DEFAULT_BUDGET", "-50");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DAYSCOUT_DEFAULT_BUDGET"),
            "expected InvalidEnvVar(DAYSCOUT_DEFAULT_BUDGET), got: {result:?}"
        );
    }
}
