//! Process configuration from the environment.

use std::path::PathBuf;

pub const INVENTORY_FILE_ENV: &str = "GALLERY_INVENTORY_FILE";
pub const DISCOUNT_PERCENT_ENV: &str = "GALLERY_DISCOUNT_PERCENT";

pub const DEFAULT_INVENTORY_FILE: &str = "art_inventory.json";
pub const DEFAULT_DISCOUNT_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the inventory snapshot is saved and reloaded from.
    pub inventory_file: PathBuf,
    /// Discount the demo run applies to the first item.
    pub discount_percent: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            discount_percent: DEFAULT_DISCOUNT_PERCENT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let inventory_file = lookup(INVENTORY_FILE_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_file);

        let discount_percent = match lookup(DISCOUNT_PERCENT_ENV) {
            None => defaults.discount_percent,
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(pct) if pct.is_finite() => pct,
                _ => {
                    tracing::warn!(
                        value = %raw,
                        "{DISCOUNT_PERCENT_ENV} is not a number; using {DEFAULT_DISCOUNT_PERCENT}"
                    );
                    defaults.discount_percent
                }
            },
        };

        Self {
            inventory_file,
            discount_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.inventory_file, PathBuf::from("art_inventory.json"));
        assert_eq!(config.discount_percent, 10.0);
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (INVENTORY_FILE_ENV, "/tmp/gallery.json"),
            (DISCOUNT_PERCENT_ENV, "25"),
        ]));
        assert_eq!(config.inventory_file, PathBuf::from("/tmp/gallery.json"));
        assert_eq!(config.discount_percent, 25.0);
    }

    #[test]
    fn bad_discount_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(DISCOUNT_PERCENT_ENV, "ten")]));
        assert_eq!(config.discount_percent, DEFAULT_DISCOUNT_PERCENT);
        let config = AppConfig::from_lookup(lookup_from(&[(DISCOUNT_PERCENT_ENV, "inf")]));
        assert_eq!(config.discount_percent, DEFAULT_DISCOUNT_PERCENT);
    }

    #[test]
    fn blank_path_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(INVENTORY_FILE_ENV, "  ")]));
        assert_eq!(config.inventory_file, PathBuf::from(DEFAULT_INVENTORY_FILE));
    }
}
