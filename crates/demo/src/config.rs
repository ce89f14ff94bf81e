//! Demo configuration, read from the environment.

use anyhow::Context;

use fruitstock_inventory::{FruitStock, SeedFruit};

/// Env var holding a JSON array of `{"name": .., "quantity": ..}` seed entries.
pub const SEED_ENV: &str = "FRUITSTOCK_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub seed: Vec<SeedFruit>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: FruitStock::default_seed(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_seed_var(std::env::var(SEED_ENV).ok().as_deref())
    }

    /// Build from the raw value of [`SEED_ENV`]; `None` means unset.
    pub fn from_seed_var(raw: Option<&str>) -> anyhow::Result<Self> {
        let Some(raw) = raw else {
            tracing::debug!("{SEED_ENV} not set; using default seed");
            return Ok(Self::default());
        };

        let seed: Vec<SeedFruit> = serde_json::from_str(raw)
            .with_context(|| format!("{SEED_ENV} is not a valid seed list"))?;
        tracing::debug!(fruits = seed.len(), "seed loaded from {SEED_ENV}");
        Ok(Self { seed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_seed_uses_default_stock() {
        let config = DemoConfig::from_seed_var(None).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.seed.len(), 3);
    }

    #[test]
    fn parses_seed_json() {
        let config =
            DemoConfig::from_seed_var(Some(r#"[{"name":"Kiwi","quantity":4},{"name":"Figue","quantity":0}]"#))
                .unwrap();
        assert_eq!(
            config.seed,
            vec![SeedFruit::new("Kiwi", 4), SeedFruit::new("Figue", 0)]
        );
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = DemoConfig::from_seed_var(Some("Pomme=10")).unwrap_err();
        assert!(err.to_string().contains(SEED_ENV));
    }
}
