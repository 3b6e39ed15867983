//! Environment-driven configuration
//!
//! Read once at startup by the binary; the library itself never touches the
//! environment.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::Pricing;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct CoreConfig {
    /// Backing file for the key-value adapter.
    pub data_path: PathBuf,
    pub pricing: Pricing,
}

impl CoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_path = std::env::var("NEXTSHOP_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/nextshop.json"));
        let defaults = Pricing::default();
        let pricing = Pricing {
            currency: std::env::var("NEXTSHOP_CURRENCY").unwrap_or(defaults.currency),
            shipping_flat: decimal_var("NEXTSHOP_SHIPPING_FLAT", defaults.shipping_flat)?,
            tax_rate: decimal_var("NEXTSHOP_TAX_RATE", defaults.tax_rate)?,
        };
        Ok(Self { data_path, pricing })
    }
}

fn decimal_var(name: &'static str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => Decimal::from_str(&raw).map_err(|_| ConfigError::Invalid { name, value: raw }),
        Err(_) => Ok(default),
    }
}
