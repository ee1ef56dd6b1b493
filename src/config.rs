use std::{fs, path::Path};

use chrono_tz::Tz;
use serde::Deserialize;

use crate::{
    error::{StorefrontError, StorefrontResult},
    pricing::BROWN_BAG_UNIT_PRICE,
};

/// Service settings, read from a JSON file.
///
/// Every field is optional in the file and falls back to [`Config::default`].
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub bind_address: String,
    /// IANA name, used to read the weekday and clock time of incoming instants.
    pub timezone: String,
    pub brown_bag_unit_price: f64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:7878".to_string(),
            timezone: "Africa/Lagos".to_string(),
            brown_bag_unit_price: BROWN_BAG_UNIT_PRICE,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_config(config: String) -> StorefrontResult<Self> {
        let config: Config = serde_json::from_str(&config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the file at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> StorefrontResult<Self> {
        match path {
            Some(path) => Self::from_config(fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn timezone(&self) -> StorefrontResult<Tz> {
        self.timezone
            .parse()
            .map_err(|_| StorefrontError::InvalidTimezone {
                name: self.timezone.clone(),
            })
    }

    fn validate(&self) -> StorefrontResult<()> {
        self.timezone()?;
        if !self.brown_bag_unit_price.is_finite() || self.brown_bag_unit_price < 0.0 {
            return Err(StorefrontError::InvalidConfig {
                field: "brownBagUnitPrice".to_string(),
                value: self.brown_bag_unit_price.to_string(),
            });
        }
        if self.bind_address.trim().is_empty() {
            return Err(StorefrontError::InvalidConfig {
                field: "bindAddress".to_string(),
                value: self.bind_address.clone(),
            });
        }
        Ok(())
    }
}
