use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::form::PricePolicy;
use crate::schemas::Parties;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    // Unset means expenses are only kept in memory
    pub mongodb_uri: Option<String>,
    pub database: String,
    pub collection: String,
    pub first_party: String,
    pub second_party: String,
    pub price_policy: PricePolicy,
    pub allowed_origin: Option<String>,
    pub log_level: String,
}

impl Settings {
    // A bare MONGODB_URI only fills in when TRACKER_MONGODB_URI is unset
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_env(
            Environment::with_prefix("TRACKER"),
            std::env::var("MONGODB_URI").ok(),
        )
    }

    fn from_env(environment: Environment, bare_mongodb_uri: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().add_source(environment);
        if let Some(uri) = bare_mongodb_uri {
            builder = builder.set_default("mongodb_uri", uri)?;
        }
        Self::from_config(builder)
    }

    fn from_config(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Settings = builder
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("database", "ExpenseTracker")?
            .set_default("collection", "Items")?
            .set_default("first_party", "Rahul")?
            .set_default("second_party", "Ramesh")?
            .set_default("price_policy", "reject")?
            .set_default("log_level", "info")?
            .build()?
            .try_deserialize()?;

        if settings.first_party == settings.second_party {
            return Err(ConfigError::Message(format!(
                "both parties are called {:?}",
                settings.first_party
            )));
        }
        Ok(settings)
    }

    pub fn parties(&self) -> Parties {
        Parties::new(self.first_party.clone(), self.second_party.clone())
    }
}
