use anyhow::Result;
use config::{Config as ConfigLoader, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub dataset_csv: String,
    pub model_storage_dir: String,
    pub poll_interval_secs: u64,
    pub max_poll_attempts: u32,
    pub log_requests: bool,
}

impl Config {
    /// Defaults, then config files, then `ML_LIFECYCLE_*` environment
    /// variables. A bare environment still yields a complete configuration.
    pub fn load() -> Result<Self> {
        let config = ConfigLoader::builder()
            .add_source(ConfigLoader::try_from(&Config::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("ML_LIFECYCLE"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:9443".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            dataset_csv: "data/yacht_hydrodynamics.csv".to_string(),
            model_storage_dir: "models".to_string(),
            poll_interval_secs: 5,
            max_poll_attempts: 120,
            log_requests: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_files_falls_back_to_defaults() {
        // Tests run from the package directory, which has no config/ tree.
        let config = Config::load().unwrap();
        let defaults = Config::default();
        assert_eq!(config.base_url, defaults.base_url);
        assert_eq!(config.poll_interval_secs, defaults.poll_interval_secs);
        assert_eq!(config.max_poll_attempts, defaults.max_poll_attempts);
        assert_eq!(config.dataset_csv, defaults.dataset_csv);
    }
}
