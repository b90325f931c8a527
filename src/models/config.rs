use serde::Deserialize;

/// Runtime settings for the inventory service.
///
/// Values come from `config/default.yaml`, an optional
/// `config/{APP_ENV}.yaml` overlay and `APP_*` environment variables, in that
/// order of precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    pub address: String,
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// Path of the SQLite database file.
    pub database_url: String,
}

impl ServerConfig {
    /// Load settings for the given environment name.
    pub fn load(app_env: &str) -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8000_i64)?
            .set_default("database_url", "app.db")?
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(::config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults_without_config_files() {
        let config = ServerConfig::load("does-not-exist").unwrap();
        assert!(!config.address.is_empty());
        assert!(!config.database_url.is_empty());
    }
}
