use core_config::{
    app_info, database::DatabaseConfig, server::ServerConfig, AppInfo, ConfigError, FromEnv,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration composed from shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = DatabaseConfig::from_env()?; // Required - fails if DATABASE_URL not set
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}
