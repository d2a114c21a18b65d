use std::path::Path;

use config::{Config, ConfigError, Environment as ConfigEnvironment, File};
use serde_aux::field_attributes::deserialize_number_from_string;
use tracing::info;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load settings from `./configuration`, picking the environment file from
/// `APP_ENVIRONMENT` (default `local`).
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?
        .join("configuration");

    let environment: AppEnvironment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    load_configuration(&base_path, environment)
}

/// Layer `base.yaml`, `{environment}.yaml` and `APP_`-prefixed environment
/// variables (`APP_APPLICATION__PORT=9000`), later sources winning.
pub fn load_configuration(
    base_path: &Path,
    environment: AppEnvironment,
) -> Result<Settings, ConfigError> {
    load_configuration_with(base_path, environment, app_environment_source())
}

/// `APP_`-prefixed variables, `__` separating nested keys.
pub fn app_environment_source() -> ConfigEnvironment {
    ConfigEnvironment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}

/// [`load_configuration`] with an explicit variable source as the top layer.
pub fn load_configuration_with(
    base_path: &Path,
    environment: AppEnvironment,
    variables: ConfigEnvironment,
) -> Result<Settings, ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    info!(
        environment = environment.as_str(),
        "loading configuration from {}",
        base_path.join(&environment_filename).display()
    );

    let settings = Config::builder()
        .add_source(File::from(base_path.join("base.yaml")))
        .add_source(File::from(base_path.join(&environment_filename)))
        .add_source(variables)
        .build()?
        .try_deserialize::<Settings>()?;

    info!(
        host = %settings.application.host,
        port = settings.application.port,
        "configuration loaded"
    );

    Ok(settings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Local,
    Production,
}

impl AppEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnvironment::Local => "local",
            AppEnvironment::Production => "production",
        }
    }
}

impl TryFrom<String> for AppEnvironment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
