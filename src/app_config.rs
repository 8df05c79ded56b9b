use config::{Config, ConfigError, Map};
use serde::Deserialize;

pub const DEFAULT_MESHIFY_URL: &str = "https://henrypump.meshify.com/api/v3/";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    meshify: Meshify,
}

impl AppConfig {
    /// Layers the optional `config` and `config_local` files and `MESHIFY_*` environment variables
    /// (e.g. `MESHIFY_USERNAME` becomes `meshify.username`) over the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_environment(None)
    }

    /// Reads the variables from `environment` instead of the process environment when given.
    fn load_with_environment(environment: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("meshify.url", DEFAULT_MESHIFY_URL)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(
                config::Environment::with_prefix("MESHIFY")
                    .keep_prefix(true)
                    .separator("_")
                    .source(environment),
            )
            .build()?
            .try_deserialize()
    }

    pub fn meshify(&self) -> &Meshify {
        &self.meshify
    }
}

#[derive(Debug, Deserialize)]
pub struct Meshify {
    url: String,
    username: Option<String>,
    password: Option<String>,
}

impl Meshify {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|username| !username.is_empty())
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref().filter(|password| !password.is_empty())
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                meshify: Meshify {
                    url: DEFAULT_MESHIFY_URL.to_string(),
                    username: Some("user".to_string()),
                    password: Some("pass".to_string()),
                },
            },
        }
    }

    pub fn meshify_url(mut self, url: String) -> Self {
        self.config.meshify.url = url;
        self
    }

    pub fn username(mut self, username: Option<&str>) -> Self {
        self.config.meshify.username = username.map(str::to_string);
        self
    }

    pub fn password(mut self, password: Option<&str>) -> Self {
        self.config.meshify.password = password.map(str::to_string);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
