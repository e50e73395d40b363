use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const SERVER_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound for `livekit.token_ttl_secs`.
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const CORS_ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
/// Headers advertised in `Access-Control-Allow-Headers`.
pub const CORS_ALLOWED_HEADERS: &str = "Content-Type";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub livekit: LiveKitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn parse() -> anyhow::Result<Self> {
        Self::load(Self::environment())
    }

    /// `WIBE_` prefixed variables, `__` between nested keys, e.g. `WIBE_LIVEKIT__API_KEY`.
    pub fn environment() -> Environment {
        Environment::with_prefix("wibe")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
            .try_parsing(true)
    }

    pub fn load(environment: Environment) -> anyhow::Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name(config_file_path("config.toml")?.as_str()).required(false))
            .add_source(File::with_name("config.toml").required(false))
            .add_source(environment)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<Self>()
            .context("Failed to deserialize config")?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.livekit.api_key.is_empty() {
            anyhow::bail!("LiveKit API key is empty");
        } else if self.livekit.api_secret.is_empty() {
            anyhow::bail!("LiveKit API secret is empty");
        } else if self.livekit.token_ttl_secs == 0 {
            anyhow::bail!("Token TTL must be positive");
        } else if self.livekit.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            anyhow::bail!(
                "Token TTL of {}s exceeds the maximum of {}s",
                self.livekit.token_ttl_secs,
                MAX_TOKEN_TTL_SECS
            );
        }
        Ok(())
    }
}

pub fn config_file_path(file_name: impl AsRef<Path>) -> anyhow::Result<String> {
    Ok(Path::new("/etc")
        .join(env!("CARGO_PKG_NAME").to_lowercase())
        .join(file_name)
        .to_str()
        .context("Failed to build config file path")?
        .to_string())
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct LiveKitConfig {
    pub api_key: String,
    pub api_secret: String,
    pub token_ttl_secs: u64,
}

impl LiveKitConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}

impl Default for LiveKitConfig {
    fn default() -> Self {
        Self {
            api_key: "".to_string(),
            api_secret: "".to_string(),
            token_ttl_secs: 21600, // 6 hours
        }
    }
}

impl fmt::Debug for LiveKitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveKitConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[redacted]")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "https://wibechat-demo.web.app".to_string(),
                "http://localhost:5000".to_string(),
            ],
            max_age_secs: 3600,
        }
    }
}
