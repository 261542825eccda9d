use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins for the JSON API.
    /// Set VISUAL_TOUCH__SERVER__CORS_ALLOWED_ORIGINS in production.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    /// Directory served under /static (landing page images).
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_bind() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_static_dir() -> String { "./static".to_string() }
fn default_db_path() -> String { "./database.db".to_string() }
fn default_max_connections() -> u32 { 5 }
fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5000".to_string()]
}

pub fn validate(cfg: &Config) -> Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("CONFIG ERROR: server.port must be non-zero");
    }

    if cfg.database.max_connections == 0 {
        anyhow::bail!("CONFIG ERROR: database.max_connections must be at least 1");
    }

    // An empty parent means a bare file name in the working directory
    if let Some(parent) = std::path::Path::new(&cfg.database.path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            anyhow::bail!(
                "CONFIG ERROR: Database directory does not exist: {}",
                parent.display()
            );
        }
    }

    tracing::info!("Configuration validation passed");
    Ok(())
}

pub fn load() -> Result<Config> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(
            config::Environment::with_prefix("VISUAL_TOUCH")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_allowed_origins")
                .try_parsing(true),
        )
        .set_default("server.bind", default_bind())?
        .set_default("server.port", i64::from(default_port()))?
        .set_default("server.cors_allowed_origins", default_cors_allowed_origins())?
        .set_default("server.static_dir", default_static_dir())?
        .set_default("database.path", default_db_path())?
        .set_default("database.max_connections", i64::from(default_max_connections()))?
        .build()?
        .try_deserialize()?;

    validate(&cfg)?;

    Ok(cfg)
}
