use anyhow::anyhow;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3002, worker_threads: Some(4) }
    }
}

/// Locations of the JSON collection files.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_users_file")]
    pub users_file: String,
    #[serde(default = "default_listings_file")]
    pub listings_file: String,
    #[serde(default = "default_reviews_file")]
    pub reviews_file: String,
    #[serde(default = "default_products_file")]
    pub products_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: default_users_file(),
            listings_file: default_listings_file(),
            reviews_file: default_reviews_file(),
            products_file: default_products_file(),
        }
    }
}

fn default_data_dir() -> String { "data".into() }
fn default_users_file() -> String { "data.json".into() }
fn default_listings_file() -> String { "listings.json".into() }
fn default_reviews_file() -> String { "review.json".into() }
fn default_products_file() -> String { "products.json".into() }

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { public_dir: default_public_dir(), max_file_bytes: default_max_file_bytes() }
    }
}

fn default_public_dir() -> String { "public".into() }
fn default_max_file_bytes() -> usize { 5 * 1024 * 1024 }

/// Argon2 work factor for new password hashes.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_memory_kib() -> u32 { 19 * 1024 }
fn default_iterations() -> u32 { 2 }
fn default_parallelism() -> u32 { 1 }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content).with_context(|| format!("parsing {path}"))?;
    Ok(cfg)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    /// Config file if present, otherwise defaults overridden by env vars.
    /// A file that exists but does not parse or validate is an error.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Ok(dir) = std::env::var("DATA_DIR") {
            cfg.storage.data_dir = dir;
        }
        if let Ok(dir) = std::env::var("PUBLIC_DIR") {
            cfg.uploads.public_dir = dir;
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.validate()?;
        self.uploads.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<()> {
        let files = [&self.users_file, &self.listings_file, &self.reviews_file, &self.products_file];
        if files.iter().any(|f| f.trim().is_empty()) {
            return Err(anyhow!("storage file names must not be empty"));
        }
        let mut uniq: Vec<&String> = files.to_vec();
        uniq.sort();
        uniq.dedup();
        if uniq.len() != files.len() {
            return Err(anyhow!("each collection needs its own storage file"));
        }
        Ok(())
    }

    pub fn users_path(&self) -> PathBuf { PathBuf::from(&self.data_dir).join(&self.users_file) }
    pub fn listings_path(&self) -> PathBuf { PathBuf::from(&self.data_dir).join(&self.listings_file) }
    pub fn reviews_path(&self) -> PathBuf { PathBuf::from(&self.data_dir).join(&self.reviews_file) }
    pub fn products_path(&self) -> PathBuf { PathBuf::from(&self.data_dir).join(&self.products_file) }
}

impl UploadConfig {
    fn validate(&self) -> Result<()> {
        if self.max_file_bytes == 0 {
            return Err(anyhow!("uploads.max_file_bytes must be positive"));
        }
        Ok(())
    }

    pub fn upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.public_dir).join("uploads")
    }
}

impl AuthSettings {
    fn validate(&self) -> Result<()> {
        if self.iterations == 0 || self.parallelism == 0 {
            return Err(anyhow!("auth.iterations and auth.parallelism must be positive"));
        }
        if self.memory_kib < 8 * self.parallelism {
            return Err(anyhow!("auth.memory_kib must be at least 8 * parallelism"));
        }
        Ok(())
    }
}
