use std::path::PathBuf;

/// Where the movie collection lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process memory, seeded with the default catalog.
    Memory,
    /// A single JSON file under `data_dir`.
    File,
}

impl StorageBackend {
    /// Parse a `STORAGE_BACKEND` value (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => Some(Self::Memory),
            "file" | "json" => Some(Self::File),
            _ => None,
        }
    }
}

/// Storage settings for the movie collection.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory holding the backing file (default: working directory).
    pub data_dir: PathBuf,
    /// Backing file name inside `data_dir`.
    pub data_file: String,
    /// Seed for a missing backing file. Relative paths resolve against
    /// `data_dir`.
    pub seed_file: PathBuf,
}

impl StorageConfig {
    /// Seed file path with relative paths resolved against `data_dir`.
    pub fn resolved_seed_file(&self) -> PathBuf {
        if self.seed_file.is_absolute() {
            self.seed_file.clone()
        } else {
            self.data_dir.join(&self.seed_file)
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A `*` entry allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default             |
    /// |------------------------|---------------------|
    /// | `HOST`                 | `0.0.0.0`           |
    /// | `PORT`                 | `3000`              |
    /// | `CORS_ORIGINS`         | `*`                 |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                |
    /// | `STORAGE_BACKEND`      | `file`              |
    /// | `DATA_DIR`             | `.`                 |
    /// | `DATA_FILE`            | `movies.json`       |
    /// | `SEED_FILE`            | `movies.seed.json`  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend_raw = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "file".into());
        let backend = StorageBackend::parse(&backend_raw).unwrap_or_else(|| {
            panic!("STORAGE_BACKEND must be 'memory' or 'file', got '{backend_raw}'")
        });

        let storage = StorageConfig {
            backend,
            data_dir: std::env::var("DATA_DIR")
                .unwrap_or_else(|_| ".".into())
                .into(),
            data_file: std::env::var("DATA_FILE").unwrap_or_else(|_| "movies.json".into()),
            seed_file: std::env::var("SEED_FILE")
                .unwrap_or_else(|_| "movies.seed.json".into())
                .into(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
        }
    }
}
