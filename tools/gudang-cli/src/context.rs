//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use gudang_core::SiteConfig;
use gudang_data::{CatalogStore, FirestoreStore, MemoryStore};

use crate::output::Output;
use crate::transport::ReqwestTransport;

/// File names searched for, nearest directory first.
pub const CONFIG_NAMES: [&str; 3] = ["gudang.toml", ".gudang.toml", "gudang.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Resolved site configuration.
    pub config: SiteConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// JSON export to read instead of Firestore.
    pub snapshot: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load the config file, then apply `GUDANG_*` environment overrides.
    pub fn load(config_path: Option<&str>, snapshot: Option<String>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (load_config(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (load_config(&path)?, Some(path)),
                None => (SiteConfig::default(), None),
            },
        };

        config
            .apply_overrides(|key| std::env::var(env_key(key)).ok())
            .context("Invalid environment override")?;

        Ok(Self {
            config,
            config_path,
            snapshot: snapshot.map(|s| resolve(&cwd, &s)),
            output,
            cwd,
        })
    }

    /// Open the data source: the snapshot when given, Firestore otherwise.
    pub fn open_store(&self) -> Result<Box<dyn CatalogStore>> {
        match &self.snapshot {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
                let store = MemoryStore::from_json_str(&content)
                    .with_context(|| format!("Failed to parse snapshot: {}", path.display()))?;
                self.output.debug(&format!(
                    "Snapshot: {} products, {} brands, {} banners",
                    store.products.len(),
                    store.brands.len(),
                    store.banners.len()
                ));
                Ok(Box::new(store))
            }
            None => {
                self.output
                    .debug(&format!("Firestore: {}", self.config.firestore.documents_url()));
                Ok(Box::new(FirestoreStore::new(
                    ReqwestTransport::new()?,
                    &self.config,
                )))
            }
        }
    }
}

/// `firestore_project_id` -> `GUDANG_FIRESTORE_PROJECT_ID`.
pub fn env_key(key: &str) -> String {
    format!("GUDANG_{}", key.to_ascii_uppercase())
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn load_config(path: &Path) -> Result<SiteConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let parsed = if path.extension().is_some_and(|ext| ext == "json") {
        SiteConfig::from_json_str(&content)
    } else {
        SiteConfig::from_toml_str(&content)
    };
    parsed.with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Walk up from `start` looking for a config file.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        if !current.pop() {
            return None;
        }
    }
}
