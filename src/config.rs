use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured database path
pub const DATABASE_ENV: &str = "SNIPPETS_DB";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SnippetsConfig {
    pub database: Option<String>,
    /// Append logs to this file instead of stderr
    pub log_file: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("snippets.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join(".snippets").join("snippets.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SnippetsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SnippetsConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SnippetsConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Pick the database path: explicit flag, then `SNIPPETS_DB`, then config, then the default.
pub fn resolve_database_path(
    flag: Option<&Path>,
    env: Option<String>,
    config: Option<&SnippetsConfig>,
) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Some(path) = env.filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }
    config
        .and_then(|c| c.database.as_deref())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| default_database_path_in(Path::new(".")))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
