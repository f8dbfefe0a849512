use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the inventory database location.
pub const INVENTORY_DB_ENV: &str = "INVENTORY_DB_PATH";

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const DEFAULT_INVENTORY_DATABASE: &str = "inventory_secure.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CapstoneConfig {
    pub tasks_file: Option<String>,
    pub inventory_database: Option<String>,
}

impl CapstoneConfig {
    /// Config written by `capstone init`, with every default spelled out.
    pub fn with_defaults() -> Self {
        Self {
            tasks_file: Some(DEFAULT_TASKS_FILE.to_string()),
            inventory_database: Some(DEFAULT_INVENTORY_DATABASE.to_string()),
        }
    }

    /// Tasks file: flag, then config, then default.
    pub fn resolve_tasks_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.tasks_file.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE))
    }

    /// Inventory database: flag, then `INVENTORY_DB_PATH`, then config, then default.
    pub fn resolve_inventory_database(&self, flag: Option<PathBuf>, env: Option<String>) -> PathBuf {
        flag.or_else(|| env.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
            .or_else(|| self.inventory_database.as_ref().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY_DATABASE))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("capstone.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<CapstoneConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: CapstoneConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &CapstoneConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_parent_dir(file_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("capstone.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capstone.toml");

        write_config(&path, &CapstoneConfig::with_defaults(), false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, CapstoneConfig::with_defaults());

        // Refuses to clobber without force
        assert!(write_config(&path, &CapstoneConfig::default(), false).is_err());
        write_config(&path, &CapstoneConfig::default(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().unwrap(), CapstoneConfig::default());
    }

    #[test]
    fn test_inventory_path_precedence() {
        let config = CapstoneConfig {
            tasks_file: None,
            inventory_database: Some("from_config.db".into()),
        };

        assert_eq!(
            config.resolve_inventory_database(Some("flag.db".into()), Some("env.db".into())),
            PathBuf::from("flag.db")
        );
        assert_eq!(
            config.resolve_inventory_database(None, Some("env.db".into())),
            PathBuf::from("env.db")
        );
        assert_eq!(
            config.resolve_inventory_database(None, Some("  ".into())),
            PathBuf::from("from_config.db")
        );
        assert_eq!(
            CapstoneConfig::default().resolve_inventory_database(None, None),
            PathBuf::from(DEFAULT_INVENTORY_DATABASE)
        );
    }

    #[test]
    fn test_tasks_path_precedence() {
        let config = CapstoneConfig {
            tasks_file: Some("mine.json".into()),
            inventory_database: None,
        };
        assert_eq!(config.resolve_tasks_file(None), PathBuf::from("mine.json"));
        assert_eq!(config.resolve_tasks_file(Some("other.json".into())), PathBuf::from("other.json"));
        assert_eq!(CapstoneConfig::default().resolve_tasks_file(None), PathBuf::from(DEFAULT_TASKS_FILE));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("data").join("nested").join("inv.db");
        ensure_parent_dir(&db).unwrap();
        assert!(db.parent().unwrap().is_dir());
    }
}
