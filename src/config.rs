use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the database location
pub const DATABASE_ENV: &str = "CHEST_TRACKER_DB";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrackerConfig {
    pub database: Option<String>,
}

/// Directory holding the running executable
pub fn install_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => anyhow::bail!("cannot determine install directory of {}", exe.display()),
    }
}

pub fn default_config_path_in(base: &Path) -> PathBuf {
    base.join("chest-tracker.toml")
}

pub fn default_database_path_in(base: &Path) -> PathBuf {
    base.join("db_files").join("collected_chests_tracker.db")
}

pub fn load_config(path: &Path) -> anyhow::Result<Option<TrackerConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)?;
    let config: TrackerConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

/// Pick the database path: environment override, then config file, then the
/// default under `base`. Relative paths resolve against `base`.
pub fn resolve_database_path(
    base: &Path,
    config: Option<&TrackerConfig>,
    env_override: Option<String>,
) -> PathBuf {
    let chosen = env_override
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.and_then(|c| c.database.clone()));

    match chosen {
        Some(path) => {
            let path = PathBuf::from(path);
            if path.is_absolute() { path } else { base.join(path) }
        }
        None => default_database_path_in(base),
    }
}

/// Database path for this installation
pub fn database_path() -> anyhow::Result<PathBuf> {
    let base = install_dir()?;
    let config = load_config(&default_config_path_in(&base))?;
    let path = resolve_database_path(&base, config.as_ref(), std::env::var(DATABASE_ENV).ok());
    ensure_db_dir(&path)?;
    Ok(path)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_inside_db_files() {
        let base = Path::new("/opt/tracker");
        assert_eq!(
            resolve_database_path(base, None, None),
            PathBuf::from("/opt/tracker/db_files/collected_chests_tracker.db")
        );
    }

    #[test]
    fn test_env_override_wins_over_config() {
        let base = Path::new("/opt/tracker");
        let config = TrackerConfig { database: Some("from_config.db".into()) };

        let path = resolve_database_path(base, Some(&config), Some("/tmp/env.db".into()));
        assert_eq!(path, PathBuf::from("/tmp/env.db"));

        let path = resolve_database_path(base, Some(&config), Some("  ".into()));
        assert_eq!(path, PathBuf::from("/opt/tracker/from_config.db"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = default_config_path_in(dir.path());

        assert!(load_config(&path).unwrap().is_none());

        std::fs::write(&path, "database = \"data/chests.db\"\n").unwrap();
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.database.as_deref(), Some("data/chests.db"));
    }

    #[test]
    fn test_ensure_db_dir_creates_subdirectory() {
        let dir = tempfile::tempdir().unwrap();
        let db = default_database_path_in(dir.path());

        ensure_db_dir(&db).unwrap();
        ensure_db_dir(&db).unwrap();

        assert!(dir.path().join("db_files").is_dir());
    }
}
