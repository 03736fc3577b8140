use crate::error::{CalcError, Result};
use crate::types::config::PkdConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "pkd.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".pkd/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/pkd-calc/config.toml";

pub fn load_config(root: &Path) -> Result<Option<PkdConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PkdConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        debug!(path = %repo_path.display(), "no config file");
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PkdConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| CalcError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

/// Resolve a splits path from the config against the directory it was loaded from.
pub fn resolve_config_path(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CalcError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{BoostsSetting, FormatSetting};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_repo_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[output]
format = "json"
limit = 20
boosts = "three"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
limit = 3

[splits]
path = "splits.json"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".pkd")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[output]
boosts = "two"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let output = cfg.output_settings();
        assert_eq!(output.format, FormatSetting::Json);
        assert_eq!(output.limit, 3);
        assert_eq!(output.boosts, BoostsSetting::Two);
        assert_eq!(
            cfg.splits_path().map(|path| path.as_path()),
            Some(Path::new("splits.json"))
        );
    }

    #[test]
    fn malformed_repo_file_is_a_config_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[output\nlimit = 3")
            .expect("repo config should write");
        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(matches!(err, CalcError::ConfigParse(_)));
    }

    #[test]
    fn zero_limit_fails_validation_after_merge() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[output]\nlimit = 0\n")
            .expect("repo config should write");
        assert!(matches!(
            load_config_with_global(root.path(), None),
            Err(CalcError::ConfigParse(_))
        ));
    }

    #[test]
    fn relative_splits_path_resolves_against_root() {
        let root = Path::new("/tmp/seeds");
        assert_eq!(
            resolve_config_path(root, Path::new("splits.json")),
            PathBuf::from("/tmp/seeds/splits.json")
        );
        assert_eq!(
            resolve_config_path(root, Path::new("/abs/splits.json")),
            PathBuf::from("/abs/splits.json")
        );
    }
}
