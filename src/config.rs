use crate::error::{AdvisorError, Result};
use crate::types::config::AdvisorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "crop-advisor.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".crop-advisor/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/crop-advisor/config.toml";

pub fn load_config(root: &Path) -> Result<AdvisorConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merge global, project and local files in that order; later keys win.
/// Relative `catalog.path` values resolve against the file that set them.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<AdvisorConfig> {
    let mut merged = Value::Table(Map::new());
    let mut loaded_any = false;
    if let Some(path) = global_path {
        loaded_any |= merge_file_if_exists(&mut merged, path)?;
    }
    loaded_any |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    loaded_any |= merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    if !loaded_any {
        tracing::debug!(root = %root.display(), "no config files found, using defaults");
        return Ok(AdvisorConfig::default());
    }

    let cfg: AdvisorConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AdvisorError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let mut value = read_toml_value(path)?;
    if let Some(base) = path.parent() {
        resolve_catalog_path(&mut value, base);
    }
    merge_toml(merged, value);
    tracing::debug!(path = %path.display(), "merged config file");
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AdvisorError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn resolve_catalog_path(value: &mut Value, base: &Path) {
    let Some(Value::String(path)) = value
        .get_mut("catalog")
        .and_then(|catalog| catalog.get_mut("path"))
    else {
        return;
    };
    if !path.is_empty() && Path::new(path.as_str()).is_relative() {
        *path = base.join(path.as_str()).display().to_string();
    }
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
