use crate::error::{Result, RubricError};
use crate::types::config::RubricConfig;
use crate::types::semester::Semester;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "rubric.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".rubric/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/seminar-rubric/config.toml";

const SEMESTERS_KEY: &str = "semesters";

pub fn load_config(root: &Path) -> Result<Option<RubricConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Loads `rubric.toml` under `root`, layered over the global file and under
/// the local override. Without a repo file the built-in rubrics apply and
/// `None` is returned.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<RubricConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        debug!(path = %repo_path.display(), "no rubric config, using built-in rubrics");
        return Ok(None);
    }

    let mut merged = Table::new();
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: RubricConfig = Value::Table(merged)
        .try_into()
        .map_err(|e: toml::de::Error| RubricError::ConfigParse(e.to_string()))?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Table, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging rubric config layer");
    let content = std::fs::read_to_string(path)?;
    let layer: Table = toml::from_str(&content)
        .map_err(|e| RubricError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_layer(merged, layer, path)
}

// Settings merge key by key. A semester rubric is one unit: the layer that
// mentions a semester last supplies its whole table.
fn merge_layer(merged: &mut Table, layer: Table, path: &Path) -> Result<()> {
    for (key, value) in layer {
        match value {
            Value::Table(semesters) if key == SEMESTERS_KEY => {
                replace_semesters(merged, semesters, path)?;
            }
            value => merge_value(merged, key, value),
        }
    }
    Ok(())
}

fn replace_semesters(merged: &mut Table, layer: Table, path: &Path) -> Result<()> {
    let mut semesters = match merged.remove(SEMESTERS_KEY) {
        Some(Value::Table(existing)) => existing,
        _ => Table::new(),
    };

    // Keys are stored under their canonical name so `Primero` in one layer
    // overrides `First` from another. Unknown keys pass through untouched
    // and are rejected when the config is validated.
    let mut configured = HashMap::<Semester, String>::new();
    for (key, rubric) in layer {
        let slot = match key.parse::<Semester>() {
            Ok(semester) => {
                if let Some(previous) = configured.insert(semester, key.clone()) {
                    return Err(RubricError::ConfigParse(format!(
                        "{}: semesters.{previous} and semesters.{key} both configure {semester}",
                        path.display()
                    )));
                }
                semester.as_str().to_string()
            }
            Err(_) => key,
        };
        if semesters.insert(slot.clone(), rubric).is_some() {
            debug!(semester = %slot, path = %path.display(), "semester rubric overridden");
        }
    }

    merged.insert(SEMESTERS_KEY.to_string(), Value::Table(semesters));
    Ok(())
}

fn merge_value(table: &mut Table, key: String, value: Value) {
    match value {
        Value::Table(overlay) => match table.get_mut(&key) {
            Some(Value::Table(existing)) => {
                for (key, value) in overlay {
                    merge_value(existing, key, value);
                }
            }
            _ => {
                table.insert(key, Value::Table(overlay));
            }
        },
        value => {
            table.insert(key, value);
        }
    }
}
