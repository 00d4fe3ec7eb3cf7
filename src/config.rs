use crate::error::{Result, TeaError};
use crate::types::config::TeaConfig;
use std::path::{Path, PathBuf};
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "teascore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".teascore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/teascore/config.toml";

pub fn load_config(root: &Path) -> Result<Option<TeaConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, project and local files in that order. Returns `None` when
/// none of them exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<TeaConfig>> {
    let layers = global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)]);

    let mut merged: Option<Value> = None;
    for path in layers {
        let Some(layer) = read_layer(&path)? else {
            continue;
        };
        match merged.as_mut() {
            Some(base) => overlay(base, layer),
            None => merged = Some(layer),
        }
    }

    let Some(merged) = merged else {
        tracing::debug!(root = %root.display(), "no teascore config found");
        return Ok(None);
    };
    merged
        .try_into()
        .map(Some)
        .map_err(|e: toml::de::Error| TeaError::ConfigParse(e.to_string()))
}

/// One config layer as a raw TOML tree, or `None` if the file is absent.
fn read_layer(path: &Path) -> Result<Option<Value>> {
    if !path.is_file() {
        return Ok(None);
    }
    tracing::debug!(path = %path.display(), "reading config layer");
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| TeaError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value in `layer` replaces `base`.
fn overlay(base: &mut Value, layer: Value) {
    match layer {
        Value::Table(layer_table) if base.is_table() => {
            let Some(base_table) = base.as_table_mut() else {
                return;
            };
            for (key, value) in layer_table {
                match base_table.get_mut(&key) {
                    Some(existing) => overlay(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        layer => *base = layer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::NormalizationMethod;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_file_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[normalizer]
steepness = 0.7
max_effect_score = 9.0

[modifiers.green]
calming = 1.4
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[normalizer]
method = "logistic"
max_effect_score = 9.5
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".teascore")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[enhancement]
enabled = false
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let normalizer = cfg.normalizer_config();
        assert_eq!(cfg.method(), NormalizationMethod::Logistic);
        assert_eq!(normalizer.steepness, 0.7);
        assert_eq!(normalizer.max_effect_score, 9.5);
        assert!(!cfg.enhancement_enabled());
        assert_eq!(cfg.modifiers()["green"]["calming"], 1.4);
    }

    #[test]
    fn overlay_replaces_scalars_and_keeps_untouched_keys() {
        let mut base: Value =
            toml::from_str("[normalizer]\nsteepness = 0.7\nmethod = \"logistic\"\n")
                .expect("base should parse");
        let layer: Value =
            toml::from_str("[normalizer]\nsteepness = 0.9\n").expect("layer should parse");

        overlay(&mut base, layer);
        assert_eq!(base["normalizer"]["steepness"].as_float(), Some(0.9));
        assert_eq!(base["normalizer"]["method"].as_str(), Some("logistic"));
    }

    #[test]
    fn load_config_reports_malformed_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[normalizer\nsteepness = ")
            .expect("broken config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains("config parse error"));
    }
}
