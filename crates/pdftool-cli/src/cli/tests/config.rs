//! Tests for choosing the run configuration.

use crate::cli::{resolve_config, ConfigNote};
use anyhow::anyhow;
use pdftool_core::config::LoadedConfig;
use std::fs;
use tempfile::tempdir;

fn not_consulted() -> anyhow::Result<LoadedConfig> {
    panic!("default location not consulted")
}

#[test]
fn unusable_default_location_falls_back_to_defaults() {
    let (cfg, note) =
        resolve_config(None, || Err(anyhow!("Not a directory (os error 20)"))).unwrap();
    assert_eq!(cfg.max_redirections, 10);
    match note {
        Some(ConfigNote::Fallback(e)) => assert!(e.to_string().contains("Not a directory")),
        other => panic!("expected Fallback, got {other:?}"),
    }
}

#[test]
fn created_default_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let (_, note) = resolve_config(None, || {
        pdftool_core::config::load_or_init_at(&path)
    })
    .unwrap();
    match note {
        Some(ConfigNote::Created(created)) => assert_eq!(created, path),
        other => panic!("expected Created, got {other:?}"),
    }
}

#[test]
fn existing_default_has_no_note() {
    let (cfg, note) = resolve_config(None, || {
        Ok(LoadedConfig {
            config: Default::default(),
            created: None,
        })
    })
    .unwrap();
    assert!(note.is_none());
    assert_eq!(cfg.connect_timeout_secs, 15);
}

#[test]
fn explicit_config_must_load() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let result = resolve_config(Some(missing.as_path()), not_consulted);
    assert!(result.is_err());

    let path = dir.path().join("custom.toml");
    fs::write(&path, "user_agent = \"custom/2\"\n").unwrap();
    let (cfg, note) =
        resolve_config(Some(path.as_path()), not_consulted).unwrap();
    assert_eq!(cfg.user_agent, "custom/2");
    assert!(note.is_none());
}
