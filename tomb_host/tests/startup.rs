use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::{tempdir, TempDir};

fn data_root_with_tracks() -> Result<TempDir> {
    let dir = tempdir().context("creating temporary data root")?;
    for (_, track) in tomb_script::tracks().iter() {
        let path = dir.path().join(&track.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, b"")
            .with_context(|| format!("writing placeholder track {}", path.display()))?;
    }
    Ok(dir)
}

fn run_host(data_root: &Path, extra: &[&str]) -> Result<Output> {
    let data_root = data_root
        .to_str()
        .context("data root path is not valid UTF-8")?;
    Command::new(env!("CARGO_BIN_EXE_tomb_host"))
        .arg("--data-root")
        .arg(data_root)
        .args(extra)
        .output()
        .context("executing tomb_host")
}

#[test]
fn host_reports_loaded_configuration() -> Result<()> {
    let data_root = data_root_with_tracks()?;
    let output = run_host(data_root.path(), &["--verbose"])?;
    assert!(
        output.status.success(),
        "tomb_host exited with {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Title menu: TITLE (Tomb Raider)"), "{stdout}");
    assert!(stdout.contains("Home level: GYM (Lara's Home)"), "{stdout}");
    assert!(stdout.contains("Gameplay: 15 levels"), "{stdout}");
    assert!(stdout.contains("Level LEVEL10C (The Great Pyramid)"), "{stdout}");
    if cfg!(feature = "debug-override") {
        assert!(stdout.contains("Debug override: enabled"), "{stdout}");
    } else {
        assert!(stdout.contains("Debug override: disabled"), "{stdout}");
    }
    Ok(())
}

#[test]
fn host_prints_configuration_json() -> Result<()> {
    let data_root = data_root_with_tracks()?;
    let output = run_host(data_root.path(), &["--json"])?;
    assert!(output.status.success());

    let json: Value =
        serde_json::from_slice(&output.stdout).context("parsing tomb_host JSON output")?;
    let entries = json["levels"]["entries"]
        .as_array()
        .context("levels.entries should be an array")?;
    assert_eq!(entries.len(), tomb_script::level_sequence().len());
    assert_eq!(json["levels"]["title_menu"]["name"], "TITLE");
    if !cfg!(feature = "debug-override") {
        assert_eq!(json["cheats"], serde_json::json!({}));
    }
    Ok(())
}

#[test]
fn unknown_identifier_aborts_startup() -> Result<()> {
    let data_root = data_root_with_tracks()?;
    let catalog_dir = tempdir()?;
    let catalog_path = catalog_dir.path().join("items.json");
    let names: Vec<String> = tomb_script::referenced_identifiers()
        .into_iter()
        .map(|id| id.to_string())
        .filter(|name| name != "Key1")
        .collect();
    fs::write(&catalog_path, serde_json::to_string(&names)?)?;

    let catalog = catalog_path.to_str().context("catalog path is not valid UTF-8")?;
    let output = run_host(data_root.path(), &["--catalog", catalog])?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("configuration error (UnknownIdentifier)"),
        "{stderr}"
    );
    assert!(stderr.contains("'Key1'"), "{stderr}");
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Gameplay:"));
    Ok(())
}

#[test]
fn missing_track_asset_aborts_startup() -> Result<()> {
    let empty_root = tempdir()?;
    let output = run_host(empty_root.path(), &[])?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration error (MissingAsset)"), "{stderr}");
    Ok(())
}
