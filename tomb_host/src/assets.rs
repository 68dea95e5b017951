use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tomb_flow::AssetLookup;
use walkdir::WalkDir;

/// Index of files under the data root, keyed by normalized relative path.
#[derive(Debug, Default, Clone)]
pub struct AssetIndex {
    root: PathBuf,
    index: HashMap<String, PathBuf>,
}

impl AssetIndex {
    pub fn from_root(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            bail!("data root {} is not a directory", root.display());
        }
        let mut assets = AssetIndex {
            root: root.to_path_buf(),
            index: HashMap::new(),
        };
        for entry in WalkDir::new(root).into_iter() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!(
                        "[tomb_host] warning: failed to traverse {}: {err}",
                        root.display()
                    );
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let key = normalize_asset_key(&relative.to_string_lossy());
            if let Some(previous) = assets.index.insert(key.clone(), entry.path().to_path_buf()) {
                eprintln!(
                    "[tomb_host] warning: duplicate asset key '{}' ({} shadows {})",
                    key,
                    entry.path().display(),
                    previous.display()
                );
            }
        }
        log::debug!(
            "indexed {} assets under {}",
            assets.index.len(),
            root.display()
        );
        Ok(assets)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn resolve(&self, asset: &str) -> Option<&Path> {
        self.index
            .get(&normalize_asset_key(asset))
            .map(PathBuf::as_path)
    }
}

impl AssetLookup for AssetIndex {
    fn exists(&self, asset: &str) -> bool {
        self.resolve(asset).is_some()
    }
}

/// Forward slashes, no leading `./` or `/`, lower case.
///
/// Matching is deliberately case-insensitive. On a case-sensitive filesystem
/// a reference can resolve here that the engine itself could not open.
pub fn normalize_asset_key(asset: &str) -> String {
    let replaced = asset.trim().replace('\\', "/");
    let trimmed = replaced
        .trim_start_matches("./")
        .trim_start_matches('/');
    trimmed.to_ascii_lowercase()
}
