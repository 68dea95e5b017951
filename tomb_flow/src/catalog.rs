use std::{collections::BTreeSet, fmt, fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Symbolic name of an engine item or object, e.g. `Key1` or `UzisSprite`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId(value)
    }
}

/// Closed set of identifiers owned by the engine. The configuration layer
/// only ever asks whether a name exists.
pub trait IdentifierCatalog {
    fn contains(&self, id: &ItemId) -> bool;
}

/// Fails with `UnknownIdentifier` when `id` is not part of `catalog`.
pub fn require(catalog: &dyn IdentifierCatalog, id: &ItemId, context: &str) -> Result<()> {
    if catalog.contains(id) {
        Ok(())
    } else {
        Err(ConfigError::UnknownIdentifier {
            name: id.to_string(),
            context: context.to_string(),
        })
    }
}

/// In-memory catalog an engine can hand to the loader.
#[derive(Debug, Default, Clone)]
pub struct ItemCatalog {
    names: BTreeSet<ItemId>,
}

impl ItemCatalog {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        ItemCatalog {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads a JSON array of identifier names.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read identifier catalog: {}", path.display()))?;
        let names: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse identifier catalog json: {}", path.display()))?;
        let catalog = ItemCatalog::from_names(names);
        log::debug!(
            "loaded {} identifiers from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl IdentifierCatalog for ItemCatalog {
    fn contains(&self, id: &ItemId) -> bool {
        self.names.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn require_reports_unknown_names_with_context() {
        let catalog = ItemCatalog::from_names(["Key1", "Puzzle1"]);
        assert!(require(&catalog, &ItemId::from("Key1"), "cheats").is_ok());

        let err = require(&catalog, &ItemId::from("NoSuchItem"), "cheats inventory")
            .expect_err("unknown identifier should be rejected");
        assert_eq!(
            err,
            ConfigError::UnknownIdentifier {
                name: "NoSuchItem".into(),
                context: "cheats inventory".into(),
            }
        );
    }

    #[test]
    fn json_catalog_collapses_repeated_names() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("items.json");
        fs::write(&path, r#"["Key1", "Key2", "Key1"]"#)?;

        let catalog = ItemCatalog::from_json_file(&path)?;
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&ItemId::from("Key2")));
        Ok(())
    }

    #[test]
    fn json_catalog_rejects_non_array_payloads() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("items.json");
        fs::write(&path, r#"{"Key1": 1}"#)?;

        let err = ItemCatalog::from_json_file(&path).expect_err("object payload is invalid");
        assert!(err.to_string().contains("failed to parse identifier catalog json"));
        Ok(())
    }
}
