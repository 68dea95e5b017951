use std::path::Path;

use anyhow::{bail, Result};
use tomb_flow::{
    AssetLookup, ConfigurationSink, EngineServices, IdentifierCatalog, ItemCatalog, ItemId,
    ObjectTypeResolver, PublishedConfiguration,
};

use crate::assets::AssetIndex;

/// Minimal engine: owns the identifier catalog and asset index the loader
/// validates against, and keeps the configuration once it is handed over.
#[derive(Debug)]
pub struct StubEngine {
    items: ItemCatalog,
    assets: AssetIndex,
    loaded: Option<PublishedConfiguration>,
}

impl StubEngine {
    pub fn new(items: ItemCatalog, assets: AssetIndex) -> Self {
        StubEngine {
            items,
            assets,
            loaded: None,
        }
    }

    /// Catalog from `path`, or the identifiers the game script itself uses.
    pub fn load_catalog(path: Option<&Path>) -> Result<ItemCatalog> {
        match path {
            Some(path) => ItemCatalog::from_json_file(path),
            None => Ok(ItemCatalog::from_names(tomb_script::referenced_identifiers())),
        }
    }

    pub fn identifier_count(&self) -> usize {
        self.items.len()
    }

    pub fn asset_index(&self) -> &AssetIndex {
        &self.assets
    }

    pub fn configuration(&self) -> Option<&PublishedConfiguration> {
        self.loaded.as_ref()
    }
}

impl ObjectTypeResolver for StubEngine {
    // Every catalog entry has an object type in this stand-in.
    fn resolves(&self, id: &ItemId) -> bool {
        self.items.contains(id)
    }
}

impl EngineServices for StubEngine {
    fn catalog(&self) -> &dyn IdentifierCatalog {
        &self.items
    }

    fn object_types(&self) -> &dyn ObjectTypeResolver {
        self
    }

    fn assets(&self) -> &dyn AssetLookup {
        &self.assets
    }
}

impl ConfigurationSink for StubEngine {
    fn accept(&mut self, config: PublishedConfiguration) -> Result<()> {
        if self.loaded.is_some() {
            bail!("configuration already loaded; restart the process to reload");
        }
        self.loaded = Some(config);
        Ok(())
    }
}
