use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{self, IdentifierCatalog, ItemId};
use crate::error::Result;

/// Debug-only deviation from the default player state. The default value is
/// the neutral override and serializes to an empty object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DebugOverride {
    #[serde(skip_serializing_if = "is_false")]
    pub god_mode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub all_ammo: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub inventory: BTreeMap<ItemId, u32>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl DebugOverride {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn god_mode(mut self) -> Self {
        self.god_mode = true;
        self
    }

    pub fn all_ammo(mut self) -> Self {
        self.all_ammo = true;
        self
    }

    pub fn with_item(mut self, item: impl Into<ItemId>, quantity: u32) -> Self {
        self.inventory.insert(item.into(), quantity);
        self
    }

    pub fn is_neutral(&self) -> bool {
        !self.god_mode && !self.all_ammo && self.inventory.is_empty()
    }
}

/// Whether the override block is live. Fixed once per build; there is no
/// transition between the two states at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum OverrideMode {
    #[default]
    Disabled,
    Enabled,
}

impl OverrideMode {
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled {
            OverrideMode::Enabled
        } else {
            OverrideMode::Disabled
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, OverrideMode::Enabled)
    }
}

/// Returns `spec` untouched when `enabled`, otherwise the neutral override.
/// Inventory keys are checked against the catalog in both cases so a stale
/// identifier fails the load even while the block is switched off.
pub fn resolve_override(
    enabled: bool,
    spec: DebugOverride,
    catalog: &dyn IdentifierCatalog,
) -> Result<DebugOverride> {
    for item in spec.inventory.keys() {
        catalog::require(catalog, item, "debug override inventory")?;
    }

    match OverrideMode::from_flag(enabled) {
        OverrideMode::Enabled => {
            if !spec.is_neutral() {
                log::warn!(
                    "debug override active: god mode {}, all ammo {}, {} inventory entries",
                    spec.god_mode,
                    spec.all_ammo,
                    spec.inventory.len()
                );
            }
            Ok(spec)
        }
        OverrideMode::Disabled => Ok(DebugOverride::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCatalog;
    use crate::error::ConfigError;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_names(["Key1", "Key2", "UzisSprite"])
    }

    fn spec() -> DebugOverride {
        DebugOverride::new()
            .god_mode()
            .all_ammo()
            .with_item("Key1", 10)
            .with_item("UzisSprite", 1)
    }

    #[test]
    fn disabled_override_is_always_neutral() {
        for candidate in [spec(), DebugOverride::new(), DebugOverride::new().all_ammo()] {
            let resolved = resolve_override(false, candidate, &catalog()).expect("valid override");
            assert!(resolved.is_neutral());
            assert_eq!(resolved, DebugOverride::default());
        }
    }

    #[test]
    fn enabled_override_round_trips() {
        let resolved = resolve_override(true, spec(), &catalog()).expect("valid override");
        assert_eq!(resolved, spec());
    }

    #[test]
    fn unknown_inventory_key_fails_in_both_modes() {
        for enabled in [false, true] {
            let stale = spec().with_item("NoSuchItem", 1);
            let err = resolve_override(enabled, stale, &catalog()).unwrap_err();
            assert!(matches!(err, ConfigError::UnknownIdentifier { ref name, .. } if name == "NoSuchItem"));
        }
    }

    #[test]
    fn neutral_override_serializes_as_empty_object() -> anyhow::Result<()> {
        assert_eq!(serde_json::to_string(&DebugOverride::default())?, "{}");
        let json = serde_json::to_value(spec())?;
        assert_eq!(json["inventory"]["Key1"], 10);
        assert_eq!(json["god_mode"], true);
        Ok(())
    }

    #[test]
    fn mode_follows_flag() {
        assert_eq!(OverrideMode::from_flag(false), OverrideMode::Disabled);
        assert!(OverrideMode::from_flag(true).is_enabled());
        assert_eq!(OverrideMode::default(), OverrideMode::Disabled);
    }
}
