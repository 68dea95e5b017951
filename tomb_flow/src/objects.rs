use std::collections::{btree_map::Entry, BTreeMap};

use serde::Serialize;

use crate::catalog::{self, IdentifierCatalog, ItemId};
use crate::engine::ObjectTypeResolver;
use crate::error::{ConfigError, Result};

/// Per-object tuning the engine attaches to an object type. Opaque to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectInfo {
    pub ai_agent: bool,
    pub radius: i32,
    pub hit_points: i32,
    pub pivot_length: i32,
    pub target_update_chance: i32,
    pub step_limit: i32,
    pub drop_limit: i32,
    pub fly_limit: i32,
    pub cannot_visit_blocked: bool,
    pub cannot_visit_blockable: bool,
}

impl Default for ObjectInfo {
    fn default() -> Self {
        ObjectInfo {
            ai_agent: false,
            radius: 10,
            hit_points: -16384,
            pivot_length: 0,
            target_update_chance: 0,
            step_limit: 256,
            drop_limit: -256,
            fly_limit: 0,
            cannot_visit_blocked: true,
            cannot_visit_blockable: false,
        }
    }
}

impl ObjectInfo {
    /// An AI-driven object with the given collision radius, health and pivot.
    pub fn agent(radius: i32, hit_points: i32, pivot_length: i32) -> Self {
        ObjectInfo {
            ai_agent: true,
            radius,
            hit_points,
            pivot_length,
            ..ObjectInfo::default()
        }
    }
}

/// Object declarations in authoring order; duplicates are caught at registration.
#[derive(Debug, Clone, Default)]
pub struct ObjectInfoTable {
    entries: Vec<(ItemId, ObjectInfo)>,
}

impl ObjectInfoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, id: impl Into<ItemId>, info: ObjectInfo) -> Self {
        self.push(id, info);
        self
    }

    pub fn push(&mut self, id: impl Into<ItemId>, info: ObjectInfo) {
        self.entries.push((id.into(), info));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.entries.iter().map(|(id, _)| id)
    }
}

/// Validated object table keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ObjectInfoMap(BTreeMap<ItemId, ObjectInfo>);

impl ObjectInfoMap {
    pub fn get(&self, id: &ItemId) -> Option<&ObjectInfo> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &ObjectInfo)> {
        self.0.iter()
    }
}

pub fn register_object_info(
    table: ObjectInfoTable,
    catalog: &dyn IdentifierCatalog,
    object_types: &dyn ObjectTypeResolver,
) -> Result<ObjectInfoMap> {
    let mut map = BTreeMap::new();
    for (id, info) in table.entries {
        match map.entry(id) {
            Entry::Occupied(existing) => {
                return Err(ConfigError::DuplicateKey {
                    table: "object info",
                    key: existing.key().to_string(),
                });
            }
            Entry::Vacant(slot) => {
                catalog::require(catalog, slot.key(), "object info table")?;
                if !object_types.resolves(slot.key()) {
                    return Err(ConfigError::UnresolvedObjectType {
                        id: slot.key().to_string(),
                    });
                }
                slot.insert(info);
            }
        }
    }
    log::debug!("registered {} object info entries", map.len());
    Ok(ObjectInfoMap(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemCatalog;

    fn catalog() -> ItemCatalog {
        ItemCatalog::from_names(["Wolf", "Bear", "Key1"])
    }

    fn creatures(id: &ItemId) -> bool {
        id.as_str() != "Key1"
    }

    #[test]
    fn registers_unique_resolvable_objects() {
        let table = ObjectInfoTable::new()
            .declare("Wolf", ObjectInfo::agent(341, 6, 375))
            .declare("Bear", ObjectInfo::agent(341, 20, 500));

        let map = register_object_info(table, &catalog(), &creatures).expect("valid table");
        assert_eq!(map.len(), 2);
        let wolf = map.get(&ItemId::from("Wolf")).expect("wolf registered");
        assert!(wolf.ai_agent);
        assert_eq!(wolf.hit_points, 6);
        assert_eq!(wolf.step_limit, 256);
    }

    #[test]
    fn duplicate_declaration_is_rejected() {
        let table = ObjectInfoTable::new()
            .declare("Wolf", ObjectInfo::agent(341, 6, 375))
            .declare("Wolf", ObjectInfo::agent(100, 1, 1));

        let err = register_object_info(table, &catalog(), &creatures).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateKey {
                table: "object info",
                key: "Wolf".into()
            }
        );
    }

    #[test]
    fn unknown_and_unresolved_objects_fail() {
        let unknown = ObjectInfoTable::new().declare("Dragon", ObjectInfo::default());
        let err = register_object_info(unknown, &catalog(), &creatures).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownIdentifier { ref name, .. } if name == "Dragon"));

        let inert = ObjectInfoTable::new().declare("Key1", ObjectInfo::default());
        let err = register_object_info(inert, &catalog(), &creatures).unwrap_err();
        assert_eq!(err, ConfigError::UnresolvedObjectType { id: "Key1".into() });
    }
}
