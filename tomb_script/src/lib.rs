//! The TR1 game script: object tuning, soundtrack, level order and the
//! debug override block.

use std::collections::BTreeSet;

use tomb_flow::{
    DebugOverride, EngineServices, GameScript, ItemId, OverrideMode, PublishedConfiguration,
    SequenceItem,
};

mod audio;
mod level_sequence;
mod object_infos;

pub use audio::tracks;
pub use level_sequence::{early_boot, lara_home, level_sequence, title_menu};
pub use object_infos::object_infos;

/// Build-time switch for the debug override. Only the `debug-override`
/// feature turns it on; nothing at runtime can.
pub const DEBUG_OVERRIDE_ENABLED: bool = cfg!(feature = "debug-override");

/// Left unset so the engine keeps the system locale.
pub const LOCALE_OVERRIDE: Option<&str> = None;

pub fn cheats() -> DebugOverride {
    let stocked = [
        "Key1", "Key2", "Key3", "Key4", "Puzzle1", "Puzzle2", "Puzzle3", "Puzzle4",
    ];
    let weapons = ["UzisSprite", "MagnumsSprite", "ShotgunSprite"];

    let cheats = DebugOverride::new().god_mode().all_ammo();
    let cheats = stocked
        .into_iter()
        .fold(cheats, |cheats, item| cheats.with_item(item, 10));
    weapons
        .into_iter()
        .fold(cheats, |cheats, item| cheats.with_item(item, 1))
}

pub fn game_script() -> GameScript {
    GameScript {
        objects: object_infos(),
        tracks: tracks(),
        levels: level_sequence(),
        cheats: cheats(),
        locale_override: LOCALE_OVERRIDE.map(str::to_string),
    }
}

/// Every item identifier the script mentions. Hosts without an engine-side
/// catalog can seed one from this.
pub fn referenced_identifiers() -> BTreeSet<ItemId> {
    let mut ids: BTreeSet<ItemId> = object_infos().ids().cloned().collect();
    ids.extend(cheats().inventory.into_keys());

    let sequence = level_sequence();
    let levels = sequence
        .title_menu
        .iter()
        .map(|menu| menu.level())
        .chain(sequence.home_level.iter())
        .chain(sequence.entries.iter().filter_map(SequenceItem::as_level));
    for level in levels {
        ids.extend(level.inventory.keys().cloned());
        ids.extend(level.drop_inventory.iter().cloned());
        ids.extend(level.item_titles.values().flat_map(|titles| titles.keys().cloned()));
    }
    ids
}

/// Registers the script's tables with `engine` and publishes them, with the
/// override decided by [`DEBUG_OVERRIDE_ENABLED`].
pub fn load_configuration(engine: &dyn EngineServices) -> tomb_flow::Result<PublishedConfiguration> {
    let mode = OverrideMode::from_flag(DEBUG_OVERRIDE_ENABLED);
    log::debug!("loading TR1 game script (debug override {mode:?})");
    tomb_flow::load_configuration(game_script(), mode, engine)
}
