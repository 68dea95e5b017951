//! Game-flow configuration for the engine's startup.
//!
//! A game script declares its object, audio and level tables plus an optional
//! debug override. The tables are registered (validated) independently, the
//! override is resolved against the build-time flag, and the result is
//! published as a single read-only [`PublishedConfiguration`].

pub mod audio;
pub mod catalog;
pub mod cheats;
pub mod engine;
pub mod error;
pub mod level;
pub mod objects;
pub mod publish;
pub mod registry;

pub use audio::{AudioTrackMap, AudioTrackTable, TrackId, TrackInfo, TrackType};
pub use catalog::{IdentifierCatalog, ItemCatalog, ItemId};
pub use cheats::{resolve_override, DebugOverride, OverrideMode};
pub use engine::{AssetLookup, EngineServices, ObjectTypeResolver};
pub use error::{ConfigError, ErrorKind, Result};
pub use level::{
    Cutscene, Level, LevelSequence, SequenceItem, SplashScreen, TitleMenu, Video, WeaponType,
};
pub use objects::{ObjectInfo, ObjectInfoMap, ObjectInfoTable};
pub use publish::{hand_off, publish, ConfigurationSink, PublishedConfiguration};
pub use registry::Registry;

/// Everything a game script declares, before validation.
#[derive(Debug, Clone, Default)]
pub struct GameScript {
    pub objects: ObjectInfoTable,
    pub tracks: AudioTrackTable,
    pub levels: LevelSequence,
    pub cheats: DebugOverride,
    pub locale_override: Option<String>,
}

/// Validates `script` against the engine's collaborators and publishes it.
/// Nothing is published unless every table and the override check out.
pub fn load_configuration(
    script: GameScript,
    mode: OverrideMode,
    engine: &dyn EngineServices,
) -> Result<PublishedConfiguration> {
    let GameScript {
        objects,
        tracks,
        levels,
        cheats,
        locale_override,
    } = script;

    let mut registry = Registry::new();
    registry.register_object_info(objects, engine.catalog(), engine.object_types())?;
    registry.register_audio_tracks(tracks, engine.assets())?;
    registry.register_level_sequence(levels, engine.catalog())?;
    if let Some(locale) = locale_override {
        registry.set_locale_override(locale);
    }

    let cheats = resolve_override(mode.is_enabled(), cheats, engine.catalog())?;
    registry.publish(cheats)
}
