use crate::audio::{self, AudioTrackMap, AudioTrackTable};
use crate::catalog::IdentifierCatalog;
use crate::cheats::DebugOverride;
use crate::engine::{AssetLookup, ObjectTypeResolver};
use crate::error::{ConfigError, Result};
use crate::level::{self, LevelSequence};
use crate::objects::{self, ObjectInfoMap, ObjectInfoTable};
use crate::publish::{self, PublishedConfiguration};

/// Collects the three validated tables ahead of publishing. Registration
/// order does not matter; each table may be registered once.
#[derive(Debug, Default)]
pub struct Registry {
    objects: Option<ObjectInfoMap>,
    tracks: Option<AudioTrackMap>,
    levels: Option<LevelSequence>,
    locale_override: Option<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_object_info(
        &mut self,
        table: ObjectInfoTable,
        catalog: &dyn IdentifierCatalog,
        object_types: &dyn ObjectTypeResolver,
    ) -> Result<&ObjectInfoMap> {
        ensure_vacant(&self.objects, "object info")?;
        let map = objects::register_object_info(table, catalog, object_types)?;
        Ok(&*self.objects.insert(map))
    }

    pub fn register_audio_tracks(
        &mut self,
        table: AudioTrackTable,
        assets: &dyn AssetLookup,
    ) -> Result<&AudioTrackMap> {
        ensure_vacant(&self.tracks, "audio track")?;
        let map = audio::register_audio_tracks(table, assets)?;
        Ok(&*self.tracks.insert(map))
    }

    pub fn register_level_sequence(
        &mut self,
        sequence: LevelSequence,
        catalog: &dyn IdentifierCatalog,
    ) -> Result<&LevelSequence> {
        ensure_vacant(&self.levels, "level sequence")?;
        let sequence = level::register_level_sequence(sequence, catalog)?;
        Ok(&*self.levels.insert(sequence))
    }

    pub fn set_locale_override(&mut self, locale: impl Into<String>) {
        self.locale_override = Some(locale.into());
    }

    /// Consumes the registry, so a registry can publish at most once.
    pub fn publish(self, cheats: DebugOverride) -> Result<PublishedConfiguration> {
        let objects = self.objects.ok_or(ConfigError::IncompleteRegistry {
            table: "object info",
        })?;
        let tracks = self.tracks.ok_or(ConfigError::IncompleteRegistry {
            table: "audio track",
        })?;
        let levels = self.levels.ok_or(ConfigError::IncompleteRegistry {
            table: "level sequence",
        })?;
        Ok(publish::publish(objects, tracks, levels, cheats)
            .with_locale_override(self.locale_override))
    }
}

fn ensure_vacant<T>(slot: &Option<T>, table: &'static str) -> Result<()> {
    if slot.is_some() {
        return Err(ConfigError::DuplicateKey {
            table: "registry",
            key: table.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{TrackInfo, TrackType};
    use crate::catalog::ItemCatalog;
    use crate::level::Level;
    use crate::objects::ObjectInfo;

    fn anything(_: &str) -> bool {
        true
    }

    fn sequence() -> LevelSequence {
        LevelSequence::new().then(Level::new("LEVEL1", 3).with_title("en_GB", "Caves"))
    }

    #[test]
    fn publish_requires_every_table() {
        let catalog = ItemCatalog::from_names(["Wolf"]);
        let mut registry = Registry::new();
        registry
            .register_level_sequence(sequence(), &catalog)
            .expect("valid sequence");
        registry
            .register_audio_tracks(AudioTrackTable::new(), &anything)
            .expect("empty track table is fine");

        let err = registry.publish(DebugOverride::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::IncompleteRegistry {
                table: "object info"
            }
        );
    }

    #[test]
    fn a_table_registers_only_once() {
        let catalog = ItemCatalog::from_names(["Wolf"]);
        let mut registry = Registry::new();
        let tracks = || {
            AudioTrackTable::new().declare("MainTheme", TrackInfo::new("audio/002.ogg", TrackType::Ambient))
        };
        registry
            .register_audio_tracks(tracks(), &anything)
            .expect("first registration");
        let err = registry.register_audio_tracks(tracks(), &anything).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DuplicateKey);

        registry
            .register_object_info(
                ObjectInfoTable::new().declare("Wolf", ObjectInfo::agent(341, 6, 375)),
                &catalog,
                &|_: &crate::catalog::ItemId| true,
            )
            .expect("objects");
        registry
            .register_level_sequence(sequence(), &catalog)
            .expect("levels");
        registry.set_locale_override("en_GB.utf8");

        let config = registry.publish(DebugOverride::default()).expect("complete registry");
        assert_eq!(config.tracks().len(), 1);
        assert_eq!(config.locale_override(), Some("en_GB.utf8"));
    }
}
