use anyhow::Context;
use serde::Serialize;

use crate::audio::AudioTrackMap;
use crate::cheats::DebugOverride;
use crate::level::LevelSequence;
use crate::objects::ObjectInfoMap;

/// The finished configuration handed to the engine. Read-only once built.
#[derive(Debug, PartialEq, Serialize)]
pub struct PublishedConfiguration {
    objects: ObjectInfoMap,
    tracks: AudioTrackMap,
    levels: LevelSequence,
    cheats: DebugOverride,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale_override: Option<String>,
}

impl PublishedConfiguration {
    pub fn objects(&self) -> &ObjectInfoMap {
        &self.objects
    }

    pub fn tracks(&self) -> &AudioTrackMap {
        &self.tracks
    }

    pub fn levels(&self) -> &LevelSequence {
        &self.levels
    }

    pub fn debug_override(&self) -> &DebugOverride {
        &self.cheats
    }

    pub fn locale_override(&self) -> Option<&str> {
        self.locale_override.as_deref()
    }

    pub(crate) fn with_locale_override(mut self, locale: Option<String>) -> Self {
        self.locale_override = locale;
        self
    }
}

/// Assembles the aggregate. Everything passed in has already been validated.
pub fn publish(
    objects: ObjectInfoMap,
    tracks: AudioTrackMap,
    levels: LevelSequence,
    cheats: DebugOverride,
) -> PublishedConfiguration {
    log::info!(
        "main script loaded: {} objects, {} tracks, {} levels, cheats {}",
        objects.len(),
        tracks.len(),
        levels.level_count(),
        if cheats.is_neutral() { "off" } else { "on" }
    );
    PublishedConfiguration {
        objects,
        tracks,
        levels,
        cheats,
        locale_override: None,
    }
}

/// Engine side of the hand-off. Accepting takes ownership of the configuration.
pub trait ConfigurationSink {
    fn accept(&mut self, config: PublishedConfiguration) -> anyhow::Result<()>;
}

/// Moves `config` into the engine. A rejection is fatal to startup.
pub fn hand_off(config: PublishedConfiguration, sink: &mut dyn ConfigurationSink) -> anyhow::Result<()> {
    sink.accept(config)
        .context("engine rejected the published configuration")
}
