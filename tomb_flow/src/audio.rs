use std::collections::{btree_map::Entry, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::AssetLookup;
use crate::error::{ConfigError, Result};

/// Symbolic name of a music or ambience track.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(value: &str) -> Self {
        TrackId(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackType {
    /// Background music that loops until replaced.
    Ambient,
    /// One-shot cue that interrupts the ambient track.
    Interception,
    /// Looping effect layered over the ambient track.
    AmbientEffect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackInfo {
    /// Asset reference resolved by the engine.
    pub file: String,
    pub kind: TrackType,
}

impl TrackInfo {
    pub fn new(file: impl Into<String>, kind: TrackType) -> Self {
        TrackInfo {
            file: file.into(),
            kind,
        }
    }

    pub fn looping(&self) -> bool {
        matches!(self.kind, TrackType::Ambient | TrackType::AmbientEffect)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AudioTrackTable {
    entries: Vec<(TrackId, TrackInfo)>,
}

impl AudioTrackTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, id: impl Into<TrackId>, info: TrackInfo) -> Self {
        self.entries.push((id.into(), info));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TrackId, &TrackInfo)> {
        self.entries.iter().map(|(id, info)| (id, info))
    }
}

/// Validated track table keyed by track id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AudioTrackMap(BTreeMap<TrackId, TrackInfo>);

impl AudioTrackMap {
    pub fn get(&self, id: &TrackId) -> Option<&TrackInfo> {
        self.0.get(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TrackId, &TrackInfo)> {
        self.0.iter()
    }
}

pub fn register_audio_tracks(table: AudioTrackTable, assets: &dyn AssetLookup) -> Result<AudioTrackMap> {
    let mut map = BTreeMap::new();
    for (id, info) in table.entries {
        match map.entry(id) {
            Entry::Occupied(existing) => {
                return Err(ConfigError::DuplicateKey {
                    table: "audio track",
                    key: existing.key().to_string(),
                });
            }
            Entry::Vacant(slot) => {
                let file = info.file.trim();
                if file.is_empty() || !assets.exists(file) {
                    return Err(ConfigError::MissingAsset {
                        track: slot.key().to_string(),
                        asset: info.file.clone(),
                    });
                }
                slot.insert(info);
            }
        }
    }
    log::debug!("registered {} audio tracks", map.len());
    Ok(AudioTrackMap(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped(asset: &str) -> bool {
        asset.starts_with("audio/")
    }

    #[test]
    fn tracks_with_present_assets_register() {
        let table = AudioTrackTable::new()
            .declare("MainTheme", TrackInfo::new("audio/002.ogg", TrackType::Ambient))
            .declare("Secret", TrackInfo::new("audio/013.ogg", TrackType::Interception));

        let map = register_audio_tracks(table, &shipped).expect("valid tracks");
        assert_eq!(map.len(), 2);
        assert!(map.get(&"MainTheme".into()).is_some_and(TrackInfo::looping));
        assert!(!map.get(&"Secret".into()).is_some_and(TrackInfo::looping));
    }

    #[test]
    fn duplicate_track_is_rejected() {
        let table = AudioTrackTable::new()
            .declare("Secret", TrackInfo::new("audio/013.ogg", TrackType::Interception))
            .declare("Secret", TrackInfo::new("audio/014.ogg", TrackType::Interception));

        let err = register_audio_tracks(table, &shipped).unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateKey {
                table: "audio track",
                key: "Secret".into()
            }
        );
    }

    #[test]
    fn missing_or_blank_assets_fail() {
        let table =
            AudioTrackTable::new().declare("MainTheme", TrackInfo::new("music/002.ogg", TrackType::Ambient));
        let err = register_audio_tracks(table, &shipped).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingAsset {
                track: "MainTheme".into(),
                asset: "music/002.ogg".into()
            }
        );

        let blank = AudioTrackTable::new().declare("Silence", TrackInfo::new("  ", TrackType::Ambient));
        let err = register_audio_tracks(blank, &|_: &str| true).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MissingAsset);
    }
}
