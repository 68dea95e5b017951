use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::audio::TrackId;
use crate::catalog::{self, IdentifierCatalog, ItemId};
use crate::error::{ConfigError, Result};

/// Language used when a title is missing for the active locale.
pub const FALLBACK_LANGUAGE: &str = "en_GB";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WeaponType {
    None,
    #[default]
    Pistols,
    Magnums,
    Uzis,
    Shotgun,
}

/// Language tag (`en_GB`) to display string.
pub type Titles = BTreeMap<String, String>;

/// Looks up a title for `locale`, ignoring any encoding suffix (`en_GB.utf8`).
pub fn localized_title<'a>(titles: &'a Titles, locale: &str) -> Option<&'a str> {
    let language = locale.split('.').next().unwrap_or(locale);
    titles
        .get(language)
        .or_else(|| titles.get(FALLBACK_LANGUAGE))
        .map(String::as_str)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level {
    pub name: String,
    pub secrets: usize,
    pub use_alternative_lara: bool,
    pub titles: Titles,
    pub item_titles: BTreeMap<String, BTreeMap<ItemId, String>>,
    pub inventory: BTreeMap<ItemId, u32>,
    pub drop_inventory: BTreeSet<ItemId>,
    pub track: Option<TrackId>,
    pub allow_save: bool,
    pub default_weapon: WeaponType,
}

impl Level {
    pub fn new(name: impl Into<String>, secrets: usize) -> Self {
        Level {
            name: name.into(),
            secrets,
            use_alternative_lara: false,
            titles: Titles::new(),
            item_titles: BTreeMap::new(),
            inventory: BTreeMap::new(),
            drop_inventory: BTreeSet::new(),
            track: None,
            allow_save: true,
            default_weapon: WeaponType::Pistols,
        }
    }

    pub fn with_title(mut self, language: &str, title: &str) -> Self {
        self.titles.insert(language.to_string(), title.to_string());
        self
    }

    pub fn with_item_title(mut self, language: &str, item: impl Into<ItemId>, title: &str) -> Self {
        self.item_titles
            .entry(language.to_string())
            .or_default()
            .insert(item.into(), title.to_string());
        self
    }

    pub fn with_inventory(mut self, item: impl Into<ItemId>, quantity: u32) -> Self {
        self.inventory.insert(item.into(), quantity);
        self
    }

    pub fn dropping(mut self, item: impl Into<ItemId>) -> Self {
        self.drop_inventory.insert(item.into());
        self
    }

    pub fn with_track(mut self, track: impl Into<TrackId>) -> Self {
        self.track = Some(track.into());
        self
    }

    pub fn with_default_weapon(mut self, weapon: WeaponType) -> Self {
        self.default_weapon = weapon;
        self
    }

    pub fn alternative_lara(mut self) -> Self {
        self.use_alternative_lara = true;
        self
    }

    pub fn without_saves(mut self) -> Self {
        self.allow_save = false;
        self
    }

    pub fn title_for(&self, locale: &str) -> Option<&str> {
        localized_title(&self.titles, locale)
    }
}

/// The interactive title screen. Shares the level schema but has no secrets,
/// no saves and no weapon drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TitleMenu {
    level: Level,
}

impl TitleMenu {
    pub fn new(name: impl Into<String>) -> Self {
        TitleMenu {
            level: Level::new(name, 0)
                .without_saves()
                .with_default_weapon(WeaponType::None),
        }
    }

    pub fn with_title(self, language: &str, title: &str) -> Self {
        TitleMenu {
            level: self.level.with_title(language, title),
        }
    }

    pub fn with_track(self, track: impl Into<TrackId>) -> Self {
        TitleMenu {
            level: self.level.with_track(track),
        }
    }

    pub fn with_inventory(self, item: impl Into<ItemId>, quantity: u32) -> Self {
        TitleMenu {
            level: self.level.with_inventory(item, quantity),
        }
    }

    pub fn with_item_title(self, language: &str, item: impl Into<ItemId>, title: &str) -> Self {
        TitleMenu {
            level: self.level.with_item_title(language, item, title),
        }
    }

    pub fn dropping(self, item: impl Into<ItemId>) -> Self {
        TitleMenu {
            level: self.level.dropping(item),
        }
    }

    pub fn alternative_lara(self) -> Self {
        TitleMenu {
            level: self.level.alternative_lara(),
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cutscene {
    pub name: String,
    pub track: TrackId,
    pub flip_rooms: bool,
    pub weapon_swap: bool,
    pub camera_rot: f32,
    pub camera_pos: Option<(i32, i32)>,
}

impl Cutscene {
    pub fn new(name: impl Into<String>, track: impl Into<TrackId>, camera_rot: f32) -> Self {
        Cutscene {
            name: name.into(),
            track: track.into(),
            flip_rooms: false,
            weapon_swap: false,
            camera_rot,
            camera_pos: None,
        }
    }

    pub fn with_camera_pos(mut self, x: i32, z: i32) -> Self {
        self.camera_pos = Some((x, z));
        self
    }

    pub fn flip_rooms(mut self) -> Self {
        self.flip_rooms = true;
        self
    }

    pub fn weapon_swap(mut self) -> Self {
        self.weapon_swap = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub path: String,
}

impl Video {
    pub fn new(path: impl Into<String>) -> Self {
        Video { path: path.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplashScreen {
    pub path: String,
    pub duration_seconds: u32,
}

impl SplashScreen {
    pub fn new(path: impl Into<String>, duration_seconds: u32) -> Self {
        SplashScreen {
            path: path.into(),
            duration_seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceItem {
    Level(Level),
    Cutscene(Cutscene),
    Video(Video),
    SplashScreen(SplashScreen),
}

impl SequenceItem {
    pub fn describe(&self) -> String {
        match self {
            SequenceItem::Level(level) => match level.title_for(FALLBACK_LANGUAGE) {
                Some(title) => format!("Level {} ({title})", level.name),
                None => format!("Level {}", level.name),
            },
            SequenceItem::Cutscene(cutscene) => format!("Cutscene {}", cutscene.name),
            SequenceItem::Video(video) => format!("Video {}", video.path),
            SequenceItem::SplashScreen(splash) => {
                format!("Splash {} for {}s", splash.path, splash.duration_seconds)
            }
        }
    }

    pub fn as_level(&self) -> Option<&Level> {
        match self {
            SequenceItem::Level(level) => Some(level),
            _ => None,
        }
    }
}

impl From<Level> for SequenceItem {
    fn from(value: Level) -> Self {
        SequenceItem::Level(value)
    }
}

impl From<Cutscene> for SequenceItem {
    fn from(value: Cutscene) -> Self {
        SequenceItem::Cutscene(value)
    }
}

impl From<Video> for SequenceItem {
    fn from(value: Video) -> Self {
        SequenceItem::Video(value)
    }
}

impl From<SplashScreen> for SequenceItem {
    fn from(value: SplashScreen) -> Self {
        SequenceItem::SplashScreen(value)
    }
}

/// Ordered gameplay entries plus the title, home and boot slots. The slots are
/// not part of the gameplay indexing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LevelSequence {
    pub title_menu: Option<TitleMenu>,
    pub home_level: Option<Level>,
    pub boot_sequence: Option<Vec<SequenceItem>>,
    pub entries: Vec<SequenceItem>,
}

impl LevelSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_menu(mut self, menu: TitleMenu) -> Self {
        self.title_menu = Some(menu);
        self
    }

    pub fn with_home_level(mut self, level: Level) -> Self {
        self.home_level = Some(level);
        self
    }

    pub fn with_boot_sequence<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SequenceItem>,
    {
        self.boot_sequence = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn then(mut self, item: impl Into<SequenceItem>) -> Self {
        self.entries.push(item.into());
        self
    }

    pub fn get(&self, index: usize) -> Option<&SequenceItem> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Playable levels in gameplay order.
    pub fn levels(&self) -> impl Iterator<Item = &Level> {
        self.entries.iter().filter_map(SequenceItem::as_level)
    }

    pub fn level_count(&self) -> usize {
        self.levels().count()
    }
}

fn malformed(slot: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::MalformedLevelDescriptor {
        slot: slot.to_string(),
        reason: reason.into(),
    }
}

fn validate_level(level: &Level, slot: &str, catalog: &dyn IdentifierCatalog) -> Result<()> {
    if level.name.trim().is_empty() {
        return Err(malformed(slot, "level name is empty"));
    }
    if level.titles.is_empty() {
        return Err(malformed(slot, format!("level '{}' has no titles", level.name)));
    }
    if let Some((language, _)) = level.titles.iter().find(|(_, title)| title.trim().is_empty()) {
        return Err(malformed(
            slot,
            format!("level '{}' has a blank {language} title", level.name),
        ));
    }
    if level.track.as_ref().is_some_and(|track| track.as_str().trim().is_empty()) {
        return Err(malformed(slot, format!("level '{}' names a blank track", level.name)));
    }

    let context = format!("{slot} ({})", level.name);
    for item in level.inventory.keys() {
        catalog::require(catalog, item, &context)?;
    }
    for item in &level.drop_inventory {
        catalog::require(catalog, item, &context)?;
    }
    for item in level.item_titles.values().flat_map(BTreeMap::keys) {
        catalog::require(catalog, item, &context)?;
    }
    Ok(())
}

fn validate_cutscene(cutscene: &Cutscene, slot: &str) -> Result<()> {
    if cutscene.name.trim().is_empty() {
        return Err(malformed(slot, "cutscene name is empty"));
    }
    if cutscene.track.as_str().trim().is_empty() {
        return Err(malformed(
            slot,
            format!("cutscene '{}' has no track", cutscene.name),
        ));
    }
    if !cutscene.camera_rot.is_finite() {
        return Err(malformed(
            slot,
            format!("cutscene '{}' camera rotation is not finite", cutscene.name),
        ));
    }
    Ok(())
}

fn validate_item(item: &SequenceItem, slot: &str, catalog: &dyn IdentifierCatalog) -> Result<()> {
    match item {
        SequenceItem::Level(level) => validate_level(level, slot, catalog),
        SequenceItem::Cutscene(cutscene) => validate_cutscene(cutscene, slot),
        SequenceItem::Video(video) => {
            if video.path.trim().is_empty() {
                return Err(malformed(slot, "video path is empty"));
            }
            Ok(())
        }
        SequenceItem::SplashScreen(splash) => {
            if splash.path.trim().is_empty() {
                return Err(malformed(slot, "splash screen path is empty"));
            }
            if splash.duration_seconds == 0 {
                return Err(malformed(
                    slot,
                    format!("splash screen '{}' has zero duration", splash.path),
                ));
            }
            Ok(())
        }
    }
}

pub fn register_level_sequence(
    sequence: LevelSequence,
    catalog: &dyn IdentifierCatalog,
) -> Result<LevelSequence> {
    if sequence.level_count() == 0 {
        return Err(ConfigError::EmptySequence);
    }

    if let Some(menu) = sequence.title_menu.as_ref() {
        validate_level(menu.level(), "title menu", catalog)?;
    }
    if let Some(home) = sequence.home_level.as_ref() {
        validate_level(home, "home level", catalog)?;
    }
    if let Some(boot) = sequence.boot_sequence.as_ref() {
        if boot.is_empty() {
            return Err(malformed("boot sequence", "boot sequence is empty"));
        }
        for (index, item) in boot.iter().enumerate() {
            let slot = format!("boot sequence[{index}]");
            if matches!(item, SequenceItem::Level(_) | SequenceItem::Cutscene(_)) {
                return Err(malformed(
                    &slot,
                    "boot sequence may only contain videos and splash screens",
                ));
            }
            validate_item(item, &slot, catalog)?;
        }
    }

    for (index, item) in sequence.entries.iter().enumerate() {
        validate_item(item, &format!("levels[{index}]"), catalog)?;
    }

    log::debug!(
        "registered level sequence: {} entries, {} playable levels",
        sequence.len(),
        sequence.level_count()
    );
    Ok(sequence)
}
