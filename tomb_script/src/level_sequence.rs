use tomb_flow::{
    Cutscene, Level, LevelSequence, SequenceItem, SplashScreen, TitleMenu, Video, WeaponType,
};

pub const WEAPONS: [&str; 4] = ["PistolsSprite", "ShotgunSprite", "MagnumsSprite", "UzisSprite"];

fn level(name: &str, secrets: usize, en: &str, de: &str) -> Level {
    Level::new(name, secrets)
        .with_title("en_GB", en)
        .with_title("de_DE", de)
}

pub fn title_menu() -> TitleMenu {
    TitleMenu::new("TITLE")
        .with_title("en_GB", "Tomb Raider")
        .with_title("de_DE", "Tomb Raider")
        .with_track("MainTheme")
}

/// Lara's home: the training hub reachable from the title menu.
pub fn lara_home() -> Level {
    level("GYM", 0, "Lara's Home", "Laras Haus")
        .with_track("LaraTalk")
        .without_saves()
        .with_default_weapon(WeaponType::None)
        .dropping("PistolsSprite")
}

pub fn early_boot() -> Vec<SequenceItem> {
    vec![
        SplashScreen::new("splash.png", 2).into(),
        Video::new("CORE.RPL").into(),
        Video::new("ESCAPE.RPL").into(),
    ]
}

pub fn level_sequence() -> LevelSequence {
    let natlas_mines = WEAPONS.iter().fold(
        level("LEVEL10A", 3, "Natla's Mines", "Natlas Minen")
            .with_track("Ambience2")
            .with_default_weapon(WeaponType::None),
        |level, weapon| level.dropping(*weapon),
    );

    LevelSequence::new()
        .with_title_menu(title_menu())
        .with_home_level(lara_home())
        .with_boot_sequence(early_boot())
        .then(Video::new("CAFE.RPL"))
        .then(level("LEVEL1", 3, "Caves", "Höhlen").with_track("Ambience1"))
        .then(
            level("LEVEL2", 3, "City of Vilcabamba", "Vilcabamba")
                .with_track("Ambience1")
                .with_item_title("en_GB", "Key1", "Silver Key")
                .with_item_title("en_GB", "Puzzle1", "Gold Idol")
                .with_item_title("de_DE", "Key1", "Silberschlüssel")
                .with_item_title("de_DE", "Puzzle1", "Goldenes Idol"),
        )
        .then(
            level("LEVEL3A", 5, "Lost Valley", "Das verlorene Tal")
                .with_track("Ambience1")
                .with_item_title("en_GB", "Puzzle1", "Machine Cog"),
        )
        .then(level("LEVEL3B", 3, "Tomb of Qualopec", "Das Grab des Qualopec").with_track("Ambience2"))
        .then(Cutscene::new("CUT1", "Cutscene1", -23.0).with_camera_pos(36668, 63180))
        .then(Video::new("SNOW.RPL"))
        .then(
            level("LEVEL4", 4, "St. Francis' Folly", "St. Francis' Folly")
                .with_track("Ambience2")
                .with_item_title("en_GB", "Key1", "Neptune Key")
                .with_item_title("en_GB", "Key2", "Atlas Key")
                .with_item_title("en_GB", "Key3", "Damocles Key")
                .with_item_title("en_GB", "Key4", "Thor Key"),
        )
        .then(level("LEVEL5", 3, "Colosseum", "Das Kolosseum").with_track("Ambience2"))
        .then(
            level("LEVEL6", 3, "Palace Midas", "Der Palast des Midas")
                .with_track("Ambience2")
                .with_item_title("en_GB", "Puzzle1", "Gold Bar")
                .with_item_title("en_GB", "LeadBar", "Lead Bar"),
        )
        .then(
            level("LEVEL7A", 3, "The Cistern", "Die Zisterne")
                .with_track("Ambience3")
                .with_item_title("en_GB", "Key1", "Gold Key")
                .with_item_title("en_GB", "Key2", "Silver Key")
                .with_item_title("en_GB", "Key3", "Rusty Key"),
        )
        .then(level("LEVEL7B", 2, "Tomb of Tihocan", "Das Grab des Tihocan").with_track("Ambience3"))
        .then(Cutscene::new("CUT2", "Cutscene2", 16384.0).with_camera_pos(51962, 53760))
        .then(Video::new("LIFT.RPL"))
        .then(
            level("LEVEL8A", 3, "City of Khamoon", "Die Stadt Khamoon")
                .with_track("Ambience3")
                .with_item_title("en_GB", "Key1", "Sapphire Key"),
        )
        .then(
            level("LEVEL8B", 3, "Obelisk of Khamoon", "Der Obelisk von Khamoon")
                .with_track("Ambience3")
                .with_item_title("en_GB", "Puzzle1", "Eye of Horus")
                .with_item_title("en_GB", "Puzzle2", "Scarab")
                .with_item_title("en_GB", "Puzzle3", "Seal of Anubis")
                .with_item_title("en_GB", "Puzzle4", "Ankh"),
        )
        .then(
            level("LEVEL8C", 1, "Sanctuary of the Scion", "Das Heiligtum des Scion")
                .with_track("Ambience3")
                .with_item_title("en_GB", "Puzzle1", "Gold Bar"),
        )
        .then(Cutscene::new("CUT3", "Cutscene3", 0.0).flip_rooms())
        .then(Video::new("VISION.RPL"))
        .then(natlas_mines)
        .then(Cutscene::new("CUT4", "Cutscene4", 16384.0).weapon_swap())
        .then(level("LEVEL10B", 3, "Atlantis", "Atlantis").with_track("Ambience4"))
        .then(Video::new("CANYON.RPL"))
        .then(level("LEVEL10C", 3, "The Great Pyramid", "Die große Pyramide").with_track("Ambience4"))
        .then(Video::new("END.RPL"))
}
