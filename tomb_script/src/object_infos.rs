use tomb_flow::{ObjectInfo, ObjectInfoTable};

/// Creature tuning for the TR1 bestiary.
pub fn object_infos() -> ObjectInfoTable {
    ObjectInfoTable::new()
        .declare(
            "Wolf",
            ObjectInfo {
                target_update_chance: 0x2000,
                ..ObjectInfo::agent(341, 6, 375)
            },
        )
        .declare(
            "Bear",
            ObjectInfo {
                target_update_chance: 0x4000,
                ..ObjectInfo::agent(341, 20, 500)
            },
        )
        .declare(
            "Bat",
            ObjectInfo {
                step_limit: 20 * 1024,
                drop_limit: -20 * 1024,
                fly_limit: 16,
                ..ObjectInfo::agent(102, 1, 0)
            },
        )
        .declare(
            "CrocodileOnLand",
            ObjectInfo {
                target_update_chance: 0x400,
                ..ObjectInfo::agent(341, 20, 600)
            },
        )
        .declare(
            "CrocodileInWater",
            ObjectInfo {
                step_limit: 20 * 1024,
                drop_limit: -20 * 1024,
                fly_limit: 16,
                ..ObjectInfo::agent(341, 20, 600)
            },
        )
        .declare(
            "Lion",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(341, 30, 400)
            },
        )
        .declare(
            "Lioness",
            ObjectInfo {
                target_update_chance: 0x2000,
                ..ObjectInfo::agent(341, 25, 400)
            },
        )
        .declare(
            "Panther",
            ObjectInfo {
                target_update_chance: 0x2000,
                ..ObjectInfo::agent(341, 45, 400)
            },
        )
        .declare(
            "Gorilla",
            ObjectInfo {
                target_update_chance: 0x7fff,
                step_limit: 512,
                drop_limit: -1024,
                ..ObjectInfo::agent(341, 22, 250)
            },
        )
        .declare(
            "RatOnLand",
            ObjectInfo {
                target_update_chance: 0x2000,
                ..ObjectInfo::agent(204, 5, 200)
            },
        )
        .declare(
            "TRex",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(341, 100, 2000)
            },
        )
        .declare(
            "Raptor",
            ObjectInfo {
                target_update_chance: 0x4000,
                ..ObjectInfo::agent(341, 20, 400)
            },
        )
        .declare(
            "Larson",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(102, 50, 0)
            },
        )
        .declare(
            "Pierre",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(102, 70, 0)
            },
        )
        .declare(
            "SkateboardKid",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(102, 125, 0)
            },
        )
        .declare(
            "Cowboy",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(102, 150, 0)
            },
        )
        .declare(
            "Kold",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(102, 200, 0)
            },
        )
        .declare(
            "CentaurMutant",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(341, 120, 400)
            },
        )
        .declare(
            "Natla",
            ObjectInfo {
                target_update_chance: 0x7fff,
                step_limit: 20 * 1024,
                drop_limit: -20 * 1024,
                fly_limit: 16,
                ..ObjectInfo::agent(204, 400, 0)
            },
        )
        .declare(
            "TorsoBoss",
            ObjectInfo {
                target_update_chance: 0x7fff,
                ..ObjectInfo::agent(1024, 500, 0)
            },
        )
}
