use std::process::ExitCode;

use anyhow::{Context, Result};
use tomb_flow::level::FALLBACK_LANGUAGE;
use tomb_flow::{hand_off, PublishedConfiguration, SequenceItem};

mod assets;
mod cli;
mod engine;

use assets::AssetIndex;
use engine::StubEngine;

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = cli::parse();

    let items = StubEngine::load_catalog(args.catalog.as_deref())
        .context("loading identifier catalog")?;
    let assets = AssetIndex::from_root(&args.data_root).context("indexing engine assets")?;
    let mut engine = StubEngine::new(items, assets);

    let config = match tomb_script::load_configuration(&engine) {
        Ok(config) => config,
        Err(err) => {
            eprintln!(
                "[tomb_host] configuration error ({}): {err}",
                err.kind()
            );
            return Ok(ExitCode::from(2));
        }
    };
    hand_off(config, &mut engine)?;
    let config = engine
        .configuration()
        .context("engine holds no configuration after hand-off")?;

    if args.json {
        let json = serde_json::to_string_pretty(config)
            .context("serializing published configuration to JSON")?;
        println!("{json}");
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "[tomb_host] identifiers: {} | assets: {} under {}",
        engine.identifier_count(),
        engine.asset_index().len(),
        engine.asset_index().root().display()
    );
    describe_configuration(config, args.verbose);
    Ok(ExitCode::SUCCESS)
}

fn describe_configuration(config: &PublishedConfiguration, verbose: bool) {
    let locale = config.locale_override().unwrap_or(FALLBACK_LANGUAGE);
    let levels = config.levels();

    match levels.title_menu.as_ref() {
        Some(menu) => println!(
            "Title menu: {} ({})",
            menu.level().name,
            menu.level().title_for(locale).unwrap_or("untitled")
        ),
        None => println!("Title menu: none"),
    }
    match levels.home_level.as_ref() {
        Some(home) => println!(
            "Home level: {} ({})",
            home.name,
            home.title_for(locale).unwrap_or("untitled")
        ),
        None => println!("Home level: none"),
    }
    println!(
        "Boot sequence: {} entries",
        levels.boot_sequence.as_ref().map_or(0, Vec::len)
    );
    println!(
        "Gameplay: {} levels across {} entries",
        levels.level_count(),
        levels.len()
    );
    println!(
        "Objects: {} | tracks: {}",
        config.objects().len(),
        config.tracks().len()
    );

    let cheats = config.debug_override();
    if cheats.is_neutral() {
        println!("Debug override: disabled");
    } else {
        println!(
            "Debug override: enabled (god mode: {}, all ammo: {}, inventory entries: {})",
            cheats.god_mode,
            cheats.all_ammo,
            cheats.inventory.len()
        );
    }
    if let Some(locale) = config.locale_override() {
        println!("Locale override: {locale}");
    }

    if verbose {
        println!("\nLevel sequence:");
        for (index, item) in levels.entries.iter().enumerate() {
            let marker = match item {
                SequenceItem::Level(level) if !level.allow_save => " [no saves]",
                _ => "",
            };
            println!("  {:>2}. {}{marker}", index + 1, item.describe());
        }
    }
}
