use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use wl4::{
    item_pool::generate_basic,
    multiworld::MultiWorld,
    regions::build_graph_with_settings,
    settings::{WorldSettings, load_settings},
    spoiler_log::get_spoiler_log,
};
use wl4_game::{Catalog, PlayerId};

#[derive(Parser)]
struct Args {
    #[arg(long)]
    settings: Option<PathBuf>,
    #[arg(long)]
    required_jewels: Option<usize>,
    #[arg(long, default_value_t = 1)]
    player: PlayerId,
    #[arg(long)]
    output_spoiler_log: Option<PathBuf>,
}

fn get_settings(args: &Args) -> Result<WorldSettings> {
    let mut settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => WorldSettings::default(),
    };
    if let Some(required_jewels) = args.required_jewels {
        settings.required_jewels = required_jewels;
    }
    settings.check()?;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let settings = get_settings(&args)?;
    let catalog = Catalog::new();
    info!(
        "Catalog: {} items, {} locations",
        catalog.items.len(),
        catalog.locations.len()
    );

    let graph = build_graph_with_settings(&catalog, args.player, &settings)?;
    let mut multiworld = MultiWorld::new();
    multiworld.add_world(graph);
    generate_basic(&catalog, &mut multiworld, args.player)?;

    if let Some(path) = &args.output_spoiler_log {
        let graph = multiworld.world(args.player)?;
        let spoiler_log = get_spoiler_log(&catalog, graph, &settings, &multiworld.itempool)?;
        let spoiler_str = serde_json::to_string_pretty(&spoiler_log)?;
        std::fs::write(path, spoiler_str)
            .with_context(|| format!("Unable to write spoiler log to {}", path.display()))?;
        info!("Wrote spoiler log to {}", path.display());
    }
    Ok(())
}
