use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::content::{actor_template, item_template};
use game_core::mapgen::{GeneratedFloor, generate_floor};
use game_core::rng::GameRng;
use game_core::{GameConfig, Pos, TileKind};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about = "Generate one dungeon floor and print it", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Floor number; deeper floors spawn more and stronger entities.
    #[arg(short, long, default_value_t = 1)]
    floor: u32,
    /// Optional TOML file overriding the default game configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the generated floor and its statistics as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FloorStats {
    rooms: usize,
    walkable_tiles: usize,
    actors: BTreeMap<String, usize>,
    items: BTreeMap<String, usize>,
}

#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    floor: &'a GeneratedFloor,
    stats: FloorStats,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    GameConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn collect_stats(floor: &GeneratedFloor) -> FloorStats {
    let mut actors: BTreeMap<String, usize> = BTreeMap::new();
    for spawn in &floor.actor_spawns {
        *actors.entry(format!("{:?}", spawn.kind)).or_default() += 1;
    }
    let mut items: BTreeMap<String, usize> = BTreeMap::new();
    for spawn in &floor.item_spawns {
        *items.entry(format!("{:?}", spawn.kind)).or_default() += 1;
    }
    FloorStats {
        rooms: floor.rooms.len(),
        walkable_tiles: floor.tiles.iter().filter(|tile| tile.walkable()).count(),
        actors,
        items,
    }
}

fn render_ascii(floor: &GeneratedFloor) -> String {
    let mut text = String::with_capacity((floor.width + 1) * floor.height);
    for y in 0..floor.height as i32 {
        for x in 0..floor.width as i32 {
            let pos = Pos::new(x, y);
            let glyph = if floor.player_start == Some(pos) {
                '@'
            } else if let Some(spawn) = floor.actor_spawns.iter().find(|spawn| spawn.pos == pos) {
                actor_template(spawn.kind).glyph
            } else if let Some(spawn) = floor.item_spawns.iter().find(|spawn| spawn.pos == pos) {
                item_template(spawn.kind).glyph
            } else {
                match floor.tile_at(pos) {
                    TileKind::Wall => '#',
                    TileKind::Floor => '.',
                    TileKind::DownStairs => '>',
                }
            };
            text.push(glyph);
        }
        text.push('\n');
    }
    text
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let mut rng = GameRng::seed_from_u64(args.seed);
    let floor = generate_floor(&config, args.floor, &mut rng)
        .with_context(|| {
            format!("Failed to generate floor {} for seed {}", args.floor, args.seed)
        })?;
    info!("generated floor {} for seed {}", args.floor, args.seed);

    let stats = collect_stats(&floor);
    if args.json {
        let report = Report { seed: args.seed, floor: &floor, stats };
        let json = serde_json::to_string_pretty(&report).context("Failed to encode floor JSON")?;
        println!("{json}");
        return Ok(());
    }

    print!("{}", render_ascii(&floor));
    println!("Seed: {}  Floor: {}", args.seed, args.floor);
    println!("Rooms: {}  Walkable tiles: {}", stats.rooms, stats.walkable_tiles);
    for (kind, count) in &stats.actors {
        println!("  monster {kind}: {count}");
    }
    for (kind, count) in &stats.items {
        println!("  item {kind}: {count}");
    }
    Ok(())
}
