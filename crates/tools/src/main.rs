use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Cell, Geocache, Memento, SessionSnapshot};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the saved session JSON file to inspect
    #[arg(short, long)]
    save: String,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SaveSummary {
    format_version: u32,
    world_seed: u64,
    position: (f64, f64),
    points: u64,
    path_len: usize,
    carried_coins: usize,
    caches: usize,
    cached_coins: usize,
    coins_by_origin: BTreeMap<String, usize>,
}

fn summarize(snapshot: &SessionSnapshot) -> Result<SaveSummary> {
    let mut coins_by_origin: BTreeMap<Cell, usize> = BTreeMap::new();
    let mut cached_coins = 0;
    for (key, memento) in &snapshot.cache_state {
        let cache = Geocache::from_memento(memento)
            .with_context(|| format!("cache {key} holds an invalid memento"))?;
        cached_coins += cache.len();
        for coin in cache.coins() {
            *coins_by_origin.entry(coin.origin()).or_insert(0) += 1;
        }
    }
    for coin in &snapshot.player_inventory {
        *coins_by_origin.entry(coin.origin()).or_insert(0) += 1;
    }

    Ok(SaveSummary {
        format_version: snapshot.format_version,
        world_seed: snapshot.world_seed,
        position: (snapshot.player_position.lat, snapshot.player_position.lng),
        points: snapshot.player_points,
        path_len: snapshot.player_path.len(),
        carried_coins: snapshot.player_inventory.len(),
        caches: snapshot.cache_state.len(),
        cached_coins,
        coins_by_origin: coins_by_origin
            .into_iter()
            .map(|(cell, count)| (cell.key(), count))
            .collect(),
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("inspecting {}", args.save);

    let save_data = fs::read_to_string(&args.save)
        .with_context(|| format!("Failed to read save file: {}", args.save))?;
    let snapshot = SessionSnapshot::decode(&save_data)
        .with_context(|| "Save file is not a valid session snapshot")?;
    let summary = summarize(&snapshot)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Save format v{} (world seed {})", summary.format_version, summary.world_seed);
    println!("Position: {:.6}, {:.6}", summary.position.0, summary.position.1);
    println!("Points: {}", summary.points);
    println!("Path entries: {}", summary.path_len);
    println!("Carried coins: {}", summary.carried_coins);
    println!("Caches: {} holding {} coins", summary.caches, summary.cached_coins);
    for (origin, count) in &summary.coins_by_origin {
        println!("  origin {origin}: {count} coins");
    }

    Ok(())
}
