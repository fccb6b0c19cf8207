use std::collections::HashSet;

use anyhow::{Result, bail};
use clap::Parser;
use game_core::luck::SeededLuck;
use game_core::spawn::{SpawnRules, coin_count};
use game_core::{Cell, Direction, Game, MemoryStorage, WorldConfig};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short = 'n', long, default_value_t = 1000)]
    steps: u32,
    #[arg(short, long, default_value_t = 8)]
    radius: i32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn visible_cells(game: &Game) -> Vec<Cell> {
    game.visible_caches().map(|(descriptor, _)| descriptor.cell()).collect()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting transfer fuzz on seed {} for {} steps...", args.seed, args.steps);
    let config =
        WorldConfig { seed: args.seed, neighborhood_radius: args.radius, ..WorldConfig::default() };
    let rules = SpawnRules { spawn_rate: config.spawn_rate, max_coins: config.max_coins };
    let luck = SeededLuck::new(args.seed);
    let mut game = Game::new(config.clone())?;
    let mut storage = MemoryStorage::new();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for step in 0..args.steps {
        match rng.next_u64() % 8 {
            0..=2 => {
                game.move_step(choose(&mut rng, &Direction::ALL));
            }
            3 | 4 => {
                let cells = visible_cells(&game);
                if !cells.is_empty() {
                    game.collect(choose(&mut rng, &cells));
                }
            }
            5 | 6 => {
                let cells = visible_cells(&game);
                if !cells.is_empty() {
                    game.deposit(choose(&mut rng, &cells));
                }
            }
            _ => {
                // Round-trip through storage
                game.save(&mut storage)?;
                let mut reloaded = Game::new(config.clone())?;
                if !reloaded.load(&storage) {
                    bail!("Invariant failed: own snapshot rejected at step {step}");
                }
                debug!("step {step}: session reloaded from storage");
                game = reloaded;
            }
        }

        // Assert invariants
        let coins = game.all_coins();
        let unique: HashSet<_> = coins.iter().collect();
        if unique.len() != coins.len() {
            bail!("Invariant failed: coin held in two places at step {step}");
        }
        let census = game.coin_census();
        for origin in census.keys().copied().chain(game.store().cells()) {
            let count = census.get(&origin).copied().unwrap_or(0);
            let minted = coin_count(origin, &luck, rules) as usize;
            if count != minted {
                bail!("Invariant failed: origin {origin} has {count} coins, minted {minted}");
            }
        }
    }

    println!(
        "Fuzzing completed successfully: {} caches known, {} coins carried.",
        game.store().len(),
        game.inventory().len()
    );
    Ok(())
}
