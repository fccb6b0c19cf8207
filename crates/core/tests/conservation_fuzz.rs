use std::collections::HashSet;

use geocoin_core::luck::SeededLuck;
use geocoin_core::spawn::{SpawnRules, coin_count};
use geocoin_core::{Direction, Game, MemoryStorage, WorldConfig};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    slice[rng.next_u64() as usize % slice.len()]
}

fn check_invariants(game: &Game, seed: u64) -> Result<(), String> {
    let coins = game.all_coins();
    let unique: HashSet<_> = coins.iter().copied().collect();
    if unique.len() != coins.len() {
        return Err(format!("Invariant failed: a coin is in two lists on seed {seed}"));
    }

    let luck = SeededLuck::new(seed);
    let rules =
        SpawnRules { spawn_rate: game.config().spawn_rate, max_coins: game.config().max_coins };
    let census = game.coin_census();
    let origins = census.keys().copied().chain(game.store().cells());
    for origin in origins {
        let count = census.get(&origin).copied().unwrap_or(0);
        let minted = coin_count(origin, &luck, rules) as usize;
        if count != minted {
            return Err(format!(
                "Invariant failed: origin {origin} holds {count} coins, minted {minted} on seed {seed}"
            ));
        }
    }
    Ok(())
}

fn run_transfer_fuzz(world_seed: u64, choice_seed: u64, steps: u32) -> Result<(), String> {
    let config = WorldConfig {
        seed: world_seed,
        neighborhood_radius: 4,
        spawn_rate: 0.3,
        ..WorldConfig::default()
    };
    let mut game = Game::new(config.clone()).map_err(|err| err.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(choice_seed);
    let mut storage = MemoryStorage::new();

    for _ in 0..steps {
        match rng.next_u64() % 10 {
            0..=2 => {
                game.move_step(choose(&mut rng, &Direction::ALL));
            }
            3..=5 => {
                let cells: Vec<_> = game.visible_caches().map(|(d, _)| d.cell()).collect();
                if !cells.is_empty() {
                    game.collect(choose(&mut rng, &cells));
                }
            }
            6..=7 => {
                let cells: Vec<_> = game.visible_caches().map(|(d, _)| d.cell()).collect();
                if !cells.is_empty() {
                    game.deposit(choose(&mut rng, &cells));
                }
            }
            8 => {
                let before = game.snapshot_hash();
                game.sync();
                if game.snapshot_hash() != before {
                    return Err(format!(
                        "Invariant failed: sync not idempotent on seed {world_seed}"
                    ));
                }
            }
            _ => {
                game.save(&mut storage).map_err(|err| err.to_string())?;
                let mut reloaded = Game::new(config.clone()).map_err(|err| err.to_string())?;
                if !reloaded.load(&storage) {
                    return Err(format!(
                        "Invariant failed: own snapshot rejected on seed {world_seed}"
                    ));
                }
                if reloaded.snapshot_hash() != game.snapshot_hash() {
                    return Err(format!("Invariant failed: load diverged on seed {world_seed}"));
                }
                game = reloaded;
            }
        }
        check_invariants(&game, world_seed)?;
    }
    Ok(())
}

#[test]
fn test_fuzz_transfers_conserve_coins() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(16));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(world_seed, choice_seed)| {
            run_transfer_fuzz(world_seed, choice_seed, 300).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("random transfers should preserve coin conservation");
}
