use geocoin_core::{
    Cell, Direction, GAME_STATE_KEY, Game, Geocache, MemoryStorage, Storage, WorldConfig,
};

fn richest_caches(game: &Game) -> Vec<Cell> {
    let mut caches: Vec<(usize, Cell)> =
        game.visible_caches().map(|(descriptor, cache)| (cache.len(), descriptor.cell())).collect();
    caches.sort_by(|left, right| right.cmp(left));
    caches.into_iter().map(|(_, cell)| cell).collect()
}

#[test]
fn save_then_load_restores_three_collected_coins_from_two_caches() {
    let config = WorldConfig { seed: 2024, ..WorldConfig::default() };
    let mut game = Game::new(config.clone()).expect("valid config");
    let targets = richest_caches(&game);
    assert!(targets.len() >= 2, "default neighborhood should hold at least two caches");
    let (first, second) = (targets[0], targets[1]);
    assert!(game.cache(first).map(Geocache::len).unwrap_or(0) >= 2);

    game.collect(first).expect("first coin");
    game.collect(first).expect("second coin");
    game.collect(second).expect("third coin");
    game.move_step(Direction::East);
    game.move_step(Direction::North);

    let mut storage = MemoryStorage::new();
    game.save(&mut storage).expect("save");
    assert!(storage.read(GAME_STATE_KEY).expect("read").is_some());

    let mut restored = Game::new(config).expect("valid config");
    assert!(restored.load(&storage), "snapshot should be accepted");

    assert_eq!(restored.inventory(), game.inventory());
    assert_eq!(restored.inventory().len(), 3);
    for cell in [first, second] {
        assert_eq!(restored.cache(cell), game.cache(cell), "cache {cell} differs after load");
    }
    assert_eq!(restored.player().path.len(), game.player().path.len());
    assert_eq!(restored.store(), game.store());
}

#[test]
fn reset_forgets_mutations_and_regenerates_original_draw() {
    let config = WorldConfig { seed: 31, ..WorldConfig::default() };
    let mut game = Game::new(config.clone()).expect("valid config");
    let pristine = Game::new(config).expect("valid config");
    let target = richest_caches(&game)[0];

    while game.collect(target).is_some() {}
    game.deposit(target);
    for _ in 0..40 {
        game.move_step(Direction::West);
    }
    let mut storage = MemoryStorage::new();
    game.save(&mut storage).expect("save");
    assert!(game.store().len() > pristine.store().len());

    game.reset(&mut storage).expect("reset");

    assert!(storage.read(GAME_STATE_KEY).expect("read").is_none());
    assert!(game.inventory().is_empty());
    assert_eq!(game.cache(target), pristine.cache(target));
    assert_eq!(game.store(), pristine.store());
    assert_eq!(game.snapshot_hash(), pristine.snapshot_hash());
}
