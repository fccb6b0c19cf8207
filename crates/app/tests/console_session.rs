use geocoin_app::console::{Console, parse_command};
use geocoin_app::save_file::FileStorage;
use geocoin_core::{GAME_STATE_KEY, Game, Storage, WorldConfig};
use tempfile::tempdir;

fn run_script(console: &mut Console<FileStorage>, script: &[&str]) -> Vec<String> {
    let mut output = Vec::new();
    for line in script {
        let command = parse_command(line).expect("script commands are valid");
        output.extend(console.execute(&command).expect("command should persist"));
    }
    output
}

#[test]
fn session_resumes_from_disk_after_restart() {
    let dir = tempdir().expect("tempdir");
    let config = WorldConfig { seed: 99, ..WorldConfig::default() };

    let game = Game::new(config.clone()).expect("config");
    let mut first = Console::new(game, FileStorage::new(dir.path()));
    let stocked = first
        .game()
        .visible_caches()
        .find(|(_, cache)| cache.len() >= 2)
        .map(|(descriptor, _)| descriptor.cell())
        .expect("default neighborhood should hold a cache with two coins");
    let collect = format!("collect {stocked}");
    run_script(&mut first, &[collect.as_str(), collect.as_str(), "n", "e", "s"]);
    let expected_hash = first.game().snapshot_hash();

    let storage = FileStorage::new(dir.path());
    assert!(storage.read(GAME_STATE_KEY).expect("read").is_some());
    let mut game = Game::new(config).expect("config");
    assert!(game.load(&storage));
    let mut second = Console::new(game, storage);

    assert_eq!(second.game().snapshot_hash(), expected_hash);
    assert_eq!(second.game().inventory().len(), 2);
    let inventory = run_script(&mut second, &["inv"]);
    assert_eq!(inventory.len(), 1);
    assert!(inventory[0].contains(&format!("{}:{}#", stocked.i, stocked.j)), "{inventory:?}");
}

#[test]
fn reset_removes_the_save_file() {
    let dir = tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    let save_path = storage.path_for(GAME_STATE_KEY);
    let mut console = Console::new(Game::new(WorldConfig::default()).expect("config"), storage);

    run_script(&mut console, &["w", "save"]);
    assert!(save_path.exists());

    let output = run_script(&mut console, &["reset"]);
    assert_eq!(output[0], "world reset");
    assert!(!save_path.exists());
    assert_eq!(console.game().player().path.len(), 1);
}
