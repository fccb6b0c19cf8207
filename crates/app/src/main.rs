use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use geocoin_app::config_file::{get_default_path, load_world_config};
use geocoin_app::console::{Command, Console, HELP_TEXT, parse_command};
use geocoin_app::launch_args::resolve_launch_args;
use geocoin_app::save_file::FileStorage;
use geocoin_core::{Game, WorldConfig};
use log::warn;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let launch = resolve_launch_args(&args).map_err(|err| anyhow!(err))?;

    let mut config = match launch.config_path.clone().or_else(get_default_path) {
        Some(path) => load_world_config(&path)?,
        None => WorldConfig::default(),
    };
    if let Some(seed) = launch.seed {
        config.seed = seed;
    }

    let save_dir = launch
        .save_dir
        .or_else(FileStorage::get_default_dir)
        .context("no data directory available; pass --save <dir>")?;
    let storage = FileStorage::new(save_dir);

    let mut game = Game::new(config).context("invalid world configuration")?;
    let resumed = game.load(&storage);
    let mut console = Console::new(game, storage);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", if resumed { "resumed saved session" } else { "new session" })?;
    writeln!(out, "{}", console.status_line())?;
    writeln!(out, "type 'help' for commands")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}\n{HELP_TEXT}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        match console.execute(&command) {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(err) => warn!("could not persist session: {err}"),
        }
        out.flush()?;
    }

    Ok(())
}
