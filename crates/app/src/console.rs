//! Line-oriented front end: parses player commands, applies them to the game
//! and renders the collaborator descriptors as text.

use geocoin_core::{Cell, Direction, Game, LatLng, SaveError, Storage};
use log::info;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Move(Direction),
    /// Sensor-style absolute position update.
    Goto(LatLng),
    /// Collect from the given cache, or from the player's own cell.
    Collect(Option<Cell>),
    Deposit(Option<Cell>),
    Save,
    Load,
    Reset,
    Status,
    Caches,
    Inventory,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
commands:
  n | s | e | w            move one tile north/south/east/west
  goto <lat> <lng>         jump to a position
  collect [i,j]            take the front coin of a cache (default: your cell)
  deposit [i,j]            put your front coin into a cache (default: your cell)
  caches | inv | status    show nearby caches, your coins, or a summary
  save | load | reset      manage the saved session
  help | quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err("empty command".to_string());
    };
    let rest: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("n" | "north", []) => Command::Move(Direction::North),
        ("s" | "south", []) => Command::Move(Direction::South),
        ("e" | "east", []) => Command::Move(Direction::East),
        ("w" | "west", []) => Command::Move(Direction::West),
        ("goto", [lat, lng]) => {
            Command::Goto(LatLng::new(parse_degrees(lat)?, parse_degrees(lng)?))
        }
        ("collect" | "c", [cell]) => Command::Collect(Some(parse_cell(cell)?)),
        ("collect" | "c", []) => Command::Collect(None),
        ("deposit" | "d", [cell]) => Command::Deposit(Some(parse_cell(cell)?)),
        ("deposit" | "d", []) => Command::Deposit(None),
        ("save", []) => Command::Save,
        ("load", []) => Command::Load,
        ("reset", []) => Command::Reset,
        ("status", []) => Command::Status,
        ("caches", []) => Command::Caches,
        ("inv" | "inventory", []) => Command::Inventory,
        ("help" | "?", []) => Command::Help,
        ("quit" | "q" | "exit", []) => Command::Quit,
        _ => return Err(format!("unrecognized command '{}'", line.trim())),
    };
    Ok(command)
}

fn parse_degrees(raw: &str) -> Result<f64, String> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("'{raw}' is not a coordinate"))
}

fn parse_cell(raw: &str) -> Result<Cell, String> {
    raw.parse::<Cell>().map_err(|err| err.to_string())
}

/// A game bound to its storage. Movement and transfers are saved as they happen.
pub struct Console<S: Storage> {
    game: Game,
    storage: S,
}

impl<S: Storage> Console<S> {
    pub fn new(game: Game, storage: S) -> Self {
        Self { game, storage }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Applies `command` and returns the lines to show the player.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<String>, SaveError> {
        let lines = match command {
            Command::Move(direction) => {
                self.game.move_step(*direction);
                self.game.save(&mut self.storage)?;
                vec![self.position_line(), self.status_line()]
            }
            Command::Goto(position) => {
                self.game.move_to(*position);
                self.game.save(&mut self.storage)?;
                vec![self.position_line(), self.status_line()]
            }
            Command::Collect(target) => {
                let cell = target.unwrap_or_else(|| self.game.player_cell());
                let line = match self.game.collect(cell) {
                    Some(coin) => format!("collected {coin} from {cell}"),
                    None => format!("nothing to collect at {cell}"),
                };
                self.game.save(&mut self.storage)?;
                vec![line, self.status_line()]
            }
            Command::Deposit(target) => {
                let cell = target.unwrap_or_else(|| self.game.player_cell());
                let line = match self.game.deposit(cell) {
                    Some(coin) => format!("deposited {coin} into {cell}"),
                    None => format!("nothing deposited at {cell}"),
                };
                self.game.save(&mut self.storage)?;
                vec![line, self.status_line()]
            }
            Command::Save => {
                self.game.save(&mut self.storage)?;
                vec!["session saved".to_string()]
            }
            Command::Load => {
                if self.game.load(&self.storage) {
                    vec!["session loaded".to_string(), self.status_line()]
                } else {
                    vec!["no saved session".to_string()]
                }
            }
            Command::Reset => {
                self.game.reset(&mut self.storage)?;
                info!("player requested a full reset");
                vec!["world reset".to_string(), self.status_line()]
            }
            Command::Status => vec![self.position_line(), self.status_line()],
            Command::Caches => self.cache_lines(),
            Command::Inventory => self.inventory_lines(),
            Command::Help => HELP_TEXT.lines().map(str::to_string).collect(),
            Command::Quit => Vec::new(),
        };
        Ok(lines)
    }

    pub fn status_line(&self) -> String {
        format!(
            "{} points | Inventory: {} coins",
            self.game.player().points,
            self.game.inventory().len()
        )
    }

    fn position_line(&self) -> String {
        let position = self.game.player().position;
        format!(
            "at {:.6}, {:.6} (cell {}), {} caches in view",
            position.lat,
            position.lng,
            self.game.player_cell(),
            self.game.layers().len()
        )
    }

    fn cache_lines(&self) -> Vec<String> {
        let lines: Vec<String> = self
            .game
            .visible_caches()
            .map(|(descriptor, cache)| {
                format!(
                    "cache {} [{:.6},{:.6} .. {:.6},{:.6}]: {} coins",
                    descriptor.cell(),
                    descriptor.southwest.lat,
                    descriptor.southwest.lng,
                    descriptor.northeast.lat,
                    descriptor.northeast.lng,
                    cache.len()
                )
            })
            .collect();
        if lines.is_empty() { vec!["no caches in view".to_string()] } else { lines }
    }

    fn inventory_lines(&self) -> Vec<String> {
        let inventory = self.game.inventory();
        if inventory.is_empty() {
            return vec!["inventory is empty".to_string()];
        }
        let coins: Vec<String> = inventory.iter().map(ToString::to_string).collect();
        vec![coins.join(" ")]
    }
}
