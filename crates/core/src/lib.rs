pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod line;
pub mod mapgen;
pub mod messages;
pub mod rng;
pub mod state;
pub mod types;

pub use components::LevelUpChoice;
pub use config::GameConfig;
pub use error::{ActionResult, GameError, Impossible};
pub use game::{Action, Game, TurnReport, WELCOME_MESSAGE};
pub use messages::{Message, MessageLog, MessageTone};
pub use state::{Actor, GameMap, GameState, Item, ItemLocation};
pub use types::*;
