//! Turn engine owning the session state, seeded RNG, and configuration.

mod abilities;
mod actions;
mod ai;
mod combat;
mod floor_transition;
mod hash;
mod items;
mod leveling;
mod pathfinding;
mod visibility;

#[cfg(test)]
mod test_support;

use log::{debug, info};
use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::content::{spawn_item, spawn_player};
use crate::error::{ActionResult, GameError, Impossible};
use crate::mapgen::generate_floor;
use crate::messages::{MessageLog, MessageTone};
use crate::rng::GameRng;
use crate::state::{GameMap, GameState, ItemLocation};
use crate::types::*;

pub use actions::Action;

pub const WELCOME_MESSAGE: &str = "Hello and welcome, adventurer, to yet another dungeon!";

/// Outcome of one completed player turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub turn: u64,
    pub player_alive: bool,
    pub descended: bool,
    pub level_up_pending: bool,
}

pub struct Game {
    seed: u64,
    rng: GameRng,
    config: GameConfig,
    state: GameState,
}

impl Game {
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = GameRng::seed_from_u64(seed);
        let floor = generate_floor(&config, 1, &mut rng)?;

        let start = floor.player_start.expect("playable floors have a player start");
        let mut actors = SlotMap::with_key();
        let player_id = actors.insert(spawn_player(&config.player, start));
        actors[player_id].id = player_id;

        let state = GameState {
            map: GameMap::new(floor.width, floor.height),
            actors,
            items: SlotMap::with_key(),
            player_id,
            floor_number: 1,
            turn: 0,
            messages: MessageLog::default(),
        };
        let mut game = Self { seed, rng, config, state };
        game.install_floor(floor);
        game.state.messages.add(WELCOME_MESSAGE, MessageTone::Welcome);
        game.give_starting_kit();
        info!("new game with seed {seed}");
        Ok(game)
    }

    /// Resumes a saved session. The random stream restarts from `seed`.
    pub fn from_state(state: GameState, seed: u64, config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        if !state.actors.contains_key(state.player_id) {
            return Err(GameError::InvalidConfig("saved state has no player".to_string()));
        }
        let mut game = Self { seed, rng: GameRng::seed_from_u64(seed), config, state };
        game.update_fov();
        Ok(game)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn messages(&self) -> &MessageLog {
        &self.state.messages
    }

    pub fn player_id(&self) -> EntityId {
        self.state.player_id
    }

    pub fn is_player_alive(&self) -> bool {
        self.state.player().is_alive()
    }

    pub fn level_up_pending(&self) -> bool {
        self.state.player().level.requires_level_up()
    }

    /// Resolves one player action, then lets every enemy act, ticks carried ability
    /// cooldowns, and refreshes the field of view.
    ///
    /// An `Err` means the action was refused and no time passed.
    pub fn handle_player_action(&mut self, action: Action) -> Result<TurnReport, Impossible> {
        if !self.is_player_alive() {
            return Err(self.reject(Impossible::new("You are dead.")));
        }
        if self.level_up_pending() {
            return Err(self.reject(Impossible::new("Choose an attribute to improve first.")));
        }

        let floor_before = self.state.floor_number;
        if let Err(impossible) = self.perform(self.state.player_id, action) {
            return Err(self.reject(impossible));
        }

        self.handle_enemy_turns();
        self.tick_cooldowns();
        self.update_fov();
        self.state.turn += 1;

        Ok(TurnReport {
            turn: self.state.turn,
            player_alive: self.is_player_alive(),
            descended: self.state.floor_number != floor_before,
            level_up_pending: self.level_up_pending(),
        })
    }

    fn reject(&mut self, impossible: Impossible) -> Impossible {
        debug!("player action refused: {impossible}");
        self.state.messages.add(impossible.message(), MessageTone::Impossible);
        impossible
    }

    fn give_starting_kit(&mut self) {
        let player_id = self.state.player_id;
        for kind in [ItemKind::WrappedFists, ItemKind::ClothArmor, ItemKind::Bow] {
            let item_id = self.state.add_item(spawn_item(kind, ItemLocation::Carried(player_id)));
            let pack = &mut self.state.player_mut().inventory;
            pack.add(item_id).expect("empty pack has room for the kit");
            if self.state.items[item_id].equippable.is_some() {
                self.equip(player_id, item_id, false).expect("empty loadout accepts starting gear");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_on_floor_one_with_the_kit_worn() {
        let game = Game::new(12_345, GameConfig::default()).expect("default config is valid");
        let state = game.state();
        let player = state.player();

        assert_eq!(state.floor_number, 1);
        assert_eq!(player.inventory.len(), 3);
        assert!(player.equipment.weapon.is_some());
        assert!(player.equipment.armor.is_some());
        assert_eq!(state.power(state.player_id), 6);
        assert_eq!(state.defense(state.player_id), 3);
        assert_eq!(game.messages().messages()[0].text, WELCOME_MESSAGE);
        assert!(state.map.is_visible(player.pos));
        assert!(state.map.downstairs.is_some());
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = GameConfig { max_rooms: 0, ..GameConfig::default() };
        assert!(matches!(Game::new(1, config), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn refused_action_costs_no_turn_and_is_logged() {
        let mut game = Game::new(7, GameConfig::default()).expect("default config is valid");
        let before = game.state().turn;

        let refused = game.handle_player_action(Action::Drop { item: ItemId::default() });

        assert!(refused.is_err());
        assert_eq!(game.state().turn, before);
        assert_eq!(game.messages().last().map(|m| m.tone), Some(MessageTone::Impossible));
    }

    #[test]
    fn waiting_advances_the_turn_counter() {
        let mut game = Game::new(7, GameConfig::default()).expect("default config is valid");
        let report = game.handle_player_action(Action::Wait).expect("waiting is always allowed");
        assert_eq!(report.turn, 1);
        assert!(!report.descended);
    }
}
