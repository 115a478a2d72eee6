//! Spending pending level-ups on player attributes.

use super::*;
use crate::components::LevelUpChoice;

const CONSTITUTION_BONUS: i32 = 20;

impl Game {
    /// Applies one pending level-up. No game time passes.
    pub fn level_up(&mut self, choice: LevelUpChoice) -> ActionResult {
        if !self.level_up_pending() {
            return Err(self.reject(Impossible::new("You have no pending level-up.")));
        }

        let player = self.state.player_mut();
        player.level.increase_level();
        let text = match choice {
            LevelUpChoice::Constitution => {
                player.fighter.raise_max_hp(CONSTITUTION_BONUS);
                "Your health improves!"
            }
            LevelUpChoice::Strength => {
                player.fighter.base_power += 1;
                "You feel stronger!"
            }
            LevelUpChoice::Agility => {
                player.fighter.base_defense += 1;
                "Your movements are getting swifter!"
            }
        };
        info!("player reached level {} via {choice:?}", player.level.current_level);
        self.state.messages.add(text, MessageTone::Info);
        Ok(())
    }
}
