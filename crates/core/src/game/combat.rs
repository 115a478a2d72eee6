//! Melee resolution, damage application, and death handling.
//! This module exists so every damage source funnels through one death path.
//! It does not own target selection for item effects.

use super::*;

const CORPSE_GLYPH: char = '%';
const CORPSE_COLOR: Rgb = Rgb(191, 0, 0);

impl Game {
    pub(super) fn melee(&mut self, attacker_id: EntityId, dx: i32, dy: i32) -> ActionResult {
        let dest = self.state.actors[attacker_id].pos.offset(dx, dy);
        let Some(target_id) = self.melee_target_at(attacker_id, dest) else {
            return Err(Impossible::new("Nothing to attack."));
        };

        let damage = self.state.power(attacker_id) - self.state.defense(target_id);
        let attack_desc = format!(
            "{} attacks {}",
            capitalize(&self.state.actors[attacker_id].name),
            self.state.actors[target_id].name
        );
        let tone = if attacker_id == self.state.player_id {
            MessageTone::PlayerAttack
        } else {
            MessageTone::EnemyAttack
        };

        if damage > 0 {
            self.state.messages.add(format!("{attack_desc} for {damage} hit points."), tone);
            self.apply_damage(target_id, damage);
        } else {
            self.state.messages.add(format!("{attack_desc} but does no damage."), tone);
        }
        Ok(())
    }

    /// Subtracts hp and runs the death path when this hit was the killing blow.
    pub(super) fn apply_damage(&mut self, target_id: EntityId, amount: i32) {
        if self.state.actors[target_id].fighter.take_damage(amount) {
            self.kill(target_id);
        }
    }

    fn kill(&mut self, actor_id: EntityId) {
        let player_id = self.state.player_id;
        let actor = &mut self.state.actors[actor_id];
        let death_message = if actor_id == player_id {
            "You died!".to_string()
        } else {
            format!("{} is dead!", actor.name)
        };
        let xp_given = actor.level.xp_given;

        actor.glyph = CORPSE_GLYPH;
        actor.color = CORPSE_COLOR;
        actor.blocks_movement = false;
        actor.ai = None;
        actor.name = format!("remains of {}", actor.name);
        actor.render_order = RenderOrder::Corpse;
        debug!("{:?} died at {:?}", actor.kind, actor.pos);

        if actor_id == player_id {
            self.state.messages.add(death_message, MessageTone::PlayerDie);
            return;
        }
        self.state.messages.add(death_message, MessageTone::EnemyDie);
        self.grant_xp(xp_given);
    }

    fn grant_xp(&mut self, xp: u32) {
        let level = &mut self.state.player_mut().level;
        if xp == 0 || level.level_up_base == 0 {
            return;
        }
        level.add_xp(xp);
        let ready = level.requires_level_up();
        let next_level = level.current_level + 1;

        self.state.messages.add(format!("You gain {xp} experience points."), MessageTone::Info);
        if ready {
            let text = format!("You advance to level {next_level}!");
            self.state.messages.add(text, MessageTone::Info);
        }
    }
}

/// Upper-cases the first letter and lower-cases the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
