//! Monster turns: chasing, melee, and confused stumbling.
//! This module exists to isolate per-enemy behavior from the player turn flow.
//! It does not own path search internals or damage math.

use super::pathfinding::path_to;
use super::*;
use crate::components::Ai;

impl Game {
    /// Lets every living monster act once, in a fixed snapshot order.
    pub(super) fn handle_enemy_turns(&mut self) {
        let acting: Vec<EntityId> = self
            .state
            .living_actors()
            .filter(|actor| actor.ai.is_some())
            .map(|actor| actor.id)
            .collect();

        for actor_id in acting {
            if !self.is_player_alive() {
                break;
            }
            let Some(ai) = self.state.actors[actor_id].ai.take() else {
                continue;
            };
            let (next_ai, result) = match ai {
                Ai::Hostile { path } => self.hostile_turn(actor_id, path),
                Ai::Confused { previous, turns_remaining } => {
                    self.confused_turn(actor_id, *previous, turns_remaining)
                }
            };
            if let Err(impossible) = result {
                debug!("{actor_id:?} turn refused: {impossible}");
            }
            let actor = &mut self.state.actors[actor_id];
            if actor.is_alive() {
                actor.ai = Some(next_ai);
            }
        }
    }

    /// Attacks when adjacent to a visible player, otherwise walks the remembered path,
    /// refreshing it whenever the player is in sight.
    fn hostile_turn(&mut self, actor_id: EntityId, mut path: Vec<Pos>) -> (Ai, ActionResult) {
        let pos = self.state.actors[actor_id].pos;
        let target = self.state.player().pos;

        if self.state.map.is_visible(pos) {
            if pos.chebyshev(target) <= 1 {
                let result = self.melee(actor_id, target.x - pos.x, target.y - pos.y);
                return (Ai::Hostile { path }, result);
            }
            path = path_to(&self.state, pos, target).unwrap_or_default();
        }

        let Some(&next) = path.first() else {
            return (Ai::Hostile { path }, Ok(()));
        };
        // A stumble or a stale path can leave the next waypoint out of reach.
        if pos.chebyshev(next) != 1 {
            path.clear();
            return (Ai::Hostile { path }, Ok(()));
        }
        let result = self.move_actor(actor_id, next.x - pos.x, next.y - pos.y);
        if result.is_ok() {
            path.remove(0);
        }
        (Ai::Hostile { path }, result)
    }

    fn confused_turn(
        &mut self,
        actor_id: EntityId,
        previous: Ai,
        turns_remaining: u32,
    ) -> (Ai, ActionResult) {
        let roll = self.rng.next_u64() % Direction::ALL.len() as u64;
        let direction = Direction::ALL[roll as usize];
        let (dx, dy) = direction.delta();
        let result = self.bump(actor_id, dx, dy);

        let turns_remaining = turns_remaining.saturating_sub(1);
        if turns_remaining > 0 {
            return (Ai::Confused { previous: Box::new(previous), turns_remaining }, result);
        }
        let name = &self.state.actors[actor_id].name;
        let text = format!("The {name} is no longer confused.");
        self.state.messages.add(text, MessageTone::StatusEffect);
        (previous, result)
    }
}
