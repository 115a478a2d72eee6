//! Targeted effect resolution shared by consumables and cooldown-gated abilities.
//! This module exists to validate targets and apply each effect kind in one place.
//! It does not own inventory bookkeeping or cooldown starts.

use log::trace;

use super::*;
use crate::components::{Ai, Effect};
use crate::line::Bresenham;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EffectSource {
    Consumable,
    Ability,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EffectOutcome {
    Applied,
    /// Nothing happened, but the turn still passes.
    NoTarget,
}

impl Game {
    pub(super) fn resolve_effect(
        &mut self,
        user_id: EntityId,
        item_name: &str,
        effect: Effect,
        target: Option<Pos>,
        source: EffectSource,
    ) -> ActionResult<EffectOutcome> {
        trace!("{item_name} resolving {effect:?} at {target:?}");
        match effect {
            Effect::Healing { amount } => self.heal(user_id, item_name, amount),
            Effect::Confusion { turns } => self.confuse(user_id, target, turns),
            Effect::Fireball { damage, radius } => self.fireball(target, damage, radius),
            Effect::Lightning { damage, maximum_range } => {
                self.lightning(user_id, damage, maximum_range, source)
            }
            Effect::Ranged { damage, maximum_range } => {
                self.ranged(user_id, item_name, target, damage, maximum_range)
            }
            Effect::Beam { damage, maximum_range } => {
                self.beam(user_id, item_name, target, damage, maximum_range)
            }
            Effect::Chain { damage, radius } => self.chain(user_id, item_name, damage, radius),
        }
    }

    /// Advances every ability the player carries, including one fired this turn.
    pub(super) fn tick_cooldowns(&mut self) {
        let player_id = self.state.player_id;
        let GameState { items, messages, .. } = &mut self.state;
        for item in items.values_mut() {
            if item.location != ItemLocation::Carried(player_id) {
                continue;
            }
            if let Some(ability) = item.ability.as_mut() {
                ability.cooldown(&item.name, messages);
            }
        }
    }

    fn visible_target(&self, target: Option<Pos>) -> ActionResult<Pos> {
        let Some(pos) = target else {
            return Err(Impossible::new("You must select a target location."));
        };
        if !self.state.map.is_visible(pos) {
            return Err(Impossible::new("You cannot target an area that you cannot see."));
        }
        Ok(pos)
    }

    /// Living actors other than `user_id` standing on visible tiles.
    fn visible_others(&self, user_id: EntityId) -> Vec<(EntityId, Pos)> {
        self.state
            .living_actors()
            .filter(|actor| actor.id != user_id && self.state.map.is_visible(actor.pos))
            .map(|actor| (actor.id, actor.pos))
            .collect()
    }

    fn heal(
        &mut self,
        user_id: EntityId,
        item_name: &str,
        amount: i32,
    ) -> ActionResult<EffectOutcome> {
        let recovered = self.state.actors[user_id].fighter.heal(amount);
        if recovered == 0 {
            return Err(Impossible::new("Your health is already full."));
        }
        self.state.messages.add(
            format!("You consume the {item_name}, and recover {recovered} HP!"),
            MessageTone::HealthRecovered,
        );
        Ok(EffectOutcome::Applied)
    }

    fn confuse(
        &mut self,
        user_id: EntityId,
        target: Option<Pos>,
        turns: u32,
    ) -> ActionResult<EffectOutcome> {
        let pos = self.visible_target(target)?;
        let Some(target_id) = self.state.living_actor_at(pos) else {
            return Err(Impossible::new("You must select an enemy to target."));
        };
        if target_id == user_id {
            return Err(Impossible::new("You cannot confuse yourself!"));
        }

        let victim = &mut self.state.actors[target_id];
        let previous = victim.ai.take().unwrap_or_else(Ai::hostile);
        victim.ai = Some(previous.confused(turns));
        let text = format!(
            "The eyes of the {} look vacant, as it starts to stumble around!",
            victim.name
        );
        self.state.messages.add(text, MessageTone::StatusEffect);
        Ok(EffectOutcome::Applied)
    }

    fn fireball(
        &mut self,
        target: Option<Pos>,
        damage: i32,
        radius: u32,
    ) -> ActionResult<EffectOutcome> {
        let center = self.visible_target(target)?;
        let caught: Vec<EntityId> = self
            .state
            .living_actors()
            .filter(|actor| actor.pos.distance(center) <= f64::from(radius))
            .map(|actor| actor.id)
            .collect();
        if caught.is_empty() {
            return Err(Impossible::new("There are no targets in the radius."));
        }

        for actor_id in caught {
            let text = format!(
                "The {} is engulfed in a fiery explosion, taking {damage} damage!",
                self.state.actors[actor_id].name
            );
            self.state.messages.add(text, MessageTone::PlayerAttack);
            self.apply_damage(actor_id, damage);
        }
        Ok(EffectOutcome::Applied)
    }

    fn lightning(
        &mut self,
        user_id: EntityId,
        damage: i32,
        maximum_range: u32,
        source: EffectSource,
    ) -> ActionResult<EffectOutcome> {
        let origin = self.state.actors[user_id].pos;
        let mut closest_distance = f64::from(maximum_range) + 1.0;
        let mut target = None;
        for (actor_id, pos) in self.visible_others(user_id) {
            let distance = origin.distance(pos);
            if distance < closest_distance {
                target = Some(actor_id);
                closest_distance = distance;
            }
        }

        let Some(target_id) = target else {
            return match source {
                EffectSource::Consumable => {
                    Err(Impossible::new("No enemy is close enough to strike."))
                }
                EffectSource::Ability => Ok(EffectOutcome::NoTarget),
            };
        };
        let text = format!(
            "A lighting bolt strikes the {} with a loud thunder, for {damage} damage!",
            self.state.actors[target_id].name
        );
        self.state.messages.add(text, MessageTone::PlayerAttack);
        self.apply_damage(target_id, damage);
        Ok(EffectOutcome::Applied)
    }

    fn ranged(
        &mut self,
        user_id: EntityId,
        item_name: &str,
        target: Option<Pos>,
        damage: i32,
        maximum_range: u32,
    ) -> ActionResult<EffectOutcome> {
        let pos = self.visible_target(target)?;
        let Some(target_id) = self.state.living_actor_at(pos) else {
            return Err(Impossible::new("You must select an enemy to target."));
        };
        if target_id == user_id {
            return Err(Impossible::new("You cannot target yourself."));
        }
        if self.state.actors[user_id].pos.distance(pos) > f64::from(maximum_range) {
            return Err(Impossible::new("The target is out of range."));
        }

        let text = format!(
            "The {item_name} strikes the {} for {damage} damage!",
            self.state.actors[target_id].name
        );
        self.state.messages.add(text, MessageTone::PlayerAttack);
        self.apply_damage(target_id, damage);
        Ok(EffectOutcome::Applied)
    }

    fn beam(
        &mut self,
        user_id: EntityId,
        item_name: &str,
        target: Option<Pos>,
        damage: i32,
        maximum_range: u32,
    ) -> ActionResult<EffectOutcome> {
        let aim = self.visible_target(target)?;
        let origin = self.state.actors[user_id].pos;
        if aim == origin {
            return Err(Impossible::new("You cannot target yourself."));
        }

        let mut struck = Vec::new();
        for pos in beam_path(origin, aim, maximum_range) {
            if !self.state.map.is_transparent(pos) {
                break;
            }
            struck.extend(
                self.state
                    .living_actors()
                    .filter(|actor| actor.pos == pos && actor.id != user_id)
                    .map(|actor| actor.id),
            );
        }
        if struck.is_empty() {
            return Err(Impossible::new("There are no targets in the beam's path."));
        }

        for actor_id in struck {
            let text = format!(
                "The {item_name} sears the {} for {damage} damage!",
                self.state.actors[actor_id].name
            );
            self.state.messages.add(text, MessageTone::PlayerAttack);
            self.apply_damage(actor_id, damage);
        }
        Ok(EffectOutcome::Applied)
    }

    fn chain(
        &mut self,
        user_id: EntityId,
        item_name: &str,
        damage: i32,
        radius: u32,
    ) -> ActionResult<EffectOutcome> {
        let mut remaining = self.visible_others(user_id);
        let mut from = self.state.actors[user_id].pos;
        let mut hops = Vec::new();
        while let Some(next) = nearest_within(&remaining, from, radius) {
            let (actor_id, pos) = remaining.remove(next);
            hops.push(actor_id);
            from = pos;
        }
        if hops.is_empty() {
            return Err(Impossible::new("No enemy is close enough to strike."));
        }

        for actor_id in hops {
            let text = format!(
                "The {item_name} arcs into the {} for {damage} damage!",
                self.state.actors[actor_id].name
            );
            self.state.messages.add(text, MessageTone::PlayerAttack);
            self.apply_damage(actor_id, damage);
        }
        Ok(EffectOutcome::Applied)
    }
}

/// Tiles on the ray from `origin` through `aim`, excluding `origin`, at most `maximum_range` long.
fn beam_path(origin: Pos, aim: Pos, maximum_range: u32) -> impl Iterator<Item = Pos> {
    let dx = aim.x - origin.x;
    let dy = aim.y - origin.y;
    let span = dx.abs().max(dy.abs()).max(1);
    let reach = maximum_range as i32;
    let scale = (reach + span - 1) / span;
    let end = origin.offset(dx * scale.max(1), dy * scale.max(1));
    Bresenham::new(origin, end).skip(1).take(maximum_range as usize)
}

/// Index of the first closest candidate within `radius` of `from`.
fn nearest_within(candidates: &[(EntityId, Pos)], from: Pos, radius: u32) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, &(_, pos))| (index, from.distance(pos)))
        .filter(|&(_, distance)| distance <= f64::from(radius))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn healing_cup_is_consumed_and_reports_actual_recovery() {
        let mut game = arena_game();
        let cup = give_item(&mut game, ItemKind::HealthPotion);
        game.state.player_mut().fighter.set_hp(28);

        game.handle_player_action(Action::UseItem { item: cup, target: None }).expect("hurt");

        assert_eq!(game.state.player().fighter.hp(), 30);
        assert!(game.messages().contains_text("You consume the Healing Cup, and recover 2 HP!"));
        assert!(!game.state.items.contains_key(cup));
        assert!(!game.state.player().inventory.contains(cup));
    }

    #[test]
    fn healing_at_full_health_is_refused_and_kept() {
        let mut game = arena_game();
        let cup = give_item(&mut game, ItemKind::HealthPotion);

        let refused = game.handle_player_action(Action::UseItem { item: cup, target: None });

        assert_eq!(refused, Err(Impossible::new("Your health is already full.")));
        assert!(game.state.player().inventory.contains(cup));
    }

    #[test]
    fn confusion_reverts_to_hostile_after_its_turns() {
        let mut game = arena_game();
        let cell = Pos::new(2, 2);
        let player_id = game.state.player_id;
        game.state.actors[player_id].pos = Pos::new(5, 2);
        game.update_fov();
        let ninja = add_monster(&mut game, ActorKind::Ninja, cell);

        game.confuse(player_id, Some(cell), 10).expect("ninja is visible");
        assert!(game.state.actors[ninja].ai.as_ref().is_some_and(Ai::is_confused));

        // Walled in so stumbling never reaches the player.
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) {
                    game.state.map.set_tile(cell.offset(dx, dy), TileKind::Wall);
                }
            }
        }
        for _ in 0..9 {
            game.handle_player_action(Action::Wait).expect("waiting is allowed");
            assert!(game.state.actors[ninja].ai.as_ref().is_some_and(Ai::is_confused));
        }
        game.handle_player_action(Action::Wait).expect("waiting is allowed");

        assert!(matches!(game.state.actors[ninja].ai, Some(Ai::Hostile { .. })));
        assert_eq!(game.state.actors[ninja].pos, cell);
        assert!(game.messages().contains_text("The Ninja is no longer confused."));
    }

    #[test]
    fn confusing_yourself_is_refused() {
        let mut game = arena_game();
        let smoke = give_item(&mut game, ItemKind::ConfusionScroll);
        let here = game.state.player().pos;

        let refused =
            game.handle_player_action(Action::UseItem { item: smoke, target: Some(here) });

        assert_eq!(refused, Err(Impossible::new("You cannot confuse yourself!")));
    }

    #[test]
    fn fireball_into_an_empty_area_keeps_the_ability_ready() {
        let mut game = arena_game();
        let bomb = give_item(&mut game, ItemKind::FireballScroll);
        let supernova = give_item(&mut game, ItemKind::FireballAbility);
        let origin = game.state.player().pos;

        // Radius 3 around a tile 6 away leaves the player outside the blast.
        let target = Some(origin.offset(-6, 0));
        let refused = game.handle_player_action(Action::UseItem { item: bomb, target });
        assert_eq!(refused, Err(Impossible::new("There are no targets in the radius.")));
        assert!(game.state.items.contains_key(bomb));

        let refused =
            game.handle_player_action(Action::UseItem {
                item: supernova,
                target: Some(origin.offset(-7, 0)),
            });
        assert_eq!(refused, Err(Impossible::new("There are no targets in the radius.")));
        let ability = game.state.items[supernova].ability.as_ref().expect("ability item");
        assert_eq!(ability.current_cooldown(), 0);
        assert_eq!(game.state.turn, 0);
    }

    #[test]
    fn fireball_hits_everyone_in_the_blast_including_the_user() {
        let mut game = arena_game();
        let bomb = give_item(&mut game, ItemKind::FireballScroll);
        let origin = game.state.player().pos;
        let near = add_monster(&mut game, ActorKind::Ashigaru, origin.offset(2, 0));
        let far = add_monster(&mut game, ActorKind::Ashigaru, origin.offset(6, 0));
        freeze_monsters(&mut game);

        game.handle_player_action(Action::UseItem { item: bomb, target: Some(origin.offset(1, 0)) })
            .expect("targets are in the radius");

        assert!(!game.state.actors[near].is_alive());
        assert!(game.state.actors[far].is_alive());
        assert_eq!(game.state.player().fighter.hp(), 18);
        assert!(
            game.messages()
                .contains_text("The Player is engulfed in a fiery explosion, taking 12 damage!")
        );
        assert!(!game.state.items.contains_key(bomb));
    }

    #[test]
    fn lightning_ability_without_targets_passes_the_turn_without_cooldown() {
        let mut game = arena_game();
        let comet = give_item(&mut game, ItemKind::LightningAbility);

        let report = game
            .handle_player_action(Action::UseItem { item: comet, target: None })
            .expect("silent no-op");

        assert_eq!(report.turn, 1);
        let ability = game.state.items[comet].ability.as_ref().expect("ability item");
        assert_eq!(ability.current_cooldown(), 0);
    }

    #[test]
    fn lightning_scroll_without_targets_is_refused() {
        let mut game = arena_game();
        let shock = give_item(&mut game, ItemKind::LightningScroll);
        assert_eq!(
            game.handle_player_action(Action::UseItem { item: shock, target: None }),
            Err(Impossible::new("No enemy is close enough to strike."))
        );
        assert!(game.state.items.contains_key(shock));
    }

    #[test]
    fn lightning_picks_the_nearest_visible_enemy() {
        let mut game = arena_game();
        let shock = give_item(&mut game, ItemKind::LightningScroll);
        let origin = game.state.player().pos;
        let close = add_monster(&mut game, ActorKind::Ronin, origin.offset(3, 0));
        let farther = add_monster(&mut game, ActorKind::Ronin, origin.offset(-4, 0));
        freeze_monsters(&mut game);

        game.handle_player_action(Action::UseItem { item: shock, target: None })
            .expect("enemy in range");

        assert_eq!(game.state.actors[close].fighter.hp(), 10);
        assert_eq!(game.state.actors[farther].fighter.hp(), 30);
    }

    #[test]
    fn ability_cooldown_blocks_reuse_until_it_expires() {
        let mut game = arena_game();
        let gourd = give_item(&mut game, ItemKind::HealingAbility);
        game.state.player_mut().fighter.set_hp(10);
        let cooldown =
            |game: &Game| game.state.items[gourd].ability.as_ref().map(|a| a.current_cooldown());

        game.handle_player_action(Action::UseItem { item: gourd, target: None }).expect("hurt");
        assert_eq!(game.state.player().fighter.hp(), 15);
        // The activation turn already counts toward the cooldown.
        assert_eq!(cooldown(&game), Some(4));
        assert_eq!(
            game.handle_player_action(Action::UseItem { item: gourd, target: None }),
            Err(Impossible::new("Gourd of Vitality is still cooling down. (4)"))
        );

        for _ in 0..3 {
            game.handle_player_action(Action::Wait).expect("waiting is allowed");
        }
        assert_eq!(cooldown(&game), Some(1));
        assert!(!game.messages().contains_text("Gourd of Vitality is ready to use again."));

        game.handle_player_action(Action::Wait).expect("waiting is allowed");
        assert!(game.messages().contains_text("Gourd of Vitality is ready to use again."));
        game.handle_player_action(Action::UseItem { item: gourd, target: None })
            .expect("ready again");
        assert_eq!(game.state.player().fighter.hp(), 20);
    }

    #[test]
    fn bow_can_fire_again_on_the_following_turn() {
        let mut game = arena_game();
        let bow = give_item(&mut game, ItemKind::Bow);
        let origin = game.state.player().pos;
        let bushi = add_monster(&mut game, ActorKind::Bushi, origin.offset(4, 0));
        freeze_monsters(&mut game);
        let aim = Some(origin.offset(4, 0));

        game.handle_player_action(Action::UseItem { item: bow, target: aim }).expect("in range");
        assert_eq!(game.state.actors[bushi].fighter.hp(), 25);
        assert!(game.messages().contains_text("The Bow strikes the Bushi for 15 damage!"));
        assert!(game.messages().contains_text("Bow is ready to use again."));

        game.handle_player_action(Action::UseItem { item: bow, target: aim }).expect("ready again");
        assert_eq!(game.state.actors[bushi].fighter.hp(), 10);
    }

    #[test]
    fn ranged_attacks_respect_maximum_range() {
        let mut game = arena_game();
        let shuriken = give_item(&mut game, ItemKind::Shuriken);
        let origin = game.state.player().pos;
        add_monster(&mut game, ActorKind::Ninja, origin.offset(5, 0));
        freeze_monsters(&mut game);

        assert_eq!(
            game.handle_player_action(Action::UseItem {
                item: shuriken,
                target: Some(origin.offset(5, 0)),
            }),
            Err(Impossible::new("The target is out of range."))
        );
    }

    #[test]
    fn beam_burns_every_actor_on_the_ray_until_a_wall() {
        let mut game = arena_game();
        let flare = give_item(&mut game, ItemKind::SolarFlare);
        let origin = game.state.player().pos;
        let first = add_monster(&mut game, ActorKind::Ashigaru, origin.offset(1, 0));
        let second = add_monster(&mut game, ActorKind::Ashigaru, origin.offset(3, 0));
        let beyond_wall = add_monster(&mut game, ActorKind::Ashigaru, origin.offset(6, 0));
        freeze_monsters(&mut game);
        game.state.map.set_tile(origin.offset(5, 0), TileKind::Wall);

        game.handle_player_action(Action::UseItem {
            item: flare,
            target: Some(origin.offset(1, 0)),
        })
            .expect("targets on the ray");

        assert!(!game.state.actors[first].is_alive());
        assert!(!game.state.actors[second].is_alive());
        assert!(game.state.actors[beyond_wall].is_alive());
        assert!(game.messages().contains_text("The Ruby Flare sears the Ashigaru for 30 damage!"));
    }

    #[test]
    fn chain_hops_between_nearby_enemies_once_each() {
        let mut game = arena_game();
        let rage = give_item(&mut game, ItemKind::StarRage);
        let origin = game.state.player().pos;
        let a = add_monster(&mut game, ActorKind::Bushi, origin.offset(2, 0));
        let b = add_monster(&mut game, ActorKind::Bushi, origin.offset(6, 0));
        let out_of_reach = add_monster(&mut game, ActorKind::Bushi, Pos::new(1, 1));
        freeze_monsters(&mut game);

        game.handle_player_action(Action::UseItem { item: rage, target: None })
            .expect("enemy within radius");

        assert_eq!(game.state.actors[a].fighter.hp(), 20);
        assert_eq!(game.state.actors[b].fighter.hp(), 20);
        assert_eq!(game.state.actors[out_of_reach].fighter.hp(), 40);
    }

    #[test]
    fn beam_path_extends_past_the_aim_point() {
        let path: Vec<Pos> = beam_path(Pos::new(0, 0), Pos::new(1, 0), 4).collect();
        assert_eq!(path, vec![Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0), Pos::new(4, 0)]);
    }
}
