//! Action vocabulary and dispatch for any actor's turn.
//! This module exists so player input and monster behavior resolve through one path.
//! It does not own item effects or combat math.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Attack whatever stands at the offset, or step there when nothing does.
    Bump { dx: i32, dy: i32 },
    Move { dx: i32, dy: i32 },
    Melee { dx: i32, dy: i32 },
    PickUp,
    Drop { item: ItemId },
    /// `target` is required when the item's targeting is `Single` or `Area`.
    UseItem { item: ItemId, target: Option<Pos> },
    Equip { item: ItemId },
    Wait,
    TakeStairs,
}

impl Game {
    pub(super) fn perform(&mut self, actor_id: EntityId, action: Action) -> ActionResult {
        match action {
            Action::Bump { dx, dy } => self.bump(actor_id, dx, dy),
            Action::Move { dx, dy } => self.move_actor(actor_id, dx, dy),
            Action::Melee { dx, dy } => self.melee(actor_id, dx, dy),
            Action::PickUp => self.pick_up(actor_id),
            Action::Drop { item } => self.drop_item(actor_id, item),
            Action::UseItem { item, target } => self.use_item(actor_id, item, target),
            Action::Equip { item } => self.equip(actor_id, item, true),
            Action::Wait => Ok(()),
            Action::TakeStairs => self.take_stairs(actor_id),
        }
    }

    pub(super) fn bump(&mut self, actor_id: EntityId, dx: i32, dy: i32) -> ActionResult {
        let dest = self.state.actors[actor_id].pos.offset(dx, dy);
        if self.melee_target_at(actor_id, dest).is_some() {
            self.melee(actor_id, dx, dy)
        } else {
            self.move_actor(actor_id, dx, dy)
        }
    }

    pub(super) fn move_actor(&mut self, actor_id: EntityId, dx: i32, dy: i32) -> ActionResult {
        let dest = self.state.actors[actor_id].pos.offset(dx, dy);
        if !self.state.map.in_bounds(dest)
            || !self.state.map.is_walkable(dest)
            || self.state.blocking_actor_at(dest).is_some()
        {
            return Err(Impossible::new("That way is blocked."));
        }
        self.state.actors[actor_id].pos = dest;
        Ok(())
    }

    pub(super) fn melee_target_at(&self, actor_id: EntityId, pos: Pos) -> Option<EntityId> {
        self.state.living_actor_at(pos).filter(|&target| target != actor_id)
    }

    fn pick_up(&mut self, actor_id: EntityId) -> ActionResult {
        let pos = self.state.actors[actor_id].pos;
        let Some(item_id) = self.state.items_on_map_at(pos).map(|item| item.id).next() else {
            return Err(Impossible::new("There is nothing here to pick up."));
        };

        self.state.actors[actor_id].inventory.add(item_id)?;
        let item = &mut self.state.items[item_id];
        item.location = ItemLocation::Carried(actor_id);
        let text = format!("You picked up the {}!", item.name);
        self.state.messages.add(text, MessageTone::Info);
        Ok(())
    }

    fn take_stairs(&mut self, actor_id: EntityId) -> ActionResult {
        let pos = self.state.actors[actor_id].pos;
        if actor_id != self.state.player_id || self.state.map.downstairs != Some(pos) {
            return Err(Impossible::new("There are no stairs here."));
        }
        self.descend()?;
        self.state.messages.add("You descend the staircase.", MessageTone::Descend);
        Ok(())
    }
}
