use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::components::{
    Ability, Ai, Consumable, Equipment, Equippable, Fighter, Inventory, Level, Targeting,
};
use crate::messages::MessageLog;
use crate::types::*;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub pos: Pos,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub fighter: Fighter,
    /// `None` once the actor is dead, and always for the player.
    pub ai: Option<Ai>,
    pub inventory: Inventory,
    pub equipment: Equipment,
    pub level: Level,
}

impl Actor {
    pub fn is_alive(&self) -> bool {
        self.fighter.is_alive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemLocation {
    OnMap(Pos),
    Carried(EntityId),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub location: ItemLocation,
    pub consumable: Option<Consumable>,
    pub equippable: Option<Equippable>,
    pub ability: Option<Ability>,
}

impl Item {
    pub fn targeting(&self) -> Targeting {
        if let Some(consumable) = &self.consumable {
            return consumable.effect.targeting();
        }
        if let Some(ability) = &self.ability {
            return ability.effect.targeting();
        }
        Targeting::None
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameMap {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
    pub visible: Vec<bool>,
    pub explored: Vec<bool>,
    pub downstairs: Option<Pos>,
}

impl GameMap {
    /// Solid rock everywhere; generation carves floors into it.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
            downstairs: None,
        }
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile_at(pos).walkable()
    }

    pub fn is_transparent(&self, pos: Pos) -> bool {
        self.tile_at(pos).transparent()
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    pub fn set_visible(&mut self, pos: Pos, visible: bool) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = visible;
    }

    pub fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    /// Folds the current visible set into the explored memory.
    pub fn remember_visible(&mut self) {
        for (explored, &visible) in self.explored.iter_mut().zip(&self.visible) {
            *explored |= visible;
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos::new(x as i32, y as i32)))
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub map: GameMap,
    pub actors: SlotMap<EntityId, Actor>,
    pub items: SlotMap<ItemId, Item>,
    pub player_id: EntityId,
    pub floor_number: u32,
    /// Completed player turns.
    pub turn: u64,
    pub messages: MessageLog,
}

impl GameState {
    pub fn add_actor(&mut self, actor: Actor) -> EntityId {
        let id = self.actors.insert(actor);
        self.actors[id].id = id;
        id
    }

    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = self.items.insert(item);
        self.items[id].id = id;
        id
    }

    pub fn player(&self) -> &Actor {
        self.actors.get(self.player_id).expect("player should exist")
    }

    pub fn player_mut(&mut self) -> &mut Actor {
        self.actors.get_mut(self.player_id).expect("player should exist")
    }

    pub fn living_actors(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.actors.values().filter(|actor| actor.is_alive())
    }

    pub fn blocking_actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors.values().find(|actor| actor.blocks_movement && actor.pos == pos).map(|a| a.id)
    }

    pub fn living_actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.living_actors().find(|actor| actor.pos == pos).map(|actor| actor.id)
    }

    pub fn items_on_map_at(&self, pos: Pos) -> impl Iterator<Item = &Item> + '_ {
        self.items.values().filter(move |item| item.location == ItemLocation::OnMap(pos))
    }

    pub fn power(&self, actor_id: EntityId) -> i32 {
        let actor = &self.actors[actor_id];
        actor.fighter.base_power + actor.equipment.power_bonus(|id| self.equippable(id))
    }

    pub fn defense(&self, actor_id: EntityId) -> i32 {
        let actor = &self.actors[actor_id];
        actor.fighter.base_defense + actor.equipment.defense_bonus(|id| self.equippable(id))
    }

    fn equippable(&self, item_id: ItemId) -> Option<Equippable> {
        self.items.get(item_id).and_then(|item| item.equippable)
    }

    /// Checks the cross-entity rules every turn must preserve; returns the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut occupied = BTreeSet::new();
        for actor in self.actors.values() {
            let hp = actor.fighter.hp();
            if hp < 0 || hp > actor.fighter.max_hp {
                let max_hp = actor.fighter.max_hp;
                return Err(format!("{} has hp {hp} outside 0..={max_hp}", actor.name));
            }
            if !self.map.is_walkable(actor.pos) {
                return Err(format!("{} stands inside a wall at {:?}", actor.name, actor.pos));
            }
            if actor.blocks_movement && !occupied.insert(actor.pos) {
                return Err(format!("two blocking actors share {:?}", actor.pos));
            }
            if actor.inventory.len() > actor.inventory.capacity {
                let capacity = actor.inventory.capacity;
                return Err(format!("{} carries more than {capacity} items", actor.name));
            }
            for item_id in actor.inventory.items() {
                match self.items.get(*item_id) {
                    Some(item) if item.location == ItemLocation::Carried(actor.id) => {}
                    _ => return Err(format!("{} lists an item it does not hold", actor.name)),
                }
            }
            let stray = actor.equipment.equipped().find(|&id| !actor.inventory.contains(id));
            if let Some(worn) = stray {
                return Err(format!("{} wears {worn:?} outside its inventory", actor.name));
            }
        }
        for item in self.items.values() {
            if let Some(ability) = &item.ability
                && ability.current_cooldown() > ability.cooldown_turns
            {
                return Err(format!("{} cooldown exceeds {}", item.name, ability.cooldown_turns));
            }
            match item.location {
                ItemLocation::OnMap(pos) if !self.map.in_bounds(pos) => {
                    return Err(format!("{} lies outside the map at {pos:?}", item.name));
                }
                ItemLocation::Carried(owner)
                    if !self
                        .actors
                        .get(owner)
                        .is_some_and(|actor| actor.inventory.contains(item.id)) =>
                {
                    return Err(format!(
                        "{} is carried by an actor that does not list it",
                        item.name
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
