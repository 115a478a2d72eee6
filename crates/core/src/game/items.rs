//! Inventory-side item actions: use, equip, and drop.
//! This module exists to keep item bookkeeping separate from effect resolution.
//! It does not own targeting rules or damage application.

use super::abilities::{EffectOutcome, EffectSource};
use super::*;
use crate::components::EquipChange;

impl Game {
    fn ensure_carried(&self, actor_id: EntityId, item_id: ItemId) -> ActionResult {
        let carried = self
            .state
            .items
            .get(item_id)
            .is_some_and(|item| item.location == ItemLocation::Carried(actor_id));
        if !carried || !self.state.actors[actor_id].inventory.contains(item_id) {
            return Err(Impossible::new("You do not have that item."));
        }
        Ok(())
    }

    pub(super) fn use_item(
        &mut self,
        actor_id: EntityId,
        item_id: ItemId,
        target: Option<Pos>,
    ) -> ActionResult {
        self.ensure_carried(actor_id, item_id)?;
        let item = &self.state.items[item_id];
        let name = item.name.clone();

        if let Some(consumable) = item.consumable {
            let effect = consumable.effect;
            self.resolve_effect(actor_id, &name, effect, target, EffectSource::Consumable)?;
            self.state.actors[actor_id].inventory.remove(item_id);
            self.state.items.remove(item_id);
            return Ok(());
        }

        if let Some(ability) = &item.ability {
            ability.ensure_ready(&name)?;
            let effect = ability.effect;
            let outcome =
                self.resolve_effect(actor_id, &name, effect, target, EffectSource::Ability)?;
            if outcome == EffectOutcome::Applied
                && let Some(ability) = self.state.items[item_id].ability.as_mut()
            {
                ability.start_cooldown();
            }
            return Ok(());
        }

        if item.equippable.is_some() {
            return self.equip(actor_id, item_id, true);
        }
        Err(Impossible::new(format!("The {name} cannot be used.")))
    }

    /// Toggles `item_id` on the actor. `announce` controls the equip/remove log lines.
    pub(super) fn equip(
        &mut self,
        actor_id: EntityId,
        item_id: ItemId,
        announce: bool,
    ) -> ActionResult {
        self.ensure_carried(actor_id, item_id)?;
        let Some(equippable) = self.state.items[item_id].equippable else {
            return Err(Impossible::new(format!(
                "The {} cannot be equipped.",
                self.state.items[item_id].name
            )));
        };

        let GameState { actors, items, messages, .. } = &mut self.state;
        let hand_of =
            |worn: ItemId| items.get(worn).and_then(|item| item.equippable).map(|e| e.hand);
        let change = actors[actor_id].equipment.toggle(item_id, equippable, hand_of)?;
        if !announce {
            return Ok(());
        }
        match change {
            EquipChange::Equipped { item, replaced } => {
                if let Some(old) = replaced {
                    messages.add(format!("You remove the {}.", items[old].name), MessageTone::Info);
                }
                messages.add(format!("You equip the {}.", items[item].name), MessageTone::Info);
            }
            EquipChange::Unequipped { item } => {
                messages.add(format!("You remove the {}.", items[item].name), MessageTone::Info);
            }
        }
        Ok(())
    }

    pub(super) fn drop_item(&mut self, actor_id: EntityId, item_id: ItemId) -> ActionResult {
        self.ensure_carried(actor_id, item_id)?;
        let actor = &mut self.state.actors[actor_id];
        let pos = actor.pos;
        let was_worn = actor.equipment.unequip(item_id);
        actor.inventory.remove(item_id);

        let item = &mut self.state.items[item_id];
        item.location = ItemLocation::OnMap(pos);
        if was_worn {
            self.state.messages.add(format!("You remove the {}.", item.name), MessageTone::Info);
        }
        self.state.messages.add(format!("You dropped the {}.", item.name), MessageTone::Info);
        Ok(())
    }
}
