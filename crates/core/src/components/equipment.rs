use serde::{Deserialize, Serialize};

use crate::error::{ActionResult, Impossible};
use crate::types::ItemId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Shield,
    Accessory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandType {
    OneHanded,
    TwoHanded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equippable {
    pub slot: EquipmentSlot,
    pub hand: HandType,
    pub power_bonus: i32,
    pub defense_bonus: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquipChange {
    Equipped { item: ItemId, replaced: Option<ItemId> },
    Unequipped { item: ItemId },
}

/// Worn items. Every equipped item must also sit in the owner's inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemId>,
    pub armor: Option<ItemId>,
    pub shield: Option<ItemId>,
    pub accessory: Option<ItemId>,
}

impl Equipment {
    pub fn get(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Shield => self.shield,
            EquipmentSlot::Accessory => self.accessory,
        }
    }

    fn slot_mut(&mut self, slot: EquipmentSlot) -> &mut Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Shield => &mut self.shield,
            EquipmentSlot::Accessory => &mut self.accessory,
        }
    }

    pub fn equipped(&self) -> impl Iterator<Item = ItemId> + '_ {
        [self.weapon, self.armor, self.shield, self.accessory].into_iter().flatten()
    }

    pub fn is_equipped(&self, item: ItemId) -> bool {
        self.equipped().any(|equipped| equipped == item)
    }

    /// Clears whichever slot holds `item`; returns false when it was not worn.
    pub fn unequip(&mut self, item: ItemId) -> bool {
        for slot in
            [
                EquipmentSlot::Weapon,
                EquipmentSlot::Armor,
                EquipmentSlot::Shield,
                EquipmentSlot::Accessory,
            ]
        {
            let worn = self.slot_mut(slot);
            if *worn == Some(item) {
                *worn = None;
                return true;
            }
        }
        false
    }

    pub fn power_bonus(&self, lookup: impl Fn(ItemId) -> Option<Equippable>) -> i32 {
        self.equipped().filter_map(&lookup).map(|equippable| equippable.power_bonus).sum()
    }

    pub fn defense_bonus(&self, lookup: impl Fn(ItemId) -> Option<Equippable>) -> i32 {
        self.equipped().filter_map(&lookup).map(|equippable| equippable.defense_bonus).sum()
    }

    /// Equips `item`, or takes it off when it already occupies its slot.
    ///
    /// An occupied slot is emptied first and reported as `replaced`. A two-handed weapon
    /// and a shield cannot be worn together, nor a two-handed shield and a weapon.
    /// `hand_of` resolves the hand type of items already worn.
    pub fn toggle(
        &mut self,
        item: ItemId,
        equippable: Equippable,
        hand_of: impl Fn(ItemId) -> Option<HandType>,
    ) -> ActionResult<EquipChange> {
        let slot = equippable.slot;
        if self.get(slot) == Some(item) {
            *self.slot_mut(slot) = None;
            return Ok(EquipChange::Unequipped { item });
        }

        match slot {
            EquipmentSlot::Weapon => {
                if let Some(shield) = self.shield {
                    if hand_of(shield) == Some(HandType::TwoHanded) {
                        return Err(Impossible::new(
                            "You cannot equip a weapon while wielding a two-handed shield.",
                        ));
                    }
                    if equippable.hand == HandType::TwoHanded {
                        return Err(Impossible::new(
                            "You cannot equip a two-handed weapon while wielding a shield.",
                        ));
                    }
                }
            }
            EquipmentSlot::Shield => {
                if let Some(weapon) = self.weapon {
                    if hand_of(weapon) == Some(HandType::TwoHanded) {
                        return Err(Impossible::new(
                            "You cannot equip a shield while wielding a two-handed weapon.",
                        ));
                    }
                    if equippable.hand == HandType::TwoHanded {
                        return Err(Impossible::new(
                            "You cannot equip a two-handed shield while wielding a weapon.",
                        ));
                    }
                }
            }
            EquipmentSlot::Armor | EquipmentSlot::Accessory => {}
        }

        let replaced = self.slot_mut(slot).replace(item);
        Ok(EquipChange::Equipped { item, replaced })
    }
}
