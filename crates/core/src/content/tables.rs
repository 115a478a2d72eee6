//! Per-floor difficulty data: spawn caps and weighted monster/item chances.
//!
//! Each chance table lists `(floor threshold, entries)` in ascending threshold order.
//! Later thresholds override the weight of templates seen earlier; a weight of 0
//! retires a template from deeper floors.

use crate::types::{ActorKind, ItemKind};

/// `(floor threshold, value)` pairs in ascending threshold order.
pub type FloorValueTable = &'static [(u32, u32)];

pub type FloorChanceTable<T> = &'static [(u32, &'static [(T, u32)])];

pub const MAX_ITEMS_BY_FLOOR: FloorValueTable =
    &[(1, 2), (4, 3), (6, 4), (8, 5), (10, 6), (12, 7), (14, 8)];

pub const MAX_MONSTERS_BY_FLOOR: FloorValueTable =
    &[(1, 2), (4, 4), (6, 6), (8, 8), (10, 10), (12, 12), (14, 14)];

pub const ITEM_CHANCES: FloorChanceTable<ItemKind> = &[
    (1, &[
        (ItemKind::HealthPotion, 35),
        (ItemKind::ConfusionScroll, 10),
        (ItemKind::LightningScroll, 10),
        (ItemKind::FireballScroll, 5),
        (ItemKind::Tonfa, 10),
        (ItemKind::Dagger, 10),
        (ItemKind::Nunchucks, 5),
        (ItemKind::Wakizashi, 5),
    ]),
    (2, &[(ItemKind::Shuriken, 10)]),
    (3, &[(ItemKind::Kunai, 5), (ItemKind::Buckler, 5), (ItemKind::LeatherArmor, 5)]),
    (4, &[
        (ItemKind::HealthPotion, 20),
        (ItemKind::ConfusionScroll, 5),
        (ItemKind::ConfusionAbility, 2),
        (ItemKind::Tonfa, 0),
        (ItemKind::Dagger, 0),
        (ItemKind::Shuko, 5),
        (ItemKind::Katana, 5),
        (ItemKind::Bo, 5),
        (ItemKind::Nunchucks, 10),
        (ItemKind::Wakizashi, 10),
        (ItemKind::Shuriken, 0),
        (ItemKind::Kunai, 10),
        (ItemKind::Buckler, 10),
        (ItemKind::Targe, 5),
        (ItemKind::LeatherArmor, 10),
        (ItemKind::ChainMail, 2),
    ]),
    (5, &[
        (ItemKind::ConfusionScroll, 0),
        (ItemKind::ConfusionAbility, 5),
        (ItemKind::LightningScroll, 5),
        (ItemKind::LightningAbility, 2),
        (ItemKind::Shuko, 10),
        (ItemKind::Katana, 10),
        (ItemKind::Bo, 10),
        (ItemKind::Nunchucks, 5),
        (ItemKind::Wakizashi, 5),
        (ItemKind::Kunai, 5),
        (ItemKind::Buckler, 5),
        (ItemKind::Targe, 10),
        (ItemKind::LeatherArmor, 0),
        (ItemKind::ChainMail, 10),
        (ItemKind::LamellarArmor, 5),
    ]),
    (6, &[
        (ItemKind::HealthPotion, 10),
        (ItemKind::ConfusionAbility, 10),
        (ItemKind::LightningScroll, 0),
        (ItemKind::LightningAbility, 5),
        (ItemKind::FireballScroll, 2),
        (ItemKind::FireballAbility, 5),
        (ItemKind::Nunchucks, 0),
        (ItemKind::Wakizashi, 0),
        (ItemKind::Kunai, 0),
        (ItemKind::Buckler, 0),
        (ItemKind::ChainMail, 5),
        (ItemKind::LamellarArmor, 10),
        (ItemKind::TatamiDo, 2),
    ]),
    (7, &[
        (ItemKind::HealthPotion, 5),
        (ItemKind::HealingAbility, 2),
        (ItemKind::ConfusionAbility, 5),
        (ItemKind::LightningAbility, 10),
        (ItemKind::Shuko, 5),
        (ItemKind::Katana, 5),
        (ItemKind::Bo, 5),
        (ItemKind::Targe, 5),
        (ItemKind::Nagamaki, 2),
        (ItemKind::Tekko, 2),
        (ItemKind::HeaterShield, 2),
        (ItemKind::ChainMail, 0),
        (ItemKind::LamellarArmor, 5),
        (ItemKind::TatamiDo, 10),
        (ItemKind::OYoroi, 2),
    ]),
    (8, &[
        (ItemKind::HealthPotion, 0),
        (ItemKind::HealingAbility, 10),
        (ItemKind::ConfusionAbility, 0),
        (ItemKind::LightningAbility, 5),
        (ItemKind::FireballAbility, 10),
        (ItemKind::Shuko, 0),
        (ItemKind::Katana, 0),
        (ItemKind::Bo, 0),
        (ItemKind::Targe, 0),
        (ItemKind::Naginata, 1),
        (ItemKind::Nagamaki, 5),
        (ItemKind::Tekko, 5),
        (ItemKind::HeaterShield, 5),
        (ItemKind::LamellarArmor, 0),
        (ItemKind::TatamiDo, 5),
        (ItemKind::OYoroi, 10),
        (ItemKind::OniMail, 2),
        (ItemKind::StarRage, 5),
    ]),
    (9, &[
        (ItemKind::HealingAbility, 15),
        (ItemKind::LightningAbility, 0),
        (ItemKind::FireballAbility, 5),
        (ItemKind::Naginata, 5),
        (ItemKind::Nagamaki, 0),
        (ItemKind::Tekko, 0),
        (ItemKind::HeaterShield, 0),
        (ItemKind::TowerShield, 2),
        (ItemKind::TatamiDo, 0),
        (ItemKind::OYoroi, 5),
        (ItemKind::OniMail, 10),
        (ItemKind::StarRage, 10),
        (ItemKind::SolarFlare, 5),
    ]),
    (10, &[
        (ItemKind::HealingAbility, 5),
        (ItemKind::FireballAbility, 0),
        (ItemKind::Naginata, 10),
        (ItemKind::TowerShield, 5),
        (ItemKind::OYoroi, 0),
        (ItemKind::OniMail, 5),
        (ItemKind::StarRage, 5),
        (ItemKind::SolarFlare, 10),
        (ItemKind::StarForgedMail, 2),
        (ItemKind::BlackHole, 1),
    ]),
    (11, &[
        (ItemKind::HealingAbility, 0),
        (ItemKind::Naginata, 5),
        (ItemKind::TowerShield, 10),
        (ItemKind::OniMail, 0),
        (ItemKind::StarRage, 0),
        (ItemKind::SolarFlare, 5),
        (ItemKind::StarForgedMail, 5),
        (ItemKind::BlackHole, 5),
    ]),
    (12, &[
        (ItemKind::Naginata, 0),
        (ItemKind::TowerShield, 5),
        (ItemKind::SolarFlare, 0),
        (ItemKind::StarForgedMail, 10),
        (ItemKind::BlackHole, 10),
    ]),
    (13, &[(ItemKind::TowerShield, 0), (ItemKind::StarForgedMail, 5), (ItemKind::BlackHole, 5)]),
    (14, &[(ItemKind::StarForgedMail, 0), (ItemKind::BlackHole, 0)]),
];

pub const ENEMY_CHANCES: FloorChanceTable<ActorKind> = &[
    (1, &[(ActorKind::Ashigaru, 80), (ActorKind::Ninja, 20)]),
    (2, &[(ActorKind::Ashigaru, 70), (ActorKind::Ninja, 30)]),
    (3, &[(ActorKind::Ashigaru, 60), (ActorKind::Ninja, 40), (ActorKind::Shinobi, 10)]),
    (4, &[(ActorKind::Ninja, 50), (ActorKind::Shinobi, 30), (ActorKind::OnnaBugeisha, 20)]),
    (5, &[(ActorKind::Ninja, 40), (ActorKind::Shinobi, 40), (ActorKind::OnnaBugeisha, 30)]),
    (6, &[(ActorKind::Shinobi, 40), (ActorKind::OnnaBugeisha, 40), (ActorKind::Samurai, 20)]),
    (7, &[(ActorKind::Shinobi, 30), (ActorKind::OnnaBugeisha, 30), (ActorKind::Samurai, 30)]),
    (8, &[(ActorKind::OnnaBugeisha, 30), (ActorKind::Samurai, 30), (ActorKind::Ronin, 5)]),
    (9, &[(ActorKind::OnnaBugeisha, 20), (ActorKind::Samurai, 20), (ActorKind::Ronin, 10)]),
    (10, &[(ActorKind::Samurai, 10), (ActorKind::Ronin, 20), (ActorKind::Sohei, 5)]),
    (11, &[(ActorKind::Samurai, 5), (ActorKind::Ronin, 15), (ActorKind::Sohei, 10)]),
    (12, &[(ActorKind::Ronin, 10), (ActorKind::Sohei, 15), (ActorKind::Bushi, 5)]),
    (13, &[(ActorKind::Ronin, 5), (ActorKind::Sohei, 10), (ActorKind::Bushi, 10)]),
    (14, &[(ActorKind::Sohei, 5), (ActorKind::Bushi, 15)]),
];
