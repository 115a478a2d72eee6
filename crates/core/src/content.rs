//! Static monster and item catalog, plus factories that stamp out fresh entities.

pub mod tables;

use crate::components::{
    Ability, Ai, Consumable, Effect, Equipment, EquipmentSlot, Equippable, Fighter, HandType,
    Inventory, Level,
};
use crate::config::PlayerConfig;
use crate::state::{Actor, Item, ItemLocation};
use crate::types::*;

pub struct ActorTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub color: Rgb,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    pub xp_given: u32,
}

const MONSTER_GREEN: Rgb = Rgb(0, 127, 0);

pub fn actor_template(kind: ActorKind) -> ActorTemplate {
    let (name, glyph, color, hp, defense, power, xp_given) = match kind {
        ActorKind::Player => ("Player", '@', Rgb(255, 255, 255), 30, 2, 5, 0),
        ActorKind::Ashigaru => ("Ashigaru", 'a', Rgb(63, 127, 63), 10, 0, 3, 35),
        ActorKind::Ninja => ("Ninja", 'n', MONSTER_GREEN, 16, 1, 4, 50),
        ActorKind::Shinobi => ("Shinobi", 's', MONSTER_GREEN, 16, 1, 4, 50),
        ActorKind::OnnaBugeisha => ("Onna-bugeisha", 'w', MONSTER_GREEN, 25, 4, 8, 70),
        ActorKind::Samurai => ("Samurai", 's', MONSTER_GREEN, 25, 4, 8, 70),
        ActorKind::Ronin => ("Ronin", 'R', MONSTER_GREEN, 30, 3, 10, 100),
        ActorKind::Sohei => ("Sohei", 'S', MONSTER_GREEN, 25, 2, 10, 100),
        ActorKind::Bushi => ("Bushi", 'B', MONSTER_GREEN, 40, 4, 15, 150),
    };
    ActorTemplate { name, glyph, color, hp, defense, power, xp_given }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemBody {
    Consumable(Effect),
    Equippable(Equippable),
    Ability { effect: Effect, cooldown_turns: u32 },
}

pub struct ItemTemplate {
    pub name: &'static str,
    pub glyph: char,
    pub color: Rgb,
    pub body: ItemBody,
}

const WEAPON_BLUE: Rgb = Rgb(0, 191, 255);
const LEATHER_BROWN: Rgb = Rgb(139, 69, 19);

fn weapon(hand: HandType, power_bonus: i32, defense_bonus: i32) -> ItemBody {
    ItemBody::Equippable(Equippable {
        slot: EquipmentSlot::Weapon,
        hand,
        power_bonus,
        defense_bonus,
    })
}

fn shield(hand: HandType, defense_bonus: i32) -> ItemBody {
    ItemBody::Equippable(Equippable {
        slot: EquipmentSlot::Shield,
        hand,
        power_bonus: 0,
        defense_bonus,
    })
}

fn armor(defense_bonus: i32) -> ItemBody {
    ItemBody::Equippable(Equippable {
        slot: EquipmentSlot::Armor,
        hand: HandType::OneHanded,
        power_bonus: 0,
        defense_bonus,
    })
}

fn ability(effect: Effect, cooldown_turns: u32) -> ItemBody {
    ItemBody::Ability { effect, cooldown_turns }
}

pub fn item_template(kind: ItemKind) -> ItemTemplate {
    use HandType::{OneHanded, TwoHanded};

    let (name, glyph, color, body) = match kind {
        ItemKind::HealthPotion => {
            let effect = Effect::Healing { amount: 4 };
            ("Healing Cup", '!', Rgb(0, 255, 175), ItemBody::Consumable(effect))
        }
        ItemKind::ConfusionScroll => {
            let effect = Effect::Confusion { turns: 10 };
            ("Smoke Screen", '~', Rgb(207, 63, 255), ItemBody::Consumable(effect))
        }
        ItemKind::FireballScroll => (
            "Fire Bomb",
            '~',
            Rgb(255, 125, 0),
            ItemBody::Consumable(Effect::Fireball { damage: 12, radius: 3 }),
        ),
        ItemKind::LightningScroll => (
            "Shockwave",
            '~',
            Rgb(255, 255, 0),
            ItemBody::Consumable(Effect::Lightning { damage: 20, maximum_range: 5 }),
        ),

        ItemKind::WrappedFists => ("Wrapped Fists", '/', WEAPON_BLUE, weapon(TwoHanded, 1, 0)),
        ItemKind::Tonfa => ("Tonfa", '/', WEAPON_BLUE, weapon(TwoHanded, 2, 2)),
        ItemKind::Nunchucks => ("Nunchucks", '/', WEAPON_BLUE, weapon(TwoHanded, 3, 2)),
        ItemKind::Shuko => ("Shuko", '/', WEAPON_BLUE, weapon(TwoHanded, 4, 0)),
        ItemKind::Tekko => ("Tekko", '/', WEAPON_BLUE, weapon(TwoHanded, 5, 0)),
        ItemKind::Dagger => ("Tanto", '/', WEAPON_BLUE, weapon(OneHanded, 2, 0)),
        ItemKind::Wakizashi => ("Wakizashi", '/', WEAPON_BLUE, weapon(OneHanded, 3, 0)),
        ItemKind::Katana => ("Katana", '/', WEAPON_BLUE, weapon(TwoHanded, 4, 1)),
        ItemKind::Nagamaki => ("Nagamaki", '/', WEAPON_BLUE, weapon(TwoHanded, 5, 1)),
        ItemKind::Naginata => ("Naginata", '/', WEAPON_BLUE, weapon(TwoHanded, 6, 2)),
        ItemKind::Bo => ("Bo", '/', WEAPON_BLUE, weapon(TwoHanded, 4, 3)),

        ItemKind::Buckler => ("Buckler", ')', LEATHER_BROWN, shield(OneHanded, 1)),
        ItemKind::Targe => ("Targe", ')', LEATHER_BROWN, shield(OneHanded, 2)),
        ItemKind::KiteShield => ("Kite Shield", ')', LEATHER_BROWN, shield(OneHanded, 3)),
        ItemKind::HeaterShield => ("Heater Shield", ')', LEATHER_BROWN, shield(OneHanded, 4)),
        ItemKind::TowerShield => ("Tower Shield", ')', LEATHER_BROWN, shield(TwoHanded, 5)),

        ItemKind::ClothArmor => ("Cloth Yoroi", '[', LEATHER_BROWN, armor(1)),
        ItemKind::LeatherArmor => ("Leather Gusoku", '[', LEATHER_BROWN, armor(2)),
        ItemKind::ChainMail => ("Plated Gusoku", '[', LEATHER_BROWN, armor(3)),
        ItemKind::LamellarArmor => ("Lamellar Gusoku", '[', LEATHER_BROWN, armor(4)),
        ItemKind::TatamiDo => ("Tatami Gusoku", '[', LEATHER_BROWN, armor(5)),
        ItemKind::OYoroi => ("O-Yoroi", '[', LEATHER_BROWN, armor(6)),
        ItemKind::OniMail => ("Oni Gusoku", '[', LEATHER_BROWN, armor(8)),
        ItemKind::StarForgedMail => ("Star-forged Gusoku", '[', LEATHER_BROWN, armor(10)),

        ItemKind::ConfusionAbility => {
            ("Evoke Blindness", '*', Rgb(54, 40, 113), ability(Effect::Confusion { turns: 15 }, 5))
        }
        ItemKind::FireballAbility => (
            "Supernova",
            '*',
            Rgb(255, 0, 125),
            ability(Effect::Fireball { damage: 25, radius: 5 }, 5),
        ),
        ItemKind::HealingAbility => {
            ("Gourd of Vitality", '*', Rgb(0, 255, 0), ability(Effect::Healing { amount: 5 }, 5))
        }
        ItemKind::LightningAbility => (
            "Comet Azure",
            '*',
            Rgb(0, 100, 255),
            ability(Effect::Lightning { damage: 30, maximum_range: 7 }, 5),
        ),
        ItemKind::Shuriken => (
            "Shuriken",
            '*',
            Rgb(160, 160, 160),
            ability(Effect::Ranged { damage: 7, maximum_range: 4 }, 0),
        ),
        ItemKind::Kunai => (
            "Kunai",
            '*',
            Rgb(130, 160, 190),
            ability(Effect::Ranged { damage: 10, maximum_range: 4 }, 0),
        ),
        ItemKind::Bow => {
            let effect = Effect::Ranged { damage: 15, maximum_range: 7 };
            ("Bow", '*', Rgb(130, 160, 190), ability(effect, 1))
        }
        ItemKind::BlackHole => (
            "Black Hole",
            '*',
            Rgb(0, 0, 0),
            ability(Effect::Fireball { damage: 100, radius: 7 }, 20),
        ),
        ItemKind::SolarFlare => (
            "Ruby Flare",
            '*',
            Rgb(255, 0, 0),
            ability(Effect::Beam { damage: 30, maximum_range: 7 }, 5),
        ),
        ItemKind::StarRage => (
            "Star Rage",
            '*',
            Rgb(125, 0, 255),
            ability(Effect::Chain { damage: 20, radius: 5 }, 5),
        ),
    };
    ItemTemplate { name, glyph, color, body }
}

/// Fresh monster at `pos`. The id is assigned when the actor enters an arena.
pub fn spawn_actor(kind: ActorKind, pos: Pos) -> Actor {
    let template = actor_template(kind);
    Actor {
        id: EntityId::default(),
        kind,
        name: template.name.to_string(),
        glyph: template.glyph,
        color: template.color,
        pos,
        blocks_movement: true,
        render_order: RenderOrder::Actor,
        fighter: Fighter::new(template.hp, template.defense, template.power),
        ai: Some(Ai::hostile()),
        inventory: Inventory::new(0),
        equipment: Equipment::default(),
        level: Level::new(0, template.xp_given),
    }
}

pub fn spawn_player(config: &PlayerConfig, pos: Pos) -> Actor {
    let template = actor_template(ActorKind::Player);
    Actor {
        id: EntityId::default(),
        kind: ActorKind::Player,
        name: template.name.to_string(),
        glyph: template.glyph,
        color: template.color,
        pos,
        blocks_movement: true,
        render_order: RenderOrder::Actor,
        fighter: Fighter::new(config.hp, config.base_defense, config.base_power),
        ai: None,
        inventory: Inventory::new(config.inventory_capacity),
        equipment: Equipment::default(),
        level: Level::new(config.level_up_base, 0),
    }
}

pub fn spawn_item(kind: ItemKind, location: ItemLocation) -> Item {
    let template = item_template(kind);
    let (consumable, equippable, ability) = match template.body {
        ItemBody::Consumable(effect) => (Some(Consumable { effect }), None, None),
        ItemBody::Equippable(equippable) => (None, Some(equippable), None),
        ItemBody::Ability { effect, cooldown_turns } => {
            (None, None, Some(Ability::new(effect, cooldown_turns)))
        }
    };
    Item {
        id: ItemId::default(),
        kind,
        name: template.name.to_string(),
        glyph: template.glyph,
        color: template.color,
        location,
        consumable,
        equippable,
        ability,
    }
}
