use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    /// Straight-line distance, used for radii and ranges.
    pub fn distance(self, other: Pos) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// King-move distance; adjacent tiles (diagonals included) are at distance 1.
    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Wall,
    Floor,
    DownStairs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileGraphic {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl TileKind {
    pub fn walkable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    pub fn transparent(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    /// Dark graphic when `lit` is false (explored but out of sight), light otherwise.
    pub fn graphic(self, lit: bool) -> TileGraphic {
        match (self, lit) {
            (TileKind::Floor, false) => {
                TileGraphic { glyph: ' ', fg: Rgb(255, 255, 255), bg: Rgb(50, 50, 150) }
            }
            (TileKind::Floor, true) => {
                TileGraphic { glyph: ' ', fg: Rgb(255, 255, 255), bg: Rgb(200, 180, 50) }
            }
            (TileKind::Wall, false) => {
                TileGraphic { glyph: ' ', fg: Rgb(255, 255, 255), bg: Rgb(0, 0, 100) }
            }
            (TileKind::Wall, true) => {
                TileGraphic { glyph: ' ', fg: Rgb(255, 255, 255), bg: Rgb(130, 110, 50) }
            }
            (TileKind::DownStairs, false) => {
                TileGraphic { glyph: '>', fg: Rgb(0, 0, 100), bg: Rgb(50, 50, 150) }
            }
            (TileKind::DownStairs, true) => {
                TileGraphic { glyph: '>', fg: Rgb(255, 255, 255), bg: Rgb(200, 180, 50) }
            }
        }
    }
}

/// Draw order for entities sharing a tile; later variants draw on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Ashigaru,
    Ninja,
    Shinobi,
    OnnaBugeisha,
    Samurai,
    Ronin,
    Sohei,
    Bushi,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    HealthPotion,
    ConfusionScroll,
    FireballScroll,
    LightningScroll,

    WrappedFists,
    Tonfa,
    Nunchucks,
    Shuko,
    Tekko,
    Dagger,
    Wakizashi,
    Katana,
    Nagamaki,
    Naginata,
    Bo,

    Buckler,
    Targe,
    KiteShield,
    HeaterShield,
    TowerShield,

    ClothArmor,
    LeatherArmor,
    ChainMail,
    LamellarArmor,
    TatamiDo,
    OYoroi,
    OniMail,
    StarForgedMail,

    ConfusionAbility,
    FireballAbility,
    HealingAbility,
    LightningAbility,
    Shuriken,
    Kunai,
    Bow,
    BlackHole,
    SolarFlare,
    StarRage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }
}
