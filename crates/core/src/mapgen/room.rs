//! Room rectangles and the L-shaped tunnels that join them.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::line::Bresenham;
use crate::rng::GameRng;
use crate::types::Pos;

/// Axis-aligned room. `x2`/`y2` sit one past the last column/row of the outer wall box,
/// so the carved interior is `x1 + 1..x2` by `y1 + 1..y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub fn center(self) -> Pos {
        Pos::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Column and row ranges of the interior, excluding the wall border.
    pub fn inner(self) -> (Range<i32>, Range<i32>) {
        (self.x1 + 1..self.x2, self.y1 + 1..self.y2)
    }

    pub fn inner_positions(self) -> impl Iterator<Item = Pos> {
        let (columns, rows) = self.inner();
        rows.flat_map(move |y| columns.clone().map(move |x| Pos::new(x, y)))
    }

    /// Closed-interval overlap; rooms sharing an edge count as intersecting.
    pub fn intersects(self, other: &RectangularRoom) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// L-shaped path from `start` to `end` with a single right-angle turn.
///
/// A coin flip picks whether the horizontal leg comes first. The corner tile is
/// yielded by both legs.
pub fn tunnel_between(start: Pos, end: Pos, rng: &mut GameRng) -> impl Iterator<Item = Pos> {
    let corner = if rng.coin_flip() { Pos::new(end.x, start.y) } else { Pos::new(start.x, end.y) };
    Bresenham::new(start, corner).chain(Bresenham::new(corner, end))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn arb_room() -> impl Strategy<Value = RectangularRoom> {
        (0..60_i32, 0..40_i32, 1..12_i32, 1..12_i32)
            .prop_map(|(x, y, width, height)| RectangularRoom::new(x, y, width, height))
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric_and_reflexive(a in arb_room(), b in arb_room()) {
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
            prop_assert!(a.intersects(&a));
        }

        #[test]
        fn tunnel_turns_at_most_once(
            seed in any::<u64>(),
            sx in 0..50_i32, sy in 0..30_i32, ex in 0..50_i32, ey in 0..30_i32,
        ) {
            let mut rng = GameRng::seed_from_u64(seed);
            let start = Pos::new(sx, sy);
            let end = Pos::new(ex, ey);
            let mut path: Vec<Pos> = tunnel_between(start, end, &mut rng).collect();
            path.dedup();

            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&end));

            let steps: Vec<(i32, i32)> =
                path.windows(2).map(|w| (w[1].x - w[0].x, w[1].y - w[0].y)).collect();
            prop_assert!(steps.iter().all(|&(dx, dy)| dx.abs() + dy.abs() == 1));
            let turns = steps.windows(2).filter(|pair| pair[0] != pair[1]).count();
            prop_assert!(turns <= 1);
        }
    }

    #[test]
    fn inner_excludes_the_wall_border() {
        let room = RectangularRoom::new(2, 3, 6, 5);
        assert_eq!(room.inner(), (3..8, 4..8));
        assert_eq!(room.inner_positions().count(), 5 * 4);
        assert_eq!(room.center(), Pos::new(5, 5));
    }

    #[test]
    fn touching_rooms_intersect() {
        let left = RectangularRoom::new(0, 0, 5, 5);
        let right = RectangularRoom::new(5, 0, 5, 5);
        let apart = RectangularRoom::new(6, 0, 5, 5);
        assert!(left.intersects(&right));
        assert!(!left.intersects(&apart));
    }
}
