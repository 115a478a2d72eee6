//! Weighted shortest-path search used by chasing monsters.
//! This module exists so navigation rules stay reusable and deterministic.
//! It does not decide when a monster should chase or attack.

use std::collections::{BTreeMap, BTreeSet};

use super::*;

const CARDINAL_COST: u32 = 2;
const DIAGONAL_COST: u32 = 3;
/// Extra tile cost for squares occupied by a blocking actor, so monsters route around crowds.
const OCCUPIED_TILE_COST: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    f: u32,
    h: u32,
    y: i32,
    x: i32,
}

/// Path from `start` to `goal`, excluding `start` and including `goal`.
///
/// Walls are impassable. Tiles holding a blocking actor stay passable at a higher cost,
/// except `start` and `goal` themselves which are never penalized.
pub(super) fn path_to(state: &GameState, start: Pos, goal: Pos) -> Option<Vec<Pos>> {
    let map = &state.map;
    if !map.is_walkable(start) || !map.is_walkable(goal) {
        return None;
    }
    if start == goal {
        return Some(vec![]);
    }

    let occupied: BTreeSet<Pos> = state
        .actors
        .values()
        .filter(|actor| actor.blocks_movement)
        .map(|actor| actor.pos)
        .filter(|&pos| pos != start && pos != goal)
        .collect();

    let mut open_set = BTreeSet::new();
    let mut g_score = BTreeMap::new();
    let mut came_from = BTreeMap::new();
    let h = heuristic(start, goal);
    open_set.insert(OpenNode { f: h, h, y: start.y, x: start.x });
    g_score.insert(start, 0);
    while let Some(curr) = open_set.pop_first() {
        let p = Pos { y: curr.y, x: curr.x };
        if p == goal {
            return Some(reconstruct_path(&came_from, start, goal));
        }
        let cur_g = *g_score.get(&p).expect("current node must have g-score");
        for (n, step_cost) in neighbors(p) {
            if !map.is_walkable(n) {
                continue;
            }
            let tile_cost = if occupied.contains(&n) { 1 + OCCUPIED_TILE_COST } else { 1 };
            let tg = cur_g + step_cost * tile_cost;
            if tg < *g_score.get(&n).unwrap_or(&u32::MAX) {
                came_from.insert(n, p);
                g_score.insert(n, tg);
                let h = heuristic(n, goal);
                open_set.insert(OpenNode { f: tg + h, h, y: n.y, x: n.x });
            }
        }
    }
    None
}

fn reconstruct_path(came: &BTreeMap<Pos, Pos>, start: Pos, goal: Pos) -> Vec<Pos> {
    let mut p = goal;
    let mut result = vec![p];
    while p != start {
        p = *came.get(&p).expect("path must be reconstructible");
        result.push(p);
    }
    result.reverse();
    result.remove(0);
    result
}

fn neighbors(p: Pos) -> impl Iterator<Item = (Pos, u32)> {
    Direction::ALL.into_iter().map(move |direction| {
        let (dx, dy) = direction.delta();
        let cost = if dx != 0 && dy != 0 { DIAGONAL_COST } else { CARDINAL_COST };
        (p.offset(dx, dy), cost)
    })
}

fn heuristic(a: Pos, b: Pos) -> u32 {
    CARDINAL_COST * a.chebyshev(b)
}
