//! Floor-indexed lookups into the difficulty tables.

use crate::content::tables::{FloorChanceTable, FloorValueTable};
use crate::rng::GameRng;

/// Value of the last entry whose threshold is at or below `floor`, or 0 when none is.
pub fn max_value_for_floor(table: FloorValueTable, floor: u32) -> u32 {
    let mut current_value = 0;
    for &(floor_minimum, value) in table {
        if floor_minimum > floor {
            break;
        }
        current_value = value;
    }
    current_value
}

/// Merged `(template, weight)` list in first-seen order, later thresholds overriding.
pub fn weights_for_floor<T: Copy + PartialEq + 'static>(
    table: FloorChanceTable<T>,
    floor: u32,
) -> Vec<(T, u32)> {
    let mut merged: Vec<(T, u32)> = Vec::new();
    for &(floor_minimum, entries) in table {
        if floor_minimum > floor {
            break;
        }
        for &(template, weight) in entries {
            match merged.iter_mut().find(|(known, _)| *known == template) {
                Some(slot) => slot.1 = weight,
                None => merged.push((template, weight)),
            }
        }
    }
    merged
}

/// Draws `count` templates with replacement, each with probability proportional to its weight.
///
/// Returns an empty list when no template has a positive weight on this floor.
pub fn entities_at_random<T: Copy + PartialEq + 'static>(
    table: FloorChanceTable<T>,
    count: usize,
    floor: u32,
    rng: &mut GameRng,
) -> Vec<T> {
    let merged = weights_for_floor(table, floor);
    let weights: Vec<u32> = merged.iter().map(|&(_, weight)| weight).collect();
    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        match rng.weighted_index(&weights) {
            Some(index) => chosen.push(merged[index].0),
            None => break,
        }
    }
    chosen
}
