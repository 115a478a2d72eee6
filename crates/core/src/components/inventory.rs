use serde::{Deserialize, Serialize};

use crate::error::{ActionResult, Impossible};
use crate::types::ItemId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub capacity: usize,
    items: Vec<ItemId>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, items: Vec::new() }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }

    pub fn add(&mut self, item: ItemId) -> ActionResult {
        if self.is_full() {
            return Err(Impossible::new("Your inventory is full."));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, item: ItemId) -> bool {
        match self.items.iter().position(|&carried| carried == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
