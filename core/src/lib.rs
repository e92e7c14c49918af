#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use pool::*;
pub use sampler::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod pool;
mod sampler;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: CategoryCount,
    pub clues_per_category: ClueCount,
}

impl GameConfig {
    /// Six categories of five clues, the classic board.
    pub const DEFAULT: Self = Self::new_unchecked(6, 5);

    pub const fn new_unchecked(categories: CategoryCount, clues_per_category: ClueCount) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: CategoryCount, clues_per_category: ClueCount) -> Self {
        let categories = categories.clamp(1, CategoryCount::MAX);
        let clues_per_category = clues_per_category.clamp(1, ClueCount::MAX);
        Self::new_unchecked(categories, clues_per_category)
    }

    pub const fn total_clues(&self) -> CellCount {
        mult(self.categories, self.clues_per_category)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The categories actually in play, in column order.
///
/// Construction checks the board invariants: pairwise-distinct category ids,
/// a rectangular clue grid, and clue ids unique across the whole board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSelection {
    categories: Vec<Category>,
    clues_per_category: ClueCount,
}

impl BoardSelection {
    pub fn from_categories(
        categories: Vec<Category>,
        clues_per_category: ClueCount,
    ) -> Result<Self> {
        let mut category_ids = BTreeSet::new();
        let mut clue_ids = BTreeSet::new();

        for category in &categories {
            if !category_ids.insert(category.id()) {
                return Err(GameError::DuplicateCategory(category.id()));
            }
            if category.clue_count() != clues_per_category {
                return Err(GameError::ClueCountMismatch(category.id()));
            }
            for clue in category.clues() {
                if !clue_ids.insert(clue.id()) {
                    return Err(GameError::DuplicateClue(clue.id()));
                }
            }
        }

        Ok(Self {
            categories,
            clues_per_category,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_count(&self) -> CategoryCount {
        self.categories.len().try_into().unwrap_or(CategoryCount::MAX)
    }

    pub const fn clues_per_category(&self) -> ClueCount {
        self.clues_per_category
    }

    pub fn total_clues(&self) -> CellCount {
        mult(self.category_count(), self.clues_per_category)
    }

    /// Linear scan over the nested clue lists; boards stay small enough
    /// that no index is needed here.
    pub fn find_clue(&self, id: ClueId) -> Option<&Clue> {
        self.categories
            .iter()
            .flat_map(|category| category.clues())
            .find(|clue| clue.id() == id)
    }
}
