use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use super::*;

/// Uniform without-replacement sampling: draw a pool index at random, reject
/// repeats, until the board is full.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomCategorySampler {
    seed: u64,
}

impl RandomCategorySampler {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CategorySampler for RandomCategorySampler {
    fn sample(self, pool: &CategoryPool, config: GameConfig) -> Result<BoardSelection> {
        use rand::prelude::*;

        let need = usize::from(config.categories);
        let have = pool.len();
        if have < need {
            // with fewer candidates than slots the rejection loop below
            // could never terminate
            return Err(GameError::InsufficientPool { have, need });
        }

        let candidates: Vec<&Category> = pool.iter().collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut chosen = BTreeSet::new();
        let mut picked: Vec<Category> = Vec::with_capacity(need);

        while picked.len() < need {
            let index = rng.random_range(0..have);
            if chosen.insert(index) {
                picked.push(candidates[index].clone());
            }
        }

        BoardSelection::from_categories(picked, config.clues_per_category)
    }
}
