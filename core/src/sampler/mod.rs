use crate::*;
pub use random::*;

mod random;

/// Draws the categories for a new board out of the session pool.
///
/// The pool is read-only to the sampler; implementations return a fresh
/// [`BoardSelection`] or fail fast when one cannot exist.
pub trait CategorySampler {
    fn sample(self, pool: &CategoryPool, config: GameConfig) -> Result<BoardSelection>;
}
