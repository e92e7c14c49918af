use alloc::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::clue::Category;
use crate::types::*;

/// All categories fetched for one session, keyed by id.
///
/// Built once by the fetch stage, read-only to the sampler, and discarded
/// wholesale when a new session starts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPool {
    categories: BTreeMap<CategoryId, Category>,
}

impl CategoryPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category, replacing any previous entry with the same id.
    pub fn insert(&mut self, category: Category) -> Option<Category> {
        self.categories.insert(category.id(), category)
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }
}

impl FromIterator<Category> for CategoryPool {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut pool = Self::new();
        for category in iter {
            pool.insert(category);
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clue::Clue;
    use alloc::format;
    use alloc::vec;

    fn category(id: CategoryId) -> Category {
        let clues = vec![Clue::new(id * 10, format!("q{}", id), format!("a{}", id))];
        Category::new(id, format!("category {}", id), clues)
    }

    #[test]
    fn insert_replaces_entries_with_the_same_id() {
        let mut pool = CategoryPool::new();

        assert!(pool.insert(category(3)).is_none());
        assert!(pool.insert(category(4)).is_none());
        assert_eq!(pool.len(), 2);

        let previous = pool.insert(category(3));
        assert_eq!(previous, Some(category(3)));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn iteration_is_ordered_by_id() {
        let pool: CategoryPool = [category(9), category(2), category(5)].into_iter().collect();

        let ids: alloc::vec::Vec<CategoryId> = pool.iter().map(Category::id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
