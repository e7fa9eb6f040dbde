//! Session-local copy of the remote catalog.
//!
//! The sequence is shared copy-on-write: readers hold an `Arc` snapshot that later mutations never
//! touch, and every mutation produces the next version of the sequence. Order is insertion order.

use std::sync::Arc;

use shared::domain::{Food, FoodId};

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    foods: Arc<Vec<Food>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole sequence with what the service returned.
    pub fn load(&mut self, foods: Vec<Food>) {
        self.foods = Arc::new(foods);
    }

    /// Appends `food`, or replaces the entry in place when its id is already held.
    /// Returns `true` when the food was new.
    pub fn append(&mut self, food: Food) -> bool {
        if self.replace(food.clone()) {
            return false;
        }
        Arc::make_mut(&mut self.foods).push(food);
        true
    }

    /// Swaps in `food` for the entry with the same id. Returns `false` when no entry matched.
    pub fn replace(&mut self, food: Food) -> bool {
        let Some(index) = self.foods.iter().position(|f| f.id == food.id) else {
            return false;
        };
        Arc::make_mut(&mut self.foods)[index] = food;
        true
    }

    /// Removes every entry with `id` and returns how many were dropped.
    pub fn remove(&mut self, id: FoodId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        let foods = Arc::make_mut(&mut self.foods);
        let before = foods.len();
        foods.retain(|f| f.id != id);
        before - foods.len()
    }

    pub fn get(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: FoodId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[Food] {
        &self.foods
    }

    pub fn snapshot(&self) -> Arc<Vec<Food>> {
        Arc::clone(&self.foods)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(id: i64, name: &str, price: f64) -> Food {
        Food {
            id: FoodId(id),
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            available: true,
            image: format!("{name}.png"),
        }
    }

    #[test]
    fn load_twice_with_same_input_is_identical() {
        let foods = vec![food(1, "A", 10.0), food(2, "B", 12.0)];
        let mut store = CatalogStore::new();

        store.load(foods.clone());
        let first = store.snapshot();
        store.load(foods.clone());

        assert_eq!(store.items(), foods.as_slice());
        assert_eq!(*first, *store.snapshot());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = CatalogStore::new();
        store.load(vec![food(3, "C", 1.0)]);
        store.append(food(1, "A", 2.0));
        store.append(food(2, "B", 3.0));

        let ids: Vec<_> = store.items().iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn append_of_known_id_replaces_in_place() {
        let mut store = CatalogStore::new();
        store.load(vec![food(1, "A", 1.0), food(2, "B", 2.0)]);

        assert!(!store.append(food(1, "A2", 5.0)));
        assert!(store.append(food(3, "C", 3.0)));

        assert_eq!(
            store.items(),
            &[food(1, "A2", 5.0), food(2, "B", 2.0), food(3, "C", 3.0)]
        );
    }

    #[test]
    fn replace_touches_only_the_matching_entry() {
        let mut store = CatalogStore::new();
        store.load(vec![food(1, "A", 10.0), food(2, "B", 12.0), food(3, "C", 14.0)]);

        assert!(store.replace(food(2, "B2", 99.0)));

        assert_eq!(store.items()[0], food(1, "A", 10.0));
        assert_eq!(store.items()[1], food(2, "B2", 99.0));
        assert_eq!(store.items()[2], food(3, "C", 14.0));
    }

    #[test]
    fn replace_of_missing_id_is_a_no_op() {
        let mut store = CatalogStore::new();
        store.load(vec![food(1, "A", 10.0)]);

        assert!(!store.replace(food(9, "Z", 1.0)));
        assert_eq!(store.items(), &[food(1, "A", 10.0)]);
    }

    #[test]
    fn remove_drops_all_and_only_matching_entries() {
        let mut store = CatalogStore::new();
        store.load(vec![food(1, "A", 10.0), food(2, "B", 12.0), food(1, "A", 10.0)]);

        assert_eq!(store.remove(FoodId(1)), 2);
        assert_eq!(store.items(), &[food(2, "B", 12.0)]);
        assert_eq!(store.remove(FoodId(42)), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshots_are_not_affected_by_later_mutations() {
        let mut store = CatalogStore::new();
        store.load(vec![food(1, "A", 10.0)]);
        let before = store.snapshot();

        store.append(food(2, "B", 12.0));
        store.replace(food(1, "A", 11.0));

        assert_eq!(*before, vec![food(1, "A", 10.0)]);
        assert_eq!(store.len(), 2);
    }
}
