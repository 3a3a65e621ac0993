//! Allocator - 0/1 knapsack selection of catalog items
//!
//! CRITICAL: Output must be reproducible. Ties between equally rated subsets
//! are resolved only by the backward walk over the table, never by a separate
//! ordering rule.

use serde::{Deserialize, Serialize};

use crate::Item;

/// Result of allocating a capacity over a catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allocation {
    /// Selected items, in catalog order
    pub selection: Vec<Item>,
    /// Catalog position of each selected item
    pub indices: Vec<usize>,
    pub total_price: u64,
    pub total_rating: u32,
}

impl Allocation {
    /// The defined zero result: nothing selected, zero totals.
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_indices(items: &[Item], indices: Vec<usize>) -> Self {
        let selection: Vec<Item> = indices.iter().map(|&i| items[i].clone()).collect();
        let total_price = selection.iter().map(|item| item.price).sum();
        let total_rating = selection
            .iter()
            .map(|item| u32::from(item.rating.value()))
            .sum();

        Self {
            selection,
            indices,
            total_price,
            total_rating,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }
}

/// Money left for food once transport is paid: `budget - transport`.
///
/// Saturates instead of wrapping for amounts beyond `i64`.
pub fn capacity(budget: u64, transport: u64) -> i64 {
    let budget = i64::try_from(budget).unwrap_or(i64::MAX);
    let transport = i64::try_from(transport).unwrap_or(i64::MAX);
    budget.saturating_sub(transport)
}

/// Select the subset of `items` with the highest total rating whose total
/// price does not exceed `capacity`.
///
/// A capacity of zero or less, or an empty catalog, yields
/// [`Allocation::empty`]. Time and space are `O(items.len() * capacity)`;
/// when the table for that size cannot be allocated (its cell count overflows
/// `usize` or the allocator refuses it) the result is also
/// [`Allocation::empty`]. Callers that need to tell the two apart bound the
/// table size before calling, see [`table_cells`].
pub fn allocate(items: &[Item], capacity: i64) -> Allocation {
    if capacity <= 0 || items.is_empty() {
        return Allocation::empty();
    }
    let Ok(capacity) = usize::try_from(capacity) else {
        return Allocation::empty();
    };

    let Some(table) = build_table(items, capacity) else {
        return Allocation::empty();
    };
    let indices = backtrack(items, &table, capacity);

    Allocation::from_indices(items, indices)
}

/// Row-major `(n + 1) x (capacity + 1)` table where `best[i][w]` is the best
/// rating reachable with the first `i` items and total price `<= w`.
struct Table {
    width: usize,
    cells: Vec<u32>,
}

impl Table {
    fn get(&self, i: usize, w: usize) -> u32 {
        self.cells[i * self.width + w]
    }
}

/// Number of cells the table for `item_count` items at `capacity` needs,
/// or `None` when that count does not fit in `usize`.
pub fn table_cells(item_count: usize, capacity: usize) -> Option<usize> {
    item_count.checked_add(1)?.checked_mul(capacity.checked_add(1)?)
}

fn build_table(items: &[Item], capacity: usize) -> Option<Table> {
    let width = capacity + 1;
    let len = table_cells(items.len(), capacity)?;

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).ok()?;
    cells.resize(len, 0u32);

    for (i, item) in items.iter().enumerate() {
        let (done, rest) = cells.split_at_mut((i + 1) * width);
        let prev = &done[i * width..];
        let row = &mut rest[..width];
        let rating = u32::from(item.rating.value());
        let price = usize::try_from(item.price).ok();

        for w in 0..width {
            row[w] = match price {
                Some(price) if price <= w => prev[w].max(rating + prev[w - price]),
                _ => prev[w],
            };
        }
    }

    Some(Table { width, cells })
}

fn backtrack(items: &[Item], table: &Table, capacity: usize) -> Vec<usize> {
    let mut w = capacity;
    let mut selected = Vec::new();

    for i in (1..=items.len()).rev() {
        if table.get(i, w) != table.get(i - 1, w) {
            selected.push(i - 1);
            // A differing cell means the item was taken, so its price fits in `w`.
            w -= items[i - 1].price as usize;
        }
    }

    selected.reverse();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rating;

    fn item(name: &str, rating: u64, price: u64) -> Item {
        Item::new(name, Rating::new(rating).unwrap(), price).unwrap()
    }

    fn names(allocation: &Allocation) -> Vec<&str> {
        allocation
            .selection
            .iter()
            .map(|item| item.name.as_str())
            .collect()
    }

    /// Best achievable rating by trying every subset
    fn exhaustive_best(items: &[Item], capacity: u64) -> u32 {
        let mut best = 0;
        for mask in 0u32..(1 << items.len()) {
            let (price, rating) = items
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .fold((0u64, 0u32), |(p, r), (_, item)| {
                    (p + item.price, r + u32::from(item.rating.value()))
                });
            if price <= capacity {
                best = best.max(rating);
            }
        }
        best
    }

    /// Small deterministic generator so property checks are repeatable
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: u64) -> u64 {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (self.0 >> 33) % bound
        }
    }

    #[test]
    fn test_capacity() {
        assert_eq!(capacity(100, 20), 80);
        assert_eq!(capacity(100, 120), -20);
        assert_eq!(capacity(0, 0), 0);
        assert_eq!(capacity(u64::MAX, 0), i64::MAX);
    }

    #[test]
    fn test_table_cells() {
        assert_eq!(table_cells(0, 0), Some(1));
        assert_eq!(table_cells(2, 80), Some(243));
        assert_eq!(table_cells(1, usize::MAX), None);
        assert_eq!(table_cells(usize::MAX, 1), None);
    }

    #[test]
    fn test_unallocatable_capacity_is_empty() {
        let items = vec![item("A", 1, 1)];

        assert_eq!(allocate(&items, i64::MAX), Allocation::empty());
    }

    #[test]
    fn test_prefers_pair_over_single() {
        let items = vec![item("A", 8, 50), item("B", 5, 30), item("C", 9, 60)];

        let allocation = allocate(&items, 80);

        assert_eq!(names(&allocation), vec!["A", "B"]);
        assert_eq!(allocation.indices, vec![0, 1]);
        assert_eq!(allocation.total_rating, 13);
        assert_eq!(allocation.total_price, 80);
    }

    #[test]
    fn test_empty_catalog() {
        let allocation = allocate(&[], 100);

        assert!(allocation.is_empty());
        assert_eq!(allocation.total_price, 0);
        assert_eq!(allocation.total_rating, 0);
    }

    #[test]
    fn test_item_too_expensive() {
        let allocation = allocate(&[item("X", 4, 10)], 5);

        assert!(allocation.is_empty());
        assert_eq!(allocation.total_price, 0);
        assert_eq!(allocation.total_rating, 0);
    }

    #[test]
    fn test_non_positive_capacity() {
        let items = vec![item("A", 8, 0), item("B", 5, 30)];

        assert_eq!(allocate(&items, 0), Allocation::empty());
        assert_eq!(allocate(&items, -20), Allocation::empty());
    }

    #[test]
    fn test_free_items_are_taken() {
        let items = vec![item("Water", 3, 0), item("Rice", 6, 15)];

        let allocation = allocate(&items, 15);

        assert_eq!(names(&allocation), vec!["Water", "Rice"]);
        assert_eq!(allocation.total_price, 15);
        assert_eq!(allocation.total_rating, 9);
    }

    #[test]
    fn test_zero_rated_items_are_skipped() {
        let items = vec![item("Gum", 0, 1), item("Bread", 4, 5)];

        let allocation = allocate(&items, 10);

        assert_eq!(names(&allocation), vec!["Bread"]);
    }

    #[test]
    fn test_tie_identical_items_takes_first_declared() {
        // The later copy leaves the table unchanged, so the walk skips it.
        let items = vec![item("P", 5, 10), item("Q", 5, 10)];

        let allocation = allocate(&items, 10);

        assert_eq!(names(&allocation), vec!["P"]);
        assert_eq!(allocation.indices, vec![0]);
    }

    #[test]
    fn test_tie_between_subsets_follows_table_walk() {
        // {A} and {B, C} both rate 5 at price 10.
        let items = vec![item("A", 5, 10), item("B", 3, 5), item("C", 2, 5)];

        let allocation = allocate(&items, 10);

        assert_eq!(names(&allocation), vec!["A"]);
    }

    #[test]
    fn test_tie_later_item_kept_when_it_improves_cell() {
        // C completes the optimum at w = 10; A and B tie for the rest.
        let items = vec![item("A", 4, 5), item("B", 4, 5), item("C", 6, 5)];

        let allocation = allocate(&items, 10);

        assert_eq!(names(&allocation), vec!["A", "C"]);
        assert_eq!(allocation.total_rating, 10);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let items = vec![item("A", 8, 50), item("B", 5, 30), item("C", 9, 60)];
        let before = items.clone();

        let _ = allocate(&items, 80);

        assert_eq!(items, before);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![
            item("A", 7, 12),
            item("B", 7, 12),
            item("C", 3, 4),
            item("D", 9, 20),
        ];

        assert_eq!(allocate(&items, 30), allocate(&items, 30));
    }

    #[test]
    fn test_matches_exhaustive_search() {
        let mut rng = Lcg(42);

        for _ in 0..200 {
            let len = rng.next(9) as usize;
            let items: Vec<Item> = (0..len)
                .map(|i| item(&format!("item{}", i), rng.next(11), rng.next(40)))
                .collect();
            let capacity = rng.next(120);

            let allocation = allocate(&items, capacity as i64);

            // Budget respect
            assert!(allocation.total_price <= capacity);

            // Subset validity: strictly increasing catalog positions
            assert!(allocation.indices.windows(2).all(|w| w[0] < w[1]));
            for (pos, &index) in allocation.indices.iter().enumerate() {
                assert_eq!(allocation.selection[pos], items[index]);
            }

            // Totals are sums over the selection
            let price: u64 = allocation.selection.iter().map(|i| i.price).sum();
            assert_eq!(allocation.total_price, price);

            // Optimality
            assert_eq!(allocation.total_rating, exhaustive_best(&items, capacity));
        }
    }
}
