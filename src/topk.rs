use std::cmp::Ordering;

/// Fixed-capacity ranked collection. Holds the `capacity` best-ranked items
/// seen so far and evicts the current worst when a better one arrives.
/// `rank` returns `Less` when its first argument ranks better.
pub struct TopK<T> {
    capacity: usize,
    rank: fn(&T, &T) -> Ordering,
    // kept sorted best-first
    items: Vec<T>,
}

impl<T> TopK<T> {
    pub fn new(capacity: usize, rank: fn(&T, &T) -> Ordering) -> Self {
        TopK {
            capacity,
            rank,
            items: Vec::with_capacity(capacity + 1),
        }
    }

    /// offer an item for retention. ties keep arrival order, and an item
    /// ranking below everything held by a full collection is dropped.
    pub fn offer(&mut self, item: T) {
        let at = self
            .items
            .partition_point(|held| (self.rank)(held, &item) != Ordering::Greater);
        self.items.insert(at, item);
        self.items.truncate(self.capacity);
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// extraction, best first.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn fills_up_to_capacity() {
        let mut best = TopK::new(3, ascending);
        assert!(best.is_empty());
        best.offer(5);
        best.offer(1);
        assert!(!best.is_full());
        best.offer(3);
        assert!(best.is_full());
        assert_eq!(best.into_vec(), vec![1, 3, 5]);
    }

    #[test]
    fn evicts_the_worst_once_full() {
        let mut best = TopK::new(3, ascending);
        for value in [9, 2, 7, 4, 8, 1] {
            best.offer(value);
        }
        assert_eq!(best.into_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn drops_items_worse_than_everything_held() {
        let mut best = TopK::new(2, ascending);
        best.offer(1);
        best.offer(2);
        best.offer(10);
        assert_eq!(best.len(), 2);
        assert_eq!(best.into_vec(), vec![1, 2]);
    }

    #[test]
    fn ties_keep_arrival_order() {
        fn by_key(a: &(i32, char), b: &(i32, char)) -> Ordering {
            a.0.cmp(&b.0)
        }
        let mut best = TopK::new(4, by_key);
        best.offer((1, 'a'));
        best.offer((1, 'b'));
        best.offer((0, 'c'));
        best.offer((1, 'd'));
        assert_eq!(
            best.into_vec(),
            vec![(0, 'c'), (1, 'a'), (1, 'b'), (1, 'd')]
        );
    }
}
