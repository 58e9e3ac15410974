#[cfg(test)]
mod tests {
    use crate::pool::DrawPool;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const RANGE: u32 = 100;

    /// `remaining ∪ drawn` must equal the full range and the two parts
    /// must be disjoint.
    fn assert_partition(pool: &DrawPool) {
        let drawn: HashSet<u32> = pool.drawn().iter().copied().collect();
        assert_eq!(drawn.len(), pool.drawn().len(), "duplicate in history");
        assert_eq!(drawn.len() + pool.remaining_count(), RANGE as usize);
        for number in pool.drawn() {
            assert!(*number < RANGE);
        }
    }

    #[test]
    fn empty_pool_has_nothing_to_draw() {
        let mut pool = DrawPool::empty();
        assert_eq!(pool.remaining_count(), 0);
        assert_eq!(pool.drawn(), &[] as &[u32]);
        assert_eq!(pool.draw(), None);
    }

    #[test]
    fn fresh_pool_holds_the_whole_range() {
        let pool = DrawPool::new(RANGE);
        assert_eq!(pool.remaining_count(), RANGE as usize);
        assert!(pool.drawn().is_empty());
    }

    #[test]
    fn partition_invariant_holds_after_every_draw() {
        let mut pool = DrawPool::new(RANGE);
        for i in 0..RANGE as usize {
            let number = pool.draw().expect("pool should not be exhausted yet");
            assert!(number < RANGE);
            assert_eq!(pool.drawn().len(), i + 1);
            assert_eq!(*pool.drawn().last().unwrap(), number);
            assert_partition(&pool);
        }
        assert_eq!(pool.remaining_count(), 0);
    }

    #[test]
    fn draining_yields_each_number_exactly_once() {
        let mut pool = DrawPool::new(RANGE);
        let mut seen = HashSet::new();
        while let Some(number) = pool.draw() {
            assert!(seen.insert(number), "number {number} drawn twice");
        }
        assert_eq!(seen, (0..RANGE).collect());
    }

    #[test]
    fn exhausted_draw_does_not_mutate_history() {
        let mut pool = DrawPool::new(3);
        while pool.draw().is_some() {}
        let history = pool.drawn().to_vec();
        assert_eq!(pool.draw(), None);
        assert_eq!(pool.draw(), None);
        assert_eq!(pool.drawn(), history.as_slice());
        assert_eq!(pool.remaining_count(), 0);
    }

    #[test]
    fn drawn_set_matches_history() {
        let mut pool = DrawPool::new(10);
        for _ in 0..4 {
            pool.draw();
        }
        let set = pool.drawn_set();
        assert_eq!(set.len(), 4);
        for number in pool.drawn() {
            assert!(set.contains(number));
        }
    }
}
