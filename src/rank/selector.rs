use std::collections::HashMap;

use tracing::trace;

use crate::rank::WordId;

/// A word reference together with the count it had when it entered the heap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub id: WordId,
    pub count: usize,
}

/**
    Bounded min-heap holding the current best `k` candidates of a scan.

    The root is always the candidate with the lowest count. Every candidate's heap slot
    is indexed by its [`WordId`], so membership tests, removal and reinsertion of a word
    whose count changed all stay logarithmic in `k`.

    Candidates with equal counts compare equal. Which of them is evicted first, and the
    order in which they are drained, is not part of the contract.
*/
pub struct TopKSelector {
    heap: Vec<Candidate>,
    slots: HashMap<WordId, usize>,
    capacity: usize,
}

impl TopKSelector {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity.saturating_add(1)),
            slots: HashMap::with_capacity(capacity.saturating_add(1)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: WordId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn peek(&self) -> Option<&Candidate> {
        self.heap.first()
    }

    /// Lowest count currently selected.
    pub fn min_count(&self) -> Option<usize> {
        self.peek().map(|c| c.count)
    }

    /**
        Folds the latest count of a word into the selection.

        A word that is already selected is taken out and put back with its new count.
        Otherwise it is admitted while there is room, or when its count reaches the
        current minimum. If an admission overflows the capacity, the minimum is evicted
        and returned.
    */
    pub fn offer(&mut self, id: WordId, count: usize) -> Option<Candidate> {
        let candidate = Candidate { id, count };

        if self.remove(id).is_some() {
            self.insert(candidate);
        } else if self.heap.len() < self.capacity
            || self.min_count().map_or(false, |min| count >= min)
        {
            self.insert(candidate);
        } else {
            return None;
        }

        let evicted = if self.heap.len() > self.capacity {
            self.pop()
        } else {
            None
        };
        if let Some(e) = evicted {
            trace!(id = e.id, count = e.count, "evicted candidate");
        }

        debug_assert!(self.heap.len() <= self.capacity);
        evicted
    }

    /// Removes and returns the candidate with the lowest count.
    pub fn pop(&mut self) -> Option<Candidate> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(0, last);

        let min = self.heap.pop()?;
        self.slots.remove(&min.id);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some(min)
    }

    /// Drains the selection into a sequence ordered from highest to lowest count.
    pub fn into_descending(mut self) -> Vec<Candidate> {
        let n = usize::min(self.capacity, self.heap.len());
        let mut out = vec![Candidate::default(); n];

        // popping yields ascending counts, so fill from the back
        for slot in out.iter_mut().rev() {
            match self.pop() {
                Some(c) => *slot = c,
                None => break,
            }
        }

        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.heap.iter()
    }

    fn insert(&mut self, candidate: Candidate) {
        let slot = self.heap.len();
        self.slots.insert(candidate.id, slot);
        self.heap.push(candidate);
        self.sift_up(slot);
    }

    fn remove(&mut self, id: WordId) -> Option<Candidate> {
        let slot = *self.slots.get(&id)?;
        let last = self.heap.len() - 1;
        self.swap(slot, last);

        let removed = self.heap.pop()?;
        self.slots.remove(&removed.id);

        if slot < self.heap.len() {
            let slot = self.sift_up(slot);
            self.sift_down(slot);
        }

        Some(removed)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].id, a);
        self.slots.insert(self.heap[b].id, b);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].count >= self.heap[parent].count {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) -> usize {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;

            if left < len && self.heap[left].count < self.heap[smallest].count {
                smallest = left;
            }
            if right < len && self.heap[right].count < self.heap[smallest].count {
                smallest = right;
            }
            if smallest == slot {
                return slot;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
fn assert_heap_shape(selector: &TopKSelector) {
    for (slot, c) in selector.heap.iter().enumerate() {
        assert_eq!(selector.slots[&c.id], slot);
        if slot > 0 {
            assert!(selector.heap[(slot - 1) / 2].count <= c.count);
        }
    }
    assert_eq!(selector.slots.len(), selector.heap.len());
}

#[test]
fn test_never_exceeds_capacity() {
    let mut selector = TopKSelector::with_capacity(3);
    for (id, count) in [(0, 1), (1, 4), (2, 2), (3, 9), (4, 3), (5, 1), (6, 7)] {
        selector.offer(id, count);
        assert!(selector.len() <= 3);
        assert_heap_shape(&selector);
    }

    let counts: Vec<usize> = selector.into_descending().iter().map(|c| c.count).collect();
    assert_eq!(counts, vec![9, 7, 4]);
}

#[test]
fn test_offer_rejects_below_minimum_when_full() {
    let mut selector = TopKSelector::with_capacity(2);
    selector.offer(0, 5);
    selector.offer(1, 3);

    assert_eq!(selector.offer(2, 2), None);
    assert!(!selector.contains(2));
    assert_eq!(selector.len(), 2);
}

#[test]
fn test_offer_admits_at_minimum_and_evicts() {
    let mut selector = TopKSelector::with_capacity(2);
    selector.offer(0, 5);
    selector.offer(1, 3);

    let evicted = selector.offer(2, 3).unwrap();
    assert_eq!(evicted.count, 3);
    assert_eq!(selector.len(), 2);
    assert!(selector.contains(0));
    assert_heap_shape(&selector);
}

#[test]
fn test_reoffer_moves_word() {
    let mut selector = TopKSelector::with_capacity(3);
    selector.offer(0, 1);
    selector.offer(1, 2);
    selector.offer(2, 3);
    assert_eq!(selector.peek().unwrap().id, 0);

    for count in 2..=5 {
        assert_eq!(selector.offer(0, count), None);
        assert_heap_shape(&selector);
    }

    assert_eq!(selector.len(), 3);
    assert_eq!(selector.peek().unwrap().id, 1);
    let ids: Vec<WordId> = selector.into_descending().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 2, 1]);
}

#[test]
fn test_zero_capacity_admits_nothing() {
    let mut selector = TopKSelector::with_capacity(0);
    assert_eq!(selector.offer(0, 10), None);
    assert!(selector.is_empty());
    assert!(selector.into_descending().is_empty());
}

#[test]
fn test_remove_from_middle_keeps_heap_valid() {
    let mut selector = TopKSelector::with_capacity(16);
    for id in 0..16 {
        selector.offer(id, (id * 7) % 11 + 1);
    }
    for id in [3, 0, 15, 8] {
        assert!(selector.remove(id).is_some());
        assert!(!selector.contains(id));
        assert_heap_shape(&selector);
    }
    assert!(selector.remove(3).is_none());

    let mut last = 0;
    while let Some(c) = selector.pop() {
        assert!(c.count >= last);
        last = c.count;
    }
}
