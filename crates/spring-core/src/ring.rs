use crate::error::{ConfigIssue, Result};
use std::collections::VecDeque;

/// Fixed-capacity FIFO. Once full, every push evicts exactly the oldest item.
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigIssue::ZeroCapacity.into());
        }
        Ok(Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    // index is the position within current contents, not a push counter
    pub fn for_each(&self, mut visit: impl FnMut(&T, usize)) {
        for (index, item) in self.items.iter().enumerate() {
            visit(item, index);
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn newest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn contents<T: Copy>(ring: &RingBuffer<T>) -> Vec<T> {
        ring.iter().copied().collect()
    }

    #[test]
    fn keeps_last_n_in_push_order() {
        let mut ring = RingBuffer::new(3).unwrap();
        for i in 1..=5 {
            ring.push(i);
        }
        assert_eq!(contents(&ring), vec![3, 4, 5]);
        assert!(ring.is_full());
        assert_eq!(ring.newest(), Some(&5));
    }

    #[test]
    fn partial_fill_is_not_padded() {
        let mut ring = RingBuffer::new(4).unwrap();
        assert!(ring.is_empty());
        assert_eq!(ring.len(), 0);
        ring.push('a');
        ring.push('b');
        assert_eq!(contents(&ring), vec!['a', 'b']);
        assert!(!ring.is_empty());
        assert_eq!(ring.len(), 2);
        assert!(!ring.is_full());
    }

    #[test]
    fn for_each_indices_restart_at_zero() {
        let mut ring = RingBuffer::new(3).unwrap();
        for i in 0..10 {
            ring.push(i);
        }
        let mut seen = Vec::new();
        ring.for_each(|item, idx| seen.push((idx, *item)));
        assert_eq!(seen, vec![(0, 7), (1, 8), (2, 9)]);
    }

    #[test]
    fn capacity_one_holds_latest() {
        let mut ring = RingBuffer::new(1).unwrap();
        ring.push("old");
        ring.push("new");
        assert_eq!(contents(&ring), vec!["new"]);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = RingBuffer::<u8>::new(0).unwrap_err();
        assert_eq!(err, Error::InvalidConfiguration(ConfigIssue::ZeroCapacity));
    }
}
