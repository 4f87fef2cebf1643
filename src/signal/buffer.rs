use std::collections::VecDeque;

/// Fixed-capacity FIFO that keeps only the most recent items
#[derive(Debug, Clone)]
pub struct RollingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingBuffer<T> {
    /// A capacity of zero is bumped to one so the buffer can always hold the latest item.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `item`, returning the evicted oldest item if capacity was exceeded.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.items.front()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a RollingBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_below_capacity_keeps_everything() {
        let mut buf = RollingBuffer::new(3);
        assert!(buf.push(1).is_none());
        assert!(buf.push(2).is_none());

        assert_eq!(buf.len(), 2);
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_push_evicts_oldest_first() {
        let mut buf = RollingBuffer::new(3);
        for i in 1..=3 {
            buf.push(i);
        }

        assert_eq!(buf.push(4), Some(1));
        assert_eq!(buf.push(5), Some(2));
        assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buf.oldest(), Some(&3));
        assert_eq!(buf.latest(), Some(&5));
    }

    #[test]
    fn test_length_is_min_of_pushes_and_capacity() {
        let mut buf = RollingBuffer::new(100);
        for n in 1..=250usize {
            buf.push(n);
            assert_eq!(buf.len(), n.min(100));
        }
    }

    #[test]
    fn test_zero_capacity_is_bumped_to_one() {
        let mut buf = RollingBuffer::new(0);
        assert_eq!(buf.capacity(), 1);

        buf.push('a');
        assert_eq!(buf.push('b'), Some('a'));
        assert_eq!(buf.len(), 1);
    }
}
