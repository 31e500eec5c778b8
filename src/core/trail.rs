use std::collections::VecDeque;

/// Bounded FIFO of live trail segments; pushing past capacity hands back the oldest.
#[derive(Clone, Debug)]
pub struct TrailBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> TrailBuffer<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `item`; returns the evicted oldest entry when the buffer overflows.
    pub fn push(&mut self, item: T) -> Option<T> {
        self.items.push_back(item);
        if self.items.len() > self.capacity {
            self.items.pop_front()
        } else {
            None
        }
    }

    /// Remove the first entry matching `pred`, e.g. a segment whose own fade finished.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<T> {
        let idx = self.items.iter().position(|t| pred(t))?;
        self.items.remove(idx)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
