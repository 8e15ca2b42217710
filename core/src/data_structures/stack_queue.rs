//! Stack with O(1) minimum and a fixed-capacity ring buffer queue

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

/// Stack that also tracks its minimum element
///
/// `mins` holds a non-increasing run of candidates; an element is pushed
/// there when it is no greater than the current minimum.
#[derive(Debug, Clone)]
pub struct MinStack<T> {
    items: Vec<T>,
    mins: Vec<T>,
}

impl<T> Default for MinStack<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            mins: Vec::new(),
        }
    }
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        if self.mins.last().map_or(true, |min| value <= *min) {
            self.mins.push(value.clone());
        }
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.items.pop()?;
        if self.mins.last() == Some(&value) {
            self.mins.pop();
        }
        Some(value)
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn min(&self) -> Option<&T> {
        self.mins.last()
    }
}

/// Bounded FIFO queue over a ring buffer
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new(capacity: usize) -> AlgorithmResult<Self> {
        if capacity == 0 {
            return Err(AlgorithmError::invalid_parameter(
                "capacity",
                "must be at least 1",
            ));
        }
        Ok(Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Appends `value`; hands it back when the queue is full
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    pub fn rear(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let tail = (self.head + self.len - 1) % self.slots.len();
        self.slots[tail].as_ref()
    }
}
