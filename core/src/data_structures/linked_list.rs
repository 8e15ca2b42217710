//! Arena-backed singly and doubly linked lists
//!
//! Links are indices into a node vector rather than owning pointers, so a
//! singly linked list can be rewired into a cycle (`set_next`) and a doubly
//! linked list can hold both directions without shared ownership.

use crate::algorithm::traits::{AlgorithmError, AlgorithmResult};

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Option<usize>,
}

/// Singly linked list; node handles are the positions in which values were
/// originally supplied
#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<ListNode<T>>,
    head: Option<usize>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links the values in order; node `i` holds `values[i]`
    pub fn from_vec(values: Vec<T>) -> Self {
        let len = values.len();
        let nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| ListNode {
                value,
                next: (i + 1 < len).then_some(i + 1),
            })
            .collect();
        Self {
            nodes,
            head: (len > 0).then_some(0),
        }
    }

    /// Number of allocated nodes, reachable or not
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Rewires the `next` link of `node`, e.g. to build a cycle
    pub fn set_next(&mut self, node: usize, next: Option<usize>) -> AlgorithmResult<()> {
        for index in std::iter::once(node).chain(next) {
            if index >= self.nodes.len() {
                return Err(AlgorithmError::invalid_argument(format!(
                    "node {} out of range for {} nodes",
                    index,
                    self.nodes.len()
                )));
            }
        }
        self.nodes[node].next = next;
        Ok(())
    }

    /// Walks from the head; stops after `node_count` steps so a cycle
    /// cannot run forever
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let index = current?;
            current = self.nodes[index].next;
            Some(&self.nodes[index].value)
        })
        .take(self.nodes.len())
    }

    /// Reverses the list in place by flipping every `next` link
    pub fn reverse(&mut self) {
        let mut previous = None;
        let mut current = self.head;
        let mut steps = 0;
        while let Some(index) = current {
            if steps == self.nodes.len() {
                break;
            }
            current = self.nodes[index].next;
            self.nodes[index].next = previous;
            previous = Some(index);
            steps += 1;
        }
        self.head = previous;
    }

    /// Floyd's tortoise and hare
    pub fn has_cycle(&self) -> bool {
        let next = |index: Option<usize>| index.and_then(|i| self.nodes[i].next);
        let mut slow = self.head;
        let mut fast = self.head;
        while fast.is_some() && next(fast).is_some() {
            slow = next(slow);
            fast = next(next(fast));
            if slow == fast {
                return true;
            }
        }
        false
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Ord> LinkedList<T> {
    /// Merges two lists already sorted in non-decreasing order
    ///
    /// Ties take from `self` first.
    pub fn merge_sorted(self, other: LinkedList<T>) -> LinkedList<T> {
        let mut left = self.into_values().into_iter().peekable();
        let mut right = other.into_values().into_iter().peekable();
        let mut merged = Vec::with_capacity(left.len() + right.len());
        loop {
            let take_right = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => b < a,
                (Some(_), None) => false,
                (None, Some(_)) => true,
                (None, None) => break,
            };
            let source = if take_right { &mut right } else { &mut left };
            merged.extend(source.next());
        }
        LinkedList::from_vec(merged)
    }

    /// Values in list order, consuming the arena
    fn into_values(self) -> Vec<T> {
        let order: Vec<usize> = {
            let mut order = Vec::new();
            let mut current = self.head;
            while let Some(index) = current {
                if order.len() == self.nodes.len() {
                    break;
                }
                order.push(index);
                current = self.nodes[index].next;
            }
            order
        };
        let mut slots: Vec<Option<T>> = self.nodes.into_iter().map(|node| Some(node.value)).collect();
        order.into_iter().filter_map(|index| slots[index].take()).collect()
    }
}

#[derive(Debug, Clone)]
struct DoublyNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list with forward and backward iteration
#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<DoublyNode<T>>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
        }
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push_back(&mut self, value: T) {
        let index = self.nodes.len();
        self.nodes.push(DoublyNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.nodes[index].value)
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.nodes[index].value)
    }

    /// Head to tail through `next` links
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let index = current?;
            current = self.nodes[index].next;
            Some(&self.nodes[index].value)
        })
    }

    /// Tail to head through `prev` links
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = self.tail;
        std::iter::from_fn(move || {
            let index = current?;
            current = self.nodes[index].prev;
            Some(&self.nodes[index].value)
        })
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse() {
        let mut list = LinkedList::from_vec(vec![1, 2, 3, 4]);
        list.reverse();
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);

        let mut empty: LinkedList<i32> = LinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_cycle_detection() {
        let mut list = LinkedList::from_vec(vec!['a', 'b', 'c', 'd']);
        assert!(!list.has_cycle());

        list.set_next(3, Some(1)).unwrap();
        assert!(list.has_cycle());
        // iteration is bounded even on a cycle
        assert_eq!(list.to_vec().len(), 4);

        assert!(list.set_next(9, None).is_err());
    }

    #[test]
    fn test_merge_sorted() {
        let a = LinkedList::from_vec(vec![1, 3, 5, 7]);
        let b = LinkedList::from_vec(vec![2, 3, 6]);
        assert_eq!(a.merge_sorted(b).to_vec(), vec![1, 2, 3, 3, 5, 6, 7]);

        let empty = LinkedList::new();
        assert_eq!(empty.merge_sorted(LinkedList::from_vec(vec![4])).to_vec(), vec![4]);
    }

    #[test]
    fn test_doubly_linked_iteration() {
        let list: DoublyLinkedList<i32> = (1..=5).collect();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&5));
    }
}
