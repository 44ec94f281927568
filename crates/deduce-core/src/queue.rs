//! # Queue Module
//!
//! FIFO work-list of implications to (re-)examine.
//!
//! Marking a property enqueues every implication that mentions it, unless that
//! implication is already pending. Once shifted off the queue an implication
//! may be enqueued again by a later marking: learning a new property can make
//! a previously inert implication fire.

use crate::index::ImplicationIndex;
use crate::implication::Implication;
use crate::primitives::targets;
use crate::seen::Seen;
use std::collections::VecDeque;
use std::fmt::Debug;

/// The work-list of one prover run.
///
/// Implications are tracked by their position in the index; ids are unique
/// within an index, so this is the same as tracking them by id.
#[derive(Debug)]
pub struct Queue<'a, T, P> {
    index: &'a ImplicationIndex<T, P>,
    waiting: VecDeque<usize>,
    pending: Seen<usize>,
}

impl<'a, T, P: Ord + Debug> Queue<'a, T, P> {
    /// Create an empty queue over `index`.
    #[must_use]
    pub fn new(index: &'a ImplicationIndex<T, P>) -> Self {
        Self {
            index,
            waiting: VecDeque::new(),
            pending: Seen::new(),
        }
    }

    /// Enqueue every implication mentioning `property` that is not already pending.
    ///
    /// Returns the number of implications added.
    pub fn mark(&mut self, property: &P) -> usize {
        let mut added = 0;
        for &position in self.index.positions(property) {
            if self.pending.visit(position) {
                self.waiting.push_back(position);
                added += 1;
            }
        }
        tracing::trace!(target: targets::QUEUE, ?property, added, "marked");
        added
    }

    /// Pop the oldest pending implication, or `None` once drained.
    pub fn shift(&mut self) -> Option<&'a Implication<T, P>> {
        let position = self.waiting.pop_front()?;
        self.pending.release(&position);
        self.index.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Formula;

    fn chain() -> ImplicationIndex<u32, &'static str> {
        ImplicationIndex::new(vec![
            Implication::new(1, Formula::atom("P", true), Formula::atom("Q", true)),
            Implication::new(2, Formula::atom("Q", true), Formula::atom("R", true)),
            Implication::new(3, Formula::atom("P", true), Formula::atom("R", true)),
        ])
        .expect("index")
    }

    #[test]
    fn shift_is_fifo() {
        let index = chain();
        let mut queue = Queue::new(&index);

        assert_eq!(queue.mark(&"P"), 2);
        assert_eq!(queue.mark(&"R"), 1);

        let ids: Vec<u32> = std::iter::from_fn(|| queue.shift()).map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn pending_implication_not_duplicated() {
        let index = chain();
        let mut queue = Queue::new(&index);

        queue.mark(&"P");
        assert_eq!(queue.mark(&"Q"), 1); // 1 already waiting, only 2 is new
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn shifted_implication_can_be_marked_again() {
        let index = chain();
        let mut queue = Queue::new(&index);

        queue.mark(&"Q");
        let first = queue.shift().map(|i| i.id);
        assert_eq!(first, Some(1));

        assert_eq!(queue.mark(&"P"), 2);
        let ids: Vec<u32> = std::iter::from_fn(|| queue.shift()).map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn unknown_property_marks_nothing() {
        let index = chain();
        let mut queue = Queue::new(&index);
        assert_eq!(queue.mark(&"Z"), 0);
        assert!(queue.shift().is_none());
    }
}
