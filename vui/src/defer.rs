//! Next-tick task queue.
//!
//! Work posted during an event dispatch must not run inside that dispatch.
//! The host posts tasks here and drains them on its next turn, so a task
//! always observes the state left behind by the event that posted it.

use std::collections::VecDeque;

/// FIFO of tasks waiting for the next tick.
#[derive(Debug)]
pub struct TickQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for TickQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> TickQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task for the next tick.
    pub fn post(&mut self, task: T) {
        self.pending.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every task posted so far, in posting order.
    ///
    /// Tasks posted while the returned batch is being processed wait for
    /// the following tick.
    pub fn take_tick(&mut self) -> VecDeque<T> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_posted_during_tick_wait() {
        let mut queue = TickQueue::new();
        queue.post(1);
        queue.post(2);

        let batch = queue.take_tick();
        for task in &batch {
            queue.post(task * 10);
        }

        assert_eq!(batch.into_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.take_tick().into_iter().collect::<Vec<_>>(), vec![10, 20]);
        assert!(queue.is_empty());
    }
}
