//! # Draw Queue
//!
//! A fixed-capacity ring buffer kept sorted by priority, front to back from the
//! highest priority to the lowest. The frame loop walks it front to back, so the
//! highest priority object is updated and drawn first and everything after it is
//! drawn on top.
//!
//! ```text
//!  head                                  tail
//!   │  ┌─────┬─────┬─────┬─────┐          │
//!   └─▶│ 255 │ 128 │ 128 │  3  │◀─────────┘
//!      └─────┴─────┴─────┴─────┘
//!        front ─────────▶ back
//! ```
//!
//! `head` points one slot *before* the first occupied slot and `tail` at the
//! last one, so `len == tail - head` and an empty queue has `head == tail`.
//! Both start at -1. Positions are mapped onto slots modulo the capacity.
//!
//! Insertion puts a new item in front of the first item with a strictly lower
//! priority, or at the back when there is none. Equal priorities therefore keep
//! the order they were enqueued in.
//!
//! The queue never owns more than copies of `T`. In the game `T` is a
//! [`Handle`](crate::drawable::Handle); whoever removes a handle is responsible
//! for the object behind it.

/// Capacity of the draw queue on the board.
pub const QUEUE_MAX: usize = 255;

/// An item together with the priority it was enqueued at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub item: T,
    pub priority: u8,
}

pub struct DrawQueue<T, const N: usize = QUEUE_MAX> {
    slots: [Option<Entry<T>>; N],
    head: i32,
    tail: i32,
}

impl<T, const N: usize> DrawQueue<T, N> {
    pub const fn new() -> Self {
        assert!(N > 0 && N < i32::MAX as usize / 2, "unsupported queue capacity");
        Self {
            slots: [const { None }; N],
            head: -1,
            tail: -1,
        }
    }

    /// Reset to empty. Items still in the queue are dropped.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = -1;
        self.tail = -1;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn len(&self) -> usize {
        (self.tail - self.head) as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len() == N
    }

    #[inline]
    fn slot_of(position: i32) -> usize {
        position.rem_euclid(N as i32) as usize
    }

    /// Entry at `position`, which must lie in `head+1..=tail`.
    #[inline]
    fn entry_at(&self, position: i32) -> &Entry<T> {
        debug_assert!(position > self.head && position <= self.tail);
        match &self.slots[Self::slot_of(position)] {
            Some(entry) => entry,
            None => unreachable!("empty slot inside the occupied range"),
        }
    }

    /// Insert `item` at `priority`.
    ///
    /// Fails, handing `item` back, when the queue is full. The queue is left
    /// untouched in that case.
    pub fn enqueue(&mut self, item: T, priority: u8) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }

        let mut insert_at = self.tail + 1;
        for position in (self.head + 1)..=self.tail {
            if self.entry_at(position).priority < priority {
                insert_at = position;
                break;
            }
        }

        // shift everything from insert_at back by one
        let mut position = self.tail;
        while position >= insert_at {
            let moved = self.slots[Self::slot_of(position)].take();
            self.slots[Self::slot_of(position + 1)] = moved;
            position -= 1;
        }

        self.slots[Self::slot_of(insert_at)] = Some(Entry { item, priority });
        self.tail += 1;
        Ok(())
    }

    /// Take the front item.
    pub fn dequeue(&mut self) -> Option<Entry<T>> {
        if self.is_empty() {
            return None;
        }

        self.head += 1;
        let entry = self.slots[Self::slot_of(self.head)].take();

        // keep the cursors small so they never run away
        if self.head >= N as i32 - 1 {
            self.head -= N as i32;
            self.tail -= N as i32;
        }
        entry
    }

    /// Front item without removing it.
    pub fn peek(&self) -> Option<&Entry<T>> {
        self.get(0)
    }

    /// The entry `index` places from the front.
    pub fn get(&self, index: usize) -> Option<&Entry<T>> {
        if index >= self.len() {
            return None;
        }
        Some(self.entry_at(self.head + 1 + index as i32))
    }

    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            index: 0,
        }
    }
}

impl<T: PartialEq, const N: usize> DrawQueue<T, N> {
    fn position_of(&self, item: &T) -> Option<i32> {
        ((self.head + 1)..=self.tail).find(|&position| self.entry_at(position).item == *item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.position_of(item).is_some()
    }

    pub fn priority_of(&self, item: &T) -> Option<u8> {
        self.position_of(item).map(|position| self.entry_at(position).priority)
    }

    /// Remove the first entry equal to `item`, keeping the order of the rest.
    ///
    /// Returns false if the queue is empty or `item` is not in it. The item
    /// itself is only forgotten, never destroyed.
    pub fn remove_item(&mut self, item: &T) -> bool {
        let Some(found) = self.position_of(item) else {
            return false;
        };

        self.slots[Self::slot_of(found)] = None;
        for position in found..self.tail {
            let moved = self.slots[Self::slot_of(position + 1)].take();
            self.slots[Self::slot_of(position)] = moved;
        }
        self.tail -= 1;
        true
    }
}

impl<T, const N: usize> Default for DrawQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for DrawQueue<T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DrawQueue")
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, T, const N: usize>(&'a DrawQueue<T, N>);

impl<T: core::fmt::Debug, const N: usize> core::fmt::Debug for DebugEntries<'_, T, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Front-to-back iterator over a [`DrawQueue`].
pub struct Iter<'a, T, const N: usize> {
    queue: &'a DrawQueue<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.queue.get(self.index)?;
        self.index += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a DrawQueue<T, N> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities<const N: usize>(q: &DrawQueue<u32, N>) -> Vec<u8> {
        q.iter().map(|e| e.priority).collect()
    }

    fn items<const N: usize>(q: &DrawQueue<u32, N>) -> Vec<u32> {
        q.iter().map(|e| e.item).collect()
    }

    #[test]
    fn starts_empty() {
        let q: DrawQueue<u32> = DrawQueue::new();
        assert!(q.is_empty());
        assert!(!q.is_full());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 255);
    }

    #[test]
    fn orders_by_priority_fifo_among_equals() {
        let mut q: DrawQueue<u32> = DrawQueue::new();
        for (item, prio) in [(0, 5), (1, 10), (2, 3), (3, 10)] {
            q.enqueue(item, prio).unwrap();
        }

        let mut drained = Vec::new();
        while let Some(entry) = q.dequeue() {
            drained.push((entry.item, entry.priority));
        }
        assert_eq!(drained, vec![(1, 10), (3, 10), (0, 5), (2, 3)]);
        assert!(q.is_empty());
    }

    #[test]
    fn lowest_priority_lands_at_the_back() {
        let mut q: DrawQueue<u32> = DrawQueue::new();
        q.enqueue(0, 200).unwrap();
        q.enqueue(1, 200).unwrap();
        q.enqueue(2, 1).unwrap();
        assert_eq!(items(&q), vec![0, 1, 2]);
        assert_eq!(q.len(), 3);
    }

    #[test]
    fn remove_from_middle_then_reinsert() {
        let mut q: DrawQueue<u32> = DrawQueue::new();
        for (item, prio) in [(0, 50), (1, 40), (2, 30), (3, 20), (4, 10)] {
            q.enqueue(item, prio).unwrap();
        }

        assert!(q.remove_item(&2));
        assert!(!q.contains(&2));
        assert_eq!(items(&q), vec![0, 1, 3, 4]);
        assert_eq!(q.len(), 4);

        q.enqueue(2, 45).unwrap();
        assert_eq!(items(&q), vec![0, 2, 1, 3, 4]);
        assert_eq!(q.priority_of(&2), Some(45));
    }

    #[test]
    fn remove_missing_or_from_empty_fails() {
        let mut q: DrawQueue<u32> = DrawQueue::new();
        assert!(!q.remove_item(&7));
        q.enqueue(1, 1).unwrap();
        assert!(!q.remove_item(&7));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn full_queue_rejects_and_stays_unchanged() {
        let mut q: DrawQueue<u32> = DrawQueue::new();
        for i in 0..255u32 {
            q.enqueue(i, (i % 7) as u8).unwrap();
        }
        assert!(q.is_full());
        let before = priorities(&q);

        assert_eq!(q.enqueue(999, 255), Err(999));
        assert_eq!(q.len(), 255);
        assert_eq!(priorities(&q), before);
        assert!(!q.contains(&999));
    }

    #[test]
    fn ordering_holds_across_ring_wrap() {
        let mut q: DrawQueue<u32, 4> = DrawQueue::new();
        // walk the cursors around the ring a few times
        for round in 0..10u32 {
            q.enqueue(round * 10, 1).unwrap();
            q.enqueue(round * 10 + 1, 9).unwrap();
            q.enqueue(round * 10 + 2, 5).unwrap();
            assert_eq!(priorities(&q), vec![9, 5, 1]);
            assert_eq!(q.dequeue().map(|e| e.item), Some(round * 10 + 1));
            assert_eq!(q.dequeue().map(|e| e.item), Some(round * 10 + 2));
            assert_eq!(q.dequeue().map(|e| e.item), Some(round * 10));
            assert!(q.is_empty());
        }
    }

    #[test]
    fn mixed_operations_keep_invariants() {
        let mut q: DrawQueue<u32, 8> = DrawQueue::new();
        let mut next = 0u32;
        for step in 0..200u32 {
            match step % 5 {
                0 | 1 | 2 => {
                    let prio = ((step * 37) % 11) as u8;
                    if q.enqueue(next, prio).is_ok() {
                        next += 1;
                    } else {
                        assert!(q.is_full());
                    }
                }
                3 => {
                    let _ = q.dequeue();
                }
                _ => {
                    if let Some(victim) = q.get(q.len() / 2).map(|e| e.item) {
                        assert!(q.remove_item(&victim));
                    }
                }
            }

            assert!(q.len() <= q.capacity());
            assert_eq!(q.is_full(), q.len() == q.capacity());
            assert_eq!(q.is_empty(), q.len() == 0);
            let p = priorities(&q);
            assert!(p.windows(2).all(|w| w[0] >= w[1]), "{p:?}");
        }
    }

    #[test]
    fn clear_resets() {
        let mut q: DrawQueue<u32> = DrawQueue::new();
        q.enqueue(1, 3).unwrap();
        q.enqueue(2, 4).unwrap();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.peek(), None);
    }
}
