//=========================================================================
// Message Queue Trait
//=========================================================================
//
// Type-erased view over `Vec<M>` so the bus can store queues of
// different message types in one map.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Message;

//=========================================================================

/// Type-erased queue storage.
pub(super) trait MessageQueue: Send {
    /// Clears all messages while preserving allocated capacity.
    fn clear_queue(&mut self);

    /// Returns the number of messages currently queued.
    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<M: Message> MessageQueue for Vec<M> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tick(u32);

    #[test]
    fn clear_queue_preserves_capacity() {
        let mut queue: Vec<Tick> = (0..50).map(Tick).collect();
        let capacity_before = queue.capacity();

        let erased: &mut dyn MessageQueue = &mut queue;
        erased.clear_queue();

        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), capacity_before);
    }

    #[test]
    fn downcast_round_trip() {
        let mut queue: Vec<Tick> = vec![Tick(4)];

        let erased: &mut dyn MessageQueue = &mut queue;
        assert_eq!(erased.len(), 1);
        assert!(erased.as_any().downcast_ref::<Vec<u8>>().is_none());

        if let Some(inner) = erased.as_any_mut().downcast_mut::<Vec<Tick>>() {
            inner.push(Tick(9));
        }

        assert_eq!(queue, vec![Tick(4), Tick(9)]);
    }
}
