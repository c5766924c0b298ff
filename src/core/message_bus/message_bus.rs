//=========================================================================
// Message Bus
//=========================================================================
//
// Type-keyed outbox for frame events.
//
// Architecture:
//   Simulation → push<M>() → HashMap<TypeId, Vec<M>>
//                                 ↓
//   Observers (animation, audio) ← read<M>() (shared)
//                                 ↓
//   Simulation ─────────────→ clear_all() at frame start
//
// Pattern: push → read (N consumers) → clear → repeat
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::warn;

//=== Internal Dependencies ===============================================

use super::message_queue::MessageQueue;

//=== Public API ==========================================================

/// Marker trait for types that can be sent through the MessageBus.
///
/// Automatically implemented for all types that are Send + 'static.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=========================================================================

/// Per-type message queues, cleared at frame boundaries.
#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, Box<dyn MessageQueue>>,
}

impl MessageBus {
    /// Creates a new empty message bus.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Message Operations -----------------------------------------------

    /// Pushes a message into the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        let queue = self
            .queues
            .entry(TypeId::of::<M>())
            .or_insert_with(|| Box::new(Vec::<M>::new()));

        match queue.as_any_mut().downcast_mut::<Vec<M>>() {
            Some(queue) => queue.push(msg),
            None => warn!(
                "MessageBus queue for {} holds a foreign type, message dropped",
                std::any::type_name::<M>()
            ),
        }
    }

    /// Returns all messages of type M queued since the last clear.
    ///
    /// Multiple observers may read the same messages in one frame.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the most recent message of type M, if any.
    pub fn latest<M: Message>(&self) -> Option<&M> {
        self.read::<M>().last()
    }

    //--- Query API --------------------------------------------------------

    /// Returns true if there are any messages of type M queued.
    pub fn has_messages<M: Message>(&self) -> bool {
        !self.read::<M>().is_empty()
    }

    /// Returns the number of messages of type M currently queued.
    pub fn count<M: Message>(&self) -> usize {
        self.read::<M>().len()
    }

    /// Total number of queued messages across every type.
    pub fn total(&self) -> usize {
        self.queues.values().map(|q| q.len()).sum()
    }

    //--- Clearing ---------------------------------------------------------

    /// Clears all messages of type M, preserving allocated capacity.
    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear_queue();
        }
    }

    /// Clears every queue, preserving map entries and Vec capacity.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<M>>())
    }
}

impl std::fmt::Debug for MessageBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageBus")
            .field("types", &self.queues.len())
            .field("queued", &self.total())
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================
