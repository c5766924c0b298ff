//=========================================================================
// Signal
//=========================================================================
//
// One-to-many notification channel.
//
// Architecture:
//   emitter ── emit(msg) ──┬─► Sender ─► Receiver (subscriber A)
//                          └─► Sender ─► Receiver (subscriber B)
//
// The emitter owns only the sending halves. Each subscriber owns its
// `Receiver`, so dropping the receiver ends the subscription; the dead
// sender is pruned on the next emit.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};

//=== Signal ==============================================================

/// Subscribable event source backed by unbounded channels.
#[derive(Debug)]
pub struct Signal<T: Clone + Send> {
    subscribers: Vec<Sender<T>>,
}

impl<T: Clone + Send> Signal<T> {
    /// Creates a signal with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Delivers `msg` to every live subscriber.
    ///
    /// Returns how many subscribers received it.
    pub fn emit(&mut self, msg: T) -> usize {
        self.subscribers.retain(|tx| tx.send(msg.clone()).is_ok());
        self.subscribers.len()
    }

    /// Number of registered subscribers (including ones not yet pruned).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + Send> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
