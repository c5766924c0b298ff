//=========================================================================
// Input Buffer
//
// Collects key events between two frame boundaries and ships them to the
// runner as one batch.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Drop back-to-back duplicates (e.g. OS key repeat of KeyDown)
// - Send the batch as `PlatformEvent::Inputs` at the frame boundary
//
// Notes:
// Press and release of the same key inside one batch are both kept, so a
// tap shorter than a frame still registers. Empty batches are not sent.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{trace, warn};
use winit::{event::ElementState, keyboard::PhysicalKey};

//=== Internal Modules ====================================================

use super::input_processor::translate_key;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::PlatformEvent;

//=== InputBuffer Struct ==================================================

#[derive(Debug)]
pub struct InputBuffer {
    events: Vec<InputEvent>,
    sender: Sender<PlatformEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------

    pub fn new(sender: Sender<PlatformEvent>) -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
            sender,
        }
    }

    //--- Push -------------------------------------------------------------

    /// Appends an event unless it repeats the previous one.
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Translates and appends a Winit key. Returns `false` for keys
    /// outside the vocabulary.
    pub fn push_key(&mut self, physical_key: PhysicalKey, state: ElementState) -> bool {
        match translate_key(physical_key, state) {
            Some(event) => {
                self.push(event);
                true
            }
            None => {
                trace!(target: "platform::input", "Unmapped key ignored");
                false
            }
        }
    }

    //--- Flush ------------------------------------------------------------

    /// Sends the buffered batch and returns how many events it held.
    ///
    /// A disconnected runner only costs a warning; the events are dropped.
    pub fn flush(&mut self) -> usize {
        if self.events.is_empty() {
            return 0;
        }

        let batch = std::mem::take(&mut self.events);
        let count = batch.len();
        trace!(target: "platform::input", "Flushing {} key events", count);

        if self.sender.send(PlatformEvent::Inputs(batch)).is_err() {
            warn!(
                target: "platform::input",
                "Channel disconnected, dropping {} events",
                count
            );
        }
        count
    }

    /// Tells the runner to stop after its current frame.
    pub fn shutdown(&mut self) {
        self.flush();
        if self.sender.send(PlatformEvent::Shutdown).is_err() {
            warn!(target: "platform::input", "Channel disconnected, shutdown not delivered");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;
    use winit::keyboard::KeyCode as WinitKeyCode;

    #[test]
    fn back_to_back_duplicates_are_ignored() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new(tx);
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyB));

        assert_eq!(buffer.flush(), 2);
        assert_eq!(
            rx.try_recv(),
            Ok(PlatformEvent::Inputs(vec![
                InputEvent::KeyDown(KeyCode::KeyA),
                InputEvent::KeyDown(KeyCode::KeyB),
            ]))
        );
    }

    #[test]
    fn tap_within_one_batch_keeps_both_edges() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new(tx);
        assert!(buffer.push_key(PhysicalKey::Code(WinitKeyCode::Space), ElementState::Pressed));
        assert!(buffer.push_key(PhysicalKey::Code(WinitKeyCode::Space), ElementState::Released));
        assert!(!buffer.push_key(PhysicalKey::Code(WinitKeyCode::F13), ElementState::Pressed));

        buffer.flush();

        assert_eq!(
            rx.try_recv(),
            Ok(PlatformEvent::Inputs(vec![
                InputEvent::KeyDown(KeyCode::Space),
                InputEvent::KeyUp(KeyCode::Space),
            ]))
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn empty_buffer_sends_nothing() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new(tx);

        assert_eq!(buffer.flush(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn shutdown_flushes_pending_keys_first() {
        let (tx, rx) = unbounded();
        let mut buffer = InputBuffer::new(tx);
        buffer.push(InputEvent::KeyDown(KeyCode::KeyE));

        buffer.shutdown();

        assert_eq!(
            rx.try_recv(),
            Ok(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::KeyE)]))
        );
        assert_eq!(rx.try_recv(), Ok(PlatformEvent::Shutdown));
    }

    #[test]
    fn disconnected_runner_is_survivable() {
        let (tx, rx) = unbounded();
        drop(rx);
        let mut buffer = InputBuffer::new(tx);
        buffer.push(InputEvent::KeyDown(KeyCode::KeyE));

        assert_eq!(buffer.flush(), 1);
        buffer.shutdown();
        assert!(buffer.is_empty());
    }
}
