//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events for one frame with bounded polling and
// shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → flat event list → TickControl
//
// Bounded polling keeps a flooded channel from starving the frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events and flattens them into one per-frame batch.
#[derive(Debug)]
pub struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    frame_events: Vec<InputEvent>,
}

impl EventCollector {
    /// Upper bound on channel messages drained per frame.
    pub const MAX_BATCHES_PER_FRAME: usize = 100;

    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            frame_events: Vec::with_capacity(16),
        }
    }

    /// Collects pending platform events for this frame.
    ///
    /// Returns `Exit` on `Shutdown` or when every sender is gone. Events
    /// that arrived in the same drain before the shutdown are kept.
    pub fn collect_frame(&mut self) -> TickControl {
        self.frame_events.clear();
        let mut drained = 0;

        while drained < Self::MAX_BATCHES_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    self.frame_events.extend(batch);
                    drained += 1;
                }
                Ok(PlatformEvent::Shutdown) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_BATCHES_PER_FRAME {
            warn!("Input backlog: drained {} batches this frame", drained);
        }

        TickControl::Continue
    }

    /// Events collected by the last `collect_frame()`.
    pub fn events(&self) -> &[InputEvent] {
        &self.frame_events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
