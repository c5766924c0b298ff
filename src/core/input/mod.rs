//=========================================================================
// Input System
//
// High-level interface for input handling.
// Wraps the `StateTracker` and the `ActionMapper`, turning each frame's
// batch of raw key events into an `InputSnapshot`.
//
// Responsibilities:
// - Track held keys and per-frame press/release edges
// - Resolve keys into gameplay actions and raw axes
// - Produce one immutable snapshot per variable-rate frame
//
// Frame lifecycle:
// ```text
//   clear edges → process events → resolve bindings → InputSnapshot
// ```
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod action_mapper;
pub mod event;
pub mod snapshot;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, Axis, AxisDirection};
pub use action_mapper::ActionMapper;
pub use event::{InputEvent, KeyCode};
pub use snapshot::InputSnapshot;
pub use state_tracker::StateTracker;

//=== External Crates =====================================================

use log::trace;

//=== InputSystem =========================================================

/// Owns the key state and bindings, and produces per-frame snapshots.
#[derive(Debug)]
pub struct InputSystem {
    tracker: StateTracker,
    mapper: ActionMapper,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    /// Creates an input system with the given bindings.
    pub fn new(mapper: ActionMapper) -> Self {
        Self {
            tracker: StateTracker::new(),
            mapper,
        }
    }

    /// Creates an input system with [`ActionMapper::with_default_bindings`].
    pub fn with_default_bindings() -> Self {
        Self::new(ActionMapper::with_default_bindings())
    }

    //--- process_frame() --------------------------------------------------
    //
    // Must be called exactly once per variable-rate frame, even with an
    // empty batch, so press/release edges last a single frame.
    //
    pub fn process_frame(&mut self, events: &[InputEvent]) -> InputSnapshot {
        self.tracker.clear();
        self.tracker.process_events(events);

        let snapshot = self.snapshot();
        if !events.is_empty() {
            trace!("Input frame: {} events → {:?}", events.len(), snapshot);
        }
        snapshot
    }

    /// Resolves the current tracker state without advancing the frame.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            horizontal: self.mapper.axis_value(&self.tracker, Axis::Horizontal),
            vertical: self.mapper.axis_value(&self.tracker, Axis::Vertical),
            jump_pressed: self.mapper.action_pressed(&self.tracker, Action::Jump),
            jump_held: self.mapper.action_held(&self.tracker, Action::Jump),
            toggle_orb_pressed: self.mapper.action_pressed(&self.tracker, Action::ToggleOrb),
        }
    }

    //--- Accessors --------------------------------------------------------

    /// Raw key state, for queries outside the action vocabulary.
    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    /// Bindings, mutable so they can be remapped at runtime.
    pub fn mapper_mut(&mut self) -> &mut ActionMapper {
        &mut self.mapper
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::with_default_bindings()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------
    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown(key)
    }
    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp(key)
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn jump_edge_lasts_one_frame() {
        let mut system = InputSystem::default();

        let first = system.process_frame(&[key_down(KeyCode::Space)]);
        assert!(first.jump_pressed);
        assert!(first.jump_held);

        let second = system.process_frame(&[]);
        assert!(!second.jump_pressed);
        assert!(second.jump_held);

        let third = system.process_frame(&[key_up(KeyCode::Space)]);
        assert!(!third.jump_pressed);
        assert!(!third.jump_held);
    }

    #[test]
    fn held_toggle_does_not_refire() {
        let mut system = InputSystem::default();

        assert!(system.process_frame(&[key_down(KeyCode::KeyE)]).toggle_orb_pressed);
        // OS key repeat while held
        assert!(!system.process_frame(&[key_down(KeyCode::KeyE)]).toggle_orb_pressed);
        assert!(!system.process_frame(&[]).toggle_orb_pressed);

        system.process_frame(&[key_up(KeyCode::KeyE)]);
        assert!(system.process_frame(&[key_down(KeyCode::KeyE)]).toggle_orb_pressed);
    }

    #[test]
    fn w_jumps_and_pushes_vertical_axis() {
        let mut system = InputSystem::default();

        let snapshot = system.process_frame(&[key_down(KeyCode::KeyW), key_down(KeyCode::KeyD)]);

        assert!(snapshot.jump_pressed);
        assert_eq!(snapshot.vertical, 1.0);
        assert_eq!(snapshot.horizontal, 1.0);
    }

    #[test]
    fn remapped_binding_takes_effect() {
        let mut system = InputSystem::default();
        system.mapper_mut().bind_action(KeyCode::KeyQ, Action::ToggleOrb);

        let snapshot = system.process_frame(&[key_down(KeyCode::KeyQ)]);
        assert!(snapshot.toggle_orb_pressed);
        assert!(system.tracker().is_key_down(KeyCode::KeyQ));
    }
}
