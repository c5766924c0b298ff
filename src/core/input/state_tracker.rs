//=========================================================================
// State Tracker
//=========================================================================
//
// Low-level key state tracking with per-frame edge detection.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys held) → query
//
// Frame lifecycle: clear() → process_events() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
/// Frame lifecycle: clear() → process_events() → query.
#[derive(Debug)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub(crate) fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
    }

    /// Processes input events, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    //--- Internal Helpers -------------------------------------------------
    fn process_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down (OS key repeat)
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.insert(key);
                }
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN (one frame only).
    ///
    /// Use for discrete actions like jumping or launching the orb.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    ///
    /// Use for continuous actions like movement or holding a jump.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    /// Returns an iterator over all keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }

    /// Returns an iterator over all keys pressed this frame.
    pub fn keys_pressed(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_pressed_this_frame.iter()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for StateTracker {
    fn default() -> Self {
        Self::new()
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

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    /// Tests that key_pressed only returns true on transition frame.
    #[test]
    fn key_pressed_only_on_transition_frame() {
        let mut system = StateTracker::new();

        // Frame 1: Key down
        system.clear();
        system.process_events(&[key_down(KeyCode::KeyE)]);
        assert!(system.is_key_pressed(KeyCode::KeyE));
        assert!(system.is_key_down(KeyCode::KeyE));

        // Frame 2: Still held
        system.clear();
        system.process_events(&[]);
        assert!(!system.is_key_pressed(KeyCode::KeyE));
        assert!(system.is_key_down(KeyCode::KeyE));

        // Frame 3: Released
        system.clear();
        system.process_events(&[key_up(KeyCode::KeyE)]);
        assert!(!system.is_key_pressed(KeyCode::KeyE));
        assert!(!system.is_key_down(KeyCode::KeyE));
        assert!(system.is_key_released(KeyCode::KeyE));
    }

    #[test]
    fn key_down_persists_across_frames() {
        let mut system = StateTracker::new();

        system.process_events(&[key_down(KeyCode::KeyD)]);

        for _ in 0..10 {
            system.clear();
            system.process_events(&[]);
            assert!(system.is_key_down(KeyCode::KeyD), "Key should remain down");
        }
    }

    #[test]
    fn multiple_keys_tracked_independently() {
        let mut system = StateTracker::new();

        system.process_events(&[
            key_down(KeyCode::KeyW),
            key_down(KeyCode::KeyA),
            key_down(KeyCode::Space),
        ]);

        system.clear();
        system.process_events(&[key_up(KeyCode::KeyA)]);

        assert!(system.is_key_down(KeyCode::KeyW));
        assert!(!system.is_key_down(KeyCode::KeyA));
        assert!(system.is_key_down(KeyCode::Space));
        assert_eq!(system.keys_down().count(), 2);
    }

    /// Press + release inside one batch registers both edges.
    #[test]
    fn fast_tap_both_transitions_captured() {
        let mut system = StateTracker::new();

        system.process_events(&[key_down(KeyCode::Space), key_up(KeyCode::Space)]);

        assert!(system.is_key_pressed(KeyCode::Space), "Should register press");
        assert!(system.is_key_released(KeyCode::Space), "Should register release");
        assert!(!system.is_key_down(KeyCode::Space), "Should end up not down");
    }

    /// OS key repeat must not re-fire the press edge.
    #[test]
    fn repeated_key_down_does_not_refire() {
        let mut system = StateTracker::new();

        system.process_events(&[key_down(KeyCode::KeyE)]);
        assert!(system.is_key_pressed(KeyCode::KeyE));

        system.clear();
        system.process_events(&[key_down(KeyCode::KeyE), key_down(KeyCode::KeyE)]);
        assert!(!system.is_key_pressed(KeyCode::KeyE), "Repeat should not trigger");
        assert!(system.is_key_down(KeyCode::KeyE));
    }

    #[test]
    fn key_up_without_down_ignored() {
        let mut system = StateTracker::new();

        system.process_events(&[key_up(KeyCode::KeyZ)]);

        assert!(!system.is_key_released(KeyCode::KeyZ), "Should not register spurious release");
    }

    #[test]
    fn keys_pressed_iterator() {
        let mut system = StateTracker::new();

        system.process_events(&[key_down(KeyCode::KeyA), key_down(KeyCode::KeyE)]);

        let pressed: Vec<_> = system.keys_pressed().copied().collect();
        assert_eq!(pressed.len(), 2);
        assert!(pressed.contains(&KeyCode::KeyA));
        assert!(pressed.contains(&KeyCode::KeyE));
    }

    #[test]
    fn clear_resets_frame_deltas() {
        let mut system = StateTracker::new();

        system.process_events(&[key_down(KeyCode::KeyA)]);
        system.clear();

        assert!(!system.is_key_pressed(KeyCode::KeyA)); // Delta cleared
        assert!(system.is_key_down(KeyCode::KeyA));     // Persistent state remains
    }

    #[test]
    fn unidentified_events_ignored() {
        let mut system = StateTracker::new();

        system.process_events(&[InputEvent::Unidentified]);

        assert_eq!(system.keys_down().count(), 0);
        assert_eq!(system.keys_pressed().count(), 0);
    }
}
