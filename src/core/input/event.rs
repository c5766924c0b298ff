//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level keyboard events.
//
// This module abstracts away platform-specific input (e.g. Winit) into a
// small, engine-friendly format consumed by the `StateTracker`.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    StateTracker (held keys + per-frame edges)
//         ↓
//    ActionMapper → InputSnapshot (axes, jump, orb toggle)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Only the keys a platformer binds by default are listed; anything else
/// reported by the platform collapses into `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    LeftShift,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Events are processed in order, so a press and a release of the same
/// key inside one batch register both edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Unrecognized or unsupported event. Ignored by the tracker.
    Unidentified,
}

impl InputEvent {
    /// Returns the key carried by the event, if any.
    pub fn key(&self) -> Option<KeyCode> {
        match *self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(key),
            Self::Unidentified => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_accessor_returns_payload() {
        assert_eq!(InputEvent::KeyDown(KeyCode::KeyE).key(), Some(KeyCode::KeyE));
        assert_eq!(InputEvent::KeyUp(KeyCode::Space).key(), Some(KeyCode::Space));
        assert_eq!(InputEvent::Unidentified.key(), None);
    }

    #[test]
    fn down_and_up_are_distinct() {
        let mut set = HashSet::new();
        set.insert(InputEvent::KeyDown(KeyCode::KeyW));
        set.insert(InputEvent::KeyUp(KeyCode::KeyW));
        set.insert(InputEvent::KeyDown(KeyCode::KeyW));
        assert_eq!(set.len(), 2, "KeyDown and KeyUp must coexist as distinct events");
    }
}
