//=========================================================================
// Input Snapshot
//=========================================================================
//
// Immutable per-frame view of the input the controllers consume.
//
// Controllers never see keys. They see two raw axes and three button
// states, which lets tests and other input sources build snapshots
// directly without going through the keyboard path.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== InputSnapshot =======================================================

/// Per-frame input state handed to `advance()`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Raw horizontal axis in [-1, 1].
    pub horizontal: f32,

    /// Raw vertical axis in [-1, 1].
    pub vertical: f32,

    /// Jump went down this frame.
    pub jump_pressed: bool,

    /// Jump is held this frame.
    pub jump_held: bool,

    /// Orb toggle went down this frame.
    pub toggle_orb_pressed: bool,
}

impl InputSnapshot {
    /// Snapshot with no input at all.
    pub const IDLE: Self = Self {
        horizontal: 0.0,
        vertical: 0.0,
        jump_pressed: false,
        jump_held: false,
        toggle_orb_pressed: false,
    };

    /// Snapshot holding only the given axes.
    pub fn axes(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(-1.0, 1.0),
            vertical: vertical.clamp(-1.0, 1.0),
            ..Self::IDLE
        }
    }

    /// Adds a jump press (edge + held) to the snapshot.
    pub fn with_jump_press(mut self) -> Self {
        self.jump_pressed = true;
        self.jump_held = true;
        self
    }

    /// Marks jump as held without a fresh press.
    pub fn with_jump_held(mut self) -> Self {
        self.jump_held = true;
        self
    }

    /// Adds an orb toggle press to the snapshot.
    pub fn with_orb_toggle(mut self) -> Self {
        self.toggle_orb_pressed = true;
        self
    }

    /// Both axes as a vector.
    #[inline]
    pub fn movement(&self) -> Vec2 {
        Vec2::new(self.horizontal, self.vertical)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
