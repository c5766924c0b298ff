//=========================================================================
// Controllers
//=========================================================================
//
// The player and the orb, plus the small vocabulary they share.
//
// Control flow:
// ```text
//   PlayerController ── activate / recall ──► OrbController
//          ▲                                       │
//          └──── Receiver<OrbDeactivated> ◄── Signal (expiry or recall)
// ```
//
// Exactly one of them owns input at any time (`ControlAuthority`). The
// player owns the flag and hands it over when it launches the orb; the orb
// never touches the player directly, it only announces that it has gone
// back to the docked state.
//
// Both controllers split their work into two cadences:
// - `advance`:   once per rendered frame, variable `dt`
// - `integrate`: once per fixed physics step
//
//=========================================================================

//=== Module Declarations =================================================

pub mod orb;
pub mod player;

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use crate::physics::{PhysicsBody, Sprite};

//=== Public API ==========================================================

pub use orb::{DeactivationCause, OrbController, OrbDeactivated, OrbPhase};
pub use player::{MotionState, PlayerController, PlayerState};

//=== ControlAuthority ====================================================

/// Which entity currently consumes directional and action input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ControlAuthority {
    #[default]
    Player,
    Orb,
}

//=== Facing ==============================================================

/// Horizontal facing of a character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Facing implied by a horizontal axis value. Zero input implies none,
    /// so the caller keeps its previous facing.
    pub fn from_axis(horizontal: f32) -> Option<Self> {
        if horizontal < 0.0 {
            Some(Self::Left)
        } else if horizontal > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// `-1.0` for left, `1.0` for right.
    #[inline]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Unit vector along the facing.
    #[inline]
    pub fn direction(self) -> Vec2 {
        Vec2::new(self.sign(), 0.0)
    }
}

//=== Rig =================================================================

/// A body and the sprite drawn for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rig<B, S> {
    pub body: B,
    pub sprite: S,
}

impl<B: PhysicsBody, S: Sprite> Rig<B, S> {
    pub fn new(body: B, sprite: S) -> Self {
        Self { body, sprite }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
