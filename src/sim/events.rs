//=========================================================================
// Simulation Events
//
// Messages published on the simulation's `MessageBus` during a frame.
// The bus is cleared at the start of every frame, so observers read what
// happened during the most recent `frame()` call.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::controller::{ControlAuthority, PlayerState};

//=== StateChanged ========================================================

/// The player's observable state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged {
    pub from: PlayerState,
    pub to: PlayerState,
}

//=== AuthorityChanged ====================================================

/// Input authority moved between the player and the orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorityChanged {
    pub from: ControlAuthority,
    pub to: ControlAuthority,
}
