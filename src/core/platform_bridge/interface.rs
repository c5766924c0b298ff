//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing from an input source (window loop, replay file,
// test harness) into the simulation thread.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the input source to the simulation runner.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Key events gathered since the previous batch, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Stop the runner after the current frame.
    Shutdown,
}
