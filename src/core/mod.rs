//=========================================================================
// Core Infrastructure
//
// Domain-agnostic plumbing the controllers and the simulation are built
// on.
//
// Responsibilities:
// - Turn raw key events into per-frame input snapshots (`input`)
// - Carry frame events to observers (`message_bus`)
// - Deliver one-to-many notifications without back-references (`signal`)
// - Move input batches across threads (`platform_bridge`)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod message_bus;
pub mod platform_bridge;
pub mod signal;

//=== Public API ==========================================================

pub use input::{Action, InputEvent, InputSnapshot, InputSystem, KeyCode};
pub use message_bus::MessageBus;
pub use platform_bridge::{EventCollector, PlatformEvent, TickControl};
pub use signal::Signal;
