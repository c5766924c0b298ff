//=========================================================================
// Platform Bridge
//=========================================================================
//
// Contract between an input source and the simulation runner.
//
// Components:
// - `interface`: Event types crossing the channel
// - `event_collector`: Runner-side draining and batching
//
//=========================================================================

//=== Module Declarations =================================================

mod event_collector;
mod interface;

//=== Public API ==========================================================

pub use event_collector::{EventCollector, TickControl};
pub use interface::PlatformEvent;
