//=========================================================================
// Simulation Layer
//
// Orders the two controller cadences and publishes what happened.
//
// Responsibilities:
// - Split variable frame time into fixed physics steps (`timestep`)
// - Run orb expiry, player input and physics in one fixed order
//   (`simulation`)
// - Publish state and authority changes for observers (`events`)
// - Drive the whole thing from platform input on its own thread
//   (`runner`)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod events;
pub mod runner;
pub mod simulation;
pub mod timestep;

//=== Public API ==========================================================

pub use events::{AuthorityChanged, StateChanged};
pub use runner::Runner;
pub use simulation::Simulation;
pub use timestep::FixedTimestep;
