//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use orb_platformer::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Configuration
pub use crate::config::{
    ConfigError, ControllerConfig, HorizontalResponse, OrbConfig, PlayerConfig, TimingConfig,
};

// Controllers
pub use crate::controller::{
    ControlAuthority, DeactivationCause, Facing, MotionState, OrbController, OrbDeactivated,
    OrbPhase, PlayerController, PlayerState, Rig,
};

// Physics collaborators
pub use crate::physics::{
    FlatGround, KinematicBody, LayerMask, OverlapQuery, PhysicsBody, Sprite, SpriteFlags,
};

// Input
pub use crate::core::input::{Action, ActionMapper, InputEvent, InputSnapshot, InputSystem, KeyCode};

// Events and plumbing
pub use crate::core::message_bus::MessageBus;
pub use crate::core::platform_bridge::{PlatformEvent, TickControl};
pub use crate::core::signal::Signal;

// Simulation
pub use crate::sim::{AuthorityChanged, FixedTimestep, Runner, Simulation, StateChanged};

// Platform
pub use crate::platform::{translate_key, InputBuffer};
