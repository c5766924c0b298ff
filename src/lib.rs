//=========================================================================
// Orb Platformer - Library Root
//
// Player and orb controllers for a 2D side-view platformer.
//
// Responsibilities:
// - Player run/jump with an asymmetric, capped jump arc (`controller`)
// - Orb companion that dashes out, roams, and returns on its own
// - Single control-authority hand-off between the two
// - Fixed-step ordering and frame events (`sim`)
// - Winit key batching for a runner thread (`platform`)
//
// Typical usage:
// ```no_run
// use orb_platformer::prelude::*;
// use glam::Vec2;
//
// let player = Rig::new(
//     KinematicBody::new(Vec2::ZERO).with_gravity(Vec2::new(0.0, -9.81)).with_floor(0.0),
//     SpriteFlags::visible(),
// );
// let orb = Rig::new(KinematicBody::new(Vec2::ZERO), SpriteFlags::hidden());
// let sim = Simulation::new(ControllerConfig::default(), player, orb, FlatGround::new(0.0));
//
// let (tx, rx) = crossbeam_channel::unbounded();
// let runner = Runner::new(sim, InputSystem::default(), rx).spawn(60.0);
//
// // In the host's winit handler:
// let mut keys = InputBuffer::new(tx);
// keys.push_key(physical_key, state);   // KeyboardInput
// keys.flush();                         // RedrawRequested
// keys.shutdown();                      // CloseRequested
// let _ = runner.join();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod config;
pub mod controller;
pub mod core;
pub mod physics;
pub mod platform;
pub mod prelude;
pub mod sim;

//--- Public Exports ------------------------------------------------------

pub use config::{ConfigError, ControllerConfig};
pub use controller::{ControlAuthority, OrbController, PlayerController, PlayerState};
pub use sim::{Runner, Simulation};
