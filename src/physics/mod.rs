//=========================================================================
// Physics & Presentation Collaborators
//=========================================================================
//
// The controllers never integrate motion or draw anything themselves.
// They drive the collaborators below, which a host engine implements on
// top of its own rigid bodies, collision world and sprite renderer.
//
// Contract:
// ```text
//   PhysicsBody   velocity / impulse / force / simulated flag / simulate(dt)
//   OverlapQuery  circle-vs-world overlap filtered by LayerMask
//   Sprite        visibility + horizontal flip
// ```
//
// `kinematic` ships small reference implementations used by tests and
// headless runs.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod kinematic;

//=== External Dependencies ===============================================

use glam::Vec2;
use serde::Deserialize;

//=== Public API ==========================================================

pub use kinematic::{FlatGround, KinematicBody, SpriteFlags};

//=== LayerMask ===========================================================

/// Bitmask of collision layers used to filter overlap queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);

    /// Layer 0: walkable ground.
    pub const GROUND: Self = Self(1 << 0);

    /// Layer 1: the player body.
    pub const PLAYER: Self = Self(1 << 1);

    /// Layer 2: the orb body.
    pub const ORB: Self = Self(1 << 2);

    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask for a single layer index. Indices past 31 map to `NONE`.
    #[inline]
    pub const fn layer(index: u32) -> Self {
        match 1u32.checked_shl(index) {
            Some(bits) => Self(bits),
            None => Self::NONE,
        }
    }

    /// Returns `true` if the two masks share any layer.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Union of two masks.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::GROUND
    }
}

//=== PhysicsBody =========================================================

/// A dynamic 2D body owned by the host physics engine.
///
/// `simulate(dt)` is the host's fixed-interval step for this body. Hosts
/// that step their whole world at once may implement it as a no-op and
/// step the world after the controllers' `integrate` calls.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;

    /// Teleports the body.
    fn set_position(&mut self, position: Vec2);

    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Instantaneous change of momentum. Ignored while not simulated.
    fn apply_impulse(&mut self, impulse: Vec2);

    /// Continuous force applied over the next simulate step. Ignored while
    /// not simulated.
    fn apply_force(&mut self, force: Vec2);

    /// Enables or disables simulation. A disabled body keeps its position
    /// and ignores forces.
    fn set_simulated(&mut self, simulated: bool);

    fn is_simulated(&self) -> bool;

    /// Advances the body by one fixed step.
    fn simulate(&mut self, dt: f32);
}

//=== OverlapQuery ========================================================

/// Shape-overlap queries against the static world.
pub trait OverlapQuery {
    /// Returns `true` if a circle overlaps any collider on `mask`.
    fn overlap_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool;
}

//=== Sprite ==============================================================

/// A renderable, horizontally flippable sprite.
pub trait Sprite {
    fn set_visible(&mut self, visible: bool);

    fn is_visible(&self) -> bool;

    fn set_flip_x(&mut self, flip: bool);

    fn flip_x(&self) -> bool;
}

//=========================================================================
// Unit Tests
//=========================================================================
