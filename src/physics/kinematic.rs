//=========================================================================
// Reference Collaborators
//=========================================================================
//
// Minimal implementations of the physics/sprite contracts:
//
// - `KinematicBody`: point mass, semi-implicit Euler, optional floor
// - `FlatGround`:    infinite horizontal ground surface on one layer
// - `SpriteFlags`:   visibility + flip bookkeeping
//
// Good enough to exercise the controllers deterministically; a real game
// plugs in its engine's bodies instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::{LayerMask, OverlapQuery, PhysicsBody, Sprite};

//=== KinematicBody =======================================================

/// Point-mass body with gravity and an optional floor plane.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    gravity: Vec2,
    gravity_scale: f32,
    floor: Option<f32>,
    simulated: bool,
    pending_force: Vec2,
}

impl KinematicBody {
    /// Unit-mass body at `position`, simulated, with no gravity and no floor.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass: 1.0,
            gravity: Vec2::ZERO,
            gravity_scale: 1.0,
            floor: None,
            simulated: true,
            pending_force: Vec2::ZERO,
        }
    }

    /// Sets world gravity (e.g. `Vec2::new(0.0, -9.81)`).
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    /// Mass used to convert impulses and forces. Must be positive.
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Clamps `position.y` to at least `floor_y`, killing downward speed.
    pub fn with_floor(mut self, floor_y: f32) -> Self {
        self.floor = Some(floor_y);
        self
    }

    pub fn with_simulated(mut self, simulated: bool) -> Self {
        self.simulated = simulated;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        if self.simulated {
            self.velocity += impulse / self.mass;
        }
    }

    fn apply_force(&mut self, force: Vec2) {
        if self.simulated {
            self.pending_force += force;
        }
    }

    fn set_simulated(&mut self, simulated: bool) {
        self.simulated = simulated;
        if !simulated {
            self.pending_force = Vec2::ZERO;
        }
    }

    fn is_simulated(&self) -> bool {
        self.simulated
    }

    fn simulate(&mut self, dt: f32) {
        if !self.simulated {
            return;
        }

        let acceleration = self.gravity * self.gravity_scale + self.pending_force / self.mass;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.pending_force = Vec2::ZERO;

        if let Some(floor) = self.floor {
            if self.position.y < floor {
                self.position.y = floor;
                self.velocity.y = self.velocity.y.max(0.0);
            }
        }
    }
}

//=== FlatGround ==========================================================

/// Infinite horizontal ground at `surface_y` on the given layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    pub surface_y: f32,
    pub layers: LayerMask,
}

impl FlatGround {
    pub fn new(surface_y: f32) -> Self {
        Self {
            surface_y,
            layers: LayerMask::GROUND,
        }
    }

    pub fn on_layers(mut self, layers: LayerMask) -> Self {
        self.layers = layers;
        self
    }
}

impl OverlapQuery for FlatGround {
    fn overlap_circle(&self, center: Vec2, radius: f32, mask: LayerMask) -> bool {
        mask.intersects(self.layers) && center.y - radius <= self.surface_y
    }
}

//=== SpriteFlags =========================================================

/// Sprite state without any rendering attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteFlags {
    pub visible: bool,
    pub flip_x: bool,
}

impl SpriteFlags {
    pub fn visible() -> Self {
        Self {
            visible: true,
            flip_x: false,
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }
}

impl Sprite for SpriteFlags {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }

    fn flip_x(&self) -> bool {
        self.flip_x
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
