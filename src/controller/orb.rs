//=========================================================================
// Orb Controller
//=========================================================================
//
// A companion the player launches and steers for a limited time.
//
// Lifecycle:
// ```text
//   Docked ──activate──► Dashing ──dash timer──► FreeRoam
//     ▲                     │                       │
//     └──── deactivate ◄────┴── lifetime / recall ──┘
// ```
//
// - Docked:   hidden, not simulated, parked at the anchor + dock offset
// - Dashing:  fixed launch velocity, movement input ignored
// - FreeRoam: velocity follows the movement axes at constant speed
//
// Every transition back to Docked emits exactly one `OrbDeactivated`
// through the orb's signal. Deactivating an already docked orb is a
// no-op and emits nothing.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{Facing, Rig};
use crate::config::OrbConfig;
use crate::core::input::InputSnapshot;
use crate::core::signal::Signal;
use crate::physics::{PhysicsBody, Sprite};

//=== OrbDeactivated ======================================================

/// Why the orb went back to the docked state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeactivationCause {
    /// Lifetime ran out.
    Expired,

    /// The player toggled it back.
    Recalled,
}

/// Emitted once per transition from active to docked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrbDeactivated {
    pub cause: DeactivationCause,
}

//=== OrbPhase ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrbPhase {
    #[default]
    Docked,
    Dashing,
    FreeRoam,
}

//=== OrbController =======================================================

/// Drives the orb body and sprite. Holds no reference to the player.
#[derive(Debug)]
pub struct OrbController {
    config: OrbConfig,
    phase: OrbPhase,

    /// Seconds left before the orb docks on its own.
    lifetime: f32,

    dash_remaining: f32,
    dash_velocity: Vec2,

    facing: Facing,
    move_input: Vec2,

    /// Offset from the anchor while parked. `None` while out.
    attachment: Option<Vec2>,

    deactivated: Signal<OrbDeactivated>,
}

impl OrbController {
    //--- Construction -----------------------------------------------------

    pub fn new(config: OrbConfig) -> Self {
        Self {
            config,
            phase: OrbPhase::Docked,
            lifetime: 0.0,
            dash_remaining: 0.0,
            dash_velocity: Vec2::ZERO,
            facing: Facing::default(),
            move_input: Vec2::ZERO,
            attachment: Some(config.dock_offset),
            deactivated: Signal::new(),
        }
    }

    /// Registers for deactivation notifications.
    pub fn subscribe_deactivated(&mut self) -> Receiver<OrbDeactivated> {
        self.deactivated.subscribe()
    }

    /// Parks the body at `anchor` without notifying anyone. Used to put
    /// a freshly created orb in its resting place.
    pub fn dock<B: PhysicsBody, S: Sprite>(&mut self, anchor: Option<Vec2>, rig: &mut Rig<B, S>) {
        self.reset_to_docked();
        self.stow(anchor, rig);
    }

    //--- Activation -------------------------------------------------------

    /// Launches the orb from `anchor` along `facing`.
    ///
    /// Returns `false` and changes nothing if the orb is already out.
    pub fn activate<B: PhysicsBody, S: Sprite>(
        &mut self,
        anchor: Option<Vec2>,
        facing: Facing,
        rig: &mut Rig<B, S>,
    ) -> bool {
        if self.is_active() {
            warn!(target: "orb", "Activate ignored: orb already {:?}", self.phase);
            return false;
        }

        self.phase = OrbPhase::Dashing;
        self.lifetime = self.config.fade_duration;
        self.dash_remaining = self.config.dash_duration;
        self.dash_velocity = facing.direction() * self.config.dash_force;
        self.facing = facing;
        self.move_input = Vec2::ZERO;
        self.attachment = None;

        if let Some(anchor) = anchor {
            rig.body.set_position(anchor);
        }
        rig.body.set_simulated(true);
        rig.body.set_velocity(self.dash_velocity);
        rig.sprite.set_visible(true);
        self.apply_flip(&mut rig.sprite);

        info!(
            target: "orb",
            "Orb launched {:?} at {:?} ({:.2}s lifetime)",
            facing,
            rig.body.position(),
            self.lifetime
        );
        true
    }

    /// Sends the orb back to `anchor` and notifies subscribers.
    ///
    /// A `None` anchor leaves the body where it is and unattached. Returns
    /// `false` if the orb was already docked.
    pub fn deactivate<B: PhysicsBody, S: Sprite>(
        &mut self,
        anchor: Option<Vec2>,
        cause: DeactivationCause,
        rig: &mut Rig<B, S>,
    ) -> bool {
        if !self.is_active() {
            debug!(target: "orb", "Deactivate ignored: orb already docked");
            return false;
        }

        self.reset_to_docked();
        self.stow(anchor, rig);

        let notified = self.deactivated.emit(OrbDeactivated { cause });
        info!(target: "orb", "Orb docked ({:?}), {} subscriber(s) notified", cause, notified);
        true
    }

    //--- Per-Frame --------------------------------------------------------

    /// Counts down the lifetime and updates facing from input.
    pub fn advance<B: PhysicsBody, S: Sprite>(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        anchor: Option<Vec2>,
        rig: &mut Rig<B, S>,
    ) {
        if !self.is_active() {
            return;
        }

        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.deactivate(anchor, DeactivationCause::Expired, rig);
            return;
        }

        self.move_input = input.movement();

        if let Some(facing) = Facing::from_axis(input.horizontal) {
            self.facing = facing;
        }
        self.apply_flip(&mut rig.sprite);
    }

    //--- Per-Step ---------------------------------------------------------

    /// Writes the dash or free-roam velocity to the body.
    pub fn integrate<B: PhysicsBody>(&mut self, fixed_dt: f32, body: &mut B) {
        match self.phase {
            OrbPhase::Docked => {}

            OrbPhase::Dashing => {
                self.dash_remaining -= fixed_dt;
                if self.dash_remaining <= 0.0 {
                    self.dash_remaining = 0.0;
                    self.phase = OrbPhase::FreeRoam;
                    body.set_velocity(Vec2::ZERO);
                    debug!(target: "orb", "Dash finished, free roam");
                } else {
                    body.set_velocity(self.dash_velocity);
                }
            }

            OrbPhase::FreeRoam => {
                body.set_velocity(self.move_input.normalize_or_zero() * self.config.move_speed);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase != OrbPhase::Docked
    }

    pub fn phase(&self) -> OrbPhase {
        self.phase
    }

    /// Remaining lifetime in seconds; zero while docked.
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    pub fn dash_remaining(&self) -> f32 {
        self.dash_remaining
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Dock offset while parked at an anchor, `None` otherwise.
    pub fn attachment(&self) -> Option<Vec2> {
        self.attachment
    }

    pub fn config(&self) -> &OrbConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    fn reset_to_docked(&mut self) {
        self.phase = OrbPhase::Docked;
        self.lifetime = 0.0;
        self.dash_remaining = 0.0;
        self.dash_velocity = Vec2::ZERO;
        self.move_input = Vec2::ZERO;
    }

    fn stow<B: PhysicsBody, S: Sprite>(&mut self, anchor: Option<Vec2>, rig: &mut Rig<B, S>) {
        rig.body.set_velocity(Vec2::ZERO);
        rig.body.set_simulated(false);
        rig.sprite.set_visible(false);

        match anchor {
            Some(anchor) => {
                rig.body.set_position(anchor + self.config.dock_offset);
                self.attachment = Some(self.config.dock_offset);
            }
            None => self.attachment = None,
        }
    }

    fn apply_flip<S: Sprite>(&self, sprite: &mut S) {
        let flip = match self.facing {
            Facing::Right => self.config.sprite_faces_left,
            Facing::Left => !self.config.sprite_faces_left,
        };
        sprite.set_flip_x(flip);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
