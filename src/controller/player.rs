//=========================================================================
// Player Controller
//=========================================================================
//
// Side-view run and jump with an orb hand-off.
//
// Per frame (`advance`):
// - Pick up orb deactivation notifications and take authority back
// - Horizontal velocity and facing from the axis (zeroed while the orb
//   has authority)
// - Jump on the press edge while grounded
// - Launch or recall the orb on the toggle edge
//
// Per fixed step (`integrate`):
// - Ground probe
// - Extra gravity while falling, and while rising with jump released
// - Hard cap on height gained above the jump origin
// - Horizontal force when using the accelerated response
//
// Jump arc:
// ```text
//   vy ▲
//      │╲              rising, held:    gravity
//      │ ╲╲            rising, released: gravity × low_jump_multiplier
//      │   ╲╲          falling:         gravity × (1 + fall_multiplier)
//    0 ┼─────╲──────►
//      │      ╲╲╲        cap: vy = 0 once y − y0 ≥ max_jump_height
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::orb::{DeactivationCause, OrbController, OrbDeactivated};
use super::{ControlAuthority, Facing, Rig};
use crate::config::{HorizontalResponse, PlayerConfig};
use crate::core::input::InputSnapshot;
use crate::physics::{OverlapQuery, PhysicsBody, Sprite};

//=== States ==============================================================

/// Vertical motion classification, refreshed every fixed step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MotionState {
    #[default]
    Grounded,
    Rising,
    Falling,
}

/// Externally observable player state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    #[default]
    Grounded,
    Rising,
    Falling,

    /// The orb holds authority. Input is ignored; the body keeps
    /// responding to gravity.
    OrbSuppressed,
}

impl From<MotionState> for PlayerState {
    fn from(motion: MotionState) -> Self {
        match motion {
            MotionState::Grounded => Self::Grounded,
            MotionState::Rising => Self::Rising,
            MotionState::Falling => Self::Falling,
        }
    }
}

//=== PlayerController ====================================================

/// Owns the control-authority flag and drives the player body.
#[derive(Debug)]
pub struct PlayerController {
    config: PlayerConfig,
    authority: ControlAuthority,

    motion: MotionState,
    grounded: bool,

    /// Y position at the start of the current jump.
    jump_origin_y: f32,

    facing: Facing,

    /// Horizontal axis after authority gating.
    move_axis: f32,
    jump_held: bool,

    orb_events: Receiver<OrbDeactivated>,
}

impl PlayerController {
    //--- Construction -----------------------------------------------------

    /// `orb_events` should come from `OrbController::subscribe_deactivated`
    /// on the orb this player launches.
    pub fn new(config: PlayerConfig, orb_events: Receiver<OrbDeactivated>) -> Self {
        Self {
            config,
            authority: ControlAuthority::Player,
            motion: MotionState::Grounded,
            grounded: false,
            jump_origin_y: 0.0,
            facing: Facing::default(),
            move_axis: 0.0,
            jump_held: false,
            orb_events,
        }
    }

    //--- Per-Frame --------------------------------------------------------

    /// Applies this frame's input.
    pub fn advance<B, S, OB, OS>(
        &mut self,
        input: &InputSnapshot,
        rig: &mut Rig<B, S>,
        orb: &mut OrbController,
        orb_rig: &mut Rig<OB, OS>,
    ) where
        B: PhysicsBody,
        S: Sprite,
        OB: PhysicsBody,
        OS: Sprite,
    {
        self.sync_authority();

        let in_control = self.authority == ControlAuthority::Player;
        self.move_axis = if in_control { input.horizontal } else { 0.0 };
        self.jump_held = in_control && input.jump_held;

        if self.config.horizontal == HorizontalResponse::Snap {
            let velocity = rig.body.velocity();
            rig.body
                .set_velocity(Vec2::new(self.move_axis * self.config.move_speed, velocity.y));
        }

        if let Some(facing) = Facing::from_axis(self.move_axis) {
            self.facing = facing;
        }
        rig.sprite.set_flip_x(self.facing == Facing::Left);

        if in_control && input.jump_pressed && self.grounded {
            self.start_jump(&mut rig.body);
        }

        if input.toggle_orb_pressed {
            self.toggle_orb(rig.body.position(), orb, orb_rig);
        }
    }

    //--- Per-Step ---------------------------------------------------------

    /// Probes for ground and shapes the vertical arc.
    pub fn integrate<B, G>(&mut self, fixed_dt: f32, body: &mut B, ground: &G)
    where
        B: PhysicsBody,
        G: OverlapQuery,
    {
        let position = body.position();
        let mut velocity = body.velocity();

        self.grounded = ground.overlap_circle(
            position + self.config.ground_probe_offset,
            self.config.ground_probe_radius,
            self.config.ground_mask,
        );

        if self.authority == ControlAuthority::Player {
            if velocity.y < 0.0 {
                velocity.y += self.config.gravity * self.config.fall_multiplier * fixed_dt;
            } else if velocity.y > 0.0 && !self.jump_held {
                velocity.y +=
                    self.config.gravity * (self.config.low_jump_multiplier - 1.0) * fixed_dt;
            }
        }

        if !self.grounded
            && velocity.y > 0.0
            && position.y - self.jump_origin_y >= self.config.max_jump_height
        {
            velocity.y = 0.0;
            debug!(
                target: "player",
                "Jump capped at {:.2} above origin",
                position.y - self.jump_origin_y
            );
        }

        body.set_velocity(velocity);

        if let HorizontalResponse::Accelerated {
            acceleration,
            deceleration,
            vel_power,
        } = self.config.horizontal
        {
            let target = self.move_axis * self.config.move_speed;
            let diff = target - velocity.x;
            let rate = if target.abs() > 0.01 {
                acceleration
            } else {
                deceleration
            };
            let force = (diff.abs() * rate).powf(vel_power) * diff.signum();
            body.apply_force(Vec2::new(force, 0.0));
        }

        self.update_motion(velocity.y);
    }

    //--- Queries ----------------------------------------------------------

    pub fn authority(&self) -> ControlAuthority {
        self.authority
    }

    pub fn state(&self) -> PlayerState {
        match self.authority {
            ControlAuthority::Orb => PlayerState::OrbSuppressed,
            ControlAuthority::Player => self.motion.into(),
        }
    }

    /// Motion state regardless of authority.
    pub fn motion(&self) -> MotionState {
        self.motion
    }

    /// Result of the last ground probe.
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn jump_origin_y(&self) -> f32 {
        self.jump_origin_y
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    //--- Internal Helpers -------------------------------------------------

    /// Takes authority back for every pending orb deactivation.
    pub(crate) fn sync_authority(&mut self) {
        for event in self.orb_events.try_iter() {
            if self.authority == ControlAuthority::Orb {
                info!(target: "player", "Authority returned to player ({:?})", event.cause);
                self.authority = ControlAuthority::Player;
            }
        }
    }

    fn start_jump<B: PhysicsBody>(&mut self, body: &mut B) {
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, 0.0));
        self.jump_origin_y = body.position().y;
        body.apply_impulse(Vec2::new(0.0, self.config.jump_force));
        self.motion = MotionState::Rising;

        debug!(target: "player", "Jump from y={:.2}", self.jump_origin_y);
    }

    fn toggle_orb<OB: PhysicsBody, OS: Sprite>(
        &mut self,
        anchor: Vec2,
        orb: &mut OrbController,
        orb_rig: &mut Rig<OB, OS>,
    ) {
        if orb.is_active() {
            orb.deactivate(Some(anchor), DeactivationCause::Recalled, orb_rig);
        } else if orb.activate(Some(anchor), self.facing, orb_rig) {
            self.authority = ControlAuthority::Orb;
            self.move_axis = 0.0;
            self.jump_held = false;
            info!(target: "player", "Authority handed to orb");
        }

        // Our own recall notification lands here
        self.sync_authority();
    }

    fn update_motion(&mut self, vertical: f32) {
        let next = if self.grounded && vertical <= 0.0 {
            MotionState::Grounded
        } else if vertical > 0.0 {
            MotionState::Rising
        } else {
            MotionState::Falling
        };

        if next != self.motion {
            trace!(target: "player", "Motion {:?} -> {:?}", self.motion, next);
            if next == MotionState::Grounded {
                debug!(target: "player", "Landed");
            }
            self.motion = next;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbConfig;
    use crate::physics::{FlatGround, KinematicBody, SpriteFlags};

    const FIXED_DT: f32 = 0.02;
    const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

    type TestRig = Rig<KinematicBody, SpriteFlags>;

    struct Harness {
        player: PlayerController,
        rig: TestRig,
        orb: OrbController,
        orb_rig: TestRig,
        ground: FlatGround,
    }

    impl Harness {
        fn new(config: PlayerConfig) -> Self {
            let mut orb = OrbController::new(OrbConfig::default());
            let player = PlayerController::new(config, orb.subscribe_deactivated());
            let rig = Rig::new(
                KinematicBody::new(Vec2::ZERO).with_gravity(GRAVITY).with_floor(0.0),
                SpriteFlags::visible(),
            );
            let mut orb_rig = Rig::new(KinematicBody::new(Vec2::ZERO), SpriteFlags::hidden());
            orb.dock(Some(Vec2::ZERO), &mut orb_rig);

            let mut harness = Self {
                player,
                rig,
                orb,
                orb_rig,
                ground: FlatGround::new(0.0),
            };
            harness.step();
            harness
        }

        fn frame(&mut self, input: InputSnapshot) {
            self.player
                .advance(&input, &mut self.rig, &mut self.orb, &mut self.orb_rig);
        }

        fn step(&mut self) {
            self.player
                .integrate(FIXED_DT, &mut self.rig.body, &self.ground);
            self.rig.body.simulate(FIXED_DT);
        }

        /// One frame of input followed by one fixed step.
        fn tick(&mut self, input: InputSnapshot) {
            self.frame(input);
            self.step();
        }

        /// Runs until the player lands again and returns the peak height.
        fn jump_peak(&mut self, hold: bool) -> f32 {
            self.tick(InputSnapshot::IDLE.with_jump_press());
            let held = if hold {
                InputSnapshot::IDLE.with_jump_held()
            } else {
                InputSnapshot::IDLE
            };

            let mut peak = self.rig.body.position().y;
            for _ in 0..500 {
                self.tick(held);
                peak = peak.max(self.rig.body.position().y);
                if self.player.motion() == MotionState::Grounded {
                    break;
                }
            }
            peak
        }
    }

    //--- Ground & Horizontal ----------------------------------------------

    #[test]
    fn starts_grounded_on_flat_ground() {
        let harness = Harness::new(PlayerConfig::default());

        assert!(harness.player.is_grounded());
        assert_eq!(harness.player.state(), PlayerState::Grounded);
        assert_eq!(harness.player.authority(), ControlAuthority::Player);
    }

    #[test]
    fn snap_sets_horizontal_velocity_and_facing() {
        let mut harness = Harness::new(PlayerConfig::default());

        harness.frame(InputSnapshot::axes(-1.0, 0.0));
        assert_eq!(harness.rig.body.velocity().x, -6.0);
        assert_eq!(harness.player.facing(), Facing::Left);
        assert!(harness.rig.sprite.flip_x());

        harness.frame(InputSnapshot::IDLE);
        assert_eq!(harness.rig.body.velocity().x, 0.0);
        assert_eq!(harness.player.facing(), Facing::Left);
        assert!(harness.rig.sprite.flip_x());
    }

    #[test]
    fn accelerated_response_ramps_toward_target() {
        let config = PlayerConfig::default().with_horizontal(HorizontalResponse::TUNED_CURVE);
        let mut harness = Harness::new(config);

        harness.tick(InputSnapshot::axes(1.0, 0.0));
        let first = harness.rig.body.velocity().x;
        assert!(first > 0.0 && first < 6.0);

        for _ in 0..50 {
            harness.tick(InputSnapshot::axes(1.0, 0.0));
        }
        assert!((harness.rig.body.velocity().x - 6.0).abs() < 0.05);

        for _ in 0..50 {
            harness.tick(InputSnapshot::IDLE);
        }
        assert!(harness.rig.body.velocity().x.abs() < 0.05);
    }

    //--- Jumping ----------------------------------------------------------

    #[test]
    fn jump_press_applies_impulse_from_rest() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.rig.body.set_velocity(Vec2::new(0.0, -1.0));

        harness.frame(InputSnapshot::IDLE.with_jump_press());

        assert_eq!(harness.rig.body.velocity().y, 12.0);
        assert_eq!(harness.player.jump_origin_y(), 0.0);
        assert_eq!(harness.player.state(), PlayerState::Rising);
    }

    #[test]
    fn jump_requires_ground() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.rig.body.set_position(Vec2::new(0.0, 5.0));
        harness.step();
        assert!(!harness.player.is_grounded());

        let before = harness.rig.body.velocity().y;
        harness.frame(InputSnapshot::IDLE.with_jump_press());

        assert_eq!(harness.rig.body.velocity().y, before);
    }

    #[test]
    fn held_jump_goes_higher_than_tapped_jump() {
        let mut held = Harness::new(PlayerConfig::default());
        let mut tapped = Harness::new(PlayerConfig::default());

        let held_peak = held.jump_peak(true);
        let tapped_peak = tapped.jump_peak(false);

        assert!(held_peak > tapped_peak);
        assert_eq!(held.player.state(), PlayerState::Grounded);
        assert_eq!(tapped.player.state(), PlayerState::Grounded);
    }

    #[test]
    fn jump_height_is_capped() {
        let config = PlayerConfig::default().with_jump_force(30.0);
        let mut harness = Harness::new(config);

        let peak = harness.jump_peak(true);

        // One step of overshoot at most: 30 units/s × 0.02 s
        assert!(peak >= 3.5);
        assert!(peak < 3.5 + 30.0 * FIXED_DT);
    }

    #[test]
    fn cap_zeroes_velocity_on_first_tick_at_max_height() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.frame(InputSnapshot::IDLE.with_jump_press());
        assert_eq!(harness.player.jump_origin_y(), 0.0);

        harness.rig.body.set_position(Vec2::new(0.0, 3.49));
        harness.player
            .integrate(FIXED_DT, &mut harness.rig.body, &harness.ground);
        assert_eq!(harness.rig.body.velocity().y, 12.0);

        harness.rig.body.set_position(Vec2::new(0.0, 3.5));
        harness.player
            .integrate(FIXED_DT, &mut harness.rig.body, &harness.ground);
        assert_eq!(harness.rig.body.velocity().y, 0.0);
        assert_eq!(harness.player.state(), PlayerState::Falling);
    }

    #[test]
    fn falling_uses_extra_gravity() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.rig.body.set_position(Vec2::new(0.0, 10.0));
        harness.rig.body.set_velocity(Vec2::new(0.0, -1.0));

        harness.player
            .integrate(FIXED_DT, &mut harness.rig.body, &harness.ground);

        let expected = -1.0 + -9.81 * 3.8 * FIXED_DT;
        assert!((harness.rig.body.velocity().y - expected).abs() < 1e-5);
        assert_eq!(harness.player.state(), PlayerState::Falling);
    }

    //--- Orb Hand-off -----------------------------------------------------

    #[test]
    fn toggle_hands_authority_to_orb_and_back() {
        let mut harness = Harness::new(PlayerConfig::default());

        harness.frame(InputSnapshot::IDLE.with_orb_toggle());
        assert!(harness.orb.is_active());
        assert_eq!(harness.player.authority(), ControlAuthority::Orb);
        assert_eq!(harness.player.state(), PlayerState::OrbSuppressed);

        harness.frame(InputSnapshot::IDLE.with_orb_toggle());
        assert!(!harness.orb.is_active());
        assert_eq!(harness.player.authority(), ControlAuthority::Player);
        assert_eq!(harness.player.state(), PlayerState::Grounded);
    }

    #[test]
    fn orb_launches_along_player_facing() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.frame(InputSnapshot::axes(-1.0, 0.0));

        harness.frame(InputSnapshot::IDLE.with_orb_toggle());

        assert_eq!(harness.orb_rig.body.velocity(), Vec2::new(-10.0, 0.0));
    }

    #[test]
    fn suppressed_player_ignores_move_and_jump() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.frame(InputSnapshot::axes(1.0, 0.0).with_orb_toggle());
        assert_eq!(harness.player.authority(), ControlAuthority::Orb);

        harness.frame(InputSnapshot::axes(1.0, 0.0).with_jump_press());

        assert_eq!(harness.rig.body.velocity(), Vec2::ZERO);
        assert_eq!(harness.player.state(), PlayerState::OrbSuppressed);
    }

    #[test]
    fn orb_expiry_returns_authority_next_frame() {
        let mut harness = Harness::new(PlayerConfig::default());
        harness.frame(InputSnapshot::IDLE.with_orb_toggle());

        let anchor = Some(harness.rig.body.position());
        harness
            .orb
            .advance(5.0, &InputSnapshot::IDLE, anchor, &mut harness.orb_rig);
        assert!(!harness.orb.is_active());
        assert_eq!(harness.player.authority(), ControlAuthority::Orb);

        harness.frame(InputSnapshot::axes(1.0, 0.0));
        assert_eq!(harness.player.authority(), ControlAuthority::Player);
        assert_eq!(harness.rig.body.velocity().x, 6.0);
    }
}
