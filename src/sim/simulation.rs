//=========================================================================
// Simulation
//=========================================================================
//
// Single authoritative update order for the player, the orb and their
// bodies.
//
// Per frame:
// ```text
//   frame(dt, input)
//     ├─ orb.advance       lifetime expiry resolved first
//     ├─ player.advance    reads authority after any expiry
//     ├─ n × fixed step    n from the FixedTimestep accumulator
//     │    ├─ player.integrate
//     │    ├─ orb.integrate
//     │    ├─ simulate both bodies
//     │    └─ re-anchor the docked orb to the player
//     └─ publish StateChanged / AuthorityChanged / OrbDeactivated
// ```
//
// After every `frame()` the orb is active exactly when the orb holds
// authority, and a docked orb sits on the player.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::events::{AuthorityChanged, StateChanged};
use super::timestep::FixedTimestep;
use crate::config::ControllerConfig;
use crate::controller::{
    ControlAuthority, DeactivationCause, OrbController, OrbDeactivated, PlayerController,
    PlayerState, Rig,
};
use crate::core::input::InputSnapshot;
use crate::core::message_bus::{Message, MessageBus};
use crate::physics::{OverlapQuery, PhysicsBody, Sprite};

//=== Simulation ==========================================================

/// Owns both controllers, both rigs and the ground they stand on.
#[derive(Debug)]
pub struct Simulation<B, S, G>
where
    B: PhysicsBody,
    S: Sprite,
    G: OverlapQuery,
{
    player: PlayerController,
    orb: OrbController,
    player_rig: Rig<B, S>,
    orb_rig: Rig<B, S>,
    ground: G,

    timestep: FixedTimestep,
    bus: MessageBus,

    /// Simulation's own subscription, forwarded onto the bus.
    orb_events: Receiver<OrbDeactivated>,

    last_state: PlayerState,
    last_authority: ControlAuthority,
    frame_count: u64,
}

impl<B, S, G> Simulation<B, S, G>
where
    B: PhysicsBody,
    S: Sprite,
    G: OverlapQuery,
{
    //--- Construction -----------------------------------------------------

    /// Wires the controllers together and docks the orb on the player.
    ///
    /// # Panics
    ///
    /// Panics if the timing section holds a non-positive step or zero
    /// max steps.
    pub fn new(config: ControllerConfig, player_rig: Rig<B, S>, mut orb_rig: Rig<B, S>, ground: G) -> Self {
        let mut orb = OrbController::new(config.orb);
        let player = PlayerController::new(config.player, orb.subscribe_deactivated());
        let orb_events = orb.subscribe_deactivated();

        orb.dock(Some(player_rig.body.position()), &mut orb_rig);

        info!(
            target: "sim",
            "Simulation ready (fixed_dt {:.4}s, max {} steps/frame)",
            config.timing.fixed_dt,
            config.timing.max_steps_per_frame
        );

        Self {
            last_state: player.state(),
            last_authority: player.authority(),
            player,
            orb,
            player_rig,
            orb_rig,
            ground,
            timestep: FixedTimestep::from(config.timing),
            bus: MessageBus::new(),
            orb_events,
            frame_count: 0,
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one rendered frame and returns how many fixed steps it took.
    ///
    /// Events published during the previous frame are cleared first.
    pub fn frame(&mut self, dt: f32, input: &InputSnapshot) -> u32 {
        self.bus.clear_all();
        self.frame_count += 1;

        let anchor = Some(self.player_rig.body.position());
        self.orb.advance(dt, input, anchor, &mut self.orb_rig);
        self.player.advance(input, &mut self.player_rig, &mut self.orb, &mut self.orb_rig);
        self.publish_changes();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.fixed_step();
        }

        self.forward_orb_events();

        trace!(
            target: "sim",
            "Frame {} dt={:.4} steps={} state={:?}",
            self.frame_count,
            dt,
            steps,
            self.player.state()
        );
        steps
    }

    /// Sends the orb home on behalf of the host, e.g. on a level reset.
    ///
    /// Returns `false` if the orb was already docked. Authority is back
    /// with the player when this returns.
    pub fn recall_orb(&mut self) -> bool {
        let anchor = Some(self.player_rig.body.position());
        let recalled = self
            .orb
            .deactivate(anchor, DeactivationCause::Recalled, &mut self.orb_rig);
        if recalled {
            self.player.sync_authority();
            debug!(target: "sim", "Orb recalled by host");
        }
        recalled
    }

    //--- Queries ----------------------------------------------------------

    /// Messages of type `M` published during the last frame.
    pub fn events<M: Message>(&self) -> &[M] {
        self.bus.read::<M>()
    }

    pub fn bus(&self) -> &MessageBus {
        &self.bus
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn orb(&self) -> &OrbController {
        &self.orb
    }

    pub fn player_rig(&self) -> &Rig<B, S> {
        &self.player_rig
    }

    /// Mutable access for teleports and other host-driven edits.
    pub fn player_rig_mut(&mut self) -> &mut Rig<B, S> {
        &mut self.player_rig
    }

    pub fn orb_rig(&self) -> &Rig<B, S> {
        &self.orb_rig
    }

    pub fn ground(&self) -> &G {
        &self.ground
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    //--- Internal Helpers -------------------------------------------------

    fn fixed_step(&mut self) {
        let dt = self.timestep.step();

        self.player
            .integrate(dt, &mut self.player_rig.body, &self.ground);
        self.orb.integrate(dt, &mut self.orb_rig.body);

        self.player_rig.body.simulate(dt);
        self.orb_rig.body.simulate(dt);

        self.anchor_docked_orb();
        self.publish_changes();
    }

    fn anchor_docked_orb(&mut self) {
        if let Some(offset) = self.orb.attachment() {
            let anchored = self.player_rig.body.position() + offset;
            self.orb_rig.body.set_position(anchored);
            self.orb_rig.body.set_velocity(Vec2::ZERO);
        }
    }

    fn publish_changes(&mut self) {
        let state = self.player.state();
        if state != self.last_state {
            self.bus.push(StateChanged {
                from: self.last_state,
                to: state,
            });
            self.last_state = state;
        }

        let authority = self.player.authority();
        if authority != self.last_authority {
            info!(target: "sim", "Authority {:?} -> {:?}", self.last_authority, authority);
            self.bus.push(AuthorityChanged {
                from: self.last_authority,
                to: authority,
            });
            self.last_authority = authority;
        }
    }

    fn forward_orb_events(&mut self) {
        for event in self.orb_events.try_iter() {
            self.bus.push(event);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
