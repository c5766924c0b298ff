//=========================================================================
// Runner
//=========================================================================
//
// Drives a `Simulation` from platform input on a dedicated thread.
//
// Architecture:
// ```text
//   Input source ──PlatformEvent──► EventCollector
//                                        │ flat key events
//                                        ▼
//                                   InputSystem ──InputSnapshot──► Simulation::frame
// ```
//
// Every mutation of controller state happens on the runner's thread, so
// the player and orb never need locks. A `Shutdown` event or a dropped
// sender ends the loop.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Dependencies ===============================================

use super::simulation::Simulation;
use crate::core::input::InputSystem;
use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use crate::physics::{OverlapQuery, PhysicsBody, Sprite};

//=== Runner ==============================================================

#[derive(Debug)]
pub struct Runner<B, S, G>
where
    B: PhysicsBody,
    S: Sprite,
    G: OverlapQuery,
{
    simulation: Simulation<B, S, G>,
    input: InputSystem,
    collector: EventCollector,
}

impl<B, S, G> Runner<B, S, G>
where
    B: PhysicsBody,
    S: Sprite,
    G: OverlapQuery,
{
    pub fn new(
        simulation: Simulation<B, S, G>,
        input: InputSystem,
        receiver: Receiver<PlatformEvent>,
    ) -> Self {
        Self {
            simulation,
            input,
            collector: EventCollector::new(receiver),
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Collects pending input and runs one simulation frame.
    ///
    /// Returns `Exit` without simulating once shutdown is seen.
    pub fn pump(&mut self, dt: f32) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        let snapshot = self.input.process_frame(self.collector.events());
        self.simulation.frame(dt, &snapshot);
        TickControl::Continue
    }

    //--- Queries ----------------------------------------------------------

    pub fn simulation(&self) -> &Simulation<B, S, G> {
        &self.simulation
    }

    pub fn input(&self) -> &InputSystem {
        &self.input
    }

    pub fn into_simulation(self) -> Simulation<B, S, G> {
        self.simulation
    }
}

impl<B, S, G> Runner<B, S, G>
where
    B: PhysicsBody + Send + 'static,
    S: Sprite + Send + 'static,
    G: OverlapQuery + Send + 'static,
{
    /// Runs the loop at `fps` frames per second on a new thread.
    ///
    /// The thread hands the runner back when it exits.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn spawn(mut self, fps: f64) -> thread::JoinHandle<Self> {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        let frame_duration = Duration::from_secs_f64(1.0 / fps);
        let dt = frame_duration.as_secs_f32();

        thread::spawn(move || {
            info!(target: "sim", "Runner thread started at {} fps", fps);

            loop {
                let frame_start = Instant::now();

                if self.pump(dt) == TickControl::Exit {
                    info!(
                        target: "sim",
                        "Runner thread exiting after {} frames",
                        self.simulation.frame_count()
                    );
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            self
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
