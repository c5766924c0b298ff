//=========================================================================
// Fixed Timestep
//=========================================================================
//
// Accumulator that turns variable frame times into a whole number of
// fixed physics steps.
//
//   frame dt ──► accumulator ──► n × fixed_dt   (n ≤ max_steps)
//                     └─ remainder carried into the next frame
//
// When a frame would need more than `max_steps`, the backlog is dropped
// so a long stall cannot snowball into ever longer frames.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::config::TimingConfig;

//=== FixedTimestep =======================================================

/// Tolerance absorbing f32 drift when frame time is a multiple of the step.
const STEP_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedTimestep {
    /// # Panics
    ///
    /// Panics if `step <= 0.0` or `max_steps == 0`.
    pub fn new(step: f32, max_steps: u32) -> Self {
        assert!(step > 0.0, "Fixed step must be positive, got {}", step);
        assert!(max_steps > 0, "Max steps per frame must be at least 1");
        Self {
            step,
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Adds a frame's elapsed time and returns how many fixed steps to run.
    ///
    /// Negative `dt` counts as zero.
    pub fn accumulate(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut steps = 0;
        while steps < self.max_steps && self.accumulator + STEP_EPSILON >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }

        if self.accumulator + STEP_EPSILON >= self.step {
            let dropped = (self.accumulator / self.step).floor();
            warn!(
                target: "sim",
                "Frame needed more than {} steps, dropping {} step(s)",
                self.max_steps,
                dropped
            );
            self.accumulator = 0.0;
        }

        self.accumulator = self.accumulator.max(0.0);
        steps
    }

    /// Fixed step length in seconds.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// Time carried over, in seconds.
    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    /// Fraction of a step carried over, for render interpolation.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

impl From<TimingConfig> for FixedTimestep {
    fn from(config: TimingConfig) -> Self {
        Self::new(config.fixed_dt, config.max_steps_per_frame)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
