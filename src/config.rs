//=========================================================================
// Controller Configuration
//=========================================================================
//
// Tunable scalars for the player, the orb and the step timing.
//
// Every section has defaults matching the shipped game feel, builder
// style `with_*` setters, and can be loaded from TOML:
//
// ```toml
// [player]
// move_speed = 7.0
// max_jump_height = 4.0
//
// [player.horizontal]
// mode = "accelerated"
// acceleration = 20.0
// deceleration = 18.0
// vel_power = 0.9
//
// [orb]
// fade_duration = 3.0
//
// [timing]
// fixed_dt = 0.01666
// ```
//
// Values are not range-checked. Durations, speeds, radii and `fixed_dt`
// must be positive, `max_steps_per_frame` at least 1.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::physics::LayerMask;

//=== ConfigError =========================================================

/// Failure while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid controller config: {0}")]
    Parse(#[from] toml::de::Error),
}

//=== HorizontalResponse ==================================================

/// How horizontal input becomes horizontal velocity.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HorizontalResponse {
    /// Velocity is set to `axis × move_speed` every frame. Instant start
    /// and stop.
    Snap,

    /// A force `(|Δv| × rate)^vel_power × sign(Δv)` pushes toward the
    /// target speed every fixed step. `acceleration` applies while input
    /// is held, `deceleration` while it is released.
    Accelerated {
        acceleration: f32,
        deceleration: f32,
        vel_power: f32,
    },
}

impl HorizontalResponse {
    /// The curve the game was tuned with.
    pub const TUNED_CURVE: Self = Self::Accelerated {
        acceleration: 20.0,
        deceleration: 18.0,
        vel_power: 0.9,
    };
}

impl Default for HorizontalResponse {
    fn default() -> Self {
        Self::Snap
    }
}

//=== PlayerConfig ========================================================

/// Run, jump and ground-probe tuning for the player.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Top horizontal speed (units/s).
    pub move_speed: f32,

    /// Upward impulse applied at jump start.
    pub jump_force: f32,

    /// Extra gravity factor while descending.
    pub fall_multiplier: f32,

    /// Gravity factor while rising with jump released (applied as `m − 1`).
    pub low_jump_multiplier: f32,

    /// Hard ceiling on height gained above the jump origin.
    pub max_jump_height: f32,

    /// World gravity along Y the host simulates bodies under.
    pub gravity: f32,

    pub horizontal: HorizontalResponse,

    /// Probe center relative to the player position.
    pub ground_probe_offset: Vec2,

    pub ground_probe_radius: f32,

    /// Layers that count as ground.
    pub ground_mask: LayerMask,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            jump_force: 12.0,
            fall_multiplier: 3.8,
            low_jump_multiplier: 3.0,
            max_jump_height: 3.5,
            gravity: -9.81,
            horizontal: HorizontalResponse::Snap,
            ground_probe_offset: Vec2::new(0.0, -0.05),
            ground_probe_radius: 0.2,
            ground_mask: LayerMask::GROUND,
        }
    }
}

impl PlayerConfig {
    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_jump_force(mut self, jump_force: f32) -> Self {
        self.jump_force = jump_force;
        self
    }

    pub fn with_multipliers(mut self, fall: f32, low_jump: f32) -> Self {
        self.fall_multiplier = fall;
        self.low_jump_multiplier = low_jump;
        self
    }

    pub fn with_max_jump_height(mut self, height: f32) -> Self {
        self.max_jump_height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_horizontal(mut self, horizontal: HorizontalResponse) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_ground_probe(mut self, offset: Vec2, radius: f32, mask: LayerMask) -> Self {
        self.ground_probe_offset = offset;
        self.ground_probe_radius = radius;
        self.ground_mask = mask;
        self
    }
}

//=== OrbConfig ===========================================================

/// Dash, free-roam and lifetime tuning for the orb.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrbConfig {
    /// Free-roam speed (units/s), independent of input magnitude.
    pub move_speed: f32,

    /// Seconds the orb stays out before returning on its own.
    pub fade_duration: f32,

    /// Horizontal launch speed.
    pub dash_force: f32,

    /// Seconds of input-ignoring launch before free roam.
    pub dash_duration: f32,

    /// Orb offset from the player while docked.
    pub dock_offset: Vec2,

    /// The orb artwork faces left, so facing right needs a flip.
    pub sprite_faces_left: bool,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            fade_duration: 5.0,
            dash_force: 10.0,
            dash_duration: 0.2,
            dock_offset: Vec2::ZERO,
            sprite_faces_left: true,
        }
    }
}

impl OrbConfig {
    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_fade_duration(mut self, seconds: f32) -> Self {
        self.fade_duration = seconds;
        self
    }

    pub fn with_dash(mut self, force: f32, duration: f32) -> Self {
        self.dash_force = force;
        self.dash_duration = duration;
        self
    }

    pub fn with_dock_offset(mut self, offset: Vec2) -> Self {
        self.dock_offset = offset;
        self
    }
}

//=== TimingConfig ========================================================

/// Fixed-step pacing.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// Physics step length in seconds.
    pub fixed_dt: f32,

    /// Cap on physics steps run for one frame; excess time is dropped.
    pub max_steps_per_frame: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 0.02,
            max_steps_per_frame: 5,
        }
    }
}

impl TimingConfig {
    pub fn with_fixed_dt(mut self, fixed_dt: f32) -> Self {
        self.fixed_dt = fixed_dt;
        self
    }

    pub fn with_max_steps_per_frame(mut self, steps: u32) -> Self {
        self.max_steps_per_frame = steps;
        self
    }
}

//=== ControllerConfig ====================================================

/// Complete configuration handed to the simulation at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    pub player: PlayerConfig,
    pub orb: OrbConfig,
    pub timing: TimingConfig,
}

impl ControllerConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn with_player(mut self, player: PlayerConfig) -> Self {
        self.player = player;
        self
    }

    pub fn with_orb(mut self, orb: OrbConfig) -> Self {
        self.orb = orb;
        self
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ControllerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ControllerConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ControllerConfig::from_toml_str(
            r#"
            [player]
            move_speed = 7.5
            ground_probe_offset = [0.0, -0.1]
            ground_mask = 3

            [orb]
            fade_duration = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(config.player.move_speed, 7.5);
        assert_eq!(config.player.jump_force, 12.0);
        assert_eq!(config.player.ground_probe_offset, Vec2::new(0.0, -0.1));
        assert!(config.player.ground_mask.intersects(LayerMask::PLAYER));
        assert_eq!(config.orb.fade_duration, 2.0);
        assert_eq!(config.orb.dash_duration, 0.2);
        assert_eq!(config.timing, TimingConfig::default());
    }

    #[test]
    fn accelerated_response_parses_from_tagged_table() {
        let config = ControllerConfig::from_toml_str(
            r#"
            [player.horizontal]
            mode = "accelerated"
            acceleration = 20.0
            deceleration = 18.0
            vel_power = 0.9
            "#,
        )
        .unwrap();

        assert_eq!(config.player.horizontal, HorizontalResponse::TUNED_CURVE);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ControllerConfig::from_toml_str("[orb]\nfade = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid controller config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ControllerConfig::from_path("/definitely/not/here.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert!(path.ends_with("here.toml")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn builders_override_fields() {
        let config = ControllerConfig::default()
            .with_player(PlayerConfig::default().with_jump_force(15.0).with_multipliers(2.0, 2.5))
            .with_orb(OrbConfig::default().with_dash(8.0, 0.1))
            .with_timing(TimingConfig::default().with_fixed_dt(0.01));

        assert_eq!(config.player.jump_force, 15.0);
        assert_eq!(config.player.fall_multiplier, 2.0);
        assert_eq!(config.player.low_jump_multiplier, 2.5);
        assert_eq!(config.orb.dash_force, 8.0);
        assert_eq!(config.orb.dash_duration, 0.1);
        assert_eq!(config.timing.fixed_dt, 0.01);
    }
}
