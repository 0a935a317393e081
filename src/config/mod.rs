// SPDX-License-Identifier: MPL-2.0
//! This module handles the control's tuning configuration: the physics and
//! gesture constants that shape how a spin feels, with optional loading and
//! saving of a `tuning.toml` file so the feel can be adjusted without a
//! rebuild.
//!
//! # Examples
//!
//! ```no_run
//! use iced_dial::config::{self, Tuning};
//!
//! // Load existing tuning (falls back to defaults)
//! let mut tuning = config::load().unwrap_or_default();
//!
//! // Make flicks die down faster
//! tuning.decay = 0.98;
//!
//! // Save the modified tuning
//! config::save(&tuning).expect("Failed to save tuning");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "tuning.toml";
const APP_NAME: &str = "IcedDial";

/// Tuning constants for the interaction physics.
///
/// Every field is clamped by [`Tuning::sanitized`] rather than validated,
/// so a hand-edited file can never leave the control unusable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Velocity cap for the flywheel, preserving sign.
    pub max_velocity: f32,
    /// Velocity magnitude below which the flywheel clicks in and stops.
    pub min_velocity: f32,
    /// Per-tick multiplicative velocity decay, strictly below 1.
    pub decay: f32,
    /// Fraction of the velocity accumulated into fractional rotation per tick.
    pub nudge_factor: f32,
    /// Divisor scaling raw release velocity into flywheel velocity.
    pub velocity_divisor: f32,
    /// Flywheel tick rate.
    pub frames_per_second: u32,
    /// Pointer travel (display units) promoting a press to a pan.
    pub pan_start_distance: f32,
    /// Weight of the newest sample in velocity smoothing, in `(0, 1]`.
    pub velocity_smoothing: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_velocity: defaults::MAX_FLYWHEEL_VELOCITY,
            min_velocity: defaults::MIN_FLYWHEEL_VELOCITY,
            decay: defaults::FLYWHEEL_DECAY,
            nudge_factor: defaults::FLYWHEEL_NUDGE_FACTOR,
            velocity_divisor: defaults::FLYWHEEL_VELOCITY_DIVISOR,
            frames_per_second: defaults::FLYWHEEL_FRAMES_PER_SECOND,
            pan_start_distance: defaults::PAN_START_DISTANCE,
            velocity_smoothing: defaults::VELOCITY_SMOOTHING,
        }
    }
}

impl Tuning {
    /// Clamps every field into its usable range.
    ///
    /// Notably `decay` is kept strictly below 1 so any spin terminates, and
    /// `min_velocity` stays positive so the stop condition is reachable.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.min_velocity = self.min_velocity.max(0.001);
        self.max_velocity = self.max_velocity.max(self.min_velocity);
        self.decay = self.decay.clamp(0.1, 0.9999);
        self.nudge_factor = self.nudge_factor.max(0.001);
        self.velocity_divisor = self.velocity_divisor.max(1.0);
        self.frames_per_second = self.frames_per_second.clamp(1, 240);
        self.pan_start_distance = self.pan_start_distance.max(0.0);
        self.velocity_smoothing = self.velocity_smoothing.clamp(0.05, 1.0);
        self
    }

    /// Interval between flywheel ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frames_per_second.max(1)))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Tuning> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Tuning::default())
}

pub fn save(tuning: &Tuning) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(tuning, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Tuning> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str::<Tuning>(&content)
        .map(Tuning::sanitized)
        .unwrap_or_default())
}

pub fn save_to_path(tuning: &Tuning, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(tuning)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_tuning() {
        let tuning = Tuning {
            decay: 0.98,
            max_velocity: 50.0,
            ..Tuning::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("tuning.toml");

        save_to_path(&tuning, &config_path).expect("failed to save tuning");
        let loaded = load_from_path(&config_path).expect("failed to load tuning");

        assert_eq!(loaded, tuning);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("tuning.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Tuning::default());
    }

    #[test]
    fn load_from_path_clamps_out_of_range_values() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("tuning.toml");
        fs::write(
            &config_path,
            "decay = 7.5\nmin_velocity = -3.0\nframes_per_second = 0\n",
        )
        .expect("failed to write tuning");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.decay < 1.0);
        assert!(loaded.min_velocity > 0.0);
        assert!(loaded.frames_per_second >= 1);
    }

    #[test]
    fn sanitized_keeps_velocity_band_ordered() {
        let tuning = Tuning {
            min_velocity: 10.0,
            max_velocity: 2.0,
            ..Tuning::default()
        }
        .sanitized();

        assert!(tuning.max_velocity >= tuning.min_velocity);
    }

    #[test]
    fn tick_interval_matches_frame_rate() {
        let tuning = Tuning::default();
        let interval = tuning.tick_interval();
        assert!(interval > Duration::from_millis(16));
        assert!(interval < Duration::from_millis(17));
    }
}
