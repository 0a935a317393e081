// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all tuning constants.
//!
//! This module serves as the single source of truth for the numbers that
//! shape the control's feel. Constants are organized by category.
//!
//! # Categories
//!
//! - **Flywheel**: inertial spin physics
//! - **Gesture**: pan recognition and velocity sampling
//! - **Selection**: picker-fallback threshold bounds
//! - **Display**: geometry and opacity constants consumed by the renderer

use std::f32::consts::FRAC_PI_2;

// ==========================================================================
// Flywheel Defaults
// ==========================================================================

/// Maximum flywheel velocity. Flick hand-off clamps to this magnitude.
pub const MAX_FLYWHEEL_VELOCITY: f32 = 100.0;

/// Minimum flywheel velocity. Below this the spinner "clicks in" and stops.
pub const MIN_FLYWHEEL_VELOCITY: f32 = 0.8;

/// Per-tick multiplicative velocity decay. Must stay below 1 so every spin
/// terminates; the multiplicative form approximates a logarithmic decrement.
pub const FLYWHEEL_DECAY: f32 = 0.994;

/// Fraction of the current velocity added to the step accumulator each tick.
pub const FLYWHEEL_NUDGE_FACTOR: f32 = 0.1;

/// Divisor applied to the raw release velocity (display units per second)
/// before comparing against the flywheel velocity band.
pub const FLYWHEEL_VELOCITY_DIVISOR: f32 = 600.0;

/// Tick rate of the flywheel simulation.
pub const FLYWHEEL_FRAMES_PER_SECOND: u32 = 60;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum pointer travel (display units) before a press becomes a pan.
/// Below this a press-release pair is treated as a tap.
pub const PAN_START_DISTANCE: f32 = 10.0;

/// Exponential smoothing factor for pointer velocity samples (weight of the
/// newest instantaneous sample).
pub const VELOCITY_SMOOTHING: f32 = 0.6;

// ==========================================================================
// Selection Defaults
// ==========================================================================

/// Default item count above which the control opens as a picker list.
pub const DEFAULT_THRESHOLD: usize = 15;

/// Smallest accepted threshold. Lower requests are clamped here so the
/// control always remains renderable.
pub const MIN_THRESHOLD: usize = 1;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Angle at which the selected item sits, in radians. Negative quarter turn
/// puts it at twelve o'clock in Iced's y-down coordinate system.
pub const DEFAULT_ROTATION_OFFSET: f32 = -FRAC_PI_2;

/// Opacity multiplier for disabled items.
pub const DIMMED_OPACITY: f32 = 0.5;

/// Floor for the angular opacity falloff, so far-side items stay faintly
/// visible instead of vanishing.
pub const MIN_SPOKE_OPACITY: f32 = 0.03;

/// Breathing room around icons, in display units.
pub const OPEN_PADDING: f32 = 8.0;

/// Stroke width of the center button border, in display units.
pub const BORDER_WIDTH: f32 = 1.0;

/// Diameter of the always-visible center button, in display units.
pub const DEFAULT_CENTER_DIAMETER: f32 = 60.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Flywheel validation
    assert!(MIN_FLYWHEEL_VELOCITY > 0.0);
    assert!(MAX_FLYWHEEL_VELOCITY > MIN_FLYWHEEL_VELOCITY);
    assert!(FLYWHEEL_DECAY > 0.0);
    assert!(FLYWHEEL_DECAY < 1.0);
    assert!(FLYWHEEL_NUDGE_FACTOR > 0.0);
    assert!(FLYWHEEL_VELOCITY_DIVISOR > 0.0);
    assert!(FLYWHEEL_FRAMES_PER_SECOND > 0);

    // Gesture validation
    assert!(PAN_START_DISTANCE >= 0.0);
    assert!(VELOCITY_SMOOTHING > 0.0);
    assert!(VELOCITY_SMOOTHING <= 1.0);

    // Selection validation
    assert!(MIN_THRESHOLD > 0);
    assert!(DEFAULT_THRESHOLD >= MIN_THRESHOLD);

    // Display validation
    assert!(DIMMED_OPACITY > 0.0);
    assert!(DIMMED_OPACITY < 1.0);
    assert!(MIN_SPOKE_OPACITY > 0.0);
    assert!(MIN_SPOKE_OPACITY < DIMMED_OPACITY);
    assert!(DEFAULT_CENTER_DIAMETER > 0.0);
};
