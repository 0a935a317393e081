// SPDX-License-Identifier: MPL-2.0
//! Pan tracking: pointer samples in, candidate selection indices out.
//!
//! A tracker lives for exactly one press-to-release gesture. It watches the
//! pointer from the press, estimates a smoothed velocity, and once the
//! gesture is promoted to a pan it maps the angular travel around the
//! control center onto selection-index deltas.

use crate::config::Tuning;
use iced::{Point, Vector};
use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Instant;

/// Angle of `position` as seen from `center`, in `(-π, π]`, y-down.
fn angle_to(center: Point, position: Point) -> f32 {
    (position.y - center.y).atan2(position.x - center.x)
}

#[derive(Debug, Clone, Copy)]
struct Pan {
    initial_angle: f32,
    initial_selection: usize,
}

/// State for a single press-to-release gesture.
#[derive(Debug, Clone)]
pub struct PanTracker {
    origin: Point,
    last_position: Point,
    last_time: Instant,
    velocity: Vector,
    pan: Option<Pan>,
}

impl PanTracker {
    /// Starts tracking at the press position.
    #[must_use]
    pub fn new(origin: Point, now: Instant) -> Self {
        Self {
            origin,
            last_position: origin,
            last_time: now,
            velocity: Vector::new(0.0, 0.0),
            pan: None,
        }
    }

    /// The press position.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether the gesture has been promoted from a press to a pan.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// The current smoothed pointer velocity, display units per second.
    #[must_use]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    /// Distance travelled from the press position.
    #[must_use]
    pub fn travel(&self, position: Point) -> f32 {
        let d = position - self.origin;
        d.x.hypot(d.y)
    }

    /// The immediate ±1 selection step applied when a pan begins, so the
    /// dial reacts before any drag distance has accrued. Left of center
    /// advances the selection, right of center retreats.
    #[must_use]
    pub fn nudge_for(position: Point, center: Point) -> i64 {
        if position.x < center.x {
            1
        } else {
            -1
        }
    }

    /// Feeds one pointer sample into the velocity estimate.
    pub fn sample(&mut self, position: Point, now: Instant, smoothing: f32) {
        let dt = now.saturating_duration_since(self.last_time).as_secs_f32();
        if dt > 0.0 {
            let moved = position - self.last_position;
            let instant_x = moved.x / dt;
            let instant_y = moved.y / dt;
            self.velocity = Vector::new(
                self.velocity.x + (instant_x - self.velocity.x) * smoothing,
                self.velocity.y + (instant_y - self.velocity.y) * smoothing,
            );
            self.last_position = position;
            self.last_time = now;
        }
    }

    /// Promotes the press to a pan. The reference angle is taken at the
    /// press position; `baseline_selection` is the selection after the
    /// begin-nudge has been applied.
    pub fn begin_pan(&mut self, center: Point, baseline_selection: usize) {
        self.pan = Some(Pan {
            initial_angle: angle_to(center, self.origin),
            initial_selection: baseline_selection,
        });
    }

    /// Maps the current pointer angle onto a raw selection index, relative
    /// to the pan baseline. The caller wraps it into `[0, count)`.
    ///
    /// A jump across the atan2 seam shifts `delta` by a full turn, which
    /// the modular wrap downstream absorbs.
    #[must_use]
    pub fn selection_for(
        &self,
        position: Point,
        center: Point,
        count: usize,
        threshold: usize,
    ) -> Option<i64> {
        let pan = self.pan.as_ref()?;
        if count == 0 {
            return None;
        }
        let delta = pan.initial_angle - angle_to(center, position);
        let radians_per_item = TAU / count as f32;
        // Packed dials scroll slower.
        let dampening = 1.0_f32.max(0.1_f32.min(threshold as f32 / count as f32));
        let changed = (delta / (radians_per_item * dampening)).round() as i64;
        Some(pan.initial_selection as i64 + changed)
    }

    /// Projects the smoothed release velocity onto the tangential direction
    /// at the release angle and scales it into flywheel units. Returns
    /// `None` when the fling is too weak to spin, or when the gesture never
    /// became a pan.
    #[must_use]
    pub fn release_velocity(
        &self,
        position: Point,
        center: Point,
        tuning: &Tuning,
    ) -> Option<f32> {
        self.pan.as_ref()?;
        let theta = angle_to(center, position);
        let (vx, vy) = (self.velocity.x, self.velocity.y);

        // Four quadrant cases: which mix of vx/vy counts as "along the rim"
        // depends on where around the dial the pointer let go.
        let linear = if (-FRAC_PI_2..0.0).contains(&theta) {
            -(vx + vy)
        } else if (0.0..FRAC_PI_2).contains(&theta) {
            vx - vy
        } else if theta >= FRAC_PI_2 {
            vx + vy
        } else {
            vy - vx
        };

        let scaled =
            (linear.abs() / tuning.velocity_divisor).min(tuning.max_velocity) * linear.signum();
        (scaled.abs() > tuning.min_velocity).then_some(scaled)
    }
}
