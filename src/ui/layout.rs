// SPDX-License-Identifier: MPL-2.0
//! Radial geometry helpers shared by rendering adapters.
//!
//! Everything here is pure math over the control's state: where each item
//! sits around the center, how visible it is, and how large the dial may
//! grow inside its container. Adapters (canvas, tests, host-specific
//! renderers) consume these numbers instead of re-deriving them.

use crate::config::defaults::MIN_SPOKE_OPACITY;
use iced::{Point, Rectangle};
use std::f32::consts::{PI, TAU};

/// Where and how one item is displayed on the open dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    /// The item's display index.
    pub index: usize,
    /// Absolute angle of the item's spoke, radians, y-down.
    pub angle: f32,
    /// Center point of the item's icon.
    pub position: Point,
    /// Opacity from the angular falloff, before any per-item dimming.
    pub opacity: f32,
}

/// Wraps an angle into `(-π, π]`.
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU);
    wrapped - PI
}

/// Opacity for a spoke at `angle`, relative to the reference angle where
/// the selected item sits. Falls off quadratically with angular distance,
/// reaching a quarter opacity a quarter turn away, floored so far-side
/// items stay faintly visible.
#[must_use]
pub fn spoke_opacity(angle: f32, rotation_offset: f32) -> f32 {
    let distance = wrap_angle(angle - rotation_offset).abs() / PI;
    let falloff = 1.0 - distance;
    (falloff * falloff).max(MIN_SPOKE_OPACITY)
}

/// Computes a placement for every item of a dial with `count` items, with
/// the selected item sitting at `rotation_offset`.
///
/// The spoke angle of item `i` is
/// `(i - selected) * (2π / count) + rotation_offset`, so display order runs
/// clockwise from the reference angle in a y-down coordinate system.
#[must_use]
pub fn placements(
    count: usize,
    selected: usize,
    center: Point,
    radius: f32,
    rotation_offset: f32,
) -> Vec<ItemPlacement> {
    if count == 0 {
        return Vec::new();
    }
    let arc = TAU / count as f32;
    (0..count)
        .map(|index| {
            let offset = index as i64 - selected as i64;
            let angle = offset as f32 * arc + rotation_offset;
            ItemPlacement {
                index,
                angle,
                position: Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ),
                opacity: spoke_opacity(angle, rotation_offset),
            }
        })
        .collect()
}

/// The largest dial radius that keeps the circle inside `container` when
/// spun around `center`. Recomputed on every layout pass, so the open dial
/// shrinks with its surroundings.
#[must_use]
pub fn fitted_radius(center: Point, container: Rectangle) -> f32 {
    let left = center.x - container.x;
    let right = container.x + container.width - center.x;
    let top = center.y - container.y;
    let bottom = container.y + container.height - center.y;
    left.min(right).min(top).min(bottom).max(0.0)
}

/// Edge length of the square icon drawn at the tip of each spoke. Shrinks
/// with the item count so neighbouring icons never overlap, and with the
/// room left between the center button and the rim.
#[must_use]
pub fn icon_edge(radius: f32, count: usize, center_diameter: f32, padding: f32) -> f32 {
    if count == 0 || radius <= 0.0 {
        return 0.0;
    }
    let working = (radius - center_diameter - padding * 2.0).max(0.0);
    let half_angle = PI / count as f32;
    let across = (working * half_angle.tan() * 2.0).abs();
    let arc = (TAU * radius) / count as f32;
    working.min(across).min(arc / 2.0)
}
