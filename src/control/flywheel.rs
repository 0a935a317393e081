// SPDX-License-Identifier: MPL-2.0
//! Inertial "flywheel" deceleration for flick gestures.
//!
//! A fling hands the tracker's release velocity to the flywheel, which then
//! decays it a little every tick while pouring a fraction of it into an
//! accumulator of fractional rotation. Whenever the accumulator crosses a
//! whole step the selection advances and the accumulator resets. The
//! multiplicative decay guarantees the velocity sinks below the stop
//! threshold in finitely many ticks, at which point the dial clicks in.

use crate::config::Tuning;

/// What a single simulation tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whole selection steps to apply, signed like the velocity.
    pub steps: i64,
    /// True when the velocity fell below the stop threshold and the
    /// simulation has ended.
    pub finished: bool,
}

/// Rotational velocity state for the spin-down simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flywheel {
    velocity: f32,
    accumulator: f32,
    active: bool,
}

impl Flywheel {
    /// Starts spinning with the given signed velocity, clamped to the tuned
    /// maximum. A velocity already below the stop threshold never starts.
    pub fn start(&mut self, velocity: f32, tuning: &Tuning) {
        let clamped = velocity.clamp(-tuning.max_velocity, tuning.max_velocity);
        self.accumulator = 0.0;
        if clamped.abs() < tuning.min_velocity {
            self.velocity = 0.0;
            self.active = false;
        } else {
            self.velocity = clamped;
            self.active = true;
        }
    }

    /// Advances the simulation by one frame. Returns `None` while inactive,
    /// so a stray tick after cancellation is harmless.
    pub fn tick(&mut self, tuning: &Tuning) -> Option<TickOutcome> {
        if !self.active {
            return None;
        }

        self.velocity *= tuning.decay;
        self.accumulator += tuning.nudge_factor * self.velocity;

        // One-decimal rounding keeps borderline accumulations from
        // jittering between 0 and ±1 steps.
        let steps = ((self.accumulator * 10.0).round() / 10.0).trunc() as i64;
        if steps != 0 {
            self.accumulator = 0.0;
        }

        let finished = self.velocity.abs() < tuning.min_velocity;
        if finished {
            self.active = false;
        }

        Some(TickOutcome { steps, finished })
    }

    /// Stops the simulation. Safe to call repeatedly or while inactive.
    pub fn cancel(&mut self) {
        self.velocity = 0.0;
        self.accumulator = 0.0;
        self.active = false;
    }

    /// Whether the simulation is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current signed velocity.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_clamps_to_maximum_velocity() {
        let tuning = Tuning::default();
        let mut flywheel = Flywheel::default();
        flywheel.start(1_000.0, &tuning);
        assert_eq!(flywheel.velocity(), tuning.max_velocity);

        flywheel.start(-1_000.0, &tuning);
        assert_eq!(flywheel.velocity(), -tuning.max_velocity);
    }

    #[test]
    fn start_below_stop_threshold_stays_inactive() {
        let tuning = Tuning::default();
        let mut flywheel = Flywheel::default();
        flywheel.start(tuning.min_velocity / 2.0, &tuning);
        assert!(!flywheel.is_active());
        assert!(flywheel.tick(&tuning).is_none());
    }

    #[test]
    fn velocity_magnitude_decays_every_tick() {
        let tuning = Tuning::default();
        let mut flywheel = Flywheel::default();
        flywheel.start(tuning.max_velocity, &tuning);

        let mut previous = flywheel.velocity().abs();
        for _ in 0..100 {
            flywheel.tick(&tuning);
            let current = flywheel.velocity().abs();
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn steps_share_the_velocity_sign() {
        let tuning = Tuning::default();

        for start in [tuning.max_velocity, -tuning.max_velocity] {
            let mut flywheel = Flywheel::default();
            flywheel.start(start, &tuning);
            while let Some(outcome) = flywheel.tick(&tuning) {
                if outcome.steps != 0 {
                    assert_eq!(outcome.steps.signum() as f32, start.signum());
                }
                if outcome.finished {
                    break;
                }
            }
        }
    }

    #[test]
    fn simulation_terminates_within_bounded_ticks() {
        let tuning = Tuning::default();
        let mut flywheel = Flywheel::default();
        flywheel.start(tuning.max_velocity, &tuning);

        let mut ticks = 0;
        let mut emitted_steps = 0_i64;
        loop {
            let outcome = flywheel.tick(&tuning).expect("active until finished");
            ticks += 1;
            emitted_steps += outcome.steps.abs();
            if outcome.finished {
                break;
            }
            assert!(ticks < 2_000, "flywheel failed to spin down");
        }

        assert!(emitted_steps > 0, "a full-speed spin must step at least once");
        assert!(!flywheel.is_active());
        assert!(flywheel.tick(&tuning).is_none());
    }

    #[test]
    fn cancel_is_idempotent() {
        let tuning = Tuning::default();
        let mut flywheel = Flywheel::default();
        flywheel.start(tuning.max_velocity, &tuning);
        flywheel.cancel();
        flywheel.cancel();
        assert!(!flywheel.is_active());
        assert_eq!(flywheel.velocity(), 0.0);
    }
}
