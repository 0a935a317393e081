// SPDX-License-Identifier: MPL-2.0
//! The headless spinner control.
//!
//! Everything in here is deterministic and free of rendering concerns,
//! which is what makes the interaction model testable: pointer samples and
//! ticks go in as [`Message`]s, events come out through a borrowed
//! [`SpinnerObserver`].
//!
//! # Pieces
//!
//! - [`item`] - one selectable value (icon, title, description, payload)
//! - [`values`] - ordered storage with a bounds-safe selection index
//! - [`mode`] - the radial-versus-picker presentation policy
//! - [`pan`] - gesture tracking: angles, nudges, release velocity
//! - [`flywheel`] - inertial spin-down after a flick
//! - [`observer`] - the host-facing event boundary
//! - [`spinner`] - the orchestrating state machine

pub mod flywheel;
pub mod item;
pub mod mode;
pub mod observer;
pub mod pan;
pub mod spinner;
pub mod values;

pub use item::SpinnerItem;
pub use mode::{opens_as_spinner, SpinnerMode, Threshold};
pub use observer::{FeedbackCue, NullObserver, SpinnerObserver};
pub use spinner::{Effect, Message, Spinner};
pub use values::ValueList;
