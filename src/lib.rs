// SPDX-License-Identifier: MPL-2.0
//! `iced_dial` is a radial "spinner" selector control for the Iced GUI framework.
//!
//! The control shows a ring of icon items around a center button. Users rotate
//! the selection by dragging around the center, flick to keep it spinning with
//! inertia, or tap either side of the ring to step one item at a time. When
//! the item count grows past a configurable threshold the control falls back
//! to a conventional picker list.
//!
//! The interaction state machine in [`control`] is headless and fully
//! deterministic; the [`ui`] module adapts it to Iced's canvas and widget
//! tree.
//!
//! ```no_run
//! use iced_dial::control::{Spinner, SpinnerItem};
//! use iced_dial::observer::NullObserver;
//!
//! let icons = ["play.png", "pause.png", "stop.png"];
//! let items: Vec<SpinnerItem<()>> = icons
//!     .iter()
//!     .map(|path| SpinnerItem::new(iced::widget::image::Handle::from_path(path)))
//!     .collect();
//!
//! let mut spinner = Spinner::new(items);
//! spinner.activate(&mut NullObserver);
//! assert!(spinner.is_open());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_dial/0.1.0")]

pub mod config;
pub mod control;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

pub use control::observer;
pub use control::{
    Effect, Message, Spinner, SpinnerItem, SpinnerMode, SpinnerObserver, Threshold,
};
pub use ui::dial::Dial;
