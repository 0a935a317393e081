// SPDX-License-Identifier: MPL-2.0
//! Flywheel tick delivery.
//!
//! The control never owns a timer; while a spin is coasting the host
//! installs this subscription and feeds the resulting
//! [`Message::Tick`](crate::control::Message::Tick)s back through
//! [`Spinner::handle`](crate::control::Spinner::handle). When the spin ends
//! the subscription collapses to none and the timer goes away with it, so
//! no callback can outlive the control or fire against a closed dial.

use crate::control::{Message, Spinner};
use iced::Subscription;

/// Ticks at the tuned frame rate while the spinner is coasting, nothing
/// otherwise. Call this from the host's `subscription` function and map the
/// message into the host's own type:
///
/// ```ignore
/// fn subscription(&self) -> Subscription<AppMessage> {
///     iced_dial::ui::subscription::ticks(&self.spinner).map(AppMessage::Spinner)
/// }
/// ```
pub fn ticks<P>(spinner: &Spinner<P>) -> Subscription<Message> {
    if spinner.is_spinning() {
        iced::time::every(spinner.tuning().tick_interval()).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
