// SPDX-License-Identifier: MPL-2.0
//! Host-facing event boundary.
//!
//! The control never stores the observer; it borrows one per operation.
//! That keeps [`SpinnerObserver::will_close`] a plain synchronous hook and
//! makes it impossible for the control to extend the host's lifetime.

use crate::control::item::SpinnerItem;

/// A cue for the host's sound/haptic machinery. The control emits cues only
/// while sounds or haptics are enabled; mapping a cue onto an actual device
/// is entirely the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackCue {
    /// The dial just opened.
    Open,
    /// The selection ticked to a neighboring value.
    SelectionTick,
    /// The dial just closed.
    Close,
}

/// Receives the control's observable events. Every method has a default
/// no-op implementation, so hosts implement only what they care about.
pub trait SpinnerObserver<P> {
    /// The control was activated while holding exactly one value. The
    /// control does not open in this case; this event fires instead.
    fn single_value_selected(&mut self, _item: &SpinnerItem<P>) {}

    /// The selection moved to a new value, whether by drag, flywheel, tap
    /// stepping, or a programmatic call.
    fn selection_changed(&mut self, _item: &SpinnerItem<P>) {}

    /// The control finished opening, with the value selected at that moment.
    fn opened(&mut self, _item: &SpinnerItem<P>) {}

    /// The control finished closing, with the value selected at that moment.
    fn closed(&mut self, _item: &SpinnerItem<P>) {}

    /// The control is about to close. Returning `false` vetoes the close
    /// and the control stays open. Not consulted when the value list is
    /// replaced out from under an open control.
    fn will_close(&mut self, _item: &SpinnerItem<P>) -> bool {
        true
    }

    /// A sound/haptic cue, gated by the control's sound and haptic flags.
    fn feedback(&mut self, _cue: FeedbackCue) {}
}

/// An observer that ignores every event. Handy for programmatic mutations
/// where nothing is listening.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl<P> SpinnerObserver<P> for NullObserver {}
