// SPDX-License-Identifier: MPL-2.0
//! The spinner control proper: open/closed state, gesture routing, and the
//! hand-off between pan tracking and the flywheel.
//!
//! The control is headless. Pointer activity arrives as [`Message`]s (a
//! rendering adapter such as [`crate::ui::dial::Dial`] produces them), state
//! mutation happens in [`Spinner::handle`] and the direct methods, and the
//! host observes the outcome through a borrowed [`SpinnerObserver`]. The
//! returned [`Effect`] tells the host whether anything visual changed.

use crate::config::defaults::{DEFAULT_CENTER_DIAMETER, DEFAULT_ROTATION_OFFSET};
use crate::config::Tuning;
use crate::control::flywheel::Flywheel;
use crate::control::item::SpinnerItem;
use crate::control::mode::{opens_as_spinner, SpinnerMode, Threshold};
use crate::control::observer::{FeedbackCue, SpinnerObserver};
use crate::control::pan::PanTracker;
use crate::control::values::ValueList;
use iced::{Point, Rectangle};
use std::time::Instant;

/// Pointer and timer input for the control.
///
/// `bounds` is the rectangle the rendering adapter currently occupies; the
/// control derives its center and hit zones from it on every message, so the
/// geometry follows the host layout without a separate resize protocol.
#[derive(Debug, Clone)]
pub enum Message {
    /// Primary button / touch went down.
    PointerPressed {
        position: Point,
        bounds: Rectangle,
        now: Instant,
    },
    /// Pointer moved while down.
    PointerMoved {
        position: Point,
        bounds: Rectangle,
        now: Instant,
    },
    /// Primary button / touch lifted.
    PointerReleased { position: Point, bounds: Rectangle },
    /// The gesture was abandoned (pointer left the surface, touch lost).
    /// Ends any press without tap or fling semantics.
    PointerCancelled,
    /// Programmatic press of the center button.
    Activate,
    /// One flywheel frame. Harmless outside a spin.
    Tick,
    /// A row of the picker-list fallback was chosen.
    PickerRowSelected(usize),
}

/// What the host should do after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visual changed.
    None,
    /// Redraw the control.
    Render,
}

#[derive(Debug, Clone)]
enum Interaction {
    Idle,
    Pressed {
        tracker: PanTracker,
        was_spinning: bool,
    },
    Spinning,
}

#[derive(Debug, Clone)]
enum Phase {
    Closed,
    ClosedPressed,
    Open(Interaction),
}

/// A radial selector control with inertial spin and a picker-list fallback.
///
/// One instance owns its values, selection, and physics state exclusively;
/// nothing is shared between instances. All index math wraps or clamps, so
/// no operation panics on an out-of-range index or an empty list.
#[derive(Debug, Clone)]
pub struct Spinner<P> {
    values: ValueList<P>,
    mode: SpinnerMode,
    threshold: Threshold,
    tuning: Tuning,
    rotation_offset: f32,
    center_diameter: f32,
    is_sound_on: bool,
    is_haptics_on: bool,
    phase: Phase,
    flywheel: Flywheel,
    revision: u64,
}

impl<P> Default for Spinner<P> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<P> Spinner<P> {
    /// Creates a closed control over the given values, selecting the first.
    #[must_use]
    pub fn new(items: Vec<SpinnerItem<P>>) -> Self {
        Self {
            values: ValueList::new(items),
            mode: SpinnerMode::default(),
            threshold: Threshold::default(),
            tuning: Tuning::default(),
            rotation_offset: DEFAULT_ROTATION_OFFSET,
            center_diameter: DEFAULT_CENTER_DIAMETER,
            is_sound_on: true,
            is_haptics_on: true,
            phase: Phase::Closed,
            flywheel: Flywheel::default(),
            revision: 0,
        }
    }

    /// Starts with the selection on `index` (clamped).
    #[must_use]
    pub fn with_selected_index(mut self, index: usize) -> Self {
        self.values.select(index);
        self
    }

    /// Sets the presentation mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SpinnerMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the picker-fallback threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the interaction physics.
    #[must_use]
    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning.sanitized();
        self
    }

    /// Sets the angle (radians, y-down) at which the selected item sits.
    #[must_use]
    pub fn with_rotation_offset(mut self, radians: f32) -> Self {
        self.rotation_offset = radians;
        self
    }

    /// Sets the diameter of the center button.
    #[must_use]
    pub fn with_center_diameter(mut self, diameter: f32) -> Self {
        self.center_diameter = diameter.max(1.0);
        self
    }

    /// Enables or disables sound cues.
    #[must_use]
    pub fn with_sound(mut self, on: bool) -> Self {
        self.is_sound_on = on;
        self
    }

    /// Enables or disables haptic cues.
    #[must_use]
    pub fn with_haptics(mut self, on: bool) -> Self {
        self.is_haptics_on = on;
        self
    }

    // ======================================================================
    // Accessors
    // ======================================================================

    /// The values, in display order.
    #[must_use]
    pub fn items(&self) -> &[SpinnerItem<P>] {
        self.values.items()
    }

    /// Number of values.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// True when there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The active selection index.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.values.selected_index()
    }

    /// The selected item, if any.
    #[must_use]
    pub fn current(&self) -> Option<&SpinnerItem<P>> {
        self.values.current()
    }

    /// Whether the control is open (radial dial or picker list).
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open(_))
    }

    /// Whether the flywheel is coasting.
    #[must_use]
    pub fn is_spinning(&self) -> bool {
        self.flywheel.is_active()
    }

    /// Whether a pan gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(
            &self.phase,
            Phase::Open(Interaction::Pressed { tracker, .. }) if tracker.is_panning()
        )
    }

    /// Whether a press is being tracked (pan or potential tap). Rendering
    /// adapters use this to decide which pointer events still matter.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(
            self.phase,
            Phase::ClosedPressed | Phase::Open(Interaction::Pressed { .. })
        )
    }

    /// The presentation mode.
    #[must_use]
    pub fn mode(&self) -> SpinnerMode {
        self.mode
    }

    /// The picker-fallback threshold.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The interaction physics.
    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The angle at which the selected item sits.
    #[must_use]
    pub fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    /// The diameter of the center button.
    #[must_use]
    pub fn center_diameter(&self) -> f32 {
        self.center_diameter
    }

    /// Whether sound cues are enabled.
    #[must_use]
    pub fn is_sound_on(&self) -> bool {
        self.is_sound_on
    }

    /// Whether haptic cues are enabled.
    #[must_use]
    pub fn is_haptics_on(&self) -> bool {
        self.is_haptics_on
    }

    /// True when an open control presents the radial dial rather than the
    /// picker list.
    #[must_use]
    pub fn opens_as_spinner(&self) -> bool {
        opens_as_spinner(self.mode, self.values.len(), self.threshold)
    }

    /// Monotonic counter bumped on every visual-affecting change. Rendering
    /// adapters key their caches on it.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ======================================================================
    // Direct operations
    // ======================================================================

    /// Presses the center button: opens a closed control, closes an open
    /// one (subject to the veto), or reports a single value.
    pub fn activate<O: SpinnerObserver<P>>(&mut self, observer: &mut O) -> Effect {
        match self.values.len() {
            0 => Effect::None,
            1 => {
                if let Some(item) = self.values.get(0) {
                    observer.single_value_selected(item);
                }
                Effect::None
            }
            _ => {
                if self.is_open() {
                    if self.close_internal(observer, false) {
                        Effect::Render
                    } else {
                        Effect::None
                    }
                } else {
                    self.open(observer);
                    Effect::Render
                }
            }
        }
    }

    /// Opens the control. Refuses with fewer than two values or when
    /// already open. Returns whether it opened.
    pub fn open<O: SpinnerObserver<P>>(&mut self, observer: &mut O) -> bool {
        if self.is_open() || self.values.len() < 2 {
            return false;
        }
        self.phase = Phase::Open(Interaction::Idle);
        self.revision += 1;
        self.emit_feedback(observer, FeedbackCue::Open);
        if let Some(item) = self.values.current() {
            observer.opened(item);
        }
        true
    }

    /// Closes the control, consulting [`SpinnerObserver::will_close`] first.
    /// Returns whether it closed.
    pub fn close<O: SpinnerObserver<P>>(&mut self, observer: &mut O) -> bool {
        self.close_internal(observer, false)
    }

    /// Moves the selection to `index` (clamped). Returns whether it changed.
    pub fn select<O: SpinnerObserver<P>>(&mut self, index: usize, observer: &mut O) -> bool {
        let changed = self.values.select(index);
        self.report_selection(changed, observer);
        changed
    }

    /// Moves the selection to a raw index wrapped into `[0, count)`.
    pub fn select_wrapped<O: SpinnerObserver<P>>(&mut self, raw: i64, observer: &mut O) -> bool {
        let changed = self.values.select_wrapped(raw);
        self.report_selection(changed, observer);
        changed
    }

    /// Selects the value equal to `item`, if present. The lookup goes
    /// through item equality; items hold no reference back to the control.
    pub fn select_item<O: SpinnerObserver<P>>(
        &mut self,
        item: &SpinnerItem<P>,
        observer: &mut O,
    ) -> bool {
        match self.values.index_of(item) {
            Some(index) => self.select(index, observer),
            None => false,
        }
    }

    /// Replaces the whole value list. An open control closes without the
    /// veto (a list change invalidates its geometry mid-flight), and the
    /// possibly unchanged selection is reported so hosts can refresh.
    pub fn set_items<O: SpinnerObserver<P>>(
        &mut self,
        items: Vec<SpinnerItem<P>>,
        observer: &mut O,
    ) {
        let was_open = self.is_open();
        self.values.set_items(items);
        self.revision += 1;
        if was_open {
            self.close_internal(observer, true);
        }
        if let Some(item) = self.values.current() {
            observer.selection_changed(item);
        }
    }

    /// Inserts a value at `index` (clamped to the list length).
    pub fn insert<O: SpinnerObserver<P>>(
        &mut self,
        index: usize,
        item: SpinnerItem<P>,
        observer: &mut O,
    ) {
        let before = self.values.selected_index();
        self.values.insert(index, item);
        self.after_edit(before, observer);
    }

    /// Removes and returns the value at `index`, if in range.
    pub fn remove<O: SpinnerObserver<P>>(
        &mut self,
        index: usize,
        observer: &mut O,
    ) -> Option<SpinnerItem<P>> {
        let before = self.values.selected_index();
        let removed = self.values.remove(index);
        if removed.is_some() {
            self.after_edit(before, observer);
        }
        removed
    }

    /// Removes up to `n` values from the front.
    pub fn remove_first<O: SpinnerObserver<P>>(&mut self, n: usize, observer: &mut O) {
        let before = self.values.selected_index();
        self.values.remove_first(n);
        self.after_edit(before, observer);
    }

    /// Removes up to `n` values from the back.
    pub fn remove_last<O: SpinnerObserver<P>>(&mut self, n: usize, observer: &mut O) {
        let before = self.values.selected_index();
        self.values.remove_last(n);
        self.after_edit(before, observer);
    }

    /// Removes every value. An open control force-closes.
    pub fn remove_all<O: SpinnerObserver<P>>(&mut self, observer: &mut O) {
        let before = self.values.selected_index();
        self.values.clear();
        self.after_edit(before, observer);
    }

    /// Switches the presentation mode. An open control force-closes, since
    /// its presentation was chosen under the old policy.
    pub fn set_mode<O: SpinnerObserver<P>>(&mut self, mode: SpinnerMode, observer: &mut O) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.revision += 1;
        self.close_internal(observer, true);
    }

    /// Changes the picker-fallback threshold. An open control force-closes.
    pub fn set_threshold<O: SpinnerObserver<P>>(
        &mut self,
        threshold: Threshold,
        observer: &mut O,
    ) {
        if self.threshold == threshold {
            return;
        }
        self.threshold = threshold;
        self.revision += 1;
        self.close_internal(observer, true);
    }

    /// Replaces the interaction physics (sanitized).
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning.sanitized();
    }

    /// Enables or disables sound cues.
    pub fn set_sound(&mut self, on: bool) {
        self.is_sound_on = on;
    }

    /// Enables or disables haptic cues.
    pub fn set_haptics(&mut self, on: bool) {
        self.is_haptics_on = on;
    }

    // ======================================================================
    // Message handling
    // ======================================================================

    /// Routes one input message through the state machine.
    pub fn handle<O: SpinnerObserver<P>>(&mut self, message: Message, observer: &mut O) -> Effect {
        match message {
            Message::PointerPressed {
                position,
                bounds,
                now,
            } => self.on_pressed(position, bounds, now),
            Message::PointerMoved {
                position,
                bounds,
                now,
            } => self.on_moved(position, bounds, now, observer),
            Message::PointerReleased { position, bounds } => {
                self.on_released(position, bounds, observer)
            }
            Message::PointerCancelled => self.on_cancelled(),
            Message::Activate => self.activate(observer),
            Message::Tick => self.on_tick(observer),
            Message::PickerRowSelected(index) => {
                if self.select(index, observer) {
                    Effect::Render
                } else {
                    Effect::None
                }
            }
        }
    }

    fn on_pressed(&mut self, position: Point, bounds: Rectangle, now: Instant) -> Effect {
        let center = bounds.center();
        match &mut self.phase {
            Phase::Closed => {
                if distance(position, center) <= self.center_diameter / 2.0 {
                    self.phase = Phase::ClosedPressed;
                }
                Effect::None
            }
            Phase::ClosedPressed | Phase::Open(Interaction::Pressed { .. }) => Effect::None,
            Phase::Open(interaction) => {
                // Cancel before anything else may mutate the selection: a
                // press must never race a coasting flywheel.
                let was_spinning = self.flywheel.is_active();
                self.flywheel.cancel();
                *interaction = Interaction::Pressed {
                    tracker: PanTracker::new(position, now),
                    was_spinning,
                };
                if was_spinning {
                    Effect::Render
                } else {
                    Effect::None
                }
            }
        }
    }

    fn on_moved<O: SpinnerObserver<P>>(
        &mut self,
        position: Point,
        bounds: Rectangle,
        now: Instant,
        observer: &mut O,
    ) -> Effect {
        let center = bounds.center();
        // The placeholder keeps `is_open()` truthful while the tracker is
        // detached, so selection feedback stays correctly gated mid-drag.
        match std::mem::replace(&mut self.phase, Phase::Open(Interaction::Idle)) {
            Phase::Open(Interaction::Pressed {
                mut tracker,
                was_spinning,
            }) => {
                tracker.sample(position, now, self.tuning.velocity_smoothing);

                if !tracker.is_panning()
                    && tracker.travel(position) > self.tuning.pan_start_distance
                {
                    let nudge = PanTracker::nudge_for(tracker.origin(), center);
                    let raw = self.values.selected_index() as i64 + nudge;
                    let changed = self.values.select_wrapped(raw);
                    self.report_selection(changed, observer);
                    tracker.begin_pan(center, self.values.selected_index());
                }

                let effect = if tracker.is_panning() {
                    if let Some(raw) = tracker.selection_for(
                        position,
                        center,
                        self.values.len(),
                        self.threshold.get(),
                    ) {
                        let changed = self.values.select_wrapped(raw);
                        self.report_selection(changed, observer);
                    }
                    Effect::Render
                } else {
                    Effect::None
                };

                self.phase = Phase::Open(Interaction::Pressed {
                    tracker,
                    was_spinning,
                });
                effect
            }
            other => {
                self.phase = other;
                Effect::None
            }
        }
    }

    fn on_released<O: SpinnerObserver<P>>(
        &mut self,
        position: Point,
        bounds: Rectangle,
        observer: &mut O,
    ) -> Effect {
        let center = bounds.center();
        let in_center = distance(position, center) <= self.center_diameter / 2.0;
        match std::mem::replace(&mut self.phase, Phase::Closed) {
            Phase::ClosedPressed => {
                self.phase = Phase::Closed;
                if in_center {
                    self.activate(observer)
                } else {
                    Effect::None
                }
            }
            Phase::Open(Interaction::Pressed {
                tracker,
                was_spinning,
            }) => {
                self.phase = Phase::Open(Interaction::Idle);
                if tracker.is_panning() {
                    if let Some(velocity) =
                        tracker.release_velocity(position, center, &self.tuning)
                    {
                        self.flywheel.start(velocity, &self.tuning);
                        if self.flywheel.is_active() {
                            self.phase = Phase::Open(Interaction::Spinning);
                        }
                    }
                } else if !was_spinning {
                    // A plain tap: the center closes, either side steps.
                    if in_center {
                        self.close_internal(observer, false);
                    } else {
                        let step = PanTracker::nudge_for(position, center);
                        let raw = self.values.selected_index() as i64 + step;
                        let changed = self.values.select_wrapped(raw);
                        self.report_selection(changed, observer);
                    }
                }
                Effect::Render
            }
            other => {
                self.phase = other;
                Effect::None
            }
        }
    }

    fn on_cancelled(&mut self) -> Effect {
        match &self.phase {
            Phase::ClosedPressed => {
                self.phase = Phase::Closed;
                Effect::None
            }
            Phase::Open(Interaction::Pressed { .. }) => {
                self.phase = Phase::Open(Interaction::Idle);
                Effect::Render
            }
            _ => Effect::None,
        }
    }

    fn on_tick<O: SpinnerObserver<P>>(&mut self, observer: &mut O) -> Effect {
        if !matches!(self.phase, Phase::Open(Interaction::Spinning)) {
            return Effect::None;
        }
        match self.flywheel.tick(&self.tuning) {
            None => {
                self.phase = Phase::Open(Interaction::Idle);
                Effect::None
            }
            Some(outcome) => {
                if outcome.steps != 0 {
                    let raw = self.values.selected_index() as i64 + outcome.steps;
                    let changed = self.values.select_wrapped(raw);
                    self.report_selection(changed, observer);
                }
                if outcome.finished {
                    self.phase = Phase::Open(Interaction::Idle);
                }
                Effect::Render
            }
        }
    }

    // ======================================================================
    // Internals
    // ======================================================================

    fn close_internal<O: SpinnerObserver<P>>(&mut self, observer: &mut O, forced: bool) -> bool {
        if !self.is_open() {
            return false;
        }
        if !forced {
            if let Some(item) = self.values.current() {
                if !observer.will_close(item) {
                    return false;
                }
            }
        }
        self.flywheel.cancel();
        self.phase = Phase::Closed;
        self.revision += 1;
        self.emit_feedback(observer, FeedbackCue::Close);
        if let Some(item) = self.values.current() {
            observer.closed(item);
        }
        true
    }

    fn report_selection<O: SpinnerObserver<P>>(&mut self, changed: bool, observer: &mut O) {
        if !changed {
            return;
        }
        self.revision += 1;
        if self.is_open() {
            self.emit_feedback(observer, FeedbackCue::SelectionTick);
        }
        if let Some(item) = self.values.current() {
            observer.selection_changed(item);
        }
    }

    fn after_edit<O: SpinnerObserver<P>>(&mut self, index_before: usize, observer: &mut O) {
        self.revision += 1;
        let changed = self.values.selected_index() != index_before;
        self.report_selection(changed, observer);
        if self.is_open() && self.values.len() < 2 {
            self.close_internal(observer, true);
        }
    }

    fn emit_feedback<O: SpinnerObserver<P>>(&mut self, observer: &mut O, cue: FeedbackCue) {
        if self.is_sound_on || self.is_haptics_on {
            observer.feedback(cue);
        }
    }
}

fn distance(a: Point, b: Point) -> f32 {
    let d = a - b;
    d.x.hypot(d.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::observer::NullObserver;
    use iced::Size;
    use iced_core::image::Handle;
    use std::time::Duration;

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 400.0,
    };

    fn items(n: usize) -> Vec<SpinnerItem<()>> {
        (0..n)
            .map(|i| SpinnerItem::new(Handle::from_path(format!("icon-{i}.png"))))
            .collect()
    }

    fn open_spinner(n: usize) -> Spinner<()> {
        let mut spinner = Spinner::new(items(n));
        spinner.open(&mut NullObserver);
        spinner
    }

    fn rim_point(angle: f32) -> Point {
        let center = BOUNDS.center();
        Point::new(
            center.x + 150.0 * angle.cos(),
            center.y + 150.0 * angle.sin(),
        )
    }

    #[derive(Default)]
    struct Recorder {
        selections: usize,
        opened: usize,
        closed: usize,
        single: usize,
        will_close_calls: usize,
        veto: bool,
        cues: Vec<FeedbackCue>,
    }

    impl Recorder {
        fn vetoing() -> Self {
            Self {
                veto: true,
                ..Self::default()
            }
        }
    }

    impl SpinnerObserver<()> for Recorder {
        fn single_value_selected(&mut self, _item: &SpinnerItem<()>) {
            self.single += 1;
        }
        fn selection_changed(&mut self, _item: &SpinnerItem<()>) {
            self.selections += 1;
        }
        fn opened(&mut self, _item: &SpinnerItem<()>) {
            self.opened += 1;
        }
        fn closed(&mut self, _item: &SpinnerItem<()>) {
            self.closed += 1;
        }
        fn will_close(&mut self, _item: &SpinnerItem<()>) -> bool {
            self.will_close_calls += 1;
            !self.veto
        }
        fn feedback(&mut self, cue: FeedbackCue) {
            self.cues.push(cue);
        }
    }

    #[test]
    fn activate_opens_and_closes() {
        let mut spinner = Spinner::new(items(5));
        let mut recorder = Recorder::default();

        spinner.activate(&mut recorder);
        assert!(spinner.is_open());
        assert_eq!(recorder.opened, 1);
        assert!(recorder.cues.contains(&FeedbackCue::Open));

        spinner.activate(&mut recorder);
        assert!(!spinner.is_open());
        assert_eq!(recorder.closed, 1);
        assert_eq!(recorder.will_close_calls, 1);
    }

    #[test]
    fn single_value_never_opens() {
        let mut spinner = Spinner::new(items(1));
        let mut recorder = Recorder::default();

        spinner.activate(&mut recorder);
        assert!(!spinner.is_open());
        assert_eq!(recorder.single, 1);
        assert_eq!(recorder.opened, 0);
    }

    #[test]
    fn empty_control_ignores_activation() {
        let mut spinner = Spinner::new(items(0));
        let mut recorder = Recorder::default();

        assert_eq!(spinner.activate(&mut recorder), Effect::None);
        assert!(!spinner.is_open());
        assert_eq!(recorder.single, 0);
    }

    #[test]
    fn veto_keeps_the_control_open() {
        let mut spinner = open_spinner(5);
        let mut recorder = Recorder::vetoing();

        spinner.activate(&mut recorder);
        assert!(spinner.is_open());
        assert_eq!(recorder.closed, 0);
        assert_eq!(recorder.will_close_calls, 1);
    }

    #[test]
    fn set_items_force_closes_without_veto() {
        let mut spinner = open_spinner(5);
        let mut recorder = Recorder::vetoing();

        spinner.set_items(items(3), &mut recorder);
        assert!(!spinner.is_open());
        assert_eq!(recorder.will_close_calls, 0);
        assert_eq!(recorder.closed, 1);
    }

    #[test]
    fn selection_tink_only_while_open() {
        let mut spinner = Spinner::new(items(5));
        let mut recorder = Recorder::default();

        spinner.select(2, &mut recorder);
        assert!(recorder.cues.is_empty());

        spinner.open(&mut recorder);
        recorder.cues.clear();
        spinner.select(3, &mut recorder);
        assert_eq!(recorder.cues, vec![FeedbackCue::SelectionTick]);
    }

    #[test]
    fn feedback_is_gated_by_sound_and_haptic_flags() {
        let mut spinner = Spinner::new(items(5)).with_sound(false).with_haptics(false);
        let mut recorder = Recorder::default();

        spinner.open(&mut recorder);
        spinner.select(2, &mut recorder);
        assert!(recorder.cues.is_empty());
    }

    #[test]
    fn press_in_center_then_release_activates_closed_control() {
        let mut spinner = Spinner::new(items(5));
        let mut recorder = Recorder::default();
        let center = BOUNDS.center();
        let now = Instant::now();

        spinner.handle(
            Message::PointerPressed {
                position: center,
                bounds: BOUNDS,
                now,
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: center,
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        assert!(spinner.is_open());
        assert_eq!(recorder.opened, 1);
    }

    #[test]
    fn press_outside_center_does_not_activate_closed_control() {
        let mut spinner = Spinner::new(items(5));
        let mut recorder = Recorder::default();
        let far = Point::new(BOUNDS.width - 1.0, 1.0);
        let now = Instant::now();

        spinner.handle(
            Message::PointerPressed {
                position: far,
                bounds: BOUNDS,
                now,
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: far,
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        assert!(!spinner.is_open());
    }

    #[test]
    fn open_tap_on_left_half_steps_forward() {
        let mut spinner = open_spinner(5);
        let mut recorder = Recorder::default();
        let tap = Point::new(40.0, BOUNDS.center().y);
        let now = Instant::now();

        spinner.handle(
            Message::PointerPressed {
                position: tap,
                bounds: BOUNDS,
                now,
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: tap,
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        assert_eq!(spinner.selected_index(), 1);
        assert!(spinner.is_open());
    }

    #[test]
    fn open_tap_on_right_half_steps_back_with_wrap() {
        let mut spinner = open_spinner(5);
        let mut recorder = Recorder::default();
        let tap = Point::new(BOUNDS.width - 40.0, BOUNDS.center().y);
        let now = Instant::now();

        spinner.handle(
            Message::PointerPressed {
                position: tap,
                bounds: BOUNDS,
                now,
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: tap,
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        assert_eq!(spinner.selected_index(), 4);
    }

    #[test]
    fn open_tap_in_center_closes() {
        let mut spinner = open_spinner(5);
        let mut recorder = Recorder::default();
        let center = BOUNDS.center();
        let now = Instant::now();

        spinner.handle(
            Message::PointerPressed {
                position: center,
                bounds: BOUNDS,
                now,
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: center,
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        assert!(!spinner.is_open());
        assert_eq!(recorder.closed, 1);
        assert_eq!(recorder.will_close_calls, 1);
    }

    #[test]
    fn drag_from_left_applies_nudge_and_angular_travel() {
        use std::f32::consts::{PI, TAU};

        let mut spinner = open_spinner(5);
        spinner.select(2, &mut NullObserver);
        let mut recorder = Recorder::default();
        let now = Instant::now();

        // Press on the left rim (angle π)…
        spinner.handle(
            Message::PointerPressed {
                position: rim_point(PI),
                bounds: BOUNDS,
                now,
            },
            &mut recorder,
        );
        // …then sweep, slowly, through three items' worth of arc.
        spinner.handle(
            Message::PointerMoved {
                position: rim_point(PI - 3.0 * (TAU / 5.0)),
                bounds: BOUNDS,
                now: now + Duration::from_secs(2),
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: rim_point(PI - 3.0 * (TAU / 5.0)),
                bounds: BOUNDS,
            },
            &mut recorder,
        );

        // 2 (start) + 1 (left-side nudge) + 3 (swept) wrapped into five items.
        assert_eq!(spinner.selected_index(), 1);
        assert!(spinner.is_open());
        assert!(!spinner.is_spinning());
    }

    #[test]
    fn fast_drag_release_starts_the_flywheel_and_a_tap_cancels_it() {
        use std::f32::consts::PI;

        let mut spinner = open_spinner(8);
        let mut recorder = Recorder::default();
        let t0 = Instant::now();

        spinner.handle(
            Message::PointerPressed {
                position: rim_point(PI),
                bounds: BOUNDS,
                now: t0,
            },
            &mut recorder,
        );
        // Sweep quickly down the left rim: large travel in a few ms.
        let release = Point::new(rim_point(PI).x + 5.0, rim_point(PI).y + 120.0);
        spinner.handle(
            Message::PointerMoved {
                position: release,
                bounds: BOUNDS,
                now: t0 + Duration::from_millis(16),
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: release,
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        assert!(spinner.is_spinning());

        // Ticks keep stepping the selection until a press cancels the spin.
        spinner.handle(Message::Tick, &mut recorder);
        assert!(spinner.is_spinning());

        let before = spinner.selected_index();
        spinner.handle(
            Message::PointerPressed {
                position: BOUNDS.center(),
                bounds: BOUNDS,
                now: t0 + Duration::from_millis(50),
            },
            &mut recorder,
        );
        assert!(!spinner.is_spinning());
        spinner.handle(
            Message::PointerReleased {
                position: BOUNDS.center(),
                bounds: BOUNDS,
            },
            &mut recorder,
        );
        // The cancelling tap neither moved the selection nor closed the dial.
        assert_eq!(spinner.selected_index(), before);
        assert!(spinner.is_open());
    }

    #[test]
    fn ticks_are_ignored_while_idle() {
        let mut spinner = open_spinner(5);
        assert_eq!(spinner.handle(Message::Tick, &mut NullObserver), Effect::None);

        let mut closed: Spinner<()> = Spinner::new(items(5));
        assert_eq!(closed.handle(Message::Tick, &mut NullObserver), Effect::None);
    }

    #[test]
    fn spin_runs_to_completion_and_clicks_in() {
        let mut spinner = open_spinner(6);
        let mut recorder = Recorder::default();

        // Start the flywheel directly at full speed, then drain it tick by
        // tick.
        let tuning = spinner.tuning;
        spinner.flywheel.start(tuning.max_velocity, &tuning);
        spinner.phase = Phase::Open(Interaction::Spinning);

        let mut guard = 0;
        while spinner.is_spinning() {
            spinner.handle(Message::Tick, &mut recorder);
            guard += 1;
            assert!(guard < 2_000, "spin never terminated");
        }
        assert!(spinner.is_open());
        assert!(recorder.selections > 0);
        assert!(recorder.cues.contains(&FeedbackCue::SelectionTick));
    }

    #[test]
    fn picker_row_selection_updates_the_value() {
        let mut spinner = Spinner::new(items(20)).with_threshold(Threshold::new(15));
        let mut recorder = Recorder::default();
        assert!(!spinner.opens_as_spinner());

        spinner.open(&mut recorder);
        spinner.handle(Message::PickerRowSelected(7), &mut recorder);
        assert_eq!(spinner.selected_index(), 7);
    }

    #[test]
    fn mode_change_force_closes() {
        let mut spinner = open_spinner(5);
        let mut recorder = Recorder::vetoing();

        spinner.set_mode(SpinnerMode::PickerOnly, &mut recorder);
        assert!(!spinner.is_open());
        assert_eq!(recorder.will_close_calls, 0);
    }

    #[test]
    fn removing_down_to_one_item_closes_the_dial() {
        let mut spinner = open_spinner(2);
        let mut recorder = Recorder::default();

        spinner.remove(1, &mut recorder);
        assert!(!spinner.is_open());
        assert_eq!(spinner.count(), 1);
    }

    #[test]
    fn select_item_finds_by_equality() {
        let all = items(4);
        let probe = all[2].clone();
        let mut spinner = Spinner::new(all);

        assert!(spinner.select_item(&probe, &mut NullObserver));
        assert_eq!(spinner.selected_index(), 2);
    }

    #[test]
    fn bounds_follow_the_layout() {
        // A differently-placed rectangle moves the hit zones with it.
        let bounds = Rectangle::new(Point::new(500.0, 500.0), Size::new(100.0, 100.0));
        let mut spinner = Spinner::new(items(5));
        let mut recorder = Recorder::default();

        spinner.handle(
            Message::PointerPressed {
                position: Point::new(550.0, 550.0),
                bounds,
                now: Instant::now(),
            },
            &mut recorder,
        );
        spinner.handle(
            Message::PointerReleased {
                position: Point::new(550.0, 550.0),
                bounds,
            },
            &mut recorder,
        );
        assert!(spinner.is_open());
    }
}
