// SPDX-License-Identifier: MPL-2.0
//! Presentation policy: radial dial or picker-list fallback.

use crate::config::defaults::{DEFAULT_THRESHOLD, MIN_THRESHOLD};

/// Which presentation the control may open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerMode {
    /// Always the radial dial, regardless of item count.
    SpinnerOnly,
    /// Radial dial while the item count stays under the threshold, picker
    /// list above it.
    #[default]
    Both,
    /// Always the picker list.
    PickerOnly,
}

/// Item count at which [`SpinnerMode::Both`] switches to the picker list.
///
/// Requested values below 1 are clamped, keeping the control renderable for
/// any configuration.
///
/// ```
/// use iced_dial::control::Threshold;
///
/// assert_eq!(Threshold::new(-4).get(), 1);
/// assert_eq!(Threshold::default().get(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a threshold, clamping to the sane minimum.
    #[must_use]
    pub fn new(count: i64) -> Self {
        Self(usize::try_from(count).unwrap_or(0).max(MIN_THRESHOLD))
    }

    /// The threshold value.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

/// Decides whether an opening control uses the radial dial.
///
/// `SpinnerOnly` always does, `PickerOnly` never does, and `Both` does only
/// while the threshold exceeds the item count. Item counts of zero or one
/// never reach this decision: the control refuses to open at all.
#[must_use]
pub fn opens_as_spinner(mode: SpinnerMode, item_count: usize, threshold: Threshold) -> bool {
    match mode {
        SpinnerMode::SpinnerOnly => true,
        SpinnerMode::PickerOnly => false,
        SpinnerMode::Both => threshold.get() > item_count,
    }
}
