// SPDX-License-Identifier: MPL-2.0
//! One selectable value of the spinner.

use iced_core::image::Handle;

/// A single spinner value: an icon with optional title, description, and an
/// opaque payload the control never inspects.
///
/// Items are immutable once constructed; build them with [`SpinnerItem::new`]
/// and the `with_*` setters.
///
/// # Equality
///
/// Two items compare equal when their title, icon handle, and description
/// match and both either carry or lack a payload. Payload *values* are never
/// compared (no `PartialEq` bound on `P`), and `enabled` does not take part
/// in equality at all.
#[derive(Debug, Clone)]
pub struct SpinnerItem<P> {
    title: String,
    icon: Handle,
    description: Option<String>,
    payload: Option<P>,
    enabled: bool,
}

impl<P> SpinnerItem<P> {
    /// Creates an item from its icon, the only required part.
    pub fn new(icon: impl Into<Handle>) -> Self {
        Self {
            title: String::new(),
            icon: icon.into(),
            description: None,
            payload: None,
            enabled: true,
        }
    }

    /// Sets the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the longer descriptive text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an arbitrary payload value.
    #[must_use]
    pub fn with_payload(mut self, payload: P) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Marks the item enabled or disabled. Disabled items stay selectable
    /// but render dimmed.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// The item title. May be empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The icon handle.
    #[must_use]
    pub fn icon(&self) -> &Handle {
        &self.icon
    }

    /// The optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The optional payload.
    #[must_use]
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Whether the item is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl<P> PartialEq for SpinnerItem<P> {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.icon == other.icon
            && self.description == other.description
            && self.payload.is_some() == other.payload.is_some()
    }
}
