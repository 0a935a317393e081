// SPDX-License-Identifier: MPL-2.0
//! Picker-list fallback: one selectable row per value.
//!
//! Used when the presentation policy resolves to the list (too many items
//! for a readable dial, or `PickerOnly` mode). Built from stock widgets so
//! it inherits the host theme.

use crate::control::Spinner;
use iced::widget::{button, column, image, row, scrollable, text};
use iced::{Alignment, Element, Length};

const ROW_ICON_EDGE: f32 = 32.0;
const ROW_SPACING: f32 = 8.0;
const TITLE_SIZE: f32 = 16.0;

/// Builds the list view over the spinner's values. `on_select` wraps the
/// chosen row index into the host's message type; route the resulting
/// message through
/// [`Message::PickerRowSelected`](crate::control::Message::PickerRowSelected).
///
/// Disabled items render as inert rows. The selected row uses the theme's
/// emphasized button style.
pub fn view<'a, P, Message>(
    spinner: &'a Spinner<P>,
    on_select: impl Fn(usize) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let selected = spinner.selected_index();

    let rows: Vec<Element<'a, Message>> = spinner
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let content = row![
                image(item.icon().clone())
                    .width(ROW_ICON_EDGE)
                    .height(ROW_ICON_EDGE),
                text(item.title()).size(TITLE_SIZE),
            ]
            .spacing(ROW_SPACING)
            .align_y(Alignment::Center);

            let style = if index == selected {
                button::secondary
            } else {
                button::text
            };

            button(content)
                .width(Length::Fill)
                .style(style)
                .on_press_maybe(item.is_enabled().then(|| on_select(index)))
                .into()
        })
        .collect();

    scrollable(column(rows).spacing(2)).into()
}
