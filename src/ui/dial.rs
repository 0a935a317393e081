// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering adapter for the radial dial.
//!
//! [`Dial`] is a thin translation layer: it turns raw mouse and touch
//! activity into [`control::Message`]s for the host to route through
//! [`Spinner::handle`](crate::control::Spinner::handle), and it paints the
//! control from the spinner's current state. All interaction decisions live
//! in the control; the dial only does hit delivery and pixels.
//!
//! When the control is open in picker mode the dial keeps painting just the
//! center button; the host lays out [`crate::ui::picker::view`] for the
//! rows.

use crate::config::defaults::{BORDER_WIDTH, DIMMED_OPACITY, OPEN_PADDING};
use crate::control::{self, Spinner};
use crate::ui::layout;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Color, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};
use std::cell::Cell;
use std::f32::consts::TAU;
use std::time::Instant;

/// Segments used to approximate one wedge arc.
const ARC_SEGMENTS: usize = 16;

/// Colors for the dial surfaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialStyle {
    /// Fill of the always-visible center button.
    pub center_background: Color,
    /// Fill of the open wedges, before the angular opacity falloff.
    pub wedge_background: Color,
    /// Border of the center button.
    pub border: Color,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            center_background: Color::from_rgb(0.15, 0.15, 0.18),
            wedge_background: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            border: Color::from_rgb(0.85, 0.85, 0.9),
        }
    }
}

/// Per-widget canvas state: cached geometry plus the spinner revision it
/// was drawn from. The cache is dropped wholesale whenever the revision
/// moves.
#[derive(Default)]
pub struct DialState {
    cache: canvas::Cache,
    seen_revision: Cell<Option<u64>>,
}

/// The radial dial as a `canvas::Program`.
pub struct Dial<'a, P, Message> {
    spinner: &'a Spinner<P>,
    style: DialStyle,
    on_event: Box<dyn Fn(control::Message) -> Message + 'a>,
}

impl<'a, P, Message> Dial<'a, P, Message> {
    /// Creates a dial over the spinner's state. `on_event` wraps control
    /// messages into the host's message type.
    pub fn new(
        spinner: &'a Spinner<P>,
        on_event: impl Fn(control::Message) -> Message + 'a,
    ) -> Self {
        Self {
            spinner,
            style: DialStyle::default(),
            on_event: Box::new(on_event),
        }
    }

    /// Overrides the dial colors.
    #[must_use]
    pub fn style(mut self, style: DialStyle) -> Self {
        self.style = style;
        self
    }

    /// Wraps the dial into a fill-sized canvas element.
    pub fn into_element(self) -> Element<'a, Message>
    where
        P: 'a,
        Message: 'a,
    {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn publish(&self, message: control::Message) -> Option<Action<Message>> {
        Some(Action::publish((self.on_event)(message)).and_capture())
    }

    /// Cursor position relative to the canvas origin, wherever the cursor
    /// is. Used mid-gesture, when tracking must continue past the edges.
    fn relative(cursor: mouse::Cursor, bounds: Rectangle) -> Option<Point> {
        cursor
            .position()
            .map(|p| Point::new(p.x - bounds.x, p.y - bounds.y))
    }

    fn draw_center(&self, frame: &mut Frame, center: Point) {
        let radius = self.spinner.center_diameter() / 2.0;
        let circle = Path::circle(center, radius);
        frame.fill(&circle, self.style.center_background);
        frame.stroke(
            &circle,
            Stroke::default()
                .with_width(BORDER_WIDTH)
                .with_color(self.style.border),
        );

        if let Some(item) = self.spinner.current() {
            let edge = (self.spinner.center_diameter() - OPEN_PADDING * 2.0).max(0.0);
            let opacity = if item.is_enabled() {
                1.0
            } else {
                DIMMED_OPACITY
            };
            self.draw_icon(frame, item.icon().clone(), center, edge, opacity);
        }
    }

    fn draw_icon(
        &self,
        frame: &mut Frame,
        handle: iced_core::image::Handle,
        at: Point,
        edge: f32,
        opacity: f32,
    ) {
        if edge <= 0.0 {
            return;
        }
        let top_left = Point::new(at.x - edge / 2.0, at.y - edge / 2.0);
        frame.draw_image(
            Rectangle::new(top_left, Size::new(edge, edge)),
            canvas::Image::new(handle).opacity(opacity),
        );
    }

    fn draw_wedges(&self, frame: &mut Frame, center: Point) {
        let count = self.spinner.count();
        if count == 0 {
            return;
        }

        let container = Rectangle::with_size(frame.size());
        let radius = layout::fitted_radius(center, container);
        let edge = layout::icon_edge(radius, count, self.spinner.center_diameter(), OPEN_PADDING);
        let icon_radius = (radius - edge / 2.0 - OPEN_PADDING).max(0.0);
        let arc = TAU / count as f32;

        let placements = layout::placements(
            count,
            self.spinner.selected_index(),
            center,
            icon_radius,
            self.spinner.rotation_offset(),
        );

        for placement in &placements {
            let mut builder = canvas::path::Builder::new();
            builder.move_to(center);
            let start = placement.angle - arc / 2.0;
            for i in 0..=ARC_SEGMENTS {
                let angle = start + arc * (i as f32 / ARC_SEGMENTS as f32);
                builder.line_to(Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                ));
            }
            builder.close();

            let wedge = self.style.wedge_background;
            frame.fill(
                &builder.build(),
                Color {
                    a: wedge.a * placement.opacity,
                    ..wedge
                },
            );

            if let Some(item) = self.spinner.items().get(placement.index) {
                let opacity = placement.opacity
                    * if item.is_enabled() {
                        1.0
                    } else {
                        DIMMED_OPACITY
                    };
                self.draw_icon(
                    frame,
                    item.icon().clone(),
                    placement.position,
                    edge,
                    opacity,
                );
            }
        }
    }
}

impl<'a, P, Message> canvas::Program<Message> for Dial<'a, P, Message> {
    type State = DialState;

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let local = Rectangle::with_size(bounds.size());

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.publish(control::Message::PointerPressed {
                    position,
                    bounds: local,
                    now: Instant::now(),
                })
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if !self.spinner.is_pressed() {
                    return None;
                }
                let position = Self::relative(cursor, bounds)?;
                self.publish(control::Message::PointerMoved {
                    position,
                    bounds: local,
                    now: Instant::now(),
                })
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !self.spinner.is_pressed() {
                    return None;
                }
                match Self::relative(cursor, bounds) {
                    Some(position) => self.publish(control::Message::PointerReleased {
                        position,
                        bounds: local,
                    }),
                    None => self.publish(control::Message::PointerCancelled),
                }
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                if !self.spinner.is_pressed() {
                    return None;
                }
                self.publish(control::Message::PointerCancelled)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                let position = Point::new(position.x - bounds.x, position.y - bounds.y);
                self.publish(control::Message::PointerPressed {
                    position,
                    bounds: local,
                    now: Instant::now(),
                })
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if !self.spinner.is_pressed() {
                    return None;
                }
                let position = Point::new(position.x - bounds.x, position.y - bounds.y);
                self.publish(control::Message::PointerMoved {
                    position,
                    bounds: local,
                    now: Instant::now(),
                })
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                if !self.spinner.is_pressed() {
                    return None;
                }
                let position = Point::new(position.x - bounds.x, position.y - bounds.y);
                self.publish(control::Message::PointerReleased {
                    position,
                    bounds: local,
                })
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                if !self.spinner.is_pressed() {
                    return None;
                }
                self.publish(control::Message::PointerCancelled)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let revision = self.spinner.revision();
        if state.seen_revision.get() != Some(revision) {
            state.cache.clear();
            state.seen_revision.set(Some(revision));
        }

        let geometry = state.cache.draw(renderer, bounds.size(), |frame| {
            let center = Point::new(frame.width() / 2.0, frame.height() / 2.0);
            if self.spinner.is_open() && self.spinner.opens_as_spinner() {
                self.draw_wedges(frame, center);
            }
            self.draw_center(frame, center);
        });

        vec![geometry]
    }
}
