// SPDX-License-Identifier: MPL-2.0
//! Iced-facing adapters around the headless control.
//!
//! - [`layout`] - pure radial geometry (angles, opacity, radius fitting)
//! - [`dial`] - the canvas program painting the dial and delivering input
//! - [`picker`] - the list fallback for crowded dials
//! - [`subscription`] - flywheel tick delivery while a spin is coasting

pub mod dial;
pub mod layout;
pub mod picker;
pub mod subscription;
