// SPDX-License-Identifier: MPL-2.0
//! `iced_glance` is a full-screen photo overlay for the Iced GUI framework.
//!
//! Tapping a thumbnail presents the photo over a black dimmer. The photo can
//! be pinched or wheel-zoomed, and a vertical swipe past a distance or
//! velocity threshold dismisses it.

#![doc(html_root_url = "https://docs.rs/iced_glance/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod photo;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
