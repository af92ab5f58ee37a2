// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::error::Error;
use crate::photo::Photo;
use crate::ui::overlay;
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The thumbnail was clicked or tapped.
    ThumbnailTapped,
    Overlay(overlay::Message),
    PhotoLoaded(Result<Photo, Error>),
    WindowResized(Size),
}

/// Runtime flags passed from `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Settings file to use instead of the per-user one.
    pub config_path: Option<PathBuf>,
    /// Photo to show; a generated gradient is shown otherwise.
    pub image_path: Option<PathBuf>,
}
