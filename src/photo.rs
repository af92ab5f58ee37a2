// SPDX-License-Identifier: MPL-2.0
//! Decoded photo handed to the overlay.
//!
//! A `Photo` always has non-zero dimensions: constructors reject empty or
//! mis-sized pixel buffers so the overlay never has to handle a missing image.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Photo {
    handle: image::Handle,
    width: u32,
    height: u32,
}

impl Photo {
    /// Builds a photo from straight RGBA8 pixels.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Image(format!(
                "photo must not be empty ({width}x{height})"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::Image(format!(
                "expected {expected} bytes of RGBA data, got {}",
                pixels.len()
            )));
        }

        Ok(Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        })
    }

    /// Decodes a photo from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let decoded = image_rs::open(path)?.to_rgba8();
        let (width, height) = decoded.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Self::from_rgba(width, height, decoded.into_raw())
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Natural size in logical points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
pub(crate) fn solid(width: u32, height: u32) -> Photo {
    let pixels = vec![0x80; width as usize * height as usize * 4];
    Photo::from_rgba(width, height, pixels).expect("solid test photo is valid")
}
