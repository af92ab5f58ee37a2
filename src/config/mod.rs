// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file and resolving them into the
//! tunables the overlay runs with.
//!
//! # Examples
//!
//! ```no_run
//! use iced_glance::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.fling_velocity = Some(1200.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Resolve into clamped overlay settings
//! let settings = config.overlay_settings();
//! assert_eq!(settings.fling_velocity, 1200.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGlance";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fling_velocity: Option<f32>,
    #[serde(default)]
    pub dismiss_distance_ratio: Option<f32>,
    #[serde(default)]
    pub dimmer_fade_ratio: Option<f32>,
    #[serde(default)]
    pub max_zoom_scale: Option<f32>,
}

impl Config {
    /// Resolves optional preferences into concrete, range-checked settings.
    #[must_use]
    pub fn overlay_settings(&self) -> OverlaySettings {
        let defaults = OverlaySettings::default();
        OverlaySettings {
            fling_velocity: self
                .fling_velocity
                .map_or(defaults.fling_velocity, |v| {
                    v.clamp(MIN_FLING_VELOCITY, MAX_FLING_VELOCITY)
                }),
            dismiss_distance_ratio: self
                .dismiss_distance_ratio
                .map_or(defaults.dismiss_distance_ratio, |v| {
                    v.clamp(MIN_DISMISS_DISTANCE_RATIO, MAX_DISMISS_DISTANCE_RATIO)
                }),
            dimmer_fade_ratio: self
                .dimmer_fade_ratio
                .map_or(defaults.dimmer_fade_ratio, |v| {
                    v.clamp(MIN_DIMMER_FADE_RATIO, MAX_DIMMER_FADE_RATIO)
                }),
            max_zoom_scale: self
                .max_zoom_scale
                .map_or(defaults.max_zoom_scale, |v| {
                    v.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE_LIMIT)
                }),
            ..defaults
        }
    }
}

/// Tunables for a single overlay session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySettings {
    /// Release speed (points per second) that dismisses regardless of distance.
    pub fling_velocity: f32,
    /// Fraction of the screen height a drag must cover to dismiss.
    pub dismiss_distance_ratio: f32,
    /// Fraction of the screen height at which the dimmer reaches zero.
    pub dimmer_fade_ratio: f32,
    pub min_zoom_scale: f32,
    pub max_zoom_scale: f32,
    pub open_fade: Duration,
    pub close_fade: Duration,
    pub exit_slide: Duration,
    pub settle: Duration,
    pub touch_slop: f32,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            fling_velocity: DEFAULT_FLING_VELOCITY,
            dismiss_distance_ratio: DEFAULT_DISMISS_DISTANCE_RATIO,
            dimmer_fade_ratio: DEFAULT_DIMMER_FADE_RATIO,
            min_zoom_scale: MIN_ZOOM_SCALE,
            max_zoom_scale: DEFAULT_MAX_ZOOM_SCALE,
            open_fade: OPEN_FADE_DURATION,
            close_fade: CLOSE_FADE_DURATION,
            exit_slide: EXIT_SLIDE_DURATION,
            settle: SETTLE_DURATION,
            touch_slop: TOUCH_SLOP,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
