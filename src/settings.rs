//! Prompt tuning
//!
//! Read from the arena element's `data-settings` attribute on the web.
//! Any field left out of the JSON keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a settings blob was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning for layout, dodging and growth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Layout ===
    /// Distance kept between buttons and the arena edge
    pub padding: f32,
    /// Gap between the buttons in the initial layout
    pub gap: f32,

    // === Dodging ===
    /// Pointer distance that makes the evading button move
    pub danger_radius: f32,
    /// Preferred distance between the new position and the pointer
    pub avoid_radius: f32,
    /// Random candidates tried per move
    pub placement_attempts: u32,

    // === Growth ===
    /// Affirmative button scale before any dodge
    pub initial_scale: f32,
    /// Scale added per dodge
    pub scale_step: f32,
    /// Safety factor applied to the fit-to-arena scale
    pub scale_margin: f32,
    /// Minimum time between bumps (ms)
    pub cooldown_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            padding: PADDING,
            gap: GAP,

            danger_radius: DANGER_RADIUS,
            avoid_radius: AVOID_RADIUS,
            placement_attempts: PLACEMENT_ATTEMPTS,

            initial_scale: INITIAL_SCALE,
            scale_step: SCALE_STEP,
            scale_margin: SCALE_MARGIN,
            cooldown_ms: BUMP_COOLDOWN_MS,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings blob
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> SettingsError {
            SettingsError::Invalid { field, reason }
        }

        if !(self.padding >= 0.0) {
            return Err(invalid("padding", "must be zero or positive"));
        }
        if !(self.gap >= 0.0) {
            return Err(invalid("gap", "must be zero or positive"));
        }
        if !(self.danger_radius > 0.0) {
            return Err(invalid("danger_radius", "must be positive"));
        }
        if !(self.avoid_radius >= 0.0) {
            return Err(invalid("avoid_radius", "must be zero or positive"));
        }
        if self.placement_attempts == 0 {
            return Err(invalid("placement_attempts", "must be at least 1"));
        }
        if !(self.initial_scale > 0.0) {
            return Err(invalid("initial_scale", "must be positive"));
        }
        if !(self.scale_step > 0.0) {
            return Err(invalid("scale_step", "must be positive"));
        }
        if !(self.scale_margin > 0.0 && self.scale_margin <= 1.0) {
            return Err(invalid("scale_margin", "must be in (0, 1]"));
        }
        if !(self.cooldown_ms >= 0.0) {
            return Err(invalid("cooldown_ms", "must be zero or positive"));
        }
        Ok(())
    }

    /// Parse `json`, falling back to defaults (with a warning) when it is bad
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
        }
    }

    /// Attribute on the arena element holding the settings JSON
    #[allow(dead_code)]
    const ATTRIBUTE: &'static str = "data-settings";

    /// Load settings from the arena element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(arena: &web_sys::Element) -> Self {
        match arena.get_attribute(Self::ATTRIBUTE) {
            Some(json) => {
                let settings = Self::from_json_or_default(&json);
                log::info!("Loaded settings from {}", Self::ATTRIBUTE);
                settings
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
