//! Evasive Prompt - a Yes/No prompt whose "No" button runs away
//!
//! Core modules:
//! - `prompt`: Deterministic controller (layout, proximity, placement, growth)
//! - `platform`: Browser/native host abstraction (geometry, input, clock)
//! - `settings`: Data-driven tuning of radii, padding and growth

pub mod platform;
pub mod prompt;
pub mod settings;

pub use prompt::{Button, PromptController, PromptEvent};
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Default tuning constants
pub mod consts {
    /// Distance kept between buttons and the arena edge
    pub const PADDING: f32 = 8.0;
    /// Horizontal gap between the two buttons in the initial layout
    pub const GAP: f32 = 16.0;

    /// Pointer closer than this to the evading button's center triggers a dodge
    pub const DANGER_RADIUS: f32 = 90.0;
    /// Preferred minimum distance between a new evading position and the pointer
    pub const AVOID_RADIUS: f32 = 120.0;
    /// Candidate positions drawn per dodge
    pub const PLACEMENT_ATTEMPTS: u32 = 20;

    /// Starting scale of the affirmative button
    pub const INITIAL_SCALE: f32 = 0.5;
    /// Scale added per dodge
    pub const SCALE_STEP: f32 = 0.05;
    /// Fraction of the arena the fully grown button may fill
    pub const SCALE_MARGIN: f32 = 0.97;
    /// Minimum time between scale bumps (ms)
    pub const BUMP_COOLDOWN_MS: f64 = 180.0;
}

/// Clamp `v` into `[min, max]`, letting `min` win when the range is inverted
#[inline]
pub fn clamp_lower_wins(v: f32, min: f32, max: f32) -> f32 {
    v.min(max).max(min)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// CSS transform that scales an element around its own center
pub fn centered_scale_transform(scale: f32) -> String {
    format!("translate(-50%, -50%) scale({scale})")
}
