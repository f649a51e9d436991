//! Affirmative button growth
//!
//! Each dodge bumps the scale by a fixed step, capped at `max` and
//! debounced so a burst of move events only counts once.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Scale of the affirmative button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleState {
    /// Current scale (never decreases until reset)
    pub current: f32,
    /// Cap, fixed at initialization
    pub max: f32,
    pub step: f32,
    pub cooldown_ms: f64,
    /// Time of the last successful bump (ms)
    pub last_bump_at: Option<f64>,
}

impl ScaleState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            current: settings.initial_scale,
            max: settings.initial_scale,
            step: settings.scale_step,
            cooldown_ms: settings.cooldown_ms,
            last_bump_at: None,
        }
    }

    /// Set the cap; it never goes below the current scale
    pub fn set_max(&mut self, max: f32) {
        self.max = max.max(self.current);
    }

    pub fn is_maxed(&self) -> bool {
        self.current >= self.max
    }

    /// Whether a bump at `now_ms` would be swallowed by the cooldown
    pub fn cooling_down(&self, now_ms: f64) -> bool {
        self.last_bump_at
            .is_some_and(|last| now_ms - last < self.cooldown_ms)
    }

    /// Grow by one step; returns the new scale if it changed
    pub fn bump(&mut self, now_ms: f64) -> Option<f32> {
        if self.cooling_down(now_ms) {
            return None;
        }

        let next = self.max.min(self.current + self.step);
        if next <= self.current {
            return None;
        }

        self.current = next;
        self.last_bump_at = Some(now_ms);
        Some(next)
    }

    /// CSS transform for the current scale
    pub fn transform(&self) -> String {
        crate::centered_scale_transform(self.current)
    }
}
