//! What the controller needs from the view hosting it

use super::geometry::{Button, Rect};
use super::state::PromptEvent;

/// Geometry source for the arena and its two buttons
///
/// Rects are in client coordinates and re-measured on every call. `None`
/// (or a zero-sized rect) means the host has not laid the element out yet.
pub trait HostView {
    fn arena_rect(&self) -> Option<Rect>;
    fn button_rect(&self, button: Button) -> Option<Rect>;
}

/// A view whose rects are plain fields
///
/// Used by the native demo and tests. `apply` restyles it the way a browser
/// would restyle the buttons.
#[derive(Debug, Clone, Default)]
pub struct StaticView {
    pub arena: Option<Rect>,
    pub affirmative: Option<Rect>,
    pub evading: Option<Rect>,
    /// Scale the affirmative rect is currently rendered at
    pub affirmative_scale: f32,
    pub revealed: bool,
}

impl StaticView {
    /// `affirmative` must already be rendered at `affirmative_scale`
    pub fn new(arena: Rect, affirmative: Rect, evading: Rect, affirmative_scale: f32) -> Self {
        Self {
            arena: Some(arena),
            affirmative: Some(affirmative),
            evading: Some(evading),
            affirmative_scale,
            revealed: false,
        }
    }

    /// Apply one controller event
    pub fn apply(&mut self, event: &PromptEvent) {
        match event {
            PromptEvent::Moved { button, center } => {
                let Some(arena) = self.arena else { return };
                let slot = match button {
                    Button::Affirmative => &mut self.affirmative,
                    Button::Evading => &mut self.evading,
                };
                if let Some(rect) = slot {
                    *rect = Rect::from_center(arena.origin() + *center, rect.size());
                }
            }
            PromptEvent::Scaled { scale, .. } => {
                if let Some(rect) = &mut self.affirmative {
                    if self.affirmative_scale > 0.0 {
                        let base = rect.size() / self.affirmative_scale;
                        *rect = Rect::from_center(rect.center(), base * *scale);
                    }
                }
                self.affirmative_scale = *scale;
            }
            PromptEvent::Revealed => self.revealed = true,
        }
    }

    pub fn apply_all(&mut self, events: &[PromptEvent]) {
        for event in events {
            self.apply(event);
        }
    }
}

impl HostView for StaticView {
    fn arena_rect(&self) -> Option<Rect> {
        self.arena
    }

    fn button_rect(&self, button: Button) -> Option<Rect> {
        match button {
            Button::Affirmative => self.affirmative,
            Button::Evading => self.evading,
        }
    }
}
