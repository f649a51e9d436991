//! Axis-aligned rectangles for the arena and buttons
//!
//! Rects come from the host in client coordinates (left/top/width/height,
//! like a DOM bounding box). The controller converts them into arena-relative
//! coordinates by subtracting the arena origin.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which of the two prompt buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// "Yes" - grows on every dodge, ends the prompt when activated
    Affirmative,
    /// "No" - runs away from the pointer
    Evading,
}

impl Button {
    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Affirmative => "affirmative",
            Button::Evading => "evading",
        }
    }
}

/// A bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Same rect expressed relative to `origin`
    pub fn relative_to(&self, origin: Vec2) -> Self {
        Self::new(
            self.left - origin.x,
            self.top - origin.y,
            self.width,
            self.height,
        )
    }

    /// Whether the host has laid this element out yet
    pub fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Strict overlap test: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }

    /// Whether `inner` lies fully inside this rect shrunk by `inset` on every side
    pub fn contains_rect_inset(&self, inner: &Rect, inset: f32) -> bool {
        inner.left >= self.left + inset
            && inner.top >= self.top + inset
            && inner.right() <= self.right() - inset
            && inner.bottom() <= self.bottom() - inset
    }
}
