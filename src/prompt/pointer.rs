//! Pointer/mouse/touch normalization

use glam::Vec2;

/// A pointer-like event reduced to the coordinates we care about
///
/// All points are client coordinates (the same space as the host's rects).
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Pointer or mouse event
    Pointer { x: f32, y: f32 },
    /// Touch event: active touches, then touches that just ended
    Touch {
        touches: Vec<Vec2>,
        changed_touches: Vec<Vec2>,
    },
}

impl PointerInput {
    pub fn pointer(x: f32, y: f32) -> Self {
        PointerInput::Pointer { x, y }
    }

    /// The event's single point, if it has one
    ///
    /// Touch events prefer the first active touch and fall back to the first
    /// changed touch (covers `touchend`, where `touches` is already empty).
    pub fn point(&self) -> Option<Vec2> {
        match self {
            PointerInput::Pointer { x, y } => Some(Vec2::new(*x, *y)),
            PointerInput::Touch {
                touches,
                changed_touches,
            } => touches.first().or(changed_touches.first()).copied(),
        }
    }
}
