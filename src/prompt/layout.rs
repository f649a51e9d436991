//! Initial placement of the two buttons
//!
//! The pair sits side by side, centered in the arena, with each button
//! clamped on its own so neither can spill past the padding.

use glam::Vec2;

use crate::clamp_lower_wins;

/// Starting centers for both buttons (arena-relative)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialLayout {
    pub affirmative: Vec2,
    pub evading: Vec2,
}

/// Center the affirmative/evading pair inside an arena of `arena` size
pub fn place_centered(
    arena: Vec2,
    affirmative: Vec2,
    evading: Vec2,
    padding: f32,
    gap: f32,
) -> InitialLayout {
    let total_width = affirmative.x + gap + evading.x;
    let left_edge = (arena.x - total_width) / 2.0;

    let yes_x = left_edge + affirmative.x / 2.0;
    let no_x = left_edge + affirmative.x + gap + evading.x / 2.0;

    let yes_x = clamp_lower_wins(
        yes_x,
        padding + affirmative.x / 2.0,
        arena.x - affirmative.x / 2.0 - padding,
    );
    let no_x = clamp_lower_wins(
        no_x,
        padding + evading.x / 2.0,
        arena.x - evading.x / 2.0 - padding,
    );

    let tallest = affirmative.y.max(evading.y);
    let y = clamp_lower_wins(
        arena.y / 2.0,
        padding + tallest / 2.0,
        arena.y - tallest / 2.0 - padding,
    );

    InitialLayout {
        affirmative: Vec2::new(yes_x, y),
        evading: Vec2::new(no_x, y),
    }
}

/// Largest scale at which the affirmative button still fits the arena
///
/// `rendered` is the button's on-screen size at `current_scale`. The result
/// never drops below `current_scale`; unmeasurable sizes keep it there.
pub fn max_scale(arena: Vec2, rendered: Vec2, current_scale: f32, margin: f32) -> f32 {
    if rendered.x <= 0.0 || rendered.y <= 0.0 || current_scale <= 0.0 {
        return current_scale;
    }

    let base = rendered / current_scale;
    if base.x <= 0.0 || base.y <= 0.0 {
        return current_scale;
    }

    let scale_to_fit = (arena.x / base.x).min(arena.y / base.y);
    current_scale.max(scale_to_fit * margin)
}
