//! Picking a new spot for the evading button
//!
//! Rejection sampling over the padded arena. Candidates must clear the
//! affirmative button; among those, the first one outside the avoidance
//! radius of the pointer wins. When the budget runs out we settle for the
//! last candidate that cleared the affirmative button, and failing that the
//! last candidate drawn. This never fails to produce a position.

use glam::Vec2;
use rand::Rng;

use super::geometry::Rect;
use crate::settings::Settings;

/// How well a placement met its constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementQuality {
    /// Clear of the affirmative button and outside the avoidance radius
    /// (or there was no pointer to avoid)
    Clear,
    /// Clear of the affirmative button, but within the avoidance radius
    NearPointer,
    /// No candidate avoided the affirmative button
    Overlapping,
}

/// Result of a placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// New center (arena-relative)
    pub center: Vec2,
    pub quality: PlacementQuality,
    /// Candidates drawn before settling
    pub attempts: u32,
}

/// Inclusive range of centers that keeps a button of `size` inside the padding
///
/// Returns `(min, max)`; when the arena is too small the range collapses
/// onto `min`.
pub fn center_bounds(arena: Vec2, size: Vec2, padding: f32) -> (Vec2, Vec2) {
    let min = Vec2::splat(padding) + size / 2.0;
    let max = arena - size / 2.0 - Vec2::splat(padding);
    (min, max.max(min))
}

/// Choose a new center for a button of `size` inside an arena of `arena` size
///
/// `obstacle` is the affirmative button's box and `pointer` the last pointer
/// sample, both arena-relative.
pub fn random_position<R: Rng>(
    rng: &mut R,
    arena: Vec2,
    size: Vec2,
    obstacle: Option<&Rect>,
    pointer: Option<Vec2>,
    settings: &Settings,
) -> Placement {
    let (min, max) = center_bounds(arena, size, settings.padding);
    let span = max - min;
    let attempts = settings.placement_attempts.max(1);

    let mut last_candidate = min;
    let mut last_clear: Option<Vec2> = None;

    for attempt in 1..=attempts {
        let candidate = Vec2::new(
            min.x + rng.random::<f32>() * span.x,
            min.y + rng.random::<f32>() * span.y,
        );
        last_candidate = candidate;

        let footprint = Rect::from_center(candidate, size);
        if obstacle.is_some_and(|o| footprint.overlaps(o)) {
            log::trace!("candidate {attempt} overlaps affirmative button");
            continue;
        }
        last_clear = Some(candidate);

        match pointer {
            None => {
                return Placement {
                    center: candidate,
                    quality: PlacementQuality::Clear,
                    attempts: attempt,
                };
            }
            Some(p) if crate::distance(p, candidate) > settings.avoid_radius => {
                return Placement {
                    center: candidate,
                    quality: PlacementQuality::Clear,
                    attempts: attempt,
                };
            }
            Some(_) => log::trace!("candidate {attempt} too close to pointer"),
        }
    }

    match last_clear {
        Some(center) => Placement {
            center,
            quality: PlacementQuality::NearPointer,
            attempts,
        },
        None => Placement {
            center: last_candidate,
            quality: PlacementQuality::Overlapping,
            attempts,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EVADER: Vec2 = Vec2::new(80.0, 40.0);

    fn arena_rect(arena: Vec2) -> Rect {
        Rect::new(0.0, 0.0, arena.x, arena.y)
    }

    #[test]
    fn test_scenario_pointer_nearby() {
        let settings = Settings::default();
        let arena = Vec2::new(400.0, 300.0);
        let yes = Rect::from_center(Vec2::new(152.0, 150.0), Vec2::new(100.0, 40.0));
        let pointer = Vec2::new(200.0, 150.0);

        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let placement =
                random_position(&mut rng, arena, EVADER, Some(&yes), Some(pointer), &settings);
            let footprint = Rect::from_center(placement.center, EVADER);

            assert!(arena_rect(arena).contains_rect_inset(&footprint, PADDING - 1e-3));
            assert_ne!(placement.quality, PlacementQuality::Overlapping);
            assert!(!footprint.overlaps(&yes));
            if placement.quality == PlacementQuality::Clear {
                assert!(placement.center.distance(pointer) > AVOID_RADIUS);
            }
        }
    }

    #[test]
    fn test_no_pointer_takes_first_clear_candidate() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let placement = random_position(
            &mut rng,
            Vec2::new(400.0, 300.0),
            EVADER,
            None,
            None,
            &settings,
        );
        assert_eq!(placement.attempts, 1);
        assert_eq!(placement.quality, PlacementQuality::Clear);
    }

    #[test]
    fn test_tiny_arena_degrades_gracefully() {
        // Arena exactly fits the evader, and the affirmative button covers it
        let settings = Settings::default();
        let arena = EVADER + Vec2::splat(2.0 * PADDING);
        let yes = arena_rect(arena);
        let mut rng = Pcg32::seed_from_u64(1);
        let placement =
            random_position(&mut rng, arena, EVADER, Some(&yes), None, &settings);
        assert_eq!(placement.quality, PlacementQuality::Overlapping);
        assert_eq!(placement.attempts, PLACEMENT_ATTEMPTS);
        assert_eq!(placement.center, arena / 2.0);
    }

    #[test]
    fn test_pointer_everywhere_settles_near_pointer() {
        // Avoidance radius larger than the arena: nothing qualifies
        let settings = Settings {
            avoid_radius: 10_000.0,
            ..Settings::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let placement = random_position(
            &mut rng,
            Vec2::new(400.0, 300.0),
            EVADER,
            None,
            Some(Vec2::new(200.0, 150.0)),
            &settings,
        );
        assert_eq!(placement.quality, PlacementQuality::NearPointer);
        assert_eq!(placement.attempts, PLACEMENT_ATTEMPTS);
    }

    #[test]
    fn test_center_bounds_collapse() {
        let (min, max) = center_bounds(Vec2::new(50.0, 20.0), EVADER, PADDING);
        assert_eq!(min, max);
        assert_eq!(min, Vec2::new(48.0, 28.0));
    }

    proptest! {
        #[test]
        fn prop_placement_within_padding(
            seed in any::<u64>(),
            w in 0.0f32..600.0,
            h in 0.0f32..400.0,
            px in 0.0f32..700.0,
            py in 0.0f32..500.0,
        ) {
            let settings = Settings::default();
            let arena = EVADER + Vec2::splat(2.0 * PADDING) + Vec2::new(w, h);
            let yes = Rect::from_center(arena / 2.0, Vec2::new(100.0, 40.0));
            let mut rng = Pcg32::seed_from_u64(seed);
            let placement = random_position(
                &mut rng, arena, EVADER, Some(&yes), Some(Vec2::new(px, py)), &settings,
            );
            let footprint = Rect::from_center(placement.center, EVADER);
            prop_assert!(arena_rect(arena).contains_rect_inset(&footprint, PADDING - 1e-2));
            if placement.quality != PlacementQuality::Overlapping {
                prop_assert!(!footprint.overlaps(&yes));
            }
        }
    }
}
