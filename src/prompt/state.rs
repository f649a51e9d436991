//! Prompt controller state and event handling
//!
//! The controller owns everything that outlives a single event: whether the
//! layout has been done, the last pointer sample, the affirmative scale and
//! the RNG. Every handler returns the style changes the host should apply.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::{Button, Rect};
use super::growth::ScaleState;
use super::host::HostView;
use super::layout::{max_scale, place_centered};
use super::placement::{PlacementQuality, random_position};
use super::pointer::PointerInput;
use crate::settings::Settings;

/// Style change for the host to apply
#[derive(Debug, Clone, PartialEq)]
pub enum PromptEvent {
    /// Absolutely position a button's center (arena-relative, px)
    Moved { button: Button, center: Vec2 },
    /// New transform for the affirmative button
    Scaled { scale: f32, transform: String },
    /// The affirmative button was activated; show the outcome
    Revealed,
}

/// Arena and button rects, arena-relative
#[derive(Debug, Clone, Copy)]
struct Measured {
    arena: Rect,
    affirmative: Option<Rect>,
    evading: Rect,
}

impl Measured {
    /// Measure the host; `None` until the arena and evading button have size
    fn take(view: &impl HostView) -> Option<Self> {
        let arena = view.arena_rect().filter(Rect::is_measurable)?;
        let origin = arena.origin();
        let evading = view
            .button_rect(Button::Evading)
            .filter(Rect::is_measurable)?
            .relative_to(origin);
        let affirmative = view
            .button_rect(Button::Affirmative)
            .filter(Rect::is_measurable)
            .map(|r| r.relative_to(origin));

        Some(Self {
            arena,
            affirmative,
            evading,
        })
    }
}

/// The Yes/No prompt controller
#[derive(Debug, Clone)]
pub struct PromptController {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    initialized: bool,
    revealed: bool,
    /// Last pointer position (arena-relative)
    pointer: Option<Vec2>,
    scale: ScaleState,
}

impl PromptController {
    /// Create a controller; `seed` drives evading-button placement
    pub fn new(settings: Settings, seed: u64) -> Self {
        let scale = ScaleState::new(&settings);
        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            initialized: false,
            revealed: false,
            pointer: None,
            scale,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Current affirmative scale
    pub fn scale(&self) -> f32 {
        self.scale.current
    }

    pub fn max_scale(&self) -> f32 {
        self.scale.max
    }

    /// Last pointer sample (arena-relative)
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Lay the buttons out once the host can be measured
    ///
    /// Safe to call on every render; does nothing once initialized or while
    /// any of the three elements still lacks a size.
    pub fn ensure_initialized(&mut self, view: &impl HostView) -> Vec<PromptEvent> {
        if self.initialized {
            return Vec::new();
        }

        let Some(measured) = Measured::take(view) else {
            log::trace!("Host not measurable yet");
            return Vec::new();
        };
        let Some(affirmative) = measured.affirmative else {
            log::trace!("Affirmative button not measurable yet");
            return Vec::new();
        };

        let arena = measured.arena.size();
        let layout = place_centered(
            arena,
            affirmative.size(),
            measured.evading.size(),
            self.settings.padding,
            self.settings.gap,
        );

        self.scale.set_max(max_scale(
            arena,
            affirmative.size(),
            self.scale.current,
            self.settings.scale_margin,
        ));
        self.initialized = true;

        log::info!(
            "Prompt initialized in {}x{} arena (max scale {:.2})",
            arena.x,
            arena.y,
            self.scale.max
        );

        vec![
            PromptEvent::Moved {
                button: Button::Affirmative,
                center: layout.affirmative,
            },
            PromptEvent::Moved {
                button: Button::Evading,
                center: layout.evading,
            },
            PromptEvent::Scaled {
                scale: self.scale.current,
                transform: self.scale.transform(),
            },
        ]
    }

    /// Pointer moved over the arena: dodge if it came too close
    pub fn on_pointer_move(
        &mut self,
        view: &impl HostView,
        input: &PointerInput,
        now_ms: f64,
    ) -> Vec<PromptEvent> {
        if !self.active() {
            return Vec::new();
        }
        let Some(measured) = Measured::take(view) else {
            return Vec::new();
        };
        let Some(point) = input.point() else {
            log::trace!("Pointer event without coordinates");
            return Vec::new();
        };

        let pointer = point - measured.arena.origin();
        self.pointer = Some(pointer);

        let dist = crate::distance(pointer, measured.evading.center());
        if dist < self.settings.danger_radius {
            log::debug!("Pointer {dist:.1}px from evading button, dodging");
            self.evade(&measured, now_ms)
        } else {
            Vec::new()
        }
    }

    /// The evading button was hovered or touched directly
    ///
    /// Covers coarse pointers that land on the button without a near miss.
    pub fn on_evader_hover(&mut self, view: &impl HostView, now_ms: f64) -> Vec<PromptEvent> {
        if !self.active() {
            return Vec::new();
        }
        let Some(measured) = Measured::take(view) else {
            return Vec::new();
        };
        log::debug!("Evading button hovered, dodging");
        self.evade(&measured, now_ms)
    }

    /// The affirmative button was activated
    pub fn on_affirm(&mut self) -> Vec<PromptEvent> {
        if self.revealed {
            return Vec::new();
        }
        self.revealed = true;
        log::info!("Affirmative answer after reaching scale {:.2}", self.scale.current);
        vec![PromptEvent::Revealed]
    }

    /// Start over: forget the layout, pointer, growth and answer
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone(), self.seed);
    }

    fn active(&self) -> bool {
        self.initialized && !self.revealed
    }

    /// Move the evading button and grow the affirmative one
    fn evade(&mut self, measured: &Measured, now_ms: f64) -> Vec<PromptEvent> {
        let placement = random_position(
            &mut self.rng,
            measured.arena.size(),
            measured.evading.size(),
            measured.affirmative.as_ref(),
            self.pointer,
            &self.settings,
        );
        match placement.quality {
            PlacementQuality::Clear => {}
            PlacementQuality::NearPointer => {
                log::debug!("No spot outside avoidance radius in {} tries", placement.attempts)
            }
            PlacementQuality::Overlapping => {
                log::debug!("Arena too crowded to avoid the affirmative button")
            }
        }

        let mut events = vec![PromptEvent::Moved {
            button: Button::Evading,
            center: placement.center,
        }];

        if let Some(scale) = self.scale.bump(now_ms) {
            log::debug!("Affirmative scale -> {scale:.2}");
            events.push(PromptEvent::Scaled {
                scale,
                transform: self.scale.transform(),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::prompt::StaticView;

    const ORIGIN: Vec2 = Vec2::new(50.0, 20.0);

    /// 400x300 arena at (50, 20) with unplaced 100x40 / 80x40 buttons
    fn view() -> StaticView {
        StaticView::new(
            Rect::new(ORIGIN.x, ORIGIN.y, 400.0, 300.0),
            Rect::new(0.0, 0.0, 100.0, 40.0),
            Rect::new(0.0, 0.0, 80.0, 40.0),
            INITIAL_SCALE,
        )
    }

    fn initialized() -> (PromptController, StaticView) {
        let mut view = view();
        let mut ctl = PromptController::new(Settings::default(), 42);
        let events = ctl.ensure_initialized(&view);
        view.apply_all(&events);
        (ctl, view)
    }

    fn scaled(events: &[PromptEvent]) -> Option<f32> {
        events.iter().find_map(|e| match e {
            PromptEvent::Scaled { scale, .. } => Some(*scale),
            _ => None,
        })
    }

    fn moved(events: &[PromptEvent], which: Button) -> Option<Vec2> {
        events.iter().find_map(|e| match e {
            PromptEvent::Moved { button, center } if *button == which => Some(*center),
            _ => None,
        })
    }

    #[test]
    fn test_initialize_waits_for_geometry() {
        let mut ctl = PromptController::new(Settings::default(), 1);

        let mut view = view();
        view.evading = None;
        assert!(ctl.ensure_initialized(&view).is_empty());

        view.evading = Some(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert!(ctl.ensure_initialized(&view).is_empty());
        assert!(!ctl.is_initialized());

        view.evading = Some(Rect::new(0.0, 0.0, 80.0, 40.0));
        let events = ctl.ensure_initialized(&view);
        assert!(ctl.is_initialized());
        assert_eq!(moved(&events, Button::Affirmative), Some(Vec2::new(152.0, 150.0)));
        assert_eq!(moved(&events, Button::Evading), Some(Vec2::new(258.0, 150.0)));
        assert_eq!(
            events.last(),
            Some(&PromptEvent::Scaled {
                scale: 0.5,
                transform: "translate(-50%, -50%) scale(0.5)".to_string(),
            })
        );

        // Idempotent once done
        assert!(ctl.ensure_initialized(&view).is_empty());
    }

    #[test]
    fn test_max_scale_computed_at_init() {
        let (ctl, _) = initialized();
        // Rendered 100x40 at 0.5 -> base 200x80; min(400/200, 300/80) = 2.0
        assert!((ctl.max_scale() - 2.0 * SCALE_MARGIN).abs() < 1e-5);
    }

    #[test]
    fn test_nothing_happens_before_init() {
        let view = view();
        let mut ctl = PromptController::new(Settings::default(), 1);
        let near = PointerInput::pointer(ORIGIN.x + 10.0, ORIGIN.y + 10.0);
        assert!(ctl.on_pointer_move(&view, &near, 0.0).is_empty());
        assert!(ctl.on_evader_hover(&view, 0.0).is_empty());
        assert_eq!(ctl.pointer(), None);
        assert_eq!(ctl.scale(), INITIAL_SCALE);
    }

    #[test]
    fn test_scenario_pointer_close_triggers_dodge() {
        let (mut ctl, mut view) = initialized();
        // Evading button centered at (210, 155) arena-relative
        view.apply(&PromptEvent::Moved {
            button: Button::Evading,
            center: Vec2::new(210.0, 155.0),
        });

        let pointer = Vec2::new(200.0, 150.0);
        let input = PointerInput::pointer(ORIGIN.x + pointer.x, ORIGIN.y + pointer.y);
        let events = ctl.on_pointer_move(&view, &input, 1000.0);

        assert_eq!(ctl.pointer(), Some(pointer));
        let center = moved(&events, Button::Evading).unwrap();
        let yes = view.affirmative.unwrap().relative_to(ORIGIN);
        assert!(!Rect::from_center(center, Vec2::new(80.0, 40.0)).overlaps(&yes));
        assert!((scaled(&events).unwrap() - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_pointer_far_away_is_ignored() {
        let (mut ctl, view) = initialized();
        // Evading center is (258, 150); pointer at (20, 20) is far off
        let input = PointerInput::pointer(ORIGIN.x + 20.0, ORIGIN.y + 20.0);
        assert!(ctl.on_pointer_move(&view, &input, 1000.0).is_empty());
        assert_eq!(ctl.pointer(), Some(Vec2::new(20.0, 20.0)));
        assert_eq!(ctl.scale(), INITIAL_SCALE);
    }

    #[test]
    fn test_danger_radius_is_strict() {
        let (mut ctl, view) = initialized();
        let center = Vec2::new(258.0, 150.0);
        let at_edge = ORIGIN + center + Vec2::new(DANGER_RADIUS, 0.0);
        let input = PointerInput::pointer(at_edge.x, at_edge.y);
        assert!(ctl.on_pointer_move(&view, &input, 1000.0).is_empty());
    }

    #[test]
    fn test_empty_touch_does_nothing() {
        let (mut ctl, view) = initialized();
        let input = PointerInput::Touch {
            touches: vec![],
            changed_touches: vec![],
        };
        assert!(ctl.on_pointer_move(&view, &input, 1000.0).is_empty());
        assert_eq!(ctl.pointer(), None);
        assert_eq!(ctl.scale(), INITIAL_SCALE);
    }

    #[test]
    fn test_hover_dodges_and_respects_cooldown() {
        let (mut ctl, mut view) = initialized();

        let first = ctl.on_evader_hover(&view, 1000.0);
        assert!(moved(&first, Button::Evading).is_some());
        assert!(scaled(&first).is_some());
        view.apply_all(&first);

        // Still moves, but no growth inside the cooldown
        let second = ctl.on_evader_hover(&view, 1100.0);
        assert!(moved(&second, Button::Evading).is_some());
        assert!(scaled(&second).is_none());
        view.apply_all(&second);

        let third = ctl.on_evader_hover(&view, 1200.0);
        assert!(scaled(&third).is_some());
    }

    #[test]
    fn test_growth_stops_at_max() {
        let (mut ctl, mut view) = initialized();
        let mut now = 0.0;
        let mut last = ctl.scale();
        for _ in 0..200 {
            now += 200.0;
            let events = ctl.on_evader_hover(&view, now);
            view.apply_all(&events);
            assert!(ctl.scale() >= last);
            assert!(ctl.scale() <= ctl.max_scale());
            last = ctl.scale();
        }
        assert_eq!(ctl.scale(), ctl.max_scale());
        let events = ctl.on_evader_hover(&view, now + 1000.0);
        assert!(scaled(&events).is_none());
    }

    #[test]
    fn test_affirm_ends_the_game() {
        let (mut ctl, view) = initialized();
        assert_eq!(ctl.on_affirm(), vec![PromptEvent::Revealed]);
        assert!(ctl.is_revealed());
        assert!(ctl.on_affirm().is_empty());
        assert!(ctl.on_evader_hover(&view, 1000.0).is_empty());
    }

    #[test]
    fn test_reset() {
        let (mut ctl, view) = initialized();
        ctl.on_evader_hover(&view, 1000.0);
        ctl.on_affirm();

        ctl.reset();
        assert!(!ctl.is_initialized());
        assert!(!ctl.is_revealed());
        assert_eq!(ctl.scale(), INITIAL_SCALE);
        assert_eq!(ctl.pointer(), None);
    }

    #[test]
    fn test_same_seed_same_dodges() {
        let (mut a, view) = initialized();
        let (mut b, _) = initialized();
        for i in 0..10 {
            let t = f64::from(i) * 500.0;
            assert_eq!(a.on_evader_hover(&view, t), b.on_evader_hover(&view, t));
        }
    }
}
