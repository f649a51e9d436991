//! Evasive Prompt entry point
//!
//! Wires the DOM to the controller on the web. Natively, runs a scripted
//! pointer chase against a fixed-size view and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{MouseEvent, TouchEvent};

    use evasive_prompt::platform::web::{DomView, mouse_input, touch_input};
    use evasive_prompt::platform::{Clock, SystemClock};
    use evasive_prompt::prompt::{PointerInput, PromptController};
    use evasive_prompt::Settings;

    /// Page instance holding the controller and its view
    struct App {
        controller: PromptController,
        view: DomView,
        clock: SystemClock,
    }

    impl App {
        fn pointer_move(&mut self, input: &PointerInput) {
            let now = self.clock.now_ms();
            let events = self.controller.on_pointer_move(&self.view, input, now);
            self.view.apply(&events);
        }

        fn evader_hover(&mut self) {
            let now = self.clock.now_ms();
            let events = self.controller.on_evader_hover(&self.view, now);
            self.view.apply(&events);
        }

        fn affirm(&mut self) {
            let events = self.controller.on_affirm();
            self.view.apply(&events);
        }

        /// Returns true once the layout is in place
        fn try_init(&mut self) -> bool {
            let events = self.controller.ensure_initialized(&self.view);
            self.view.apply(&events);
            self.controller.is_initialized()
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }

        log::info!("Evasive Prompt starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };
        let Some(view) = DomView::find(&document) else {
            log::error!("Page is missing the arena or its buttons");
            return;
        };

        let settings = Settings::load(&view.arena);
        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            controller: PromptController::new(settings, seed),
            view,
            clock: SystemClock::new(),
        }));

        setup_input_handlers(app.clone());

        // Poll until the first measurable render
        request_animation_frame(app);
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let (arena, evading, affirmative) = {
            let a = app.borrow();
            (
                a.view.arena.clone(),
                a.view.evading.clone(),
                a.view.affirmative.clone(),
            )
        };

        // Pointer move (mousemove kept for browsers without pointer events)
        for kind in ["pointermove", "mousemove"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().pointer_move(&mouse_input(&event));
            });
            let _ = arena.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                app.borrow_mut().pointer_move(&touch_input(&event));
            });
            let _ = arena
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Direct hits on the evading button (coarse pointers, taps)
        for kind in ["pointerenter", "mouseenter", "touchstart"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                app.borrow_mut().evader_hover();
            });
            let _ = evading.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Yes
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().affirm();
            });
            let _ = affirmative
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            let ready = app.borrow_mut().try_init();
            if !ready {
                request_animation_frame(app);
            }
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Evasive Prompt (native) starting...");
    log::info!("Native mode has no UI - run with `trunk serve` for the web version");

    println!("\nRunning scripted chase...");
    chase_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Chase the evading button with a pointer that always lands on its center
#[cfg(not(target_arch = "wasm32"))]
fn chase_demo() {
    use evasive_prompt::platform::{Clock, ManualClock};
    use evasive_prompt::prompt::{Button, HostView, PointerInput, PromptController, Rect, StaticView};
    use evasive_prompt::Settings;

    let settings = Settings::load();
    let mut view = StaticView::new(
        Rect::new(0.0, 0.0, 400.0, 300.0),
        Rect::new(0.0, 0.0, 50.0, 20.0),
        Rect::new(0.0, 0.0, 80.0, 40.0),
        settings.initial_scale,
    );
    let clock = ManualClock::new(0.0);
    let mut controller = PromptController::new(settings, 2024);

    let events = controller.ensure_initialized(&view);
    view.apply_all(&events);

    for step in 1..=40 {
        clock.advance(120.0);
        let Some(target) = view.button_rect(Button::Evading).map(|r| r.center()) else {
            break;
        };
        let input = PointerInput::pointer(target.x, target.y);
        let events = controller.on_pointer_move(&view, &input, clock.now_ms());
        view.apply_all(&events);
        println!(
            "step {step:2}: no button at {:?}, yes scale {:.2}/{:.2}",
            view.button_rect(Button::Evading).map(|r| r.center()),
            controller.scale(),
            controller.max_scale()
        );
    }

    let events = controller.on_affirm();
    view.apply_all(&events);
    assert!(view.revealed, "Affirmative answer should be revealed");
    println!("✓ Chase finished, answer revealed");
}
