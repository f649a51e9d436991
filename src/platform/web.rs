//! DOM host for the prompt (WASM only)

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, TouchEvent, TouchList};

use crate::prompt::{Button, HostView, PointerInput, PromptEvent, Rect};

/// Element ids the page must provide
pub const ARENA_ID: &str = "arena";
pub const AFFIRMATIVE_ID: &str = "yes-btn";
pub const EVADING_ID: &str = "no-btn";
pub const QUESTION_ID: &str = "question";
pub const ANSWER_ID: &str = "answer";

/// The arena and button elements
#[derive(Debug, Clone)]
pub struct DomView {
    pub arena: HtmlElement,
    pub affirmative: HtmlElement,
    pub evading: HtmlElement,
}

fn html_element(document: &web_sys::Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

fn element_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

impl DomView {
    /// Look up the elements by id; `None` if the page lacks any of them
    pub fn find(document: &web_sys::Document) -> Option<Self> {
        Some(Self {
            arena: html_element(document, ARENA_ID)?,
            affirmative: html_element(document, AFFIRMATIVE_ID)?,
            evading: html_element(document, EVADING_ID)?,
        })
    }

    fn button(&self, button: Button) -> &HtmlElement {
        match button {
            Button::Affirmative => &self.affirmative,
            Button::Evading => &self.evading,
        }
    }

    /// Apply controller events as inline styles
    pub fn apply(&self, events: &[PromptEvent]) {
        for event in events {
            match event {
                PromptEvent::Moved { button, center } => {
                    let style = self.button(*button).style();
                    let _ = style.set_property("left", &format!("{}px", center.x));
                    let _ = style.set_property("top", &format!("{}px", center.y));
                }
                PromptEvent::Scaled { transform, .. } => {
                    let _ = self.affirmative.style().set_property("transform", transform);
                }
                PromptEvent::Revealed => reveal_answer(),
            }
        }
    }
}

impl HostView for DomView {
    fn arena_rect(&self) -> Option<Rect> {
        Some(element_rect(&self.arena))
    }

    fn button_rect(&self, button: Button) -> Option<Rect> {
        Some(element_rect(self.button(button)))
    }
}

/// Hide the question and show the answer block
fn reveal_answer() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(QUESTION_ID) {
        let _ = el.set_attribute("class", "hidden");
    }
    if let Some(el) = document.get_element_by_id(ANSWER_ID) {
        let _ = el.set_attribute("class", "");
    }
}

fn touch_points(list: &TouchList) -> Vec<Vec2> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.client_x() as f32, t.client_y() as f32))
        .collect()
}

/// Convert a DOM touch event
pub fn touch_input(event: &TouchEvent) -> PointerInput {
    PointerInput::Touch {
        touches: touch_points(&event.touches()),
        changed_touches: touch_points(&event.changed_touches()),
    }
}

/// Convert a DOM mouse or pointer event (`PointerEvent` derefs to `MouseEvent`)
pub fn mouse_input(event: &MouseEvent) -> PointerInput {
    PointerInput::pointer(event.client_x() as f32, event.client_y() as f32)
}
