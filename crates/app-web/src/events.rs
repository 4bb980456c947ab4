use crate::{dom, overlay};
use app_core::{Mode, SceneEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 'h' hides/shows the UI overlay. No effect on the choreography core.
pub fn wire_overlay_toggle_h(document: &web::Document) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key().to_lowercase() == "h" {
            if let Some(doc) = dom::window_document() {
                overlay::toggle_ui(&doc);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Optional on-screen mode buttons; same edge semantics as gestures.
pub fn wire_mode_buttons(document: &web::Document, engine: Rc<RefCell<SceneEngine>>) {
    for (id, mode) in [
        ("mode-formation", Mode::Formation),
        ("mode-scatter", Mode::Scatter),
        ("mode-focus", Mode::Focus),
    ] {
        let engine = engine.clone();
        dom::add_click_listener(document, id, move || {
            if let Some(changed) = engine.borrow_mut().request_mode(mode) {
                if let Some(doc) = dom::window_document() {
                    overlay::set_mode_label(&doc, changed);
                }
            }
        });
    }
}
