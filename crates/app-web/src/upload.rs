//! Photo upload wiring: file input -> decoded image -> photo ornament.
//!
//! The image is decoded off-DOM purely to learn its aspect ratio; the core
//! sanitizes degenerate values. Uploads are accepted in any mode.

use crate::constants::DEFAULT_PHOTO_ASPECT;
use app_core::SceneEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The greeting ornament every session starts with.
pub fn add_default_photo(engine: &Rc<RefCell<SceneEngine>>) {
    engine.borrow_mut().add_photo(DEFAULT_PHOTO_ASPECT);
}

pub fn wire_photo_upload(document: &web::Document, engine: Rc<RefCell<SceneEngine>>) {
    let Some(el) = document.get_element_by_id("photo-upload") else {
        log::warn!("[upload] missing #photo-upload, uploads disabled");
        return;
    };
    let input: web::HtmlInputElement = match el.dyn_into() {
        Ok(i) => i,
        Err(_) => return,
    };

    let input_inner = input.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(file) = input_inner.files().and_then(|f| f.get(0)) else {
            return;
        };
        let url = match web::Url::create_object_url_with_blob(&file) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("[upload] object url failed: {:?}", e);
                return;
            }
        };
        let img = match web::HtmlImageElement::new() {
            Ok(i) => i,
            Err(_) => return,
        };
        let img_loaded = img.clone();
        let engine = engine.clone();
        let url_loaded = url.clone();
        let onload = Closure::wrap(Box::new(move || {
            // Zero-height images yield inf here; the core falls back to 1.
            let aspect =
                img_loaded.natural_width() as f32 / img_loaded.natural_height() as f32;
            engine.borrow_mut().add_photo(aspect);
            _ = web::Url::revoke_object_url(&url_loaded);
        }) as Box<dyn FnMut()>);
        img.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        img.set_src(&url);
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
