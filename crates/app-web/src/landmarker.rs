//! Binding to the page-provided hand-landmark detector.
//!
//! The host page wraps its MediaPipe hand landmarker in one global:
//! `detectHands(video, timestampMs)` returning a flat `Float32Array` of 21
//! x/y/z triples for the first detected hand, or null when no hand is
//! present. The core only consumes the normalized 2D coordinates.

use app_core::LANDMARK_COUNT;
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = detectHands)]
    fn detect_hands(video: &web::HtmlVideoElement, timestamp_ms: f64) -> Result<JsValue, JsValue>;
}

/// Whether the host page exposes a detector at all. Checked once at setup;
/// absence leaves the scene permanently gesture-less for the session.
pub fn detector_available() -> bool {
    web::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("detectHands")).ok())
        .map(|v| v.is_function())
        .unwrap_or(false)
}

/// Runs detection on the current video frame. `None` covers every
/// non-result: no hand, malformed payload, or a throwing detector.
pub fn detect(video: &web::HtmlVideoElement, timestamp_ms: f64) -> Option<Vec<Vec2>> {
    let value = match detect_hands(video, timestamp_ms) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[landmarker] detector threw: {:?}", e);
            return None;
        }
    };
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let arr: js_sys::Float32Array = value.dyn_into().ok()?;
    if arr.length() as usize != LANDMARK_COUNT * 3 {
        log::debug!("[landmarker] unexpected payload length {}", arr.length());
        return None;
    }
    let mut buf = [0.0f32; LANDMARK_COUNT * 3];
    arr.copy_to(&mut buf);
    Some(
        buf.chunks_exact(3)
            .map(|p| Vec2::new(p[0], p[1]))
            .collect(),
    )
}
