//! Webcam acquisition and guaranteed release.

use crate::constants::{VIDEO_HEIGHT, VIDEO_WIDTH};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Acquires the webcam into the page's `#webcam` video element at the small
/// capture size detection runs on. The returned element carries the live
/// stream; pair every success with [`stop_tracks`] at teardown.
pub async fn acquire_webcam(document: &web::Document) -> anyhow::Result<web::HtmlVideoElement> {
    let video: web::HtmlVideoElement = document
        .get_element_by_id("webcam")
        .ok_or_else(|| anyhow::anyhow!("missing #webcam"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let video_constraints = js_sys::Object::new();
    js_sys::Reflect::set(
        &video_constraints,
        &JsValue::from_str("width"),
        &JsValue::from_f64(VIDEO_WIDTH as f64),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    js_sys::Reflect::set(
        &video_constraints,
        &JsValue::from_str("height"),
        &JsValue::from_f64(VIDEO_HEIGHT as f64),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&video_constraints.into());

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let stream: web::MediaStream = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("getUserMedia rejected: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    video.set_src_object(Some(&stream));
    _ = video.play();
    Ok(video)
}

/// Stops every track of the element's stream and detaches it. Safe to call
/// on an element that never got a stream.
pub fn stop_tracks(video: &web::HtmlVideoElement) {
    if let Some(stream) = video.src_object() {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
                track.stop();
            }
        }
        video.set_src_object(None);
    }
}
