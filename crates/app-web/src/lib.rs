#![cfg(target_arch = "wasm32")]
//! Web front end: wires the canvas, webcam, hand detector, upload input and
//! overlay to the choreography core, then drives it from a RAF loop.

use app_core::{SceneEngine, SceneParams};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod landmarker;
mod overlay;
mod render;
mod upload;
mod video;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Webcam + detector setup. Every failure path is non-fatal: the loader is
/// dismissed and the scene runs without gesture control for the session.
async fn setup_vision(
    document: &web::Document,
    video_slot: Rc<RefCell<Option<web::HtmlVideoElement>>>,
    video_ready: Rc<Cell<bool>>,
) {
    if !landmarker::detector_available() {
        log::warn!("[vision] no hand detector on page, gestures disabled");
        overlay::hide_loader(document);
        return;
    }
    match video::acquire_webcam(document).await {
        Ok(v) => {
            // Stored before loadeddata so teardown can stop the stream
            // even if the element never delivers a frame.
            *video_slot.borrow_mut() = Some(v.clone());
            let ready = video_ready.clone();
            let loaded = Closure::wrap(Box::new(move || {
                ready.set(true);
                if let Some(doc) = dom::window_document() {
                    overlay::hide_loader(&doc);
                }
                log::info!("[vision] webcam ready");
            }) as Box<dyn FnMut()>);
            _ = v.add_event_listener_with_callback("loadeddata", loaded.as_ref().unchecked_ref());
            loaded.forget();
        }
        Err(e) => {
            log::warn!("[vision] setup failed, continuing without gestures: {e:?}");
            overlay::hide_loader(document);
        }
    }
}

fn wire_teardown(document: &web::Document, handle: Rc<frame::LoopHandle>) {
    let handle_btn = handle.clone();
    dom::add_click_listener(document, "scene-close", move || {
        handle_btn.teardown();
    });

    let unload = Closure::wrap(Box::new(move || {
        handle.teardown();
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("pagehide", unload.as_ref().unchecked_ref());
    }
    unload.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    wire_canvas_resize(&canvas);

    let engine = Rc::new(RefCell::new(SceneEngine::new(
        SceneParams::default(),
        js_sys::Date::now() as u64,
    )));
    upload::add_default_photo(&engine);
    upload::wire_photo_upload(&document, engine.clone());
    events::wire_overlay_toggle_h(&document);
    events::wire_mode_buttons(&document, engine.clone());
    overlay::set_mode_label(&document, engine.borrow().mode());

    let gpu = frame::init_gpu(&canvas).await;

    let video_slot: Rc<RefCell<Option<web::HtmlVideoElement>>> = Rc::new(RefCell::new(None));
    let video_ready = Rc::new(Cell::new(false));
    setup_vision(&document, video_slot.clone(), video_ready.clone()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine,
        canvas,
        video: video_slot,
        video_ready,
        gpu,
        last_instant: Instant::now(),
        last_video_time: -1.0,
    }));
    let handle = Rc::new(frame::start_loop(frame_ctx));
    wire_teardown(&document, handle);

    Ok(())
}
