//! Animation driver: one requestAnimationFrame loop running the per-frame
//! pipeline, with an unregisterable handle for teardown.

use crate::{dom, landmarker, overlay, render, video};
use app_core::SceneEngine;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<SceneEngine>>,
    pub canvas: web::HtmlCanvasElement,
    /// Filled once the webcam stream is attached; stays `None` when gesture
    /// setup failed.
    pub video: Rc<RefCell<Option<web::HtmlVideoElement>>>,
    /// Set once the video element has delivered data.
    pub video_ready: Rc<Cell<bool>>,
    pub gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
    pub last_video_time: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        // Gesture inference only on fresh video frames; the detector is
        // the expensive part, so the dedup happens before calling it.
        let mut mode_change = None;
        if self.video_ready.get() {
            if let Some(video) = self.video.borrow().as_ref() {
                let video_time = video.current_time();
                if video_time != self.last_video_time {
                    self.last_video_time = video_time;
                    let landmarks = landmarker::detect(video, js_sys::Date::now());
                    mode_change = self
                        .engine
                        .borrow_mut()
                        .observe_hand(landmarks.as_deref(), video_time);
                }
            }
        }
        if let Some(mode) = mode_change {
            if let Some(doc) = dom::window_document() {
                overlay::set_mode_label(&doc, mode);
            }
        }

        self.engine.borrow_mut().step(dt);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let engine = self.engine.borrow();
            if let Err(e) = g.render(engine.objects(), engine.container()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Stops the loop and releases externally acquired resources. Idempotent,
/// and valid even when setup only got partway.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    ctx: Rc<RefCell<FrameContext>>,
}

impl LoopHandle {
    pub fn teardown(&self) {
        if !self.running.replace(false) {
            return;
        }
        let mut ctx = self.ctx.borrow_mut();
        if let Some(v) = ctx.video.borrow_mut().take() {
            video::stop_tracks(&v);
        }
        ctx.gpu = None;
        log::info!("[frame] scene torn down");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    LoopHandle {
        running,
        ctx: frame_ctx,
    }
}
