//! Browser lifecycle for the particle field: canvas lookup, frame
//! scheduling, pointer/resize listeners, disposal. All failures here are
//! absorbed; the page renders fine without its background.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, EventTarget, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::quality::DeviceTier;
use crate::timing::Throttle;

use super::config::{FieldOverrides, FieldSettings};
use super::render::Renderer;
use super::FieldCore;

/// An attached DOM listener, detached on dispose.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    fn detach(&self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

struct FieldRuntime {
    core: FieldCore,
    renderer: Renderer,
    // Pointer offset from viewport center, written by the input handlers
    // and read by the next frame.
    pointer_x: f32,
    pointer_y: f32,
    half_width: f32,
    half_height: f32,
    throttle: Throttle,
    raf_id: Option<i32>,
    // The frame closure holds an Rc back to this runtime; dropping it in
    // dispose breaks the cycle.
    raf: Option<Closure<dyn FnMut()>>,
    listeners: Vec<Listener>,
}

/// The animated background. One instance per canvas.
#[wasm_bindgen]
pub struct ParticleField {
    runtime: Option<Rc<RefCell<FieldRuntime>>>,
}

#[wasm_bindgen]
impl ParticleField {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ParticleField {
        ParticleField { runtime: None }
    }

    /// Bring the background up on the given canvas. Missing canvas or a
    /// failed WebGL2 context leave the field uninitialized without
    /// raising. Calling init twice is a no-op.
    pub fn init(&mut self, canvas_id: &str) {
        if self.runtime.is_some() {
            return;
        }
        match try_init(canvas_id) {
            Ok(Some(runtime)) => {
                let count = runtime.borrow().core.particle_count();
                self.runtime = Some(runtime);
                web_sys::console::log_2(
                    &"neonfield background initialized, particles:".into(),
                    &count.into(),
                );
            }
            Ok(None) => {}
            Err(err) => {
                web_sys::console::warn_2(&"neonfield background disabled:".into(), &err);
            }
        }
    }

    /// Merge a JSON settings document into the live field.
    pub fn update_config(&mut self, json: &str) -> Result<(), JsValue> {
        let overrides = FieldOverrides::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        if let Some(runtime) = &self.runtime {
            let mut guard = runtime.borrow_mut();
            guard.core.apply_overrides(&overrides);
            if let Some(interval) = overrides.pointer_throttle_ms {
                guard.throttle = Throttle::new(interval);
            }
        }
        Ok(())
    }

    /// Stop the frame loop, retaining all state.
    pub fn pause(&mut self) {
        if let Some(runtime) = &self.runtime {
            cancel_frame(&mut runtime.borrow_mut());
        }
    }

    /// Restart the frame loop after a pause.
    pub fn resume(&mut self) {
        if let Some(runtime) = &self.runtime {
            schedule_frame(runtime);
        }
    }

    /// Tear everything down: frame callback, listeners, GPU objects.
    /// Idempotent and safe even if init never succeeded.
    pub fn dispose(&mut self) {
        let Some(runtime) = self.runtime.take() else {
            return;
        };
        let mut guard = runtime.borrow_mut();
        cancel_frame(&mut guard);
        guard.raf = None;
        for listener in guard.listeners.drain(..) {
            listener.detach();
        }
        guard.renderer.dispose();
        web_sys::console::log_1(&"neonfield background disposed".into());
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.runtime
            .as_ref()
            .map(|rt| rt.borrow().core.particle_count())
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.runtime
            .as_ref()
            .map(|rt| rt.borrow().core.frame())
            .unwrap_or(0)
    }
}

fn try_init(canvas_id: &str) -> Result<Option<Rc<RefCell<FieldRuntime>>>, JsValue> {
    let Some(win) = window() else {
        return Ok(None);
    };
    let Some(document) = win.document() else {
        return Ok(None);
    };
    let Some(element) = document.get_element_by_id(canvas_id) else {
        return Ok(None);
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        return Ok(None);
    };

    let renderer = match Renderer::new(&canvas) {
        Ok(renderer) => renderer,
        Err(err) => {
            web_sys::console::warn_2(&"neonfield: no WebGL2 context:".into(), &err);
            return Ok(None);
        }
    };

    let (width, height) = viewport_size(&win);
    let cores = win.navigator().hardware_concurrency() as u32;
    let tier = DeviceTier::detect(width as u32, cores);
    let settings = FieldSettings {
        particle_count: tier.particle_budget(),
        ..FieldSettings::default()
    };
    let throttle = Throttle::new(settings.pointer_throttle_ms);
    let pixel_ratio = win.device_pixel_ratio().min(settings.max_pixel_ratio);
    let core = FieldCore::with_settings_and_seed(settings, js_sys::Date::now() as u32);

    let runtime = Rc::new(RefCell::new(FieldRuntime {
        core,
        renderer,
        pointer_x: 0.0,
        pointer_y: 0.0,
        half_width: (width / 2.0) as f32,
        half_height: (height / 2.0) as f32,
        throttle,
        raf_id: None,
        raf: None,
        listeners: Vec::new(),
    }));
    runtime
        .borrow_mut()
        .renderer
        .resize(width, height, pixel_ratio);

    attach_listeners(&win, &runtime)?;
    install_frame_loop(&runtime);
    schedule_frame(&runtime);

    Ok(Some(runtime))
}

fn viewport_size(win: &Window) -> (f64, f64) {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn attach_listeners(win: &Window, runtime: &Rc<RefCell<FieldRuntime>>) -> Result<(), JsValue> {
    let document = win.document().ok_or("no document")?;
    let mut listeners = Vec::new();

    // Resize: resync projection and viewport halves, particles untouched.
    {
        let rt = Rc::clone(runtime);
        let closure = Closure::wrap(Box::new(move |_: Event| {
            let Some(win) = window() else { return };
            let (width, height) = viewport_size(&win);
            let mut guard = rt.borrow_mut();
            let pixel_ratio = win
                .device_pixel_ratio()
                .min(guard.core.settings().max_pixel_ratio);
            guard.half_width = (width / 2.0) as f32;
            guard.half_height = (height / 2.0) as f32;
            guard.renderer.resize(width, height, pixel_ratio);
        }) as Box<dyn FnMut(Event)>);
        listeners.push(Listener::attach(win.clone().into(), "resize", closure)?);
    }

    // Throttled mouse parallax input.
    {
        let rt = Rc::clone(runtime);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let mut guard = rt.borrow_mut();
            if !guard.throttle.ready(js_sys::Date::now()) {
                return;
            }
            let event: MouseEvent = event.unchecked_into();
            guard.pointer_x = event.client_x() as f32 - guard.half_width;
            guard.pointer_y = event.client_y() as f32 - guard.half_height;
        }) as Box<dyn FnMut(Event)>);
        listeners.push(Listener::attach(
            document.clone().into(),
            "mousemove",
            closure,
        )?);
    }

    // Single-finger touch drives the same pointer state.
    {
        let rt = Rc::clone(runtime);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let mut guard = rt.borrow_mut();
            if !guard.throttle.ready(js_sys::Date::now()) {
                return;
            }
            let event: TouchEvent = event.unchecked_into();
            let touches = event.touches();
            if touches.length() != 1 {
                return;
            }
            if let Some(touch) = touches.get(0) {
                guard.pointer_x = touch.page_x() as f32 - guard.half_width;
                guard.pointer_y = touch.page_y() as f32 - guard.half_height;
            }
        }) as Box<dyn FnMut(Event)>);
        listeners.push(Listener::attach(document.into(), "touchmove", closure)?);
    }

    runtime.borrow_mut().listeners = listeners;
    Ok(())
}

fn install_frame_loop(runtime: &Rc<RefCell<FieldRuntime>>) {
    let rt = Rc::clone(runtime);
    let closure = Closure::wrap(Box::new(move || {
        let mut guard = rt.borrow_mut();
        let runtime = &mut *guard;
        runtime.raf_id = None;
        let (pointer_x, pointer_y) = (runtime.pointer_x, runtime.pointer_y);
        runtime.core.step(pointer_x, pointer_y);
        runtime.renderer.draw(&runtime.core);
        // Chain the next frame; dispose/pause cancel via the stored id.
        if let (Some(cb), Some(win)) = (runtime.raf.as_ref(), window()) {
            if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                runtime.raf_id = Some(id);
            }
        }
    }) as Box<dyn FnMut()>);
    runtime.borrow_mut().raf = Some(closure);
}

fn schedule_frame(runtime: &Rc<RefCell<FieldRuntime>>) {
    let mut guard = runtime.borrow_mut();
    let runtime = &mut *guard;
    // At most one pending frame callback.
    if runtime.raf_id.is_some() {
        return;
    }
    if let (Some(cb), Some(win)) = (runtime.raf.as_ref(), window()) {
        if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
            runtime.raf_id = Some(id);
        }
    }
}

fn cancel_frame(runtime: &mut FieldRuntime) {
    if let (Some(id), Some(win)) = (runtime.raf_id.take(), window()) {
        let _ = win.cancel_animation_frame(id);
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
