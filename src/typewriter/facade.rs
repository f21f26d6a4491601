//! DOM driver for the typewriter: one outstanding `setTimeout` tick that
//! writes the current prefix as plain text (never markup) and toggles the
//! cursor class.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

use super::config::{TypewriterOverrides, TypewriterSettings};
use super::{CursorHint, TypewriterCore};

const CURSOR_CLASS: &str = "typewriter";

struct TypewriterHandle {
    core: RefCell<TypewriterCore>,
    element: HtmlElement,
    // At most one pending tick; every schedule cancels the previous one.
    timer_id: Cell<Option<i32>>,
    // The tick closure holds an Rc back to this handle; dropped in dispose
    // to break the cycle.
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// The rotating headline. One instance per display element.
#[wasm_bindgen]
pub struct Typewriter {
    handle: Option<Rc<TypewriterHandle>>,
}

#[wasm_bindgen]
impl Typewriter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Typewriter {
        Typewriter { handle: None }
    }

    /// Start the animation on the given text element. A missing element is
    /// logged and absorbed; init twice is a no-op.
    pub fn init(&mut self, element_id: &str) {
        if self.handle.is_some() {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(element_id) else {
            web_sys::console::error_1(
                &format!("neonfield: typewriter target #{element_id} not found").into(),
            );
            return;
        };
        let Ok(element) = element.dyn_into::<HtmlElement>() else {
            return;
        };

        let core = TypewriterCore::with_seed(
            TypewriterSettings::default(),
            js_sys::Date::now() as u32,
        );
        let handle = Rc::new(TypewriterHandle {
            core: RefCell::new(core),
            element,
            timer_id: Cell::new(None),
            tick: RefCell::new(None),
        });

        let closure = {
            let handle = Rc::clone(&handle);
            Closure::wrap(Box::new(move || {
                handle.timer_id.set(None);
                let tick = handle.core.borrow_mut().tick();
                // textContent, so the phrase list is never parsed as markup.
                handle.element.set_text_content(Some(&tick.text));
                match tick.cursor {
                    CursorHint::Show => {
                        let _ = handle.element.class_list().add_1(CURSOR_CLASS);
                    }
                    CursorHint::Hide => {
                        let _ = handle.element.class_list().remove_1(CURSOR_CLASS);
                    }
                    CursorHint::Keep => {}
                }
                schedule(&handle, tick.delay_ms);
            }) as Box<dyn FnMut()>)
        };
        *handle.tick.borrow_mut() = Some(closure);

        schedule(&handle, 0);
        let count = handle.core.borrow().settings().titles.len();
        self.handle = Some(handle);
        web_sys::console::log_2(
            &"neonfield typewriter initialized, titles:".into(),
            &(count as u32).into(),
        );
    }

    /// Replace the phrase list; resets to the first phrase. Empty lists
    /// are rejected and leave the running animation untouched.
    pub fn set_titles(&mut self, titles: Vec<String>) -> Result<(), JsValue> {
        let Some(handle) = &self.handle else {
            return Err(JsValue::from_str("typewriter not initialized"));
        };
        handle
            .core
            .borrow_mut()
            .set_titles(titles)
            .map_err(|e| JsValue::from_str(&e))?;
        // Pick up the fresh state on the next tick.
        schedule(handle, 0);
        Ok(())
    }

    /// Merge a JSON settings document into the running animation.
    pub fn update_config(&mut self, json: &str) -> Result<(), JsValue> {
        let overrides = TypewriterOverrides::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        if let Some(handle) = &self.handle {
            let replaces_titles = overrides.titles.is_some();
            handle
                .core
                .borrow_mut()
                .apply_overrides(&overrides)
                .map_err(|e| JsValue::from_str(&e))?;
            if replaces_titles {
                schedule(handle, 0);
            }
        }
        Ok(())
    }

    /// Cancel the pending tick, keeping the state for resume.
    pub fn pause(&mut self) {
        if let (Some(handle), Some(win)) = (&self.handle, window()) {
            if let Some(id) = handle.timer_id.take() {
                win.clear_timeout_with_handle(id);
            }
        }
    }

    /// Reschedule from the current state after a pause.
    pub fn resume(&mut self) {
        if let Some(handle) = &self.handle {
            if handle.timer_id.get().is_none() {
                schedule(handle, 0);
            }
        }
    }

    /// Cancel the timer and release the handle. Idempotent and safe
    /// before init.
    pub fn dispose(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Some(win) = window() {
            if let Some(id) = handle.timer_id.take() {
                win.clear_timeout_with_handle(id);
            }
        }
        *handle.tick.borrow_mut() = None;
        web_sys::console::log_1(&"neonfield typewriter disposed".into());
    }
}

fn schedule(handle: &Rc<TypewriterHandle>, delay_ms: u32) {
    let Some(win) = window() else {
        return;
    };
    if let Some(id) = handle.timer_id.take() {
        win.clear_timeout_with_handle(id);
    }
    let tick = handle.tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms as i32,
    ) {
        handle.timer_id.set(Some(id));
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}
