//! Neonfield - animated hero background and rotating titles in WASM
//!
//! Two independent components share the page, each with its own pure core
//! and a thin browser facade:
//! - field/      - particle background (simulation core + WebGL2 renderer)
//! - typewriter/ - rotating-title state machine (core + DOM driver)
//! - quality/    - device-tier particle budget
//! - timing/     - input-event throttling
//! - scrollspy/  - active-section resolution for the nav highlight

mod rng;

pub mod quality;
pub mod timing;
pub mod scrollspy;
pub mod field;
pub mod typewriter;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Neonfield WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use field::FieldCore;
pub use typewriter::{CursorHint, Tick, TypewriterCore};

#[cfg(target_arch = "wasm32")]
pub use field::ParticleField;
#[cfg(target_arch = "wasm32")]
pub use typewriter::Typewriter;
