//! Particle field - the animated background behind the hero section.
//!
//! A fixed-size set of points drifts inside a bounding box, reflecting off
//! its faces, while the whole field eases its rotation toward a target
//! derived from the pointer offset. `FieldCore` is pure and runs anywhere;
//! the WebGL2 renderer and browser lifecycle live in `facade`/`render`
//! (wasm32 only).

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;

pub mod camera;
pub mod config;

#[cfg(target_arch = "wasm32")]
mod facade;
#[cfg(target_arch = "wasm32")]
mod render;

pub use config::{FieldOverrides, FieldSettings};

#[cfg(target_arch = "wasm32")]
pub use facade::ParticleField;

/// The particle field simulation state. Positions and velocities are
/// interleaved xyz triplets, matching the GPU upload layout.
pub struct FieldCore {
    positions: Vec<f32>,
    velocities: Vec<f32>,
    rotation_x: f32,
    rotation_y: f32,
    settings: FieldSettings,
    rng_state: u32,
    frame: u64,
}

impl FieldCore {
    /// Create a field with default settings and the given particle count.
    pub fn new(particle_count: u32) -> Self {
        let settings = FieldSettings {
            particle_count,
            ..FieldSettings::default()
        };
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: FieldSettings) -> Self {
        init::create_field_core(settings, crate::rng::DEFAULT_SEED)
    }

    /// Deterministic construction for tests and reproducible layouts.
    pub fn with_settings_and_seed(settings: FieldSettings, seed: u32) -> Self {
        init::create_field_core(settings, seed)
    }

    pub fn particle_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Interleaved xyz positions, ready for the vertex buffer.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Current field rotation (x, y) in radians.
    pub fn rotation(&self) -> (f32, f32) {
        (self.rotation_x, self.rotation_y)
    }

    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    /// Advance the field one frame: integrate velocities, reflect off the
    /// box faces, ease the rotation toward the pointer target.
    pub fn step(&mut self, pointer_x: f32, pointer_y: f32) {
        step::step(self, pointer_x, pointer_y);
    }

    /// Merge a partial settings document into the live field.
    pub fn apply_overrides(&mut self, overrides: &FieldOverrides) {
        settings::apply_overrides(self, overrides);
    }

    /// Grow (new random draws) or truncate the particle set in place.
    pub fn set_particle_count(&mut self, particle_count: u32) {
        settings::set_particle_count(self, particle_count);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
