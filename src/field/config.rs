use serde::Deserialize;

/// Simulation box half-extents. Reflection, not clamping, keeps particles
/// inside; a particle may overshoot by one frame's velocity before its
/// sign flips.
pub const X_BOUND: f32 = 1000.0;
pub const Y_BOUND: f32 = 500.0;
pub const Z_BOUND: f32 = 250.0;

/// Spawn velocity half-ranges. Y and Z use half the X range.
pub const VX_RANGE: f32 = 0.1;
pub const VY_RANGE: f32 = 0.05;
pub const VZ_RANGE: f32 = 0.05;

/// Field configuration
#[derive(Debug, Clone)]
pub struct FieldSettings {
    /// Number of particles (tier-selected at startup, see `quality`)
    pub particle_count: u32,
    /// Point size in world units before attenuation
    pub particle_size: f32,
    /// Packed 0xRRGGBB color
    pub particle_color: u32,
    /// Point alpha (0.0 - 1.0)
    pub particle_opacity: f32,
    /// Pointer offset to rotation-target factor
    pub rotation_scale: f32,
    /// Fraction of the remaining distance the rotation covers per frame
    pub rotation_follow: f32,
    /// Minimum interval between effective pointer-move handlers
    pub pointer_throttle_ms: f64,
    /// Device pixel ratio cap to bound GPU fill cost
    pub max_pixel_ratio: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            particle_count: 150,
            particle_size: 0.3,
            particle_color: 0x00f0ff,
            particle_opacity: 0.8,
            rotation_scale: 0.000_05,
            rotation_follow: 0.01,
            pointer_throttle_ms: 50.0,
            max_pixel_ratio: 2.0,
        }
    }
}

impl FieldSettings {
    /// Color as normalized RGB for the shader uniform.
    pub fn color_rgb(&self) -> [f32; 3] {
        [
            ((self.particle_color >> 16) & 0xff) as f32 / 255.0,
            ((self.particle_color >> 8) & 0xff) as f32 / 255.0,
            (self.particle_color & 0xff) as f32 / 255.0,
        ]
    }

    pub fn merged(&self, overrides: &FieldOverrides) -> Self {
        let mut out = self.clone();
        if let Some(v) = overrides.particle_count {
            out.particle_count = v;
        }
        if let Some(v) = overrides.particle_size {
            out.particle_size = v;
        }
        if let Some(v) = overrides.particle_color {
            out.particle_color = v;
        }
        if let Some(v) = overrides.particle_opacity {
            out.particle_opacity = v;
        }
        if let Some(v) = overrides.rotation_scale {
            out.rotation_scale = v;
        }
        if let Some(v) = overrides.rotation_follow {
            out.rotation_follow = v;
        }
        if let Some(v) = overrides.pointer_throttle_ms {
            out.pointer_throttle_ms = v;
        }
        out
    }
}

/// Partial settings document merged into a live field. Unknown keys are
/// ignored so the page script can share one config object across
/// components.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FieldOverrides {
    pub particle_count: Option<u32>,
    pub particle_size: Option<f32>,
    pub particle_color: Option<u32>,
    pub particle_opacity: Option<f32>,
    pub rotation_scale: Option<f32>,
    pub rotation_follow: Option<f32>,
    pub pointer_throttle_ms: Option<f64>,
}

impl FieldOverrides {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
