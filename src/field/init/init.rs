use crate::rng::{seed_or_default, symmetric};

use super::config::{FieldSettings, VX_RANGE, VY_RANGE, VZ_RANGE, X_BOUND, Y_BOUND, Z_BOUND};
use super::FieldCore;

pub(super) fn create_field_core(settings: FieldSettings, seed: u32) -> FieldCore {
    let count = settings.particle_count as usize;
    let mut rng_state = seed_or_default(seed);
    let mut positions = Vec::with_capacity(count * 3);
    let mut velocities = Vec::with_capacity(count * 3);

    for _ in 0..count {
        push_random_particle(&mut positions, &mut velocities, &mut rng_state);
    }

    FieldCore {
        positions,
        velocities,
        rotation_x: 0.0,
        rotation_y: 0.0,
        settings,
        rng_state,
        frame: 0,
    }
}

/// One particle: position uniform in the simulation box, velocity uniform
/// in the small symmetric spawn ranges.
pub(super) fn push_random_particle(
    positions: &mut Vec<f32>,
    velocities: &mut Vec<f32>,
    rng_state: &mut u32,
) {
    positions.push(symmetric(rng_state, X_BOUND));
    positions.push(symmetric(rng_state, Y_BOUND));
    positions.push(symmetric(rng_state, Z_BOUND));

    velocities.push(symmetric(rng_state, VX_RANGE));
    velocities.push(symmetric(rng_state, VY_RANGE));
    velocities.push(symmetric(rng_state, VZ_RANGE));
}
