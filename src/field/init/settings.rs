use super::config::FieldOverrides;
use super::{init, FieldCore};

pub(super) fn apply_overrides(core: &mut FieldCore, overrides: &FieldOverrides) {
    // Count changes resize the live set; everything else takes effect on
    // the next frame with no reinitialization.
    if let Some(count) = overrides.particle_count {
        set_particle_count(core, count);
    }
    core.settings = core.settings.merged(overrides);
}

pub(super) fn set_particle_count(core: &mut FieldCore, particle_count: u32) {
    let target = particle_count as usize * 3;
    if target <= core.positions.len() {
        core.positions.truncate(target);
        core.velocities.truncate(target);
    } else {
        while core.positions.len() < target {
            init::push_random_particle(&mut core.positions, &mut core.velocities, &mut core.rng_state);
        }
    }
    core.settings.particle_count = particle_count;
}
