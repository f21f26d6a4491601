use super::config::{X_BOUND, Y_BOUND, Z_BOUND};
use super::FieldCore;

const BOUNDS: [f32; 3] = [X_BOUND, Y_BOUND, Z_BOUND];

pub(super) fn step(core: &mut FieldCore, pointer_x: f32, pointer_y: f32) {
    for (position, velocity) in core
        .positions
        .chunks_exact_mut(3)
        .zip(core.velocities.chunks_exact_mut(3))
    {
        for axis in 0..3 {
            position[axis] += velocity[axis];
            // Elastic reflection: flip the sign, never clamp the position.
            // The particle sits outside the bound for at most this frame.
            if position[axis] < -BOUNDS[axis] || position[axis] > BOUNDS[axis] {
                velocity[axis] = -velocity[axis];
            }
        }
    }

    // Exponential-decay follow toward the pointer-derived target. Pointer
    // y drives the x rotation and vice versa, so the field tilts away
    // from the cursor.
    let scale = core.settings.rotation_scale;
    let follow = core.settings.rotation_follow;
    core.rotation_x += (pointer_y * scale - core.rotation_x) * follow;
    core.rotation_y += (pointer_x * scale - core.rotation_y) * follow;

    core.frame += 1;
}
