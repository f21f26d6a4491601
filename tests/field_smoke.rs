use neonfield::field::config::{FieldSettings, X_BOUND, Y_BOUND, Z_BOUND};
use neonfield::FieldCore;

#[test]
fn field_smoke_long_run_stays_bounded() {
    let mut field = FieldCore::new(150);
    assert_eq!(field.particle_count(), 150);

    for frame in 0..10_000 {
        // Sweep the pointer around so the rotation path is exercised too.
        let angle = frame as f32 * 0.01;
        field.step(600.0 * angle.cos(), 400.0 * angle.sin());
    }
    assert_eq!(field.frame(), 10_000);

    // Worst case a particle sits one frame's velocity outside the box.
    for (triplet, velocity) in field
        .positions()
        .chunks_exact(3)
        .zip(field.velocities().chunks_exact(3))
    {
        assert!(triplet[0].abs() <= X_BOUND + velocity[0].abs());
        assert!(triplet[1].abs() <= Y_BOUND + velocity[1].abs());
        assert!(triplet[2].abs() <= Z_BOUND + velocity[2].abs());
    }

    let (rot_x, rot_y) = field.rotation();
    assert!(rot_x.is_finite() && rot_y.is_finite());
}

#[test]
fn tier_budgets_drive_field_size() {
    use neonfield::quality::DeviceTier;

    for (width, cores) in [(375, 8), (1024, 8), (1920, 8)] {
        let tier = DeviceTier::detect(width, cores);
        let field = FieldCore::with_settings(FieldSettings {
            particle_count: tier.particle_budget(),
            ..FieldSettings::default()
        });
        assert_eq!(field.particle_count(), tier.particle_budget());
        assert_eq!(field.positions().len(), field.velocities().len());
    }
}
