//! Device-tier particle budgets.
//!
//! The background is decorative, so the only capability signals worth
//! reading are viewport width and the logical-processor hint. Three coarse
//! tiers; no adaptive policy.

/// Viewport narrower than this counts as a phone.
const MOBILE_WIDTH: u32 = 768;
/// Viewport narrower than this counts as a tablet / small laptop.
const MEDIUM_WIDTH: u32 = 1200;
/// Fewer logical processors than this counts as low-end.
const LOW_END_CORES: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceTier {
    Low,
    Medium,
    High,
}

impl DeviceTier {
    /// Select a tier from coarse capability signals queried once at startup.
    pub fn detect(viewport_width: u32, hardware_concurrency: u32) -> Self {
        if viewport_width < MOBILE_WIDTH || hardware_concurrency < LOW_END_CORES {
            Self::Low
        } else if viewport_width < MEDIUM_WIDTH {
            Self::Medium
        } else {
            Self::High
        }
    }

    /// Particle count for this tier.
    pub fn particle_budget(self) -> u32 {
        match self {
            Self::Low => 50,
            Self::Medium => 100,
            Self::High => 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_is_low_tier() {
        assert_eq!(DeviceTier::detect(375, 8), DeviceTier::Low);
        assert_eq!(DeviceTier::detect(767, 8), DeviceTier::Low);
    }

    #[test]
    fn few_cores_force_low_tier_even_on_wide_screens() {
        assert_eq!(DeviceTier::detect(1920, 2), DeviceTier::Low);
        assert_eq!(DeviceTier::detect(1920, 3), DeviceTier::Low);
    }

    #[test]
    fn medium_and_high_tiers_split_at_1200() {
        assert_eq!(DeviceTier::detect(1024, 4), DeviceTier::Medium);
        assert_eq!(DeviceTier::detect(1199, 8), DeviceTier::Medium);
        assert_eq!(DeviceTier::detect(1200, 4), DeviceTier::High);
        assert_eq!(DeviceTier::detect(2560, 16), DeviceTier::High);
    }

    #[test]
    fn budgets_match_tiers() {
        assert_eq!(DeviceTier::Low.particle_budget(), 50);
        assert_eq!(DeviceTier::Medium.particle_budget(), 100);
        assert_eq!(DeviceTier::High.particle_budget(), 150);
    }
}
