//! Time-windowed suppression for high-frequency input events.

/// At most one effective call per interval. The caller supplies the clock
/// (`Date.now()` in the browser, anything monotonic in tests).
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Returns true if the caller may proceed; records the timestamp when
    /// it does. Calls inside the window are suppressed without side effect.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms - last < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_call_always_passes() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(0.0));
    }

    #[test]
    fn calls_inside_the_window_are_suppressed() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(100.0));
        assert!(!t.ready(120.0));
        assert!(!t.ready(149.9));
        assert!(t.ready(150.0));
    }

    #[test]
    fn suppressed_calls_do_not_extend_the_window() {
        let mut t = Throttle::new(50.0);
        assert!(t.ready(0.0));
        assert!(!t.ready(49.0));
        // Window is measured from the last *effective* call.
        assert!(t.ready(50.0));
    }
}
