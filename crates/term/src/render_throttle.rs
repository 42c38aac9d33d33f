//! Skip redundant terminal redraws while nothing on screen changes.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Decide whether to render a new frame.
    ///
    /// - `animating=true` (something is wandering): always render.
    /// - `animating=false`: render immediately on fingerprint change, otherwise
    ///   at most once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let changed = !self.has_rendered || fingerprint != self.last_fingerprint;
        let stale = now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if !(changed || animating || stale) {
            return false;
        }
        self.has_rendered = true;
        self.last_render_ms = now_ms;
        self.last_fingerprint = fingerprint;
        true
    }

    /// Force the next call to render (terminal resize).
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_always_renders() {
        let mut t = RenderThrottle::new(1_000);
        assert!(t.should_render(0, 7, false));
    }

    #[test]
    fn static_frames_are_throttled_until_change_or_interval() {
        let mut t = RenderThrottle::new(500);
        assert!(t.should_render(0, 1, false));
        assert!(!t.should_render(100, 1, false));
        assert!(t.should_render(150, 2, false));
        assert!(!t.should_render(600, 2, false));
        assert!(t.should_render(650, 2, false));
    }

    #[test]
    fn animating_always_renders() {
        let mut t = RenderThrottle::new(500);
        assert!(t.should_render(0, 1, true));
        assert!(t.should_render(1, 1, true));
    }

    #[test]
    fn invalidate_forces_render() {
        let mut t = RenderThrottle::new(500);
        assert!(t.should_render(0, 1, false));
        t.invalidate();
        assert!(t.should_render(10, 1, false));
    }
}
