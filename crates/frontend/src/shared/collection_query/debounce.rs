//! Timing and ordering primitives of the collection controller, kept
//! free of signals and timers so the policies are testable as plain
//! state machines.

/// Debounce window for filter- and search-driven fetches.
pub const DEBOUNCE_WINDOW_MS: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceDecision {
    /// Idle window: execute immediately (leading edge).
    FireNow,
    /// A window is open: coalesce into one trailing execution that
    /// carries whatever state is current when the timer fires.
    Trail,
}

#[derive(Debug, Clone, Copy)]
pub struct DebounceGate {
    window_ms: f64,
    open_until: f64,
}

impl DebounceGate {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            open_until: 0.0,
        }
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Classify one user-driven change at time `now_ms`.
    pub fn on_event(&mut self, now_ms: f64) -> DebounceDecision {
        if now_ms < self.open_until {
            DebounceDecision::Trail
        } else {
            self.open_until = now_ms + self.window_ms;
            DebounceDecision::FireNow
        }
    }

    /// Record an execution that bypassed `on_event` (manual refresh,
    /// pagination, trailing timer) so the next change still debounces
    /// against it.
    pub fn note_fire(&mut self, now_ms: f64) {
        self.open_until = now_ms + self.window_ms;
    }
}

/// Monotonic request ids for the last-response-wins rule: a response is
/// applied only while its id is still the newest one issued. Responses
/// of superseded requests are dropped no matter when they resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_in_idle_window_fires_immediately() {
        let mut gate = DebounceGate::new(500.0);
        assert_eq!(gate.on_event(1_000.0), DebounceDecision::FireNow);
    }

    #[test]
    fn burst_inside_the_window_coalesces_to_trailing() {
        let mut gate = DebounceGate::new(500.0);
        assert_eq!(gate.on_event(1_000.0), DebounceDecision::FireNow);
        assert_eq!(gate.on_event(1_100.0), DebounceDecision::Trail);
        assert_eq!(gate.on_event(1_300.0), DebounceDecision::Trail);
    }

    #[test]
    fn window_reopens_after_quiet_time() {
        let mut gate = DebounceGate::new(500.0);
        gate.on_event(1_000.0);
        assert_eq!(gate.on_event(1_600.0), DebounceDecision::FireNow);
    }

    #[test]
    fn manual_fire_keeps_following_events_trailing() {
        let mut gate = DebounceGate::new(500.0);
        gate.note_fire(2_000.0);
        assert_eq!(gate.on_event(2_200.0), DebounceDecision::Trail);
    }

    #[test]
    fn only_the_newest_request_is_current() {
        let mut seq = RequestSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        // A resolves after B was issued: it must be discarded even
        // though it arrives later.
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn a_third_request_supersedes_both() {
        let mut seq = RequestSequencer::default();
        let a = seq.begin();
        let b = seq.begin();
        let c = seq.begin();
        assert!(!seq.is_current(a));
        assert!(!seq.is_current(b));
        assert!(seq.is_current(c));
    }
}
