use super::{Easing, Lerp};

/// A value animating from `from` to `to` over `duration` seconds.
///
/// The target is known up front; only the presented value changes while the
/// transition runs. A zero or negative duration finishes immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl<T: Lerp + Clone> Transition<T> {
    pub fn new(from: T, to: T, duration: f32, easing: Easing) -> Self {
        Self { from, to, duration, elapsed: 0.0, easing }
    }

    /// Starts a transition towards `to` from wherever `previous` currently
    /// presents, or from `from` when nothing is running.
    ///
    /// The previous transition is dropped: the newest target wins.
    pub fn supersede(previous: Option<&Self>, from: T, to: T, duration: f32, easing: Easing) -> Self {
        let start = previous.map_or(from, Transition::value);
        Self::new(start, to, duration, easing)
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// The presented value at the current progress.
    pub fn value(&self) -> T {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    #[inline]
    pub fn target(&self) -> &T {
        &self.to
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Moves the transition forward by `dt` seconds.
    ///
    /// Returns `true` while the transition is still running afterwards.
    pub fn advance(&mut self, dt: f32) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
        }
        !self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(from: f32, to: f32, duration: f32) -> Transition<f32> {
        Transition::new(from, to, duration, Easing::Linear)
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn starts_at_from() {
        let t = linear(2.0, 83.0, 0.2);
        assert_eq!(t.value(), 2.0);
        assert!(!t.is_finished());
    }

    #[test]
    fn advance_reaches_target_after_duration() {
        let mut t = linear(2.0, 83.0, 0.2);
        assert!(t.advance(0.1));
        assert!(!t.advance(0.1));
        assert_eq!(t.value(), 83.0);
        assert!(t.is_finished());
    }

    #[test]
    fn overshooting_dt_is_clamped() {
        let mut t = linear(0.0, 10.0, 0.2);
        assert!(!t.advance(5.0));
        assert_eq!(t.value(), 10.0);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t = linear(0.0, 10.0, 0.0);
        assert!(t.is_finished());
        assert_eq!(t.value(), 10.0);
    }

    #[test]
    fn non_finite_dt_is_ignored() {
        let mut t = linear(0.0, 10.0, 1.0);
        assert!(t.advance(f32::NAN));
        assert_eq!(t.value(), 0.0);
    }

    // ── supersede ─────────────────────────────────────────────────────────

    #[test]
    fn supersede_starts_from_presented_value() {
        let mut running = linear(0.0, 100.0, 1.0);
        running.advance(0.25);

        let next = Transition::supersede(Some(&running), 100.0, 0.0, 1.0, Easing::Linear);
        assert_eq!(next.value(), 25.0);
        assert_eq!(*next.target(), 0.0);
    }

    #[test]
    fn supersede_without_previous_uses_from() {
        let next = Transition::supersede(None, 2.0, 83.0, 0.2, Easing::EaseInOut);
        assert_eq!(next.value(), 2.0);
        assert_eq!(next.duration(), 0.2);
    }
}
