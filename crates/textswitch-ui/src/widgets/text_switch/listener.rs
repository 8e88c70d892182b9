/// Observer of a switch's state changes.
///
/// The switch holds listeners weakly; the embedding application owns them.
/// Implemented for any `Fn(bool, bool)` closure.
pub trait StateChangeListener {
    /// Called synchronously after every state change, and once when the
    /// listener is attached.
    ///
    /// `by_touch` is `true` only when the change came from a touch on the
    /// switch itself.
    fn changed_state(&self, new_state: bool, by_touch: bool);
}

impl<F: Fn(bool, bool)> StateChangeListener for F {
    #[inline]
    fn changed_state(&self, new_state: bool, by_touch: bool) {
        self(new_state, by_touch)
    }
}
