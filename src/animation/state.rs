//! Open/close state machine for the book.
//!
//! The cycle is strict: Closed → Opening → Open → Closing → Closed. A
//! settle timer approximates "the open/close animation has visually
//! finished"; transitions out of Opening/Closing fire when it elapses.
//! Timers are delta-time driven, so tests can step them with a mock
//! clock and unmount can cancel them synchronously.

/// Animation state of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookState {
    /// At rest, cover closed. The initial state.
    #[default]
    Closed,
    /// Cover swinging open; settle timer running.
    Opening,
    /// Fully open; overlay content visible, particles live.
    Open,
    /// Cover swinging shut; settle timer running.
    Closing,
}

impl BookState {
    /// Whether a settle timer is expected in this state.
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Emitted when the machine changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEvent {
    /// Closed → Opening (activation accepted).
    OpeningStarted,
    /// Opening → Open (settle elapsed).
    Opened,
    /// Open → Closing (activation accepted).
    ClosingStarted,
    /// Closing → Closed (settle elapsed).
    Closed,
}

/// Drives the Closed/Opening/Open/Closing cycle.
///
/// The machine owns no targets itself — the caller reacts to the returned
/// [`StateEvent`]s by setting animator targets, toggling overlay
/// visibility and spawning particles.
#[derive(Debug)]
pub struct BookStateMachine {
    state: BookState,
    /// Configured settle delay, seconds.
    settle_delay: f32,
    /// Remaining settle time while transitioning.
    settle_remaining: Option<f32>,
}

impl BookStateMachine {
    /// Machine in `Closed` with the given settle delay.
    #[must_use]
    pub fn new(settle_delay: f32) -> Self {
        Self {
            state: BookState::Closed,
            settle_delay: settle_delay.max(0.0),
            settle_remaining: None,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> BookState {
        self.state
    }

    /// Whether the machine has confirmed `Open` (settle delay included).
    #[must_use]
    pub fn is_fully_open(&self) -> bool {
        self.state == BookState::Open
    }

    /// Remaining settle time, if a transition is in flight.
    #[must_use]
    pub fn settle_remaining(&self) -> Option<f32> {
        self.settle_remaining
    }

    /// Toggle between the resting states.
    ///
    /// From `Closed` starts an open, from `Open` starts a close. Calls
    /// while a transition is in flight are ignored — the cycle never
    /// skips or reverses mid-swing.
    pub fn activate(&mut self) -> Option<StateEvent> {
        match self.state {
            BookState::Closed => {
                self.state = BookState::Opening;
                self.settle_remaining = Some(self.settle_delay);
                Some(StateEvent::OpeningStarted)
            }
            BookState::Open => {
                self.state = BookState::Closing;
                self.settle_remaining = Some(self.settle_delay);
                Some(StateEvent::ClosingStarted)
            }
            BookState::Opening | BookState::Closing => {
                log::debug!(
                    "activate ignored while {:?} settles",
                    self.state
                );
                None
            }
        }
    }

    /// Advance the settle timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Option<StateEvent> {
        let remaining = self.settle_remaining? - dt.max(0.0);
        if remaining > 0.0 {
            self.settle_remaining = Some(remaining);
            return None;
        }
        self.settle_remaining = None;
        match self.state {
            BookState::Opening => {
                self.state = BookState::Open;
                Some(StateEvent::Opened)
            }
            BookState::Closing => {
                self.state = BookState::Closed;
                Some(StateEvent::Closed)
            }
            // A timer never survives into a resting state.
            BookState::Closed | BookState::Open => None,
        }
    }

    /// Cancel any pending settle timer without changing state.
    pub fn cancel_settle(&mut self) {
        self.settle_remaining = None;
    }

    /// Return to `Closed` with no timer (unmount path).
    pub fn reset(&mut self) {
        self.state = BookState::Closed;
        self.settle_remaining = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        let machine = BookStateMachine::new(0.5);
        assert_eq!(machine.state(), BookState::Closed);
        assert!(!machine.is_fully_open());
        assert!(machine.settle_remaining().is_none());
    }

    #[test]
    fn test_activate_from_closed_opens_exactly_once() {
        let mut machine = BookStateMachine::new(0.5);
        assert_eq!(machine.activate(), Some(StateEvent::OpeningStarted));
        assert_eq!(machine.state(), BookState::Opening);

        // A second call mid-transition is ignored: no duplicated or
        // skipped transition.
        assert_eq!(machine.activate(), None);
        assert_eq!(machine.state(), BookState::Opening);
    }

    #[test]
    fn test_full_cycle() {
        let mut machine = BookStateMachine::new(0.3);

        let _ = machine.activate();
        assert_eq!(machine.state(), BookState::Opening);
        assert_eq!(machine.update(0.2), None);
        assert_eq!(machine.update(0.2), Some(StateEvent::Opened));
        assert!(machine.is_fully_open());

        let _ = machine.activate();
        assert_eq!(machine.state(), BookState::Closing);
        assert_eq!(machine.update(0.1), None);
        assert_eq!(machine.update(0.3), Some(StateEvent::Closed));
        assert_eq!(machine.state(), BookState::Closed);
    }

    #[test]
    fn test_no_direct_closed_to_open_jump() {
        let mut machine = BookStateMachine::new(0.5);
        let _ = machine.activate();
        // Without settle time passing, the machine stays in Opening no
        // matter how often activate is pressed.
        for _ in 0..10 {
            let _ = machine.activate();
        }
        assert_eq!(machine.state(), BookState::Opening);
    }

    #[test]
    fn test_cancel_settle_freezes_transition() {
        let mut machine = BookStateMachine::new(0.2);
        let _ = machine.activate();
        machine.cancel_settle();
        // No timer left: updates never complete the transition.
        assert_eq!(machine.update(10.0), None);
        assert_eq!(machine.state(), BookState::Opening);
    }

    #[test]
    fn test_reset_returns_to_closed() {
        let mut machine = BookStateMachine::new(0.2);
        let _ = machine.activate();
        machine.reset();
        assert_eq!(machine.state(), BookState::Closed);
        assert!(machine.settle_remaining().is_none());
        // And the cycle restarts cleanly.
        assert_eq!(machine.activate(), Some(StateEvent::OpeningStarted));
    }

    #[test]
    fn test_zero_delay_settles_on_first_update() {
        let mut machine = BookStateMachine::new(0.0);
        let _ = machine.activate();
        assert_eq!(machine.update(0.0), Some(StateEvent::Opened));
    }
}
