//! Debounce state machine
//!
//! `Idle` until input arrives, then `Pending` with the timer and the latest
//! value. New input replaces the pending timer (dropping a
//! `gloo_timers::callback::Timeout` cancels it); a timer firing commits the
//! buffered value only if it is still the pending one.

#[derive(Debug)]
pub enum DebounceState<T> {
    Idle,
    Pending { timer: T, value: String, ticket: u64 },
}

#[derive(Debug)]
pub struct Debouncer<T> {
    state: DebounceState<T>,
    last_ticket: u64,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            state: DebounceState::Idle,
            last_ticket: 0,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    #[cfg(test)]
    pub fn pending_value(&self) -> Option<&str> {
        match &self.state {
            DebounceState::Pending { value, .. } => Some(value),
            DebounceState::Idle => None,
        }
    }

    /// Buffers `value` and (re)starts the quiescence timer.
    ///
    /// `schedule` receives the ticket the timer must hand back to [`fire`].
    ///
    /// [`fire`]: Debouncer::fire
    pub fn input(&mut self, value: String, schedule: impl FnOnce(u64) -> T) {
        self.last_ticket += 1;
        let ticket = self.last_ticket;
        let timer = schedule(ticket);
        self.state = DebounceState::Pending {
            timer,
            value,
            ticket,
        };
    }

    /// Timer callback. Returns the value to commit, or `None` when the timer
    /// was superseded.
    pub fn fire(&mut self, ticket: u64) -> Option<String> {
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending {
                value, ticket: t, ..
            } if t == ticket => Some(value),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Drops any pending timer without committing.
    pub fn cancel(&mut self) {
        self.state = DebounceState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY_MS: u64 = 500;

    /// Drives a debouncer against a virtual clock
    #[derive(Default)]
    struct VirtualClock {
        now: u64,
        timers: Vec<(u64, u64)>,
        commits: Vec<(u64, String)>,
    }

    impl VirtualClock {
        fn type_at(&mut self, debouncer: &mut Debouncer<u64>, at: u64, value: &str) {
            self.run_until(debouncer, at);
            let deadline = at + DELAY_MS;
            let timers = &mut self.timers;
            debouncer.input(value.to_string(), |ticket| {
                timers.push((deadline, ticket));
                deadline
            });
        }

        fn run_until(&mut self, debouncer: &mut Debouncer<u64>, until: u64) {
            self.timers.sort();
            while let Some(&(deadline, ticket)) = self.timers.first() {
                if deadline > until {
                    break;
                }
                self.timers.remove(0);
                self.now = deadline;
                if let Some(value) = debouncer.fire(ticket) {
                    self.commits.push((self.now, value));
                }
            }
            self.now = self.now.max(until);
        }
    }

    #[test]
    fn test_burst_commits_once_with_last_value() {
        let mut debouncer = Debouncer::new();
        let mut clock = VirtualClock::default();
        for (at, value) in [(0, "l"), (100, "la"), (200, "lam"), (300, "lamp")] {
            clock.type_at(&mut debouncer, at, value);
        }
        clock.run_until(&mut debouncer, 5_000);

        assert_eq!(clock.commits, vec![(800, "lamp".to_string())]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_separate_pauses_commit_separately() {
        let mut debouncer = Debouncer::new();
        let mut clock = VirtualClock::default();
        clock.type_at(&mut debouncer, 0, "tv");
        clock.type_at(&mut debouncer, 1_000, "tvs");
        clock.run_until(&mut debouncer, 5_000);

        assert_eq!(
            clock.commits,
            vec![(500, "tv".to_string()), (1_500, "tvs".to_string())]
        );
    }

    #[test]
    fn test_stale_ticket_keeps_pending_value() {
        let mut debouncer: Debouncer<()> = Debouncer::new();
        debouncer.input("a".to_string(), |_| ());
        debouncer.input("ab".to_string(), |_| ());

        assert_eq!(debouncer.fire(1), None);
        assert_eq!(debouncer.pending_value(), Some("ab"));
        assert_eq!(debouncer.fire(2), Some("ab".to_string()));
        assert_eq!(debouncer.fire(2), None);
    }

    #[test]
    fn test_cancel_discards_buffered_value() {
        let mut debouncer: Debouncer<()> = Debouncer::new();
        debouncer.input("shoes".to_string(), |_| ());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(1), None);
    }
}
