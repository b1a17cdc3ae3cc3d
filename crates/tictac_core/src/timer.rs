//! Cancellable deferred trigger for the AI's move.

use std::time::{Duration, Instant};
use tracing::{debug, instrument, trace};

/// Pause before the AI plays, for pacing only.
pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// At most one pending AI trigger.
///
/// The trigger does not run anything by itself. Its owner asks whether it
/// is due with [`DeferredMove::fire`], and the event loop uses
/// [`DeferredMove::deadline`] to decide how long to wait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredMove {
    due: Option<Instant>,
}

impl DeferredMove {
    /// Creates an idle trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the trigger to fire [`AI_MOVE_DELAY`] after `now`.
    ///
    /// Replaces any trigger that was already pending.
    #[instrument(skip(self))]
    pub fn arm(&mut self, now: Instant) {
        if self.due.is_some() {
            debug!("Replacing pending AI trigger");
        }
        self.due = Some(now + AI_MOVE_DELAY);
    }

    /// Drops the pending trigger, if any.
    pub fn cancel(&mut self) {
        if self.due.take().is_some() {
            trace!("Cancelled pending AI trigger");
        }
    }

    /// When the pending trigger is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.due
    }

    /// Returns true while a trigger is pending.
    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Consumes the trigger if it is due at `now`.
    ///
    /// Returns false (and keeps the trigger) when it is not yet due, or
    /// when nothing is pending.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_trigger_never_fires() {
        let mut timer = DeferredMove::new();
        assert!(!timer.is_pending());
        assert!(!timer.fire(Instant::now() + Duration::from_secs(60)));
    }

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = DeferredMove::new();
        timer.arm(start);

        assert_eq!(timer.deadline(), Some(start + AI_MOVE_DELAY));
        assert!(!timer.fire(start + Duration::from_millis(499)));
        assert!(timer.is_pending());
        assert!(timer.fire(start + AI_MOVE_DELAY));
        assert!(!timer.fire(start + AI_MOVE_DELAY * 2));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = DeferredMove::new();
        timer.arm(start);
        timer.cancel();
        assert!(!timer.fire(start + AI_MOVE_DELAY));
    }

    #[test]
    fn test_rearm_replaces_previous_trigger() {
        let start = Instant::now();
        let mut timer = DeferredMove::new();
        timer.arm(start);
        timer.arm(start + Duration::from_millis(300));

        // The first deadline no longer counts.
        assert!(!timer.fire(start + AI_MOVE_DELAY));
        assert!(timer.fire(start + Duration::from_millis(800)));
    }
}
