//! Single-slot action mailbox.

use super::action::Action;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Outcome of a bounded wait on the mailbox.
#[derive(Debug)]
pub(crate) enum Received {
    Action(Action),
    TimedOut,
    Closed,
}

#[derive(Debug, Default)]
struct Slot {
    pending: Option<Action>,
    closed: bool,
}

/// Holds at most one undelivered action. Posting while an action is still
/// pending replaces it: only the newest intent is worth acting on.
#[derive(Debug, Default)]
pub(crate) struct Mailbox {
    slot: Mutex<Slot>,
    ready: Condvar,
}

impl Mailbox {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store `action`, dropping any older pending one.
    /// Returns false once the mailbox is closed.
    pub(crate) fn post(&self, action: Action) -> bool {
        let mut slot = self.lock();
        if slot.closed {
            return false;
        }
        if let Some(dropped) = slot.pending.replace(action) {
            log::debug!("Mailbox full, dropped pending {}", dropped.name());
        }
        self.ready.notify_one();
        true
    }

    /// Close the mailbox. Pending actions are still delivered.
    pub(crate) fn close(&self) {
        self.lock().closed = true;
        self.ready.notify_all();
    }

    /// Block until an action arrives. `None` once closed and drained.
    pub(crate) fn recv(&self) -> Option<Action> {
        let slot = self.lock();
        let mut slot = self
            .ready
            .wait_while(slot, |s| s.pending.is_none() && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);
        slot.pending.take()
    }

    /// Wait at most `timeout` for an action.
    pub(crate) fn recv_timeout(&self, timeout: Duration) -> Received {
        let slot = self.lock();
        let (mut slot, _) = self
            .ready
            .wait_timeout_while(slot, timeout, |s| s.pending.is_none() && !s.closed)
            .unwrap_or_else(PoisonError::into_inner);
        match slot.pending.take() {
            Some(action) => Received::Action(action),
            None if slot.closed => Received::Closed,
            None => Received::TimedOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_newest_action_wins() {
        let mailbox = Mailbox::new();
        assert!(mailbox.post(Action::Undo));
        assert!(mailbox.post(Action::Play));
        assert_eq!(mailbox.recv(), Some(Action::Play));
    }

    #[test]
    fn test_timeout_without_action() {
        let mailbox = Mailbox::new();
        assert!(matches!(
            mailbox.recv_timeout(Duration::from_millis(5)),
            Received::TimedOut
        ));
    }

    #[test]
    fn test_close() {
        let mailbox = Mailbox::new();
        mailbox.post(Action::Stop);
        mailbox.close();

        assert!(!mailbox.post(Action::Undo));
        // Pending action is still delivered after close.
        assert_eq!(mailbox.recv(), Some(Action::Stop));
        assert_eq!(mailbox.recv(), None);
        assert!(matches!(
            mailbox.recv_timeout(Duration::from_millis(5)),
            Received::Closed
        ));
    }

    #[test]
    fn test_wakes_waiting_receiver() {
        let mailbox = Arc::new(Mailbox::new());
        let sender = mailbox.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            sender.post(Action::Restore);
        });

        match mailbox.recv_timeout(Duration::from_secs(5)) {
            Received::Action(action) => assert_eq!(action, Action::Restore),
            other => panic!("expected action, got {:?}", other),
        }
        handle.join().unwrap();
    }
}
