//! Delayed emission scheduling — the engine's replacement for timer
//! callbacks.
//!
//! RULE: Nothing in the engine fires a real timer. Every "later" emission
//! (simulation steps, staggered reveals, chat replies) is queued here with
//! an absolute millisecond deadline and drained by the engine as its time
//! cursor advances past it.
//!
//! Every scheduled emission belongs to a run. Cancelling the run drops all
//! of its still-pending emissions, so a module switch or restart can never
//! leak stale output into a view that has moved on.

use crate::event::CourseEvent;
use crate::types::Millis;
use serde::{Deserialize, Serialize};

/// Identifies one scheduled playback run (a simulation, a reveal batch, a
/// pending chat reply). Returned to the caller so the run can be aborted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RunHandle(pub u64);

struct Scheduled {
    due: Millis,
    seq: u64,
    run: RunHandle,
    event: CourseEvent,
}

#[derive(Default)]
pub struct Sequencer {
    next_run: u64,
    next_seq: u64,
    pending: Vec<Scheduled>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a handle for a new run.
    pub fn begin_run(&mut self) -> RunHandle {
        self.next_run += 1;
        RunHandle(self.next_run)
    }

    /// Queue one emission for `run` at absolute time `due`.
    pub fn schedule(&mut self, run: RunHandle, due: Millis, event: CourseEvent) {
        self.next_seq += 1;
        self.pending.push(Scheduled {
            due,
            seq: self.next_seq,
            run,
            event,
        });
    }

    /// Queue a whole script of (offset, event) pairs starting at `now`.
    pub fn schedule_script(
        &mut self,
        run: RunHandle,
        now: Millis,
        script: Vec<(Millis, CourseEvent)>,
    ) {
        for (offset, event) in script {
            self.schedule(run, now + offset, event);
        }
    }

    /// Drop every pending emission belonging to `run`.
    pub fn cancel(&mut self, run: RunHandle) {
        let before = self.pending.len();
        self.pending.retain(|s| s.run != run);
        let dropped = before - self.pending.len();
        if dropped > 0 {
            log::debug!("cancelled run {run:?}: {dropped} pending emissions dropped");
        }
    }

    /// Drop everything. Used on module switch and restart.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("cancelling all runs: {} pending emissions dropped", self.pending.len());
        }
        self.pending.clear();
    }

    /// The earliest pending deadline, if any.
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every emission due at or before `now`, in
    /// deadline order (insertion order breaks ties).
    pub fn take_due(&mut self, now: Millis) -> Vec<CourseEvent> {
        let mut due: Vec<Scheduled> = Vec::new();
        let mut rest: Vec<Scheduled> = Vec::new();
        for s in self.pending.drain(..) {
            if s.due <= now {
                due.push(s);
            } else {
                rest.push(s);
            }
        }
        self.pending = rest;
        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.event).collect()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
