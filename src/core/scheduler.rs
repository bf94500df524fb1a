//! Timer scheduling abstraction for the sync engine.
//!
//! The engine never spawns threads; it owns two one-shot timers (a
//! short-delay status refresh and a long-delay background fetch) and asks an
//! injected [`Scheduler`] to arm or cancel them. The host event loop decides
//! when a timer is actually due and calls back into the engine.
//!
//! # Public API
//! - [`TimerId`]: The two engine timers
//! - [`Scheduler`]: Arm/cancel capability injected into the engine
//! - [`DeadlineScheduler`]: Wall-clock implementation for polling hosts
//! - [`ManualScheduler`]: Records armed timers and fires on demand (tests)

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// The engine's two one-shot timers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Short-delay status reconciliation (no network)
    Status,
    /// Long-delay background fetch cycle
    Sync,
}

/// Capability to arm and cancel the engine's one-shot timers.
///
/// Arming an already-armed timer replaces its deadline; timers are one-shot
/// and must be re-armed by the engine after each cycle completes.
pub trait Scheduler {
    fn arm(&mut self, id: TimerId, delay: Duration);
    fn cancel(&mut self, id: TimerId);
    fn is_armed(&self, id: TimerId) -> bool;

    /// Timers due at `now`, removed from the schedule (one-shot)
    fn due(&mut self, now: Instant) -> Vec<TimerId>;

    /// Earliest pending deadline, for host sleep calculations
    fn next_deadline(&self) -> Option<Instant>;
}

/// Wall-clock scheduler for hosts that poll.
///
/// `due(now)` removes and returns every timer whose deadline has passed;
/// the host then invokes the matching engine callback for each.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    deadlines: HashMap<TimerId, Instant>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for DeadlineScheduler {
    fn arm(&mut self, id: TimerId, delay: Duration) {
        self.deadlines.insert(id, Instant::now() + delay);
    }

    fn cancel(&mut self, id: TimerId) {
        self.deadlines.remove(&id);
    }

    fn is_armed(&self, id: TimerId) -> bool {
        self.deadlines.contains_key(&id)
    }

    fn due(&mut self, now: Instant) -> Vec<TimerId> {
        let fired: Vec<TimerId> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();

        for id in &fired {
            self.deadlines.remove(id);
        }

        fired
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }
}

/// Scheduler that records armed timers without any clock.
///
/// Tests (and hosts driving the engine by hand) inspect armed delays and
/// decide themselves when to invoke the engine's timer callbacks. Polling
/// `due` drains every armed timer regardless of the clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    armed: HashMap<TimerId, Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay the timer was last armed with, if still pending
    pub fn armed_delay(&self, id: TimerId) -> Option<Duration> {
        self.armed.get(&id).copied()
    }

    /// Consume a pending timer; returns false when it was not armed
    pub fn take(&mut self, id: TimerId) -> bool {
        self.armed.remove(&id).is_some()
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, id: TimerId, delay: Duration) {
        self.armed.insert(id, delay);
    }

    fn cancel(&mut self, id: TimerId) {
        self.armed.remove(&id);
    }

    fn is_armed(&self, id: TimerId) -> bool {
        self.armed.contains_key(&id)
    }

    fn due(&mut self, _now: Instant) -> Vec<TimerId> {
        self.armed.drain().map(|(id, _)| id).collect()
    }

    fn next_deadline(&self) -> Option<Instant> {
        None
    }
}
