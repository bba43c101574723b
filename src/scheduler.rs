//! Cooperative scheduling against a free-running tick counter.
//!
//! [`Cadence`] tracks when a periodic job is next due using wrapping
//! counter arithmetic, and [`Scheduler`] drives a small fixed set of
//! [`Task`]s from a main loop, handing back a sleep hint between runs.

use core::fmt;

/// Error conditions for scheduler operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerError {
    /// The task table is full.
    CapacityExceeded,
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => write!(f, "Task table capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SchedulerError {}

/// A unit of periodic work driven by the scheduler.
pub trait Task {
    /// Runs one iteration. `now` is the counter value the scheduler was
    /// polled with.
    fn run(&mut self, now: u32);
}

/// Tracks the next due point of a periodic job on a wrapping counter.
///
/// Due points advance along a fixed grid of `period` ticks. When a poll
/// arrives late, missed grid points are coalesced: the job fires once and
/// the next due point moves past `now`, staying on the original grid. The
/// counter may wrap freely; comparisons assume the caller polls at least
/// once per half counter range, which at any realistic tick rate is hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period: u32,
    next_due: u32,
}

impl Cadence {
    /// Creates a cadence due immediately at counter value zero.
    ///
    /// # Panics
    /// Panics if `period` is zero.
    pub const fn new(period: u32) -> Self {
        Self::starting_at(period, 0)
    }

    /// Creates a cadence due immediately at `now`.
    ///
    /// # Panics
    /// Panics if `period` is zero.
    pub const fn starting_at(period: u32, now: u32) -> Self {
        assert!(period > 0, "Cadence period must be non-zero");
        Self {
            period,
            next_due: now,
        }
    }

    /// The grid spacing in counter ticks.
    #[inline]
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// Returns true if the due point has been reached.
    #[inline]
    pub const fn is_due(&self, now: u32) -> bool {
        // Wrap-safe ordering: a non-negative signed difference means now
        // is at or past the due point.
        now.wrapping_sub(self.next_due) as i32 >= 0
    }

    /// Checks the due point and re-arms when it has been reached.
    ///
    /// Returns true at most once per grid point. A late poll fires once
    /// and skips the missed points rather than bursting to catch up.
    pub fn poll(&mut self, now: u32) -> bool {
        if !self.is_due(now) {
            return false;
        }
        let missed = now.wrapping_sub(self.next_due) / self.period;
        self.next_due = self
            .next_due
            .wrapping_add(self.period.wrapping_mul(missed + 1));
        true
    }

    /// Ticks remaining until the due point, zero if already due.
    pub const fn ticks_until(&self, now: u32) -> u32 {
        if self.is_due(now) {
            0
        } else {
            self.next_due.wrapping_sub(now)
        }
    }
}

struct Slot<'a> {
    cadence: Cadence,
    task: &'a mut dyn Task,
}

/// Fixed-capacity cooperative scheduler.
///
/// Holds up to `N` tasks, each paired with its own [`Cadence`]. The main
/// loop calls [`run_pending`] with the current counter value and may sleep
/// for [`ticks_until_next`] ticks afterwards instead of spinning.
///
/// Tasks run in insertion order, so a producer registered before its
/// consumer is always sampled first within one poll.
///
/// [`run_pending`]: Scheduler::run_pending
/// [`ticks_until_next`]: Scheduler::ticks_until_next
pub struct Scheduler<'a, const N: usize> {
    slots: heapless::Vec<Slot<'a>, N>,
}

impl<'a, const N: usize> Scheduler<'a, N> {
    /// Creates an empty scheduler.
    pub const fn new() -> Self {
        Self {
            slots: heapless::Vec::new(),
        }
    }

    /// Registers a task to run on the given cadence.
    ///
    /// # Errors
    /// Returns [`SchedulerError::CapacityExceeded`] if all `N` slots are
    /// taken.
    pub fn add(&mut self, cadence: Cadence, task: &'a mut dyn Task) -> Result<(), SchedulerError> {
        self.slots
            .push(Slot { cadence, task })
            .map_err(|_| SchedulerError::CapacityExceeded)
    }

    /// Runs every task whose cadence is due and returns how many ran.
    pub fn run_pending(&mut self, now: u32) -> usize {
        let mut ran = 0;
        for slot in self.slots.iter_mut() {
            if slot.cadence.poll(now) {
                slot.task.run(now);
                ran += 1;
            }
        }
        ran
    }

    /// Ticks until the earliest due point, or `None` if no tasks are
    /// registered. Zero means something is already due.
    pub fn ticks_until_next(&self, now: u32) -> Option<u32> {
        self.slots
            .iter()
            .map(|slot| slot.cadence.ticks_until(now))
            .min()
    }

    /// Number of registered tasks.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no tasks are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<'a, const N: usize> Default for Scheduler<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}
