//! Ready-made tasks wiring the debounce engine, the snapshot cell and the
//! status panel to a [`Scheduler`](crate::scheduler::Scheduler).
//!
//! Each concern is its own task so cadences can differ: sampling runs fast,
//! rendering runs at a comfortable frame rate, the heartbeat proves the
//! loop is alive. Also defines the [`Indicator`] trait for hardware
//! abstraction.

use crate::debounce::{ButtonBank, InputLines};
use crate::panel::{PanelDisplay, StatusPanel};
use crate::scheduler::Task;
use crate::snapshot::SnapshotCell;
use crate::time::TickRate;

/// Trait for abstracting a single on/off indicator output.
///
/// Implement this for your LED or test point (a GPIO pin, usually). Handle
/// any hardware errors internally - this method cannot fail.
pub trait Indicator {
    /// Flips the indicator's output state.
    fn toggle(&mut self);
}

/// The no-op indicator, for builds without a spare pin.
impl Indicator for () {
    fn toggle(&mut self) {}
}

/// Samples the buttons and publishes a fresh snapshot every run.
///
/// Owns the [`ButtonBank`] and its input lines, making this task the single
/// writer of all debounce state. Each accepted press also flips the press
/// indicator, so a pin can be scoped to verify that edges are detected.
pub struct DebounceTask<'a, L: InputLines, I: Indicator> {
    bank: ButtonBank,
    lines: L,
    press_indicator: I,
    cell: &'a SnapshotCell,
}

impl<'a, L: InputLines, I: Indicator> DebounceTask<'a, L, I> {
    /// Creates the task. Pass `()` as the indicator if no pin is spared.
    pub fn new(bank: ButtonBank, lines: L, press_indicator: I, cell: &'a SnapshotCell) -> Self {
        Self {
            bank,
            lines,
            press_indicator,
            cell,
        }
    }

    /// The bank driven by this task.
    pub fn bank(&self) -> &ButtonBank {
        &self.bank
    }
}

impl<L: InputLines, I: Indicator> Task for DebounceTask<'_, L, I> {
    fn run(&mut self, _now: u32) {
        let report = self.bank.tick(&self.lines);
        for _ in 0..report.presses() {
            self.press_indicator.toggle();
        }
        self.cell.publish(self.bank.snapshot());
    }
}

/// Flips an indicator on every run.
///
/// Schedule it on the sampling cadence and the pin carries a square wave at
/// half the sampling rate; a scope on that pin verifies the loop timing
/// without touching the rest of the system.
pub struct HeartbeatTask<I: Indicator> {
    indicator: I,
}

impl<I: Indicator> HeartbeatTask<I> {
    pub fn new(indicator: I) -> Self {
        Self { indicator }
    }
}

impl<I: Indicator> Task for HeartbeatTask<I> {
    fn run(&mut self, _now: u32) {
        self.indicator.toggle();
    }
}

/// Redraws the status panel from the latest published snapshot.
///
/// Reads the [`SnapshotCell`] and never touches the debounce state, so it
/// can run in a different execution context from the sampler. The counter
/// value passed by the scheduler doubles as the elapsed time source.
pub struct RenderTask<'a, D: PanelDisplay> {
    panel: StatusPanel<D>,
    cell: &'a SnapshotCell,
    rate: TickRate,
}

impl<'a, D: PanelDisplay> RenderTask<'a, D> {
    pub fn new(panel: StatusPanel<D>, cell: &'a SnapshotCell, rate: TickRate) -> Self {
        Self { panel, cell, rate }
    }

    /// The panel driven by this task.
    pub fn panel(&self) -> &StatusPanel<D> {
        &self.panel
    }
}

impl<D: PanelDisplay> Task for RenderTask<'_, D> {
    fn run(&mut self, now: u32) {
        let snapshot = self.cell.latest();
        self.panel.render(snapshot, self.rate.elapsed(now));
    }
}
