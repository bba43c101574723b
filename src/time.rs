//! Time abstraction: free-running counters and tick-to-seconds scaling.

/// Trait for abstracting free-running hardware counters.
///
/// The counter is expected to increment at a fixed, known rate, starting
/// from 0 at power-on and wrapping on overflow. Precise behavior across a
/// wrap is out of scope; within a wrap the count is monotonic.
pub trait CounterSource {
    /// Returns the current counter value.
    fn count(&self) -> u32;
}

/// Fixed linear scale between counter ticks and wall-clock time.
///
/// Expressed as a hardware clock frequency divided by a prescaler, so
/// fractional tick rates (e.g. 8 MHz / 1024 = 7812.5 Hz) are represented
/// exactly. All conversions use integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRate {
    freq_hz: u32,
    prescaler: u32,
}

impl TickRate {
    /// Creates a scale from a clock frequency and prescaler.
    ///
    /// # Panics
    /// Panics if either argument is zero.
    pub const fn from_clock(freq_hz: u32, prescaler: u32) -> Self {
        assert!(freq_hz > 0 && prescaler > 0);
        Self { freq_hz, prescaler }
    }

    /// Creates a scale for a counter that ticks at a whole number of hertz.
    pub const fn from_hz(hz: u32) -> Self {
        Self::from_clock(hz, 1)
    }

    /// Converts a counter value to elapsed microseconds.
    #[inline]
    pub const fn micros(&self, count: u32) -> u64 {
        count as u64 * self.prescaler as u64 * 1_000_000 / self.freq_hz as u64
    }

    /// Converts a counter value to an [`Elapsed`] time.
    #[inline]
    pub const fn elapsed(&self, count: u32) -> Elapsed {
        Elapsed::from_micros(self.micros(count))
    }

    /// Number of counter ticks per period of the given frequency,
    /// rounded to the nearest tick.
    ///
    /// Useful for deriving [`crate::scheduler::Cadence`] periods from a
    /// target rate, e.g. a ~61 Hz debounce cadence on a 7812.5 Hz counter
    /// is 128 ticks.
    pub const fn period_ticks(&self, hz: u32) -> u32 {
        let denom = self.prescaler as u64 * hz as u64;
        ((self.freq_hz as u64 + denom / 2) / denom) as u32
    }
}

/// Elapsed time derived from a counter value.
///
/// Displays as seconds with exactly four decimal places, rounded half-up
/// (e.g. 999_936 µs renders as `0.9999`), matching the reference panel
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Elapsed {
    micros: u64,
}

impl Elapsed {
    /// Zero elapsed time.
    pub const ZERO: Self = Elapsed { micros: 0 };

    /// Creates an elapsed time from microseconds.
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Self { micros }
    }

    /// Elapsed microseconds.
    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.micros
    }

    /// Whole seconds part.
    #[inline]
    pub const fn whole_seconds(self) -> u64 {
        self.micros / 1_000_000
    }
}

impl core::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Round half-up to ten-thousandths of a second.
        let ten_thousandths = (self.micros + 50) / 100;
        write!(f, "{}.{:04}", ten_thousandths / 10_000, ten_thousandths % 10_000)
    }
}
