use button_monitor::SnapshotCell;

/// Debounce sampling rate in Hz.
pub const SAMPLE_HZ: u64 = 61;

/// Panel refresh rate in Hz.
pub const FRAME_HZ: u64 = 20;

/// Handoff cell between the sampler and the renderer.
///
/// A single atomic word, so no mutex or channel is needed between the
/// tasks; the renderer just reads whatever is current.
pub static SNAPSHOT: SnapshotCell = SnapshotCell::new();
