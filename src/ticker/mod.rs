//! Ticker layer: message type for the walk-in clock task.

pub mod walk_in;

use jiff::civil::DateTime;

/// A clock reading sent from the background ticker to the UI thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTick {
    /// Walk-in activation this reading belongs to.
    pub epoch: u64,
    pub now: DateTime,
}
