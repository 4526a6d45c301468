//! The `AppWindow` trait and the shared `AppState` view passed to each window.
//!
//! To add a new window:
//! 1. Create a new file in `ui/windows/`.
//! 2. Implement `AppWindow` for your struct.
//! 3. Push `Box::new(MyWindow::new(..))` into `App::windows` in `App::new()`.

use jiff::civil::DateTime;
use tokio::runtime::Handle;

/// Per-frame context shared with every window's `show` call.
pub struct AppState<'a> {
    /// Runtime that background tasks (the walk-in clock) are spawned on.
    pub runtime: &'a Handle,
    /// Local wall-clock time read once at the start of the frame.
    pub now: DateTime,
}

/// Trait implemented by every demo window.
///
/// Each window owns its open/closed flag and its component state. The
/// orchestrator (`App`) iterates over all registered windows and calls `show`
/// on each frame, open or not, so a window can release resources when hidden.
pub trait AppWindow {
    /// Display name shown on the toggle button and as the egui window title.
    fn name(&self) -> &str;

    /// Whether this window is currently visible.
    fn is_open(&self) -> bool;

    /// Toggle the window's open/closed state.
    fn toggle(&mut self);

    /// Draw the window contents.  Called every frame by `App::update`.
    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>);
}
