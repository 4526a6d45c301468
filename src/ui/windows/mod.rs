//! Registered UI windows, each implementing `AppWindow`.

pub mod appointment_view;
pub mod color_cycler_view;
