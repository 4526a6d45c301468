//! Application orchestrator: owns the clock runtime and drives the window system.

use crate::config::AppConfig;
use crate::error::Result;
use crate::ui::window::{AppState, AppWindow};
use crate::ui::windows::{appointment_view::AppointmentView, color_cycler_view::ColorCyclerView};
use crate::utils;
use eframe::egui;
use tokio::runtime::{Builder, Runtime};

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// All component logic lives in the engine structs; `App` only:
/// 1. Owns the Tokio runtime that background clocks are spawned on.
/// 2. Reads the wall clock once per frame and hands it to every window.
/// 3. Renders the central panel with one toggle per registered window.
pub struct App {
    // Declared before `runtime` so windows (and their clock guards) drop first.
    windows: Vec<Box<dyn AppWindow>>,
    runtime: Runtime,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("walk-in-clock")
            .enable_time()
            .build()?;

        log::info!(
            "starting: clock={:?} age_gate={} tick={:?}",
            config.clock,
            config.age_gate,
            config.tick
        );

        // Register all windows. Adding a new window = one line here.
        let windows: Vec<Box<dyn AppWindow>> = vec![
            Box::new(ColorCyclerView::new(true)),
            Box::new(AppointmentView::new(&config, utils::now_local(), true)),
        ];

        Ok(Self { windows, runtime })
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Clinic Desk");
            ui.horizontal_wrapped(|ui| {
                for w in &mut self.windows {
                    let label = if w.is_open() { "Hide" } else { "Show" };
                    if ui.button(format!("{label} {}", w.name())).clicked() {
                        w.toggle();
                    }
                }
            });
        });

        let mut state = AppState {
            runtime: self.runtime.handle(),
            now: utils::now_local(),
        };
        for w in &mut self.windows {
            w.show(ctx, &mut state);
        }
    }
}
