//! Color Cycler window: one button whose fill advances on every click.

use crate::engine::palette::ColorCycler;
use crate::ui::colors;
use crate::ui::window::{AppState, AppWindow};
use eframe::egui::{self, Color32, RichText, Vec2};

#[derive(Default)]
pub struct ColorCyclerView {
    open: bool,
    cycler: ColorCycler,
    clicks: u64,
}

impl ColorCyclerView {
    pub fn new(open: bool) -> Self {
        Self {
            open,
            ..Self::default()
        }
    }
}

impl AppWindow for ColorCyclerView {
    fn name(&self) -> &str {
        "Color Cycler"
    }
    fn is_open(&self) -> bool {
        self.open
    }
    fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn show(&mut self, ctx: &egui::Context, _state: &mut AppState<'_>) {
        let mut open = self.open;
        egui::Window::new(self.name())
            .open(&mut open)
            .default_size(Vec2::new(260.0, 160.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    let button = egui::Button::new(RichText::new("Click me").color(Color32::WHITE))
                        .fill(colors::fill_for(self.cycler.current_color()))
                        .corner_radius(egui::CornerRadius::same(5))
                        .min_size(Vec2::new(120.0, 40.0));
                    if ui.add(button).clicked() {
                        self.cycler.advance();
                        self.clicks += 1;
                        log::debug!("color cycler -> {}", self.cycler.current_color());
                    }
                    ui.add_space(12.0);
                    ui.label(format!(
                        "{} ({} / {}) · {} clicks",
                        self.cycler.current_color(),
                        self.cycler.index() + 1,
                        self.cycler.palette().len(),
                        self.clicks
                    ));
                });
            });
        self.open = open;
    }
}
