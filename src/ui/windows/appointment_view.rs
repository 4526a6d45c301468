//! Appointment Booking window: renders an [`AppointmentForm`] and owns the
//! walk-in clock that feeds it.

use std::sync::mpsc::{self as std_mpsc, Receiver as StdReceiver, Sender as StdSender};
use std::time::Duration;

use crate::config::AppConfig;
use crate::engine::age;
use crate::engine::form::{AppointmentForm, FormPhase, FormSettings, SubmitOutcome};
use crate::ticker::ClockTick;
use crate::ticker::walk_in::WalkInClock;
use crate::types::{AppointmentType, Field, VisitType};
use crate::ui::colors;
use crate::ui::window::{AppState, AppWindow};
use crate::utils;
use eframe::egui::{self, Vec2};
use jiff::civil::DateTime;
use tokio::runtime::Handle;

/// Blocking acknowledgment shown after a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Submitted,
    UnderAge,
}

impl Notice {
    fn message(self) -> &'static str {
        match self {
            Self::Submitted => "Form submitted successfully!",
            Self::UnderAge => "You must be 18 or older to book an appointment.",
        }
    }
}

pub struct AppointmentView {
    open: bool,
    form: AppointmentForm,
    tick_period: Duration,
    tick_tx: StdSender<ClockTick>,
    tick_rx: StdReceiver<ClockTick>,
    /// Present only while the window is open and the form wants a live clock.
    clock: Option<WalkInClock>,
    notice: Option<Notice>,
}

impl AppointmentView {
    pub fn new(config: &AppConfig, now: DateTime, open: bool) -> Self {
        let (tick_tx, tick_rx) = std_mpsc::channel();
        Self {
            open,
            form: AppointmentForm::new(FormSettings::from(config), now),
            tick_period: config.tick,
            tick_tx,
            tick_rx,
            clock: None,
            notice: None,
        }
    }

    fn drain_ticks(&mut self) {
        while let Ok(tick) = self.tick_rx.try_recv() {
            self.form.apply_tick(tick.epoch, tick.now);
        }
    }

    /// Start, restart or stop the walk-in clock so that one runs exactly when
    /// the window is open and the form is in live walk-in mode.
    fn sync_clock(&mut self, ctx: &egui::Context, runtime: &Handle) {
        let wanted = self.open && self.form.needs_live_clock();
        let epoch = self.form.clock_epoch();
        let running = self.clock.as_ref().map(WalkInClock::epoch);

        match (wanted, running) {
            (true, Some(current)) if current == epoch => {}
            (true, _) => {
                let ctx = ctx.clone();
                // Replacing the guard drops (and aborts) any previous clock.
                self.clock = Some(WalkInClock::spawn(
                    runtime,
                    epoch,
                    self.tick_period,
                    self.tick_tx.clone(),
                    move || ctx.request_repaint(),
                ));
            }
            (false, Some(_)) => self.clock = None,
            (false, None) => {}
        }
    }

    fn on_submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Submitted(snapshot) => {
                match snapshot.to_json() {
                    Ok(json) => log::info!("Form data: {json}"),
                    Err(e) => log::error!("could not serialise form snapshot: {e}"),
                }
                self.notice = Some(Notice::Submitted);
            }
            SubmitOutcome::Blocked => self.notice = Some(Notice::UnderAge),
            SubmitOutcome::Rejected(_) => {}
        }
    }

    fn form_ui(&mut self, ui: &mut egui::Ui, now: DateTime) {
        let today = now.date();

        egui::Grid::new("appointment_form")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                // Appointment type
                ui.label("Appointment Type:");
                let mut kind = self.form.data().appointment_type;
                egui::ComboBox::from_id_salt("appointment_type")
                    .selected_text(kind.label())
                    .show_ui(ui, |ui| {
                        for option in AppointmentType::ALL {
                            ui.selectable_value(&mut kind, option, option.label());
                        }
                    });
                self.form.set_appointment_type(kind, now);
                ui.end_row();

                // Names
                ui.label("First Name:");
                if let Some(v) = text_input(
                    ui,
                    &self.form.data().first_name,
                    "",
                    self.form.errors().get(Field::FirstName),
                ) {
                    self.form.set_first_name(v);
                }
                ui.end_row();

                ui.label("Last Name:");
                if let Some(v) = text_input(
                    ui,
                    &self.form.data().last_name,
                    "",
                    self.form.errors().get(Field::LastName),
                ) {
                    self.form.set_last_name(v);
                }
                ui.end_row();

                // Date of birth
                ui.label("Date of Birth:");
                let hint = match age::latest_adult_dob(today) {
                    Some(latest) if self.form.settings().age_gate => {
                        format!("YYYY-MM-DD (on or before {})", utils::format_date(latest))
                    }
                    _ => "YYYY-MM-DD".to_owned(),
                };
                if let Some(v) = text_input(
                    ui,
                    &self.form.data().dob,
                    &hint,
                    self.form.errors().get(Field::Dob),
                ) {
                    self.form.set_dob(v, today);
                }
                ui.end_row();

                if !self.form.booking_unlocked() {
                    return;
                }

                // Visit type
                ui.label("Visit Type:");
                let mut visit = self.form.data().visit_type;
                egui::ComboBox::from_id_salt("visit_type")
                    .selected_text(visit.label())
                    .show_ui(ui, |ui| {
                        for option in VisitType::ALL {
                            ui.selectable_value(&mut visit, option, option.label());
                        }
                    });
                if visit != self.form.data().visit_type {
                    if let Err(e) = self.form.set_visit_type(visit) {
                        log::warn!("{e}");
                    }
                }
                ui.end_row();

                // Date & time
                ui.label("Appointment Date & Time:");
                if self.form.is_editable(Field::Datetime) {
                    if let Some(v) = text_input(
                        ui,
                        &self.form.data().datetime,
                        "YYYY-MM-DDTHH:MM",
                        self.form.errors().get(Field::Datetime),
                    ) {
                        if let Err(e) = self.form.set_datetime(v) {
                            log::warn!("{e}");
                        }
                    }
                } else {
                    ui.vertical(|ui| {
                        let clock = self.form.clock_display();
                        ui.weak(if clock.is_empty() {
                            "Loading current time..."
                        } else {
                            clock
                        });
                        if let Some(message) = self.form.errors().get(Field::Datetime) {
                            ui.colored_label(colors::ERROR_TEXT, message);
                        }
                    });
                }
                ui.end_row();
            });

        ui.add_space(12.0);
        if self.form.can_submit() {
            let button = egui::Button::new("Book Appointment").min_size(Vec2::new(280.0, 32.0));
            if ui.add(button).clicked() {
                self.on_submit();
            }
        } else {
            ui.weak("Enter a date of birth showing you are 18 or older to continue.");
        }

        if self.form.phase() == FormPhase::Rejected {
            let count = self.form.errors().len();
            ui.colored_label(
                colors::ERROR_TEXT,
                format!("{count} field{} need attention.", if count == 1 { "" } else { "s" }),
            );
        }
    }

    fn notice_ui(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice else {
            return;
        };
        let mut dismissed = false;
        let response = egui::Modal::new(egui::Id::new("appointment_notice")).show(ctx, |ui| {
            ui.label(notice.message());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
        if dismissed || response.should_close() {
            self.notice = None;
        }
    }
}

impl AppWindow for AppointmentView {
    fn name(&self) -> &str {
        "Appointment Booking"
    }
    fn is_open(&self) -> bool {
        self.open
    }
    fn toggle(&mut self) {
        self.open = !self.open;
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>) {
        self.drain_ticks();

        let mut open = self.open;
        egui::Window::new(self.name())
            .open(&mut open)
            .default_size(Vec2::new(420.0, 360.0))
            .resizable(false)
            .show(ctx, |ui| self.form_ui(ui, state.now));
        self.open = open;

        self.notice_ui(ctx);
        self.sync_clock(ctx, state.runtime);
    }
}

/// Single-line text input with its error underneath. Returns the new text
/// when the user changed it this frame.
fn text_input(ui: &mut egui::Ui, value: &str, hint: &str, error: Option<&str>) -> Option<String> {
    let mut buffer = value.to_owned();
    let mut changed = false;
    ui.vertical(|ui| {
        changed = ui
            .add(
                egui::TextEdit::singleline(&mut buffer)
                    .hint_text(hint)
                    .desired_width(240.0),
            )
            .changed();
        if let Some(message) = error {
            ui.colored_label(colors::ERROR_TEXT, message);
        }
    });
    changed.then_some(buffer)
}
