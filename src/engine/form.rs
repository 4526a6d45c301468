//! Appointment form engine: field state, required-field validation, the
//! dob-derived age gate, and walk-in time stamping.
//!
//! The form never reads the clock itself. Callers pass `now`/`today` into the
//! operations that need them, and the live walk-in refresh arrives through
//! [`AppointmentForm::apply_tick`] from whatever owns the timer.
//!
//! Derived values are recomputed synchronously after the mutation they
//! depend on:
//! - `dob` → adult flag (and the under-age error on `dob`)
//! - `appointment_type` → `datetime` stamp and clock epoch

use std::collections::BTreeMap;

use jiff::civil::{Date, DateTime};

use crate::config::{AppConfig, ClockMode};
use crate::engine::age;
use crate::error::{AppError, Result};
use crate::types::{AppointmentSnapshot, AppointmentType, Field, FormData, VisitType};
use crate::utils;

pub const FIRST_NAME_REQUIRED: &str = "First name is required";
pub const LAST_NAME_REQUIRED: &str = "Last name is required";
pub const DOB_REQUIRED: &str = "Date of birth is required";
pub const DOB_MALFORMED: &str = "Date of birth must be YYYY-MM-DD";
pub const DOB_UNDERAGE: &str = "Must be 18 or older to continue";
pub const DATETIME_REQUIRED: &str = "Date & time is required";
pub const DATETIME_MALFORMED: &str = "Date & time must be YYYY-MM-DDTHH:MM";

// ── Validation errors ──────────────────────────────────────────────────────────

/// Field-scoped error messages. A field is present only while it is failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    by_field: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.by_field.get(&field).copied()
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: Field) -> bool {
        self.by_field.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.by_field.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.by_field.insert(field, message);
    }

    fn clear(&mut self, field: Field) {
        self.by_field.remove(&field);
    }
}

// ── Settings / outcomes ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSettings {
    /// Require an adult date of birth before the booking fields unlock.
    pub age_gate: bool,
    pub clock: ClockMode,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FormSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            age_gate: config.age_gate,
            clock: config.clock,
        }
    }
}

/// Where the form sits in its edit/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Last submit failed validation; errors are on display.
    Rejected,
    /// Last submit passed validation but the age gate was closed.
    Blocked,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(AppointmentSnapshot),
    Rejected(ValidationErrors),
    Blocked,
}

// ── Form ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppointmentForm {
    settings: FormSettings,
    data: FormData,
    errors: ValidationErrors,
    phase: FormPhase,
    adult: bool,
    /// Human-readable form of the last walk-in stamp.
    clock_display: String,
    /// Bumped on every switch into walk-in; ticks from older epochs are stale.
    clock_epoch: u64,
}

impl AppointmentForm {
    /// A blank form. It opens in walk-in mode, so `datetime` is stamped with
    /// `now` straight away.
    pub fn new(settings: FormSettings, now: DateTime) -> Self {
        let mut form = Self {
            settings,
            data: FormData::default(),
            errors: ValidationErrors::default(),
            phase: FormPhase::Editing,
            adult: false,
            clock_display: String::new(),
            clock_epoch: 0,
        };
        if form.data.appointment_type == AppointmentType::WalkIn {
            form.enter_walk_in(now);
        }
        form
    }

    pub fn settings(&self) -> FormSettings {
        self.settings
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Adult flag derived from the current `dob`; `false` while `dob` is
    /// empty or unparseable.
    #[allow(dead_code)]
    pub fn is_adult(&self) -> bool {
        self.adult
    }

    pub fn clock_display(&self) -> &str {
        &self.clock_display
    }

    pub fn clock_epoch(&self) -> u64 {
        self.clock_epoch
    }

    /// Whether a recurring clock should be feeding [`Self::apply_tick`].
    pub fn needs_live_clock(&self) -> bool {
        self.data.appointment_type == AppointmentType::WalkIn
            && self.settings.clock == ClockMode::Live
    }

    /// Visit type, date & time, and submit are reachable.
    pub fn booking_unlocked(&self) -> bool {
        !self.settings.age_gate || self.adult
    }

    pub fn can_submit(&self) -> bool {
        self.booking_unlocked()
    }

    pub fn is_editable(&self, field: Field) -> bool {
        match field {
            Field::VisitType => self.booking_unlocked(),
            Field::Datetime => {
                self.booking_unlocked() && self.data.appointment_type == AppointmentType::Booked
            }
            Field::AppointmentType | Field::FirstName | Field::LastName | Field::Dob => true,
        }
    }

    // ── Edits ──────────────────────────────────────────────────────────────────

    pub fn set_appointment_type(&mut self, kind: AppointmentType, now: DateTime) {
        if self.data.appointment_type == kind {
            return;
        }
        self.data.appointment_type = kind;
        self.touch(Field::AppointmentType);
        if kind == AppointmentType::WalkIn {
            self.enter_walk_in(now);
        }
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.data.first_name = value.into();
        self.touch(Field::FirstName);
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.data.last_name = value.into();
        self.touch(Field::LastName);
    }

    /// Update the date of birth and re-derive the adult flag against `today`.
    pub fn set_dob(&mut self, value: impl Into<String>, today: Date) {
        self.data.dob = value.into();
        self.touch(Field::Dob);
        self.adult = utils::parse_date(&self.data.dob).is_some_and(|dob| age::is_adult(dob, today));
        self.mark_underage();
    }

    pub fn set_visit_type(&mut self, visit: VisitType) -> Result<()> {
        self.ensure_editable(Field::VisitType)?;
        self.data.visit_type = visit;
        self.touch(Field::VisitType);
        Ok(())
    }

    /// Only allowed for booked appointments; walk-in time comes from the clock.
    pub fn set_datetime(&mut self, value: impl Into<String>) -> Result<()> {
        self.ensure_editable(Field::Datetime)?;
        self.data.datetime = value.into();
        self.touch(Field::Datetime);
        Ok(())
    }

    /// Feed a clock reading from the walk-in timer. Returns whether it was
    /// applied; readings from a previous walk-in epoch, or arriving when no
    /// live clock is wanted, are dropped.
    pub fn apply_tick(&mut self, epoch: u64, now: DateTime) -> bool {
        if !self.needs_live_clock() || epoch != self.clock_epoch {
            return false;
        }
        self.stamp(now);
        true
    }

    // ── Submit ─────────────────────────────────────────────────────────────────

    pub fn submit(&mut self) -> SubmitOutcome {
        match self.validate() {
            Err(errors) => {
                log::info!(
                    "submission rejected: {:?}",
                    errors.fields().map(Field::name).collect::<Vec<_>>()
                );
                self.errors = errors.clone();
                self.mark_underage();
                self.phase = FormPhase::Rejected;
                SubmitOutcome::Rejected(errors)
            }
            Ok(_) if !self.booking_unlocked() => {
                log::info!("submission blocked: applicant is under {}", age::ADULT_AGE);
                self.phase = FormPhase::Blocked;
                SubmitOutcome::Blocked
            }
            Ok(snapshot) => {
                self.errors = ValidationErrors::default();
                self.phase = FormPhase::Submitted;
                SubmitOutcome::Submitted(snapshot)
            }
        }
    }

    /// Run every rule independently and either build the typed snapshot or
    /// return the full error set.
    fn validate(&self) -> std::result::Result<AppointmentSnapshot, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.data.first_name.is_empty() {
            errors.insert(Field::FirstName, FIRST_NAME_REQUIRED);
        }
        if self.data.last_name.is_empty() {
            errors.insert(Field::LastName, LAST_NAME_REQUIRED);
        }
        let dob = required(
            &mut errors,
            Field::Dob,
            &self.data.dob,
            utils::parse_date,
            (DOB_REQUIRED, DOB_MALFORMED),
        );
        let datetime = required(
            &mut errors,
            Field::Datetime,
            &self.data.datetime,
            utils::parse_datetime,
            (DATETIME_REQUIRED, DATETIME_MALFORMED),
        );

        match (dob, datetime) {
            (Some(dob), Some(datetime)) if errors.is_empty() => Ok(AppointmentSnapshot {
                appointment_type: self.data.appointment_type,
                first_name: self.data.first_name.clone(),
                last_name: self.data.last_name.clone(),
                dob,
                visit_type: self.data.visit_type,
                datetime,
            }),
            _ => Err(errors),
        }
    }

    // ── Internals ──────────────────────────────────────────────────────────────

    fn touch(&mut self, field: Field) {
        self.errors.clear(field);
        self.phase = FormPhase::Editing;
    }

    fn ensure_editable(&self, field: Field) -> Result<()> {
        if self.is_editable(field) {
            Ok(())
        } else {
            Err(AppError::FieldLocked(field))
        }
    }

    fn enter_walk_in(&mut self, now: DateTime) {
        self.clock_epoch += 1;
        self.stamp(now);
    }

    fn stamp(&mut self, now: DateTime) {
        self.data.datetime = utils::format_datetime_value(now);
        self.clock_display = utils::format_clock_display(now);
        self.errors.clear(Field::Datetime);
    }

    /// Put the under-age message on `dob` when the gate is closed by a real,
    /// parseable date. It replaces whatever `dob` error was there.
    fn mark_underage(&mut self) {
        if self.settings.age_gate && !self.adult && utils::parse_date(&self.data.dob).is_some() {
            self.errors.insert(Field::Dob, DOB_UNDERAGE);
        }
    }
}

/// Presence rule plus format rule for a parsed field.
fn required<T>(
    errors: &mut ValidationErrors,
    field: Field,
    raw: &str,
    parse: fn(&str) -> Option<T>,
    (missing, malformed): (&'static str, &'static str),
) -> Option<T> {
    if raw.is_empty() {
        errors.insert(field, missing);
        return None;
    }
    let parsed = parse(raw);
    if parsed.is_none() {
        errors.insert(field, malformed);
    }
    parsed
}
