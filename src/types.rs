//! Shared data-model types for the appointment form.
//!
//! # Field representation
//!
//! Every free-text input is kept exactly as typed (`String`) in [`FormData`],
//! so a half-typed date never loses characters between frames. Typed values
//! only appear in [`AppointmentSnapshot`], which is built by a successful
//! validation pass:
//!
//! * **`dob`** — `jiff::civil::Date`, parsed from `YYYY-MM-DD`.
//! * **`datetime`** — `jiff::civil::DateTime` in local wall-clock time, parsed
//!   from `YYYY-MM-DDTHH:MM`.

use jiff::civil::{Date, DateTime};
use serde::{Deserialize, Serialize};

// ── Choice fields ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentType {
    /// The system supplies the appointment time.
    #[default]
    #[serde(rename = "walkin")]
    WalkIn,
    Booked,
}

impl AppointmentType {
    pub const ALL: [Self; 2] = [Self::WalkIn, Self::Booked];

    pub fn label(self) -> &'static str {
        match self {
            Self::WalkIn => "Walk-in",
            Self::Booked => "Booked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitType {
    #[default]
    Consultation,
    #[serde(rename = "followup")]
    FollowUp,
    Emergency,
}

impl VisitType {
    pub const ALL: [Self; 3] = [Self::Consultation, Self::FollowUp, Self::Emergency];

    pub fn label(self) -> &'static str {
        match self {
            Self::Consultation => "Consultation",
            Self::FollowUp => "Follow-up",
            Self::Emergency => "Emergency",
        }
    }
}

// ── Field identifiers ──────────────────────────────────────────────────────────

/// Names a form input. Ordered the way the form renders them, which is also
/// the order validation errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    AppointmentType,
    FirstName,
    LastName,
    Dob,
    VisitType,
    Datetime,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::AppointmentType => "appointmentType",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Dob => "dob",
            Self::VisitType => "visitType",
            Self::Datetime => "datetime",
        }
    }
}

// ── Form records ───────────────────────────────────────────────────────────────

/// Raw, editable form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub appointment_type: AppointmentType,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub visit_type: VisitType,
    pub datetime: String,
}

/// A complete, validated booking: what gets handed off on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSnapshot {
    pub appointment_type: AppointmentType,
    pub first_name: String,
    pub last_name: String,
    pub dob: Date,
    pub visit_type: VisitType,
    pub datetime: DateTime,
}

impl AppointmentSnapshot {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
