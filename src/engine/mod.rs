//! Engine sub-modules: color cycling, age gating, and the appointment form.

pub mod age;
pub mod form;
pub mod palette;
