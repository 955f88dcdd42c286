//! Agenda selection for the Crop Monitoring working meeting.
//!
//! An [`AgendaTable`] maps each [`DayId`] to a static markup fragment. An
//! [`AgendaSelector`] drives a [`Host`] (anything owning one control per day
//! and a display region) so that the display always holds the fragment of
//! the active day and exactly one control is marked active.

mod day;
mod error;
mod selector;
mod table;

pub use day::DayId;
pub use error::{Error, Result};
pub use selector::{AgendaSelector, Event, Host};
pub use table::AgendaTable;
