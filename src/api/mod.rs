//! API handlers for GearKeep REST endpoints

pub mod equipment;
pub mod health;
pub mod openapi;
pub mod reporting;
pub mod requests;
pub mod teams;
pub mod work_centers;

use chrono::NaiveDate;

/// Current date at the presentation boundary.
///
/// The engines take the date as an explicit parameter; the wall clock is
/// read only here, so engine behavior stays testable with injected dates.
pub(crate) fn current_date() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
