//! Vacation day math
//!
//! Day counts are calendar subtraction inclusive of both endpoints, so a
//! single-day leave counts as 1. The annual accrual constants double as
//! the checkbox-driven default for the accumulated-days field.

use chrono::NaiveDate;

use super::FieldSink;
use crate::error::VacationError;

/// Annual accrual for a long-service employee.
pub const LONG_SERVICE_ACCRUAL_DAYS: i64 = 20;

/// Annual accrual for everyone else.
pub const STANDARD_ACCRUAL_DAYS: i64 = 15;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days a long-service or standard employee accrues per year of service.
pub fn annual_accrual(long_service: bool) -> i64 {
    if long_service {
        LONG_SERVICE_ACCRUAL_DAYS
    } else {
        STANDARD_ACCRUAL_DAYS
    }
}

/// Inclusive day count for a leave range.
///
/// `start == end` counts as one day. A range whose end precedes its start
/// has no count.
pub fn days_taken(start: NaiveDate, end: NaiveDate) -> Option<i64> {
    if end < start {
        return None;
    }
    Some((end - start).num_days() + 1)
}

/// Outcome of a granted vacation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationGrant {
    pub days_taken: i64,
    pub remaining_balance: i64,
}

/// Validate a vacation request against the accumulated balance.
///
/// Refusal messages are the exact strings the portal surfaces to the user.
pub fn evaluate_vacation_request(
    start: NaiveDate,
    end: NaiveDate,
    accumulated_days: i64,
) -> Result<VacationGrant, VacationError> {
    let requested = days_taken(start, end).ok_or(VacationError::StartAfterEnd)?;

    if requested > accumulated_days {
        return Err(VacationError::InsufficientDays {
            requested,
            available: accumulated_days,
        });
    }

    Ok(VacationGrant {
        days_taken: requested,
        remaining_balance: accumulated_days - requested,
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Recompute the days-taken field from the raw date range fields.
///
/// Either date unparsable, or end before start, clears the field.
pub fn update_days_taken(raw_start: &str, raw_end: &str, sink: &mut dyn FieldSink) {
    let count = match (parse_date(raw_start), parse_date(raw_end)) {
        (Some(start), Some(end)) => days_taken(start, end),
        _ => None,
    };

    match count {
        Some(days) => sink.set_text(&days.to_string()),
        None => sink.clear(),
    }
}

/// Reset the accumulated-days field to the default for the eligibility
/// checkbox state.
pub fn update_accumulated_days(long_service: bool, sink: &mut dyn FieldSink) {
    sink.set_text(&annual_accrual(long_service).to_string());
}
