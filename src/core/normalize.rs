//! Raw form input → well-typed [`WorkSession`].

use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::models::vehicle::VehicleProfile;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use uuid::Uuid;

/// Fields as typed by the user. Numbers are text on purpose: anything that
/// does not parse falls back to zero instead of rejecting the save.
#[derive(Debug, Clone, Default)]
pub struct RawSession {
    pub date: String,
    pub hours_worked: String,
    pub distance_km: String,
    pub trip_count: String,
    pub gross_earnings: String,
}

impl RawSession {
    /// Pre-fill from a stored record, as the edit form does.
    pub fn from_session(s: &WorkSession) -> Self {
        Self {
            date: s.date.clone(),
            hours_worked: s.hours_worked.to_string(),
            distance_km: s.distance_km.to_string(),
            trip_count: s.trip_count.to_string(),
            gross_earnings: s.gross_earnings.to_string(),
        }
    }
}

/// Fuel spent to drive `distance_km` with the given profile.
/// Zero without a profile or with an unusable efficiency.
pub fn fuel_cost(distance_km: f64, profile: Option<&VehicleProfile>) -> f64 {
    let Some(p) = profile else {
        return 0.0;
    };
    if !p.avg_efficiency_km_l.is_finite() || p.avg_efficiency_km_l <= 0.0 {
        return 0.0;
    }
    let liters = distance_km / p.avg_efficiency_km_l;
    liters * p.fuel_price_per_liter
}

/// Non-negative real, zero for anything unparsable.
pub fn coerce_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

/// Non-negative integer count; fractional input is truncated.
pub fn coerce_count(raw: &str) -> u32 {
    let v = coerce_amount(raw).trunc();
    if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        v as u32
    }
}

/// Accepts `YYYY-MM-DD` (UTC midnight) or a full RFC 3339 timestamp.
pub fn parse_session_date(raw: &str) -> AppResult<DateTime<Utc>> {
    let s = raw.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| AppError::InvalidDate(raw.to_string()));
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidDate(raw.to_string()))
}

/// Canonical stored form, e.g. `2025-06-01T00:00:00.000Z`.
pub fn format_session_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Build the record to store.
///
/// `existing_id` is `Some` when editing; the id is then kept as-is. The
/// fuel cost is always derived here from the current profile.
pub fn normalize(
    raw: &RawSession,
    profile: Option<&VehicleProfile>,
    existing_id: Option<&str>,
) -> AppResult<WorkSession> {
    let date = parse_session_date(&raw.date)?;
    let distance_km = coerce_amount(&raw.distance_km);

    Ok(WorkSession {
        id: existing_id
            .map(str::to_string)
            .unwrap_or_else(new_session_id),
        date: format_session_date(&date),
        hours_worked: coerce_amount(&raw.hours_worked),
        distance_km,
        fuel_cost: fuel_cost(distance_km, profile),
        trip_count: coerce_count(&raw.trip_count),
        gross_earnings: coerce_amount(&raw.gross_earnings),
    })
}
