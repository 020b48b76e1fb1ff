// src/export/model.rs

use crate::models::session::WorkSession;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: String,
    pub date: String,
    pub hours_worked: f64,
    pub distance_km: f64,
    pub fuel_cost: f64,
    pub trip_count: u32,
    pub gross_earnings: f64,
    /// gross minus fuel, per session
    pub after_fuel: f64,
}

impl From<&WorkSession> for SessionExport {
    fn from(s: &WorkSession) -> Self {
        Self {
            id: s.id.clone(),
            date: s.date_str(),
            hours_worked: s.hours_worked,
            distance_km: s.distance_km,
            fuel_cost: round2(s.fuel_cost),
            trip_count: s.trip_count,
            gross_earnings: s.gross_earnings,
            after_fuel: round2(s.gross_earnings - s.fuel_cost),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
