//! Earnings/cost aggregation over a set of sessions.

use crate::models::session::WorkSession;
use crate::models::summary::FinancialSummary;
use crate::models::vehicle::VehicleProfile;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Number of days the fixed yearly costs are prorated over.
///
/// The record count stands in for elapsed days, floored at 1 so that an
/// empty selection still carries one day of fixed costs.
pub fn day_proxy(record_count: usize) -> f64 {
    record_count.max(1) as f64
}

/// Share of a yearly amount for `days` days.
pub fn prorate(annual: f64, days: f64) -> f64 {
    annual / DAYS_PER_YEAR * days
}

/// Sum the stored per-session values and prorate the profile's yearly costs.
/// Fuel cost is taken as stored, never recomputed here.
pub fn summarize(sessions: &[WorkSession], profile: Option<&VehicleProfile>) -> FinancialSummary {
    let gross_earnings: f64 = sessions.iter().map(|s| s.gross_earnings).sum();
    let fuel_cost: f64 = sessions.iter().map(|s| s.fuel_cost).sum();

    let days = day_proxy(sessions.len());
    let (maintenance_cost, vehicle_tax_cost) = match profile {
        Some(p) => (
            prorate(p.annual_maintenance_cost, days),
            prorate(p.annual_vehicle_tax, days),
        ),
        None => (0.0, 0.0),
    };

    let other_costs = maintenance_cost + vehicle_tax_cost;
    let net_earnings = gross_earnings - fuel_cost - maintenance_cost - vehicle_tax_cost;

    FinancialSummary {
        gross_earnings,
        net_earnings,
        fuel_cost,
        maintenance_cost,
        vehicle_tax_cost,
        other_costs,
    }
}
