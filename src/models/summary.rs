use serde::Serialize;

/// Aggregated earnings and costs for a set of sessions. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub gross_earnings: f64,
    pub net_earnings: f64,
    pub fuel_cost: f64,
    pub maintenance_cost: f64,
    pub vehicle_tax_cost: f64,
    /// maintenance + vehicle tax
    pub other_costs: f64,
}
