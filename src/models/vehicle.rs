use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Per-installation vehicle data ("veiculoConfig").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    #[serde(rename = "modelo", default)]
    pub model: String,

    #[serde(rename = "ano", default)]
    pub year: i32,

    /// km per liter
    #[serde(rename = "consumoMedio")]
    pub avg_efficiency_km_l: f64,

    #[serde(rename = "precoGasolina")]
    pub fuel_price_per_liter: f64,

    /// Yearly vehicle tax (IPVA).
    #[serde(rename = "valorIPVA", default)]
    pub annual_vehicle_tax: f64,

    #[serde(rename = "gastoManutencao", default)]
    pub annual_maintenance_cost: f64,
}

impl VehicleProfile {
    /// Reject values that would make derived costs meaningless.
    pub fn validate(&self) -> AppResult<()> {
        if !self.avg_efficiency_km_l.is_finite() || self.avg_efficiency_km_l <= 0.0 {
            return Err(AppError::InvalidVehicle(format!(
                "average efficiency must be greater than zero (got {})",
                self.avg_efficiency_km_l
            )));
        }

        let amounts = [
            ("fuel price", self.fuel_price_per_liter),
            ("annual vehicle tax", self.annual_vehicle_tax),
            ("annual maintenance cost", self.annual_maintenance_cost),
        ];
        for (label, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::InvalidVehicle(format!(
                    "{label} must be zero or positive (got {value})"
                )));
            }
        }

        Ok(())
    }
}
