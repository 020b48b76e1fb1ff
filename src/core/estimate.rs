//! "How much do I need to drive?" calculator.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Average trip length assumed when turning distance into a trip count.
pub const AVG_TRIP_KM: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct EstimateInput {
    pub fuel_price_per_liter: f64,
    pub km_per_liter: f64,
    pub daily_goal: f64,
    pub earnings_per_km: f64,
    pub working_days: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyFigures {
    pub km: f64,
    pub liters: f64,
    pub fuel_cost: f64,
    pub trips: f64,
    pub gross: f64,
    pub net: f64,
}

impl DailyFigures {
    fn times(&self, days: f64) -> Self {
        Self {
            km: self.km * days,
            liters: self.liters * days,
            fuel_cost: self.fuel_cost * days,
            trips: self.trips * days,
            gross: self.gross * days,
            net: self.net * days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub daily: DailyFigures,
    pub period: DailyFigures,
}

pub struct EstimateLogic;

impl EstimateLogic {
    pub fn compute(input: &EstimateInput) -> AppResult<Estimate> {
        validate(input)?;

        let km = input.daily_goal / input.earnings_per_km;
        let liters = km / input.km_per_liter;
        let fuel_cost = liters * input.fuel_price_per_liter;
        let trips = (km / AVG_TRIP_KM).ceil();
        let gross = km * input.earnings_per_km;

        let daily = DailyFigures {
            km,
            liters,
            fuel_cost,
            trips,
            gross,
            net: gross - fuel_cost,
        };

        Ok(Estimate {
            daily,
            period: daily.times(input.working_days as f64),
        })
    }
}

fn validate(input: &EstimateInput) -> AppResult<()> {
    let positive = [
        ("value per km", input.earnings_per_km),
        ("km per liter", input.km_per_liter),
    ];
    for (label, v) in positive {
        if !v.is_finite() || v <= 0.0 {
            return Err(AppError::InvalidEstimate(format!(
                "{label} must be greater than zero"
            )));
        }
    }

    let non_negative = [
        ("fuel price", input.fuel_price_per_liter),
        ("daily goal", input.daily_goal),
    ];
    for (label, v) in non_negative {
        if !v.is_finite() || v < 0.0 {
            return Err(AppError::InvalidEstimate(format!(
                "{label} must be zero or positive"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> EstimateInput {
        EstimateInput {
            fuel_price_per_liter: 5.0,
            km_per_liter: 10.0,
            daily_goal: 200.0,
            earnings_per_km: 2.0,
            working_days: 5,
        }
    }

    #[test]
    fn daily_and_period_figures() {
        let e = EstimateLogic::compute(&input()).unwrap();

        assert!((e.daily.km - 100.0).abs() < 1e-9);
        assert!((e.daily.liters - 10.0).abs() < 1e-9);
        assert!((e.daily.fuel_cost - 50.0).abs() < 1e-9);
        assert_eq!(e.daily.trips, 10.0);
        assert!((e.daily.gross - 200.0).abs() < 1e-9);
        assert!((e.daily.net - 150.0).abs() < 1e-9);

        assert!((e.period.km - 500.0).abs() < 1e-9);
        assert_eq!(e.period.trips, 50.0);
        assert!((e.period.net - 750.0).abs() < 1e-9);
    }

    #[test]
    fn trips_round_up() {
        let mut i = input();
        i.daily_goal = 205.0; // 102.5 km
        let e = EstimateLogic::compute(&i).unwrap();
        assert_eq!(e.daily.trips, 11.0);
    }

    #[test]
    fn zero_value_per_km_is_rejected() {
        let mut i = input();
        i.earnings_per_km = 0.0;
        assert!(matches!(
            EstimateLogic::compute(&i),
            Err(AppError::InvalidEstimate(_))
        ));
    }
}
