//! Dashboard chart data and its terminal rendering.

use crate::core::period::{filter_by_period, sort_by_date};
use crate::models::chart::{ChartData, Dataset};
use crate::models::period::Period;
use crate::models::session::WorkSession;
use crate::models::summary::FinancialSummary;
use crate::utils::formatting::{money, pad_right};
use chrono::{DateTime, Datelike, TimeZone};

/// Gross earnings per session over the last month, oldest first, labelled `d/m`.
pub fn earnings_series<Tz: TimeZone>(sessions: &[WorkSession], now: &DateTime<Tz>) -> ChartData {
    let mut recent = filter_by_period(sessions, Period::LastMonth, now).sessions;
    sort_by_date(&mut recent);

    let mut labels = Vec::with_capacity(recent.len());
    let mut data = Vec::with_capacity(recent.len());

    for s in &recent {
        if let Some(ts) = s.timestamp() {
            let day = ts.naive_utc().date();
            labels.push(format!("{}/{}", day.day(), day.month()));
            data.push(s.gross_earnings);
        }
    }

    ChartData {
        labels,
        datasets: vec![Dataset {
            label: "Gross earnings".into(),
            data,
        }],
    }
}

/// Fuel / maintenance / vehicle tax split of a summary.
pub fn cost_breakdown(summary: &FinancialSummary) -> ChartData {
    ChartData {
        labels: vec!["Fuel".into(), "Maintenance".into(), "Vehicle tax".into()],
        datasets: vec![Dataset {
            label: "Costs".into(),
            data: vec![
                summary.fuel_cost,
                summary.maintenance_cost,
                summary.vehicle_tax_cost,
            ],
        }],
    }
}

/// Horizontal bars for the first dataset, scaled to `width` columns.
pub fn render_bars(chart: &ChartData, width: usize, currency: &str) -> String {
    let Some(dataset) = chart.datasets.first() else {
        return String::new();
    };

    let max = dataset.data.iter().cloned().fold(0.0_f64, f64::max);
    let label_w = chart.labels.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (label, value) in chart.labels.iter().zip(&dataset.data) {
        let len = if max > 0.0 && *value > 0.0 {
            ((value / max) * width as f64).round().max(1.0) as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{} │{} {}\n",
            pad_right(label, label_w),
            "█".repeat(len),
            money(*value, currency)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session(id: &str, date: &str, gross: f64) -> WorkSession {
        WorkSession {
            id: id.into(),
            date: date.into(),
            hours_worked: 7.0,
            distance_km: 90.0,
            fuel_cost: 35.0,
            trip_count: 11,
            gross_earnings: gross,
        }
    }

    #[test]
    fn series_is_sorted_and_limited_to_last_month() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let sessions = vec![
            session("b", "2025-06-12T00:00:00.000Z", 220.0),
            session("old", "2025-01-02T00:00:00.000Z", 999.0),
            session("a", "2025-06-03T00:00:00.000Z", 150.0),
        ];

        let chart = earnings_series(&sessions, &now);

        assert_eq!(chart.labels, vec!["3/6", "12/6"]);
        assert_eq!(chart.datasets[0].data, vec![150.0, 220.0]);
    }

    #[test]
    fn breakdown_follows_summary() {
        let summary = FinancialSummary {
            gross_earnings: 500.0,
            net_earnings: 380.0,
            fuel_cost: 100.0,
            maintenance_cost: 15.0,
            vehicle_tax_cost: 5.0,
            other_costs: 20.0,
        };
        let chart = cost_breakdown(&summary);
        assert_eq!(chart.datasets[0].data, vec![100.0, 15.0, 5.0]);
        assert_eq!(chart.labels.len(), 3);
    }

    #[test]
    fn bars_scale_to_the_largest_value() {
        let chart = ChartData {
            labels: vec!["Fuel".into(), "Tax".into()],
            datasets: vec![Dataset {
                label: "Costs".into(),
                data: vec![100.0, 50.0],
            }],
        };
        let out = render_bars(&chart, 10, "R$");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].matches('█').count(), 10);
        assert_eq!(lines[1].matches('█').count(), 5);
    }
}
