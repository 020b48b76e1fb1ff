use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::estimate::{EstimateInput, EstimateLogic};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{km, money};
use crate::utils::table::{Column, Table};

/// Pure calculation: no database access.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Estimate {
        price,
        efficiency,
        goal,
        per_km,
        days,
    } = cmd
    {
        let input = EstimateInput {
            fuel_price_per_liter: *price,
            km_per_liter: *efficiency,
            daily_goal: *goal,
            earnings_per_km: *per_km,
            working_days: *days,
        };
        let est = EstimateLogic::compute(&input)?;
        let cur = &cfg.currency_symbol;

        let mut table = Table::new(
            vec![
                Column::left(""),
                Column::right("Per day"),
                Column::right(&format!("{} day(s)", days)),
            ],
            cfg.separator(),
        );
        let (d, p) = (&est.daily, &est.period);
        table.add_row(vec!["Distance".into(), km(d.km), km(p.km)]);
        table.add_row(vec![
            "Fuel".into(),
            format!("{:.1} l", d.liters),
            format!("{:.1} l", p.liters),
        ]);
        table.add_row(vec![
            "Fuel cost".into(),
            money(d.fuel_cost, cur),
            money(p.fuel_cost, cur),
        ]);
        table.add_row(vec![
            "Trips".into(),
            format!("{:.0}", d.trips),
            format!("{:.0}", p.trips),
        ]);
        table.add_row(vec!["Gross".into(), money(d.gross, cur), money(p.gross, cur)]);
        table.add_row(vec!["Net".into(), money(d.net, cur), money(p.net, cur)]);

        header("Estimate");
        print!("{}", table.render());
    }

    Ok(())
}
