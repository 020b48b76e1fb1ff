use crate::cli::commands::{load_profile, load_sessions, report_unreadable};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{cost_breakdown, earnings_series, render_bars};
use crate::core::period::filter_by_period;
use crate::core::summary::summarize;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::summary::FinancialSummary;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_net;
use crate::utils::formatting::{money, pad_left, pad_right};

fn print_cards(s: &FinancialSummary, cur: &str, records: usize) {
    let cards = [
        ("Gross earnings", money(s.gross_earnings, cur)),
        ("Fuel", money(s.fuel_cost, cur)),
        ("Maintenance", money(s.maintenance_cost, cur)),
        ("Vehicle tax", money(s.vehicle_tax_cost, cur)),
        ("Other costs", money(s.other_costs, cur)),
    ];
    let value_w = cards
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(money(s.net_earnings, cur).chars().count()))
        .max()
        .unwrap_or(0);

    println!("{} {}", pad_right("Sessions", 16), pad_left(&records.to_string(), value_w));
    for (label, value) in &cards {
        println!("{} {}", pad_right(label, 16), pad_left(value, value_w));
    }
    let net = money(s.net_earnings, cur);
    println!(
        "{} {}",
        pad_right("Net earnings", 16),
        colorize_net(&pad_left(&net, value_w), s.net_earnings)
    );
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { period } = cmd {
        let period = period.unwrap_or(cfg.default_period);
        let now = chrono::Local::now();

        let pool = DbPool::open_ready(&cfg.database)?;
        let (all, profile) =
            pool.with_persistence(|p| Ok((load_sessions(&pool, p)?, load_profile(p)?)))?;

        let selection = filter_by_period(&all, period, &now);
        report_unreadable(&selection.unreadable);

        let summary = summarize(&selection.sessions, profile.as_ref());

        header(format!("Dashboard: {}", period.label()));
        print_cards(&summary, &cfg.currency_symbol, selection.sessions.len());

        header("Gross earnings, last 30 days");
        let series = earnings_series(&all, &now);
        if series.is_empty() {
            info("No sessions in the last 30 days.");
        } else {
            print!(
                "{}",
                render_bars(&series, cfg.chart_width, &cfg.currency_symbol)
            );
        }

        header(format!("Cost breakdown: {}", period.label()));
        print!(
            "{}",
            render_bars(
                &cost_breakdown(&summary),
                cfg.chart_width,
                &cfg.currency_symbol
            )
        );
    }

    Ok(())
}
