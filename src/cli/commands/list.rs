use crate::cli::commands::{load_sessions, report_unreadable};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period::{Selection, filter_by_dates, filter_by_period, sort_by_date};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::WorkSession;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_amount, colorize_net};
use crate::utils::date::parse_range;
use crate::utils::formatting::{hours, km, money};
use crate::utils::table::{Column, Table};

fn render(sessions: &[WorkSession], cfg: &Config) -> String {
    let cur = &cfg.currency_symbol;
    let mut table = Table::new(
        vec![
            Column::left("ID"),
            Column::left("Date"),
            Column::right("Hours"),
            Column::right("Distance"),
            Column::right("Trips"),
            Column::right("Fuel"),
            Column::right("Gross"),
            Column::right("Gross - fuel"),
        ],
        cfg.separator(),
    );

    for s in sessions {
        let margin = s.gross_earnings - s.fuel_cost;
        table.add_row(vec![
            s.id.clone(),
            s.date_str(),
            hours(s.hours_worked),
            km(s.distance_km),
            s.trip_count.to_string(),
            money(s.fuel_cost, cur),
            money(s.gross_earnings, cur),
            money(margin, cur),
        ]);
    }

    let mut out = table.render();

    let gross: f64 = sessions.iter().map(|s| s.gross_earnings).sum();
    let fuel: f64 = sessions.iter().map(|s| s.fuel_cost).sum();
    out.push_str(&format!(
        "\n{} session(s)  gross {}  fuel {}  gross - fuel {}\n",
        sessions.len(),
        money(gross, cur),
        colorize_amount(&money(fuel, cur), fuel),
        colorize_net(&money(gross - fuel, cur), gross - fuel)
    ));
    out
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, range } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let all = pool.with_persistence(|p| load_sessions(&pool, p))?;

        let (title, selection) = match range.as_deref() {
            Some(r) if r.eq_ignore_ascii_case("all") => {
                ("All sessions".to_string(), filter_by_dates(&all, None, None))
            }
            Some(r) => {
                let (from, to) = parse_range(r)?;
                (format!("Sessions in {r}"), filter_by_dates(&all, from, to))
            }
            None => {
                let period = period.unwrap_or(cfg.default_period);
                (
                    format!("Sessions: {}", period.label()),
                    filter_by_period(&all, period, &chrono::Local::now()),
                )
            }
        };

        let Selection {
            mut sessions,
            unreadable,
        } = selection;

        report_unreadable(&unreadable);

        if sessions.is_empty() {
            info("No sessions found for selected period.");
            return Ok(());
        }

        sort_by_date(&mut sessions);

        header(title);
        print!("{}", render(&sessions, cfg));
    }

    Ok(())
}
