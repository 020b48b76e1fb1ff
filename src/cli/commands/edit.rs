use crate::cli::commands::{load_profile, load_sessions};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sessions::{SessionChanges, SessionLogic};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        hours,
        km,
        trips,
        gross,
    } = cmd
    {
        let changes = SessionChanges {
            date: date.clone(),
            hours_worked: hours.clone(),
            distance_km: km.clone(),
            trip_count: trips.clone(),
            gross_earnings: gross.clone(),
        };

        let pool = DbPool::open_ready(&cfg.database)?;
        let updated = pool.with_persistence(|p| {
            load_sessions(&pool, p)?;
            let profile = load_profile(p)?;
            SessionLogic::edit(p, id, &changes, profile.as_ref())
        })?;

        success(format!(
            "Session {} updated: {} (fuel cost {}).",
            updated.id,
            updated.date_str(),
            money(updated.fuel_cost, &cfg.currency_symbol)
        ));

        ttlog_quiet(
            &pool.conn,
            "edit",
            &updated.id,
            &format!(
                "Session edited: {} km={} gross={}",
                updated.date_str(),
                updated.distance_km,
                updated.gross_earnings
            ),
        );
    }

    Ok(())
}
