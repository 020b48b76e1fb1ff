use crate::cli::commands::{load_profile, load_sessions};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::RawSession;
use crate::core::sessions::SessionLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        hours,
        km,
        trips,
        gross,
    } = cmd
    {
        let raw = RawSession {
            date: date.clone(),
            hours_worked: hours.clone().unwrap_or_default(),
            distance_km: km.clone().unwrap_or_default(),
            trip_count: trips.clone().unwrap_or_default(),
            gross_earnings: gross.clone().unwrap_or_default(),
        };

        let pool = DbPool::open_ready(&cfg.database)?;
        let session = pool.with_persistence(|p| {
            load_sessions(&pool, p)?;
            let profile = load_profile(p)?;
            SessionLogic::add(p, &raw, profile.as_ref())
        })?;

        success(format!(
            "Session {} added for {} (fuel cost {}).",
            session.id,
            session.date_str(),
            money(session.fuel_cost, &cfg.currency_symbol)
        ));

        ttlog_quiet(
            &pool.conn,
            "add",
            &session.id,
            &format!(
                "Session added: {} km={} gross={}",
                session.date_str(),
                session.distance_km,
                session.gross_earnings
            ),
        );
    }

    Ok(())
}
