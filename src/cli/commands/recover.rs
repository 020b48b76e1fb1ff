use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recover::RecoverLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recover { email } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let report = pool.with_persistence(RecoverLogic::scan)?;

        for key in &report.unreadable {
            warning(format!("Key '{key}' does not hold a session list, skipped."));
        }

        if report.sessions.is_empty() {
            info("No sessions found in stored keys.");
            return Ok(());
        }

        header("Recovered sessions");
        for (key, count) in &report.sources {
            println!("  {key}: {count} record(s)");
        }
        println!();
        for s in &report.sessions {
            println!(
                "  {}  {}  {}",
                s.id,
                s.date_str(),
                money(s.gross_earnings, &cfg.currency_symbol)
            );
        }
        info(format!("{} unique session(s) found.", report.sessions.len()));

        if let Some(email) = email {
            let restored =
                pool.with_persistence(|p| RecoverLogic::restore(p, &report.sessions, email))?;

            success(format!(
                "{} session(s) restored to {} ({} in total).",
                restored.added, restored.user.name, restored.total
            ));
            ttlog_quiet(
                &pool.conn,
                "recover",
                &restored.user.id,
                &format!(
                    "Restored {} session(s) for {}",
                    restored.added, restored.user.email
                ),
            );
        }
    }

    Ok(())
}
