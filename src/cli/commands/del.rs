use crate::cli::commands::load_sessions;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sessions::SessionLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;

        let removed = pool.with_persistence(|p| {
            let sessions = load_sessions(&pool, p)?;
            let Some(target) = sessions.iter().find(|s| &s.id == id) else {
                return Err(AppError::SessionNotFound(id.clone()));
            };

            let prompt = format!(
                "Delete session {} of {}? This action is irreversible.",
                target.id,
                target.date_str()
            );
            if !*yes && !ask_confirmation(&prompt) {
                return Ok(None);
            }

            SessionLogic::delete(p, id).map(Some)
        })?;

        match removed {
            Some(s) => {
                success(format!("Session {} of {} has been deleted.", s.id, s.date_str()));
                ttlog_quiet(
                    &pool.conn,
                    "del",
                    &s.id,
                    &format!("Session deleted: {}", s.date_str()),
                );
            }
            None => info("Operation cancelled."),
        }
    }

    Ok(())
}
