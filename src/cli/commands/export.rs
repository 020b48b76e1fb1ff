use crate::cli::commands::load_sessions;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;
        let sessions = pool.with_persistence(|p| load_sessions(&pool, p))?;
        let rows = ExportLogic::export(&sessions, *format, file, range.as_deref(), *force)?;

        if rows > 0 {
            ttlog_quiet(
                &pool.conn,
                "export",
                file,
                &format!("{} export of {} session(s)", format.as_str(), rows),
            );
        }
    }
    Ok(())
}
