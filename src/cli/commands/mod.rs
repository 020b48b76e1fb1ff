pub mod add;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod del;
pub mod edit;
pub mod estimate;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod recover;
pub mod vehicle;

use crate::core::sessions::SessionLogic;
use crate::core::vehicle::VehicleLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::WorkSession;
use crate::models::vehicle::VehicleProfile;
use crate::store::{Persistence, SESSIONS_KEY};
use crate::ui::messages::{missing_vehicle_warning, warning};

/// Current vehicle profile. Warns when it is missing or unreadable.
pub(crate) fn load_profile(p: Persistence<'_>) -> AppResult<Option<VehicleProfile>> {
    let loaded = VehicleLogic::load(p)?;
    if let Some(reason) = &loaded.problem {
        warning(format!("Stored vehicle profile is unreadable: {reason}"));
    }
    if loaded.value.is_none() {
        missing_vehicle_warning();
    }
    Ok(loaded.value)
}

/// All readable stored sessions. A collection that is not a list is reset,
/// reported once and logged; single unreadable entries are reported and
/// left in storage.
pub(crate) fn load_sessions(pool: &DbPool, p: Persistence<'_>) -> AppResult<Vec<WorkSession>> {
    let loaded = SessionLogic::load_all(p)?;
    if let Some(reason) = &loaded.problem {
        warning(format!(
            "Stored sessions were unreadable and have been reset: {reason}"
        ));
        ttlog_quiet(&pool.conn, "reset", SESSIONS_KEY, "Unreadable sessions reset to []");
    }

    let rejected = &loaded.value.rejected;
    if !rejected.is_empty() {
        let labels: Vec<String> = rejected.iter().enumerate().map(|(i, r)| r.label(i)).collect();
        warning(format!(
            "{} stored record(s) could not be read and were left untouched: {}",
            rejected.len(),
            labels.join(", ")
        ));
    }

    Ok(loaded.value.items)
}

/// Warn about records skipped because their date could not be read.
pub(crate) fn report_unreadable(ids: &[String]) {
    if !ids.is_empty() {
        warning(format!(
            "{} session(s) skipped because of an unreadable date: {}",
            ids.len(),
            ids.join(", ")
        ));
    }
}
