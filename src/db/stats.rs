use crate::core::vehicle::VehicleLogic;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::store::{Collection, KeyValueStore, SESSIONS_KEY};
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) KEYS
    //
    let store = pool.store();
    let keys = store.keys()?;
    println!("{}• Stored keys:{} {}", CYAN, RESET, keys.join(", "));

    //
    // 3) SESSIONS + DATE RANGE
    //
    // Plain loads: `db --info` must never rewrite a corrupt blob.
    let loaded: Option<Collection<WorkSession>> =
        match pool.with_persistence(|p| p.load_collection(SESSIONS_KEY)) {
            Ok(c) => Some(c),
            Err(AppError::CorruptData { .. }) => None,
            Err(e) => return Err(e),
        };

    match &loaded {
        Some(c) if c.rejected.is_empty() => {
            println!("{}• Sessions:{} {}{}{}", CYAN, RESET, GREEN, c.items.len(), RESET)
        }
        Some(c) => println!(
            "{}• Sessions:{} {}{}{} ({}{} unreadable{})",
            CYAN,
            RESET,
            GREEN,
            c.items.len(),
            RESET,
            RED,
            c.rejected.len(),
            RESET
        ),
        None => println!("{}• Sessions:{} {}unreadable{}", CYAN, RESET, RED, RESET),
    }
    let sessions = loaded.map(|c| c.items).unwrap_or_default();

    let mut dates: Vec<String> = sessions
        .iter()
        .filter(|s| s.timestamp().is_some())
        .map(|s| s.date_str())
        .collect();
    dates.sort();

    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => {
            println!("{}• Date range:{} {} → {}", CYAN, RESET, first, last)
        }
        _ => println!("{}• Date range:{} {}none{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 4) VEHICLE
    //
    let vehicle = pool.with_persistence(|p| Ok(VehicleLogic::load(p)?.value))?;
    match vehicle {
        Some(v) => println!(
            "{}• Vehicle:{} {} ({})",
            CYAN, RESET, v.model, v.year
        ),
        None => println!("{}• Vehicle:{} {}not configured{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 5) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Schema:{} {}",
        CYAN,
        RESET,
        versions.last().map(String::as_str).unwrap_or("unknown")
    );

    println!();
    Ok(())
}
