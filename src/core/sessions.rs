//! Add / edit / delete / list of work sessions.
//!
//! The whole collection is loaded, changed in memory and written back on
//! every mutation; there is no incremental update. Stored entries that do
//! not decode are carried through untouched.

use crate::core::normalize::{RawSession, normalize};
use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::models::vehicle::VehicleProfile;
use crate::store::{Collection, Loaded, Persistence, SESSIONS_KEY};

/// Optional new values for an edit. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SessionChanges {
    pub date: Option<String>,
    pub hours_worked: Option<String>,
    pub distance_km: Option<String>,
    pub trip_count: Option<String>,
    pub gross_earnings: Option<String>,
}

impl SessionChanges {
    fn apply_to(&self, current: &WorkSession) -> RawSession {
        let base = RawSession::from_session(current);
        RawSession {
            date: self.date.clone().unwrap_or(base.date),
            hours_worked: self.hours_worked.clone().unwrap_or(base.hours_worked),
            distance_km: self.distance_km.clone().unwrap_or(base.distance_km),
            trip_count: self.trip_count.clone().unwrap_or(base.trip_count),
            gross_earnings: self.gross_earnings.clone().unwrap_or(base.gross_earnings),
        }
    }
}

/// Replace the record with the same id in place. Returns false if absent.
pub fn replace_by_id(sessions: &mut [WorkSession], updated: WorkSession) -> bool {
    match sessions.iter_mut().find(|s| s.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove exactly one record with `id`.
pub fn remove_by_id(sessions: &mut Vec<WorkSession>, id: &str) -> Option<WorkSession> {
    let idx = sessions.iter().position(|s| s.id == id)?;
    Some(sessions.remove(idx))
}

pub struct SessionLogic;

impl SessionLogic {
    /// All stored sessions. A value that is not an array is reset to an
    /// empty list; single unreadable entries end up in `rejected`.
    pub fn load_all(p: Persistence<'_>) -> AppResult<Loaded<Collection<WorkSession>>> {
        p.load_collection_or_reset(SESSIONS_KEY)
    }

    pub fn find(p: Persistence<'_>, id: &str) -> AppResult<WorkSession> {
        let loaded = Self::load_all(p)?;
        loaded
            .value
            .items
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
    }

    pub fn add(
        p: Persistence<'_>,
        raw: &RawSession,
        profile: Option<&VehicleProfile>,
    ) -> AppResult<WorkSession> {
        // Validate before touching the store.
        let session = normalize(raw, profile, None)?;

        let mut all = Self::load_all(p)?.value;
        all.items.push(session.clone());
        p.save_collection(SESSIONS_KEY, &all)?;

        Ok(session)
    }

    pub fn edit(
        p: Persistence<'_>,
        id: &str,
        changes: &SessionChanges,
        profile: Option<&VehicleProfile>,
    ) -> AppResult<WorkSession> {
        let mut all = Self::load_all(p)?.value;

        let current = all
            .items
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))?;

        let updated = normalize(&changes.apply_to(current), profile, Some(id))?;
        replace_by_id(&mut all.items, updated.clone());
        p.save_collection(SESSIONS_KEY, &all)?;

        Ok(updated)
    }

    pub fn delete(p: Persistence<'_>, id: &str) -> AppResult<WorkSession> {
        let mut all = Self::load_all(p)?.value;

        let removed = remove_by_id(&mut all.items, id)
            .ok_or_else(|| AppError::SessionNotFound(id.to_string()))?;
        p.save_collection(SESSIONS_KEY, &all)?;

        Ok(removed)
    }
}
