//! One-off recovery of session sets left under stray keys.
//!
//! Scans every key whose name contains `corrida`, merges the sessions found
//! there by id and can hand the result to a registered user's own key. This
//! is an admin utility working on raw keys, not part of the normal flow.

use crate::core::period::sort_by_date;
use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::models::user::RegisteredUser;
use crate::store::{Collection, Persistence, USERS_KEY, user_backup_key, user_sessions_key};
use std::collections::HashSet;

const KEY_MARKER: &str = "corrida";

#[derive(Debug, Default)]
pub struct ScanReport {
    /// Unique sessions, newest first.
    pub sessions: Vec<WorkSession>,
    /// Keys that contributed records, with their record count.
    pub sources: Vec<(String, usize)>,
    /// Matching keys whose value was not a session array.
    pub unreadable: Vec<String>,
}

#[derive(Debug)]
pub struct RestoreReport {
    pub user: RegisteredUser,
    pub added: usize,
    pub total: usize,
}

pub struct RecoverLogic;

impl RecoverLogic {
    pub fn scan(p: Persistence<'_>) -> AppResult<ScanReport> {
        let mut report = ScanReport::default();
        let Some(store) = p.backend() else {
            return Ok(report);
        };

        let mut seen: HashSet<String> = HashSet::new();

        for key in store.keys()? {
            if !key.contains(KEY_MARKER) {
                continue;
            }

            // Single bad entries are skipped; only a non-list value is unreadable.
            let found: Vec<WorkSession> = match p.load_collection(&key) {
                Ok(c) => c.items,
                Err(AppError::CorruptData { .. }) => {
                    report.unreadable.push(key);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if found.is_empty() {
                continue;
            }

            report.sources.push((key, found.len()));
            for s in found {
                if seen.insert(s.id.clone()) {
                    report.sessions.push(s);
                }
            }
        }

        sort_by_date(&mut report.sessions);
        // newest first, unreadable dates still last
        let split = report
            .sessions
            .iter()
            .position(|s| s.timestamp().is_none())
            .unwrap_or(report.sessions.len());
        report.sessions[..split].reverse();

        Ok(report)
    }

    /// Case-insensitive lookup in the registered-user list.
    pub fn find_user(p: Persistence<'_>, email: &str) -> AppResult<RegisteredUser> {
        let users: Vec<RegisteredUser> = p.load(USERS_KEY, Vec::new())?;
        if users.is_empty() {
            return Err(AppError::NoRegisteredUsers);
        }

        users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
            .ok_or_else(|| AppError::UserNotFound(email.to_string()))
    }

    /// Merge `found` into the user's key, skipping ids already there, and
    /// write the same set to the user's safety-copy key.
    pub fn restore(
        p: Persistence<'_>,
        found: &[WorkSession],
        email: &str,
    ) -> AppResult<RestoreReport> {
        let user = Self::find_user(p, email)?;
        let key = user_sessions_key(&user.id);

        let mut merged: Collection<WorkSession> = p.load_collection(&key)?;
        let existing: HashSet<String> = merged.items.iter().map(|s| s.id.clone()).collect();

        let new: Vec<WorkSession> = found
            .iter()
            .filter(|s| !existing.contains(&s.id))
            .cloned()
            .collect();
        let added = new.len();
        merged.items.extend(new);

        p.save_collection(&key, &merged)?;
        p.save_collection(&user_backup_key(&user.id), &merged)?;

        Ok(RestoreReport {
            user,
            added,
            total: merged.items.len(),
        })
    }
}
