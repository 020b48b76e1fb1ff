// src/export/logic.rs

use crate::core::period::{filter_by_dates, sort_by_date};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::models::session::WorkSession;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use std::path::Path;

/// High-level export of stored sessions.
pub struct ExportLogic;

impl ExportLogic {
    /// Export `sessions`, optionally restricted to a calendar range.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   `start:end` pairs of those
    ///
    /// Returns the number of exported sessions.
    pub fn export(
        sessions: &[WorkSession],
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let (from, to) = match range {
            None => (None, None),
            Some(r) if r.eq_ignore_ascii_case("all") => (None, None),
            Some(r) => parse_range(r)?,
        };

        let mut selected = filter_by_dates(sessions, from, to).sessions;
        if selected.is_empty() {
            warning("No sessions found for selected range.");
            return Ok(0);
        }
        sort_by_date(&mut selected);

        ensure_writable(path, force)?;

        let rows: Vec<SessionExport> = selected.iter().map(SessionExport::from).collect();
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
