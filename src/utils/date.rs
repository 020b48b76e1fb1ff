use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn invalid(msg: &str, raw: &str) -> AppError {
    AppError::InvalidRange(format!("{msg}: '{raw}'"))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last day covered by `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn bounds_of(part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = part.trim();

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year", p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year", p))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month", p))?;
            let last = last_day_of_month(first.year(), first.month())
                .ok_or_else(|| invalid("invalid month", p))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| invalid("invalid date", p))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported range format", p)),
    }
}

/// Parse a `--range` expression into inclusive calendar bounds.
///
/// Supports:
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - start:end with both sides in the same format
/// - start: or :end for an open side
pub fn parse_range(r: &str) -> AppResult<(Option<NaiveDate>, Option<NaiveDate>)> {
    let Some((start_raw, end_raw)) = r.split_once(':') else {
        let (d1, d2) = bounds_of(r)?;
        return Ok((Some(d1), Some(d2)));
    };

    let start = start_raw.trim();
    let end = end_raw.trim();

    if start.is_empty() && end.is_empty() {
        return Err(invalid("empty range", r));
    }
    if !start.is_empty() && !end.is_empty() && start.len() != end.len() {
        return Err(invalid("start and end must have same format", r));
    }

    let from = if start.is_empty() {
        None
    } else {
        Some(bounds_of(start)?.0)
    };
    let to = if end.is_empty() {
        None
    } else {
        Some(bounds_of(end)?.1)
    };

    if let (Some(f), Some(t)) = (from, to)
        && f > t
    {
        return Err(invalid("start is after end", r));
    }

    Ok((from, to))
}
