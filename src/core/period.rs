//! Session selection by relative period or by calendar range.

use crate::models::period::Period;
use crate::models::session::WorkSession;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// Inclusive instant bounds of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl PeriodWindow {
    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        *ts >= self.start && *ts <= self.end
    }
}

/// Sessions kept by a filter, plus ids of the ones whose date could not be read.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub sessions: Vec<WorkSession>,
    pub unreadable: Vec<String>,
}

fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

fn end_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let last = now
        .date_naive()
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| now.naive_local());
    now.timezone()
        .from_local_datetime(&last)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}

/// Window for `period`, anchored at `now` in `now`'s time zone.
///
/// `today` starts at local midnight; the others start exactly N days before
/// `now`. Every window ends at the end of `now`'s calendar day.
pub fn window<Tz: TimeZone>(period: Period, now: &DateTime<Tz>) -> PeriodWindow {
    let start = match period {
        Period::Today => start_of_day(now),
        p => now.with_timezone(&Utc) - Duration::days(p.days_back()),
    };

    PeriodWindow {
        start,
        end: end_of_day(now),
    }
}

fn select<F>(sessions: &[WorkSession], keep: F) -> Selection
where
    F: Fn(&DateTime<Utc>) -> bool,
{
    let mut out = Selection::default();

    for s in sessions {
        match s.timestamp() {
            Some(ts) => {
                if keep(&ts.with_timezone(&Utc)) {
                    out.sessions.push(s.clone());
                }
            }
            None => out.unreadable.push(s.id.clone()),
        }
    }

    out
}

/// Sessions whose date lies inside the period window.
pub fn filter_by_period<Tz: TimeZone>(
    sessions: &[WorkSession],
    period: Period,
    now: &DateTime<Tz>,
) -> Selection {
    let w = window(period, now);
    select(sessions, |ts| w.contains(ts))
}

/// Sessions whose stored calendar day (UTC) is within `[from, to]`.
/// A missing bound is open.
pub fn filter_by_dates(
    sessions: &[WorkSession],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Selection {
    select(sessions, |ts| {
        let day = ts.date_naive();
        from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t)
    })
}

/// Ascending by date; records with unreadable dates go last.
pub fn sort_by_date(sessions: &mut [WorkSession]) {
    sessions.sort_by_key(|s| (s.timestamp().is_none(), s.timestamp()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn session(id: &str, date: &str) -> WorkSession {
        WorkSession {
            id: id.into(),
            date: date.into(),
            hours_worked: 6.0,
            distance_km: 80.0,
            fuel_cost: 40.0,
            trip_count: 9,
            gross_earnings: 180.0,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 14, 30, 0).unwrap()
    }

    fn sample() -> Vec<WorkSession> {
        vec![
            session("today", "2025-06-15T00:00:00.000Z"),
            session("yesterday", "2025-06-14T00:00:00.000Z"),
            session("five_days", "2025-06-10T00:00:00.000Z"),
            session("twenty_days", "2025-05-26T00:00:00.000Z"),
            session("ninety_days", "2025-03-17T00:00:00.000Z"),
            session("two_years", "2023-06-15T00:00:00.000Z"),
            session("tomorrow", "2025-06-16T00:00:00.000Z"),
            session("broken", "yesterday-ish"),
        ]
    }

    fn ids(sel: &Selection) -> Vec<&str> {
        sel.sessions.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn today_starts_at_midnight() {
        let sel = filter_by_period(&sample(), Period::Today, &now());
        assert_eq!(ids(&sel), vec!["today"]);
    }

    #[test]
    fn week_month_year_windows() {
        let s = sample();
        assert_eq!(
            ids(&filter_by_period(&s, Period::LastWeek, &now())),
            vec!["today", "yesterday", "five_days"]
        );
        assert_eq!(
            ids(&filter_by_period(&s, Period::LastMonth, &now())),
            vec!["today", "yesterday", "five_days", "twenty_days"]
        );
        assert_eq!(
            ids(&filter_by_period(&s, Period::LastYear, &now())),
            vec![
                "today",
                "yesterday",
                "five_days",
                "twenty_days",
                "ninety_days"
            ]
        );
    }

    #[test]
    fn windows_are_nested() {
        let s = sample();
        let sets: Vec<Vec<String>> = Period::all()
            .iter()
            .map(|p| {
                filter_by_period(&s, *p, &now())
                    .sessions
                    .into_iter()
                    .map(|x| x.id)
                    .collect()
            })
            .collect();

        for pair in sets.windows(2) {
            assert!(pair[0].iter().all(|id| pair[1].contains(id)));
        }
    }

    #[test]
    fn unreadable_dates_are_reported_not_fatal() {
        let sel = filter_by_period(&sample(), Period::LastYear, &now());
        assert_eq!(sel.unreadable, vec!["broken".to_string()]);
        assert!(!ids(&sel).contains(&"broken"));
    }

    #[test]
    fn today_follows_the_anchor_time_zone() {
        // In UTC+3 the 16th runs from 15th 21:00 UTC to 16th 20:59 UTC.
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let anchor = tz.with_ymd_and_hms(2025, 6, 16, 1, 0, 0).unwrap();
        let sel = filter_by_period(&sample(), Period::Today, &anchor);
        assert_eq!(ids(&sel), vec!["tomorrow"]);
    }

    #[test]
    fn date_range_is_inclusive_and_open_ended() {
        let s = sample();
        let from = NaiveDate::from_ymd_opt(2025, 6, 10);
        let to = NaiveDate::from_ymd_opt(2025, 6, 14);

        assert_eq!(
            ids(&filter_by_dates(&s, from, to)),
            vec!["yesterday", "five_days"]
        );
        assert_eq!(
            ids(&filter_by_dates(&s, None, NaiveDate::from_ymd_opt(2023, 12, 31))),
            vec!["two_years"]
        );
    }

    #[test]
    fn sorting_puts_unreadable_last() {
        let mut s = sample();
        sort_by_date(&mut s);
        assert_eq!(s.first().unwrap().id, "two_years");
        assert_eq!(s.last().unwrap().id, "broken");
    }
}
