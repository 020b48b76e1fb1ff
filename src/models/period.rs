use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative aggregation window, anchored at "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    #[value(name = "week")]
    #[serde(rename = "week")]
    LastWeek,
    #[default]
    #[value(name = "month")]
    #[serde(rename = "month")]
    LastMonth,
    #[value(name = "year")]
    #[serde(rename = "year")]
    LastYear,
}

impl Period {
    /// Days subtracted from "now" to get the window start.
    pub fn days_back(&self) -> i64 {
        match self {
            Period::Today => 0,
            Period::LastWeek => 7,
            Period::LastMonth => 30,
            Period::LastYear => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::LastWeek => "Last week",
            Period::LastMonth => "Last month",
            Period::LastYear => "Last year",
        }
    }

    /// Shortest window first.
    pub fn all() -> [Period; 4] {
        [
            Period::Today,
            Period::LastWeek,
            Period::LastMonth,
            Period::LastYear,
        ]
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
