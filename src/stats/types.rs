//! Statistics types

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Length of the rolling window reported as "last week"
pub const LAST_WEEK_DAYS: u64 = 7;

/// Calendar day an instant falls into, with the boundary at UTC midnight
pub fn utc_day(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// `date` minus `days`, saturating at the earliest representable date
pub(crate) fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN)
}

// ============================================================================
// Counters
// ============================================================================

/// Counter for a single UTC day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,
    pub file_count: i64,
    pub total_size: i64,
}

impl DailyStats {
    /// Zero counter, used for days without activity
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            file_count: 0,
            total_size: 0,
        }
    }
}

/// Sums over the half-open range `[start_date, end_date)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub file_count: i64,
    pub total_size: i64,
}

impl WeeklyStats {
    pub fn empty(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            file_count: 0,
            total_size: 0,
        }
    }
}

/// All-time sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalStats {
    pub file_count: i64,
    pub total_size: i64,
}

/// Dashboard view combining every rollup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub today: DailyStats,
    pub yesterday: DailyStats,
    pub last_week: WeeklyStats,
    pub total: TotalStats,
}

// ============================================================================
// Error Types
// ============================================================================

/// Statistics errors
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("File size {0} exceeds the storable range")]
    SizeOverflow(u64),

    #[error("Total size for {0} exceeds the storable range")]
    CounterOverflow(NaiveDate),
}
