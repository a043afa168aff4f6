//! Stats Reporter
//!
//! Read-only rollups over the daily counters. Days without a row count as
//! zero; an empty history is a valid state, not an error.

use chrono::{DateTime, Utc};

use super::types::{
    days_before, utc_day, DailyStats, StatisticsResponse, StatsError, TotalStats, WeeklyStats,
    LAST_WEEK_DAYS,
};
use crate::db::StatsStore;

/// Reader side of the statistics store
#[derive(Debug, Clone)]
pub struct StatsReporter {
    store: StatsStore,
}

impl StatsReporter {
    pub fn new(store: StatsStore) -> Self {
        Self { store }
    }

    pub async fn today(&self) -> Result<DailyStats, StatsError> {
        self.today_at(Utc::now()).await
    }

    pub async fn yesterday(&self) -> Result<DailyStats, StatsError> {
        self.yesterday_at(Utc::now()).await
    }

    pub async fn last_week(&self) -> Result<WeeklyStats, StatsError> {
        self.last_week_at(Utc::now()).await
    }

    /// Counter for the UTC day containing `now`
    pub async fn today_at(&self, now: DateTime<Utc>) -> Result<DailyStats, StatsError> {
        self.day(utc_day(now)).await
    }

    /// Counter for the UTC day before the one containing `now`
    pub async fn yesterday_at(&self, now: DateTime<Utc>) -> Result<DailyStats, StatsError> {
        self.day(days_before(utc_day(now), 1)).await
    }

    /// Sums over the seven days preceding today, today excluded
    pub async fn last_week_at(&self, now: DateTime<Utc>) -> Result<WeeklyStats, StatsError> {
        let end_date = utc_day(now);
        let start_date = days_before(end_date, LAST_WEEK_DAYS);

        let (file_count, total_size) = self.store.sum_range(start_date, end_date).await?;

        Ok(WeeklyStats {
            start_date,
            end_date,
            file_count,
            total_size,
        })
    }

    /// Sums over every stored day
    pub async fn total(&self) -> Result<TotalStats, StatsError> {
        let (file_count, total_size) = self.store.sum_all().await?;
        Ok(TotalStats {
            file_count,
            total_size,
        })
    }

    /// Recent days with activity, newest first
    pub async fn history(&self, limit: u32) -> Result<Vec<DailyStats>, StatsError> {
        Ok(self.store.list_days(i64::from(limit)).await?)
    }

    pub async fn complete(&self) -> StatisticsResponse {
        self.complete_at(Utc::now()).await
    }

    /// Every rollup at once.
    ///
    /// The sub-queries run concurrently and independently; a failing one is
    /// logged and reported as zero while the others are returned as usual.
    pub async fn complete_at(&self, now: DateTime<Utc>) -> StatisticsResponse {
        let today_date = utc_day(now);

        let (today, yesterday, last_week, total) = tokio::join!(
            self.today_at(now),
            self.yesterday_at(now),
            self.last_week_at(now),
            self.total(),
        );

        StatisticsResponse {
            today: today.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Today stats unavailable");
                DailyStats::empty(today_date)
            }),
            yesterday: yesterday.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Yesterday stats unavailable");
                DailyStats::empty(days_before(today_date, 1))
            }),
            last_week: last_week.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Last week stats unavailable");
                WeeklyStats::empty(days_before(today_date, LAST_WEEK_DAYS), today_date)
            }),
            total: total.unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Total stats unavailable");
                TotalStats::default()
            }),
        }
    }

    async fn day(&self, date: chrono::NaiveDate) -> Result<DailyStats, StatsError> {
        let stats = self.store.get_day(date).await?;
        Ok(stats.unwrap_or_else(|| DailyStats::empty(date)))
    }
}
