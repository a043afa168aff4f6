//! Daily statistics database operations

use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::schema::initialize_schema;
use crate::stats::{DailyStats, StatsError};

/// Storage format of the `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Daily counter row
#[derive(Debug, Clone, sqlx::FromRow)]
struct DailyStatsRow {
    date: String,
    file_count: i64,
    total_size: i64,
}

impl DailyStatsRow {
    fn into_stats(self) -> Result<DailyStats, sqlx::Error> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(DailyStats {
            date,
            file_count: self.file_count,
            total_size: self.total_size,
        })
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Handle to the `daily_stats` table.
///
/// Only obtainable through [`StatsStore::open`], which creates the table, so
/// every handle points at an initialized store.
#[derive(Debug, Clone)]
pub struct StatsStore {
    pool: SqlitePool,
}

impl StatsStore {
    /// Initialize the schema on `pool` and return a handle to it
    pub async fn open(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        initialize_schema(&pool).await?;
        tracing::debug!("Stats store ready");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Add one file of `size_bytes` to the counter for `date`.
    ///
    /// Single statement: inserts the row on the first event of the day and
    /// increments it in place afterwards. An increment that would push
    /// `total_size` past `i64::MAX` leaves the row untouched and fails with
    /// [`StatsError::CounterOverflow`]; SQLite would otherwise store the sum
    /// as REAL and the row could no longer be read back.
    pub async fn increment(&self, date: NaiveDate, size_bytes: i64) -> Result<(), StatsError> {
        let result = sqlx::query(
            r#"
            INSERT INTO daily_stats (date, file_count, total_size)
            VALUES (?, 1, ?)
            ON CONFLICT(date) DO UPDATE SET
                file_count = file_count + 1,
                total_size = total_size + excluded.total_size
            WHERE total_size <= 9223372036854775807 - excluded.total_size
            "#,
        )
        .bind(date_key(date))
        .bind(size_bytes)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StatsError::CounterOverflow(date));
        }

        Ok(())
    }

    /// Get the counter for a specific day
    pub async fn get_day(&self, date: NaiveDate) -> Result<Option<DailyStats>, sqlx::Error> {
        let row = sqlx::query_as::<_, DailyStatsRow>(
            r#"
            SELECT date, file_count, total_size
            FROM daily_stats
            WHERE date = ?
            "#,
        )
        .bind(date_key(date))
        .fetch_optional(&self.pool)
        .await?;

        row.map(DailyStatsRow::into_stats).transpose()
    }

    /// Sum file count and size over `[start, end)`
    pub async fn sum_range(&self, start: NaiveDate, end: NaiveDate) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COALESCE(SUM(file_count), 0), COALESCE(SUM(total_size), 0)
            FROM daily_stats
            WHERE date >= ? AND date < ?
            "#,
        )
        .bind(date_key(start))
        .bind(date_key(end))
        .fetch_one(&self.pool)
        .await
    }

    /// Sum file count and size over every stored day
    pub async fn sum_all(&self) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COALESCE(SUM(file_count), 0), COALESCE(SUM(total_size), 0)
            FROM daily_stats
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }

    /// Most recent days with activity, newest first
    pub async fn list_days(&self, limit: i64) -> Result<Vec<DailyStats>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DailyStatsRow>(
            r#"
            SELECT date, file_count, total_size
            FROM daily_stats
            ORDER BY date DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DailyStatsRow::into_stats).collect()
    }
}
