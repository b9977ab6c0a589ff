//! Ramadan schedule repository.
//!
//! Regeneration is destructive: the whole 30-day table is replaced inside a
//! single transaction so readers never observe a partial schedule.

use domain::models::ramadan::{NewRamadanDay, RamadanDay, UpdateRamadanDayRequest};
use sqlx::PgPool;

use crate::entities::RamadanDayEntity;

const DAY_COLUMNS: &str = r#"
    id, day_number, gregorian_date, suhoor_time, iftar_time,
    taraweeh_imam, is_sponsored, iftar_sponsor
"#;

/// Repository for the Ramadan schedule.
#[derive(Clone)]
pub struct RamadanRepository {
    pool: PgPool,
}

impl RamadanRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The full schedule in day order. Empty outside a generated season.
    pub async fn list(&self) -> Result<Vec<RamadanDay>, sqlx::Error> {
        let entities = sqlx::query_as::<_, RamadanDayEntity>(&format!(
            "SELECT {} FROM ramadan_schedule ORDER BY day_number ASC",
            DAY_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(entities.into_iter().map(RamadanDay::from).collect())
    }

    /// Drop the stored schedule and insert the given days atomically.
    pub async fn replace_schedule(
        &self,
        days: &[NewRamadanDay],
    ) -> Result<Vec<RamadanDay>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM ramadan_schedule")
            .execute(&mut *tx)
            .await?;

        let mut inserted = Vec::with_capacity(days.len());
        for day in days {
            let entity = sqlx::query_as::<_, RamadanDayEntity>(&format!(
                r#"
                INSERT INTO ramadan_schedule (day_number, gregorian_date, suhoor_time,
                                              iftar_time, taraweeh_imam, is_sponsored,
                                              iftar_sponsor)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {}
                "#,
                DAY_COLUMNS
            ))
            .bind(day.day_number)
            .bind(day.gregorian_date)
            .bind(&day.suhoor_time)
            .bind(&day.iftar_time)
            .bind(&day.taraweeh_imam)
            .bind(day.is_sponsored)
            .bind(&day.iftar_sponsor)
            .fetch_one(&mut *tx)
            .await?;

            inserted.push(RamadanDay::from(entity));
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Partial update of one day, addressed by day number.
    pub async fn update_day(
        &self,
        day_number: i32,
        request: &UpdateRamadanDayRequest,
    ) -> Result<Option<RamadanDay>, sqlx::Error> {
        let entity = sqlx::query_as::<_, RamadanDayEntity>(&format!(
            r#"
            UPDATE ramadan_schedule SET
                suhoor_time = COALESCE($2, suhoor_time),
                iftar_time = COALESCE($3, iftar_time),
                taraweeh_imam = COALESCE($4, taraweeh_imam),
                is_sponsored = COALESCE($5, is_sponsored),
                iftar_sponsor = COALESCE($6, iftar_sponsor)
            WHERE day_number = $1
            RETURNING {}
            "#,
            DAY_COLUMNS
        ))
        .bind(day_number)
        .bind(&request.suhoor_time)
        .bind(&request.iftar_time)
        .bind(&request.taraweeh_imam)
        .bind(request.is_sponsored)
        .bind(&request.iftar_sponsor)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(RamadanDay::from))
    }
}
