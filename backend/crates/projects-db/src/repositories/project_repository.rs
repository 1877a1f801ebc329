//! Project repository: insert and lookup of project rows.
//!
//! Hours are stored as decimal strings so the two fractional digits survive
//! the round trip (`10.00` stays `10.00`, not `10`).

use crate::{DbError, Result as DbErrorResult};

use projects_core::{HOURS_SCALE, Project, try_hours_scale};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_PROJECT: &str = r#"
    SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
    FROM project
    WHERE project_id = ?
"#;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the project and return the stored row, id included.
    ///
    /// Insert and read-back share one transaction.
    pub async fn create(&self, project: &Project) -> DbErrorResult<Project> {
        let estimated_hours = to_db_hours("project.estimated_hours", project.estimated_hours)?;
        let actual_hours = to_db_hours("project.actual_hours", project.actual_hours)?;

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO project (
                    project_name, estimated_hours, actual_hours, difficulty, notes
                ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.project_name.as_deref())
        .bind(estimated_hours)
        .bind(actual_hours)
        .bind(project.difficulty)
        .bind(project.notes.as_deref())
        .execute(&mut *tx)
        .await?;

        let project_id = result.last_insert_rowid();

        let row = sqlx::query(SELECT_PROJECT)
            .bind(project_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        project_from_row(&row)
    }

    pub async fn find_by_id(&self, project_id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query(SELECT_PROJECT)
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(project_from_row).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Hours that cannot be held at two fractional digits are refused, never
/// written at a narrower scale.
#[track_caller]
fn to_db_hours(column: &'static str, hours: Option<Decimal>) -> DbErrorResult<Option<String>> {
    let location = Location::caller();
    hours
        .map(|value| {
            try_hours_scale(value)
                .map(|scaled| scaled.to_string())
                .ok_or_else(|| DbError::Decode {
                    column,
                    message: format!("{value} does not fit {HOURS_SCALE} fractional digits"),
                    location: ErrorLocation::from(location),
                })
        })
        .transpose()
}

#[track_caller]
fn parse_db_hours(column: &'static str, value: Option<String>) -> DbErrorResult<Option<Decimal>> {
    let location = Location::caller();
    value
        .map(|raw| {
            let parsed = Decimal::from_str(&raw).map_err(|e| DbError::Decode {
                column,
                message: format!("'{}' is not a decimal: {}", raw, e),
                location: ErrorLocation::from(location),
            })?;
            try_hours_scale(parsed).ok_or_else(|| DbError::Decode {
                column,
                message: format!("'{raw}' does not fit {HOURS_SCALE} fractional digits"),
                location: ErrorLocation::from(location),
            })
        })
        .transpose()
}

fn project_from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        project_id: Some(row.try_get("project_id")?),
        project_name: row.try_get("project_name")?,
        estimated_hours: parse_db_hours("project.estimated_hours", row.try_get("estimated_hours")?)?,
        actual_hours: parse_db_hours("project.actual_hours", row.try_get("actual_hours")?)?,
        difficulty: row.try_get("difficulty")?,
        notes: row.try_get("notes")?,
    })
}
