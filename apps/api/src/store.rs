//! Persistence layer for the `resume_result` table.
//!
//! Five primitive operations, no business rules. Everything except `scan`
//! is generic over the executor so the service can run it either directly
//! on the pool or inside a transaction.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool, QueryBuilder};

use crate::models::resume::{ResumeResult, ResumeResultDraft};

const COLUMNS: &str = "id, original_content, modified_content, modification_description, \
     created_time, updated_time, user_id, status, resume_classification, \
     modified_resume_classification";

/// Optional equality filter applied by [`scan`].
#[derive(Debug, Clone, Default)]
pub struct ScanFilter {
    pub user_id: Option<String>,
}

/// Inserts a new row and returns it with its store-assigned id.
pub async fn insert(
    ex: impl PgExecutor<'_>,
    draft: &ResumeResultDraft,
    status: i32,
    now: DateTime<Utc>,
) -> Result<ResumeResult, sqlx::Error> {
    let sql = format!(
        "INSERT INTO resume_result \
             (original_content, modified_content, modification_description, \
              created_time, updated_time, user_id, status, resume_classification, \
              modified_resume_classification) \
         VALUES ($1, $2, $3, $4, $4, $5, $6, $7, $8) \
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, ResumeResult>(&sql)
        .bind(&draft.original_content)
        .bind(&draft.modified_content)
        .bind(&draft.modification_description)
        .bind(now)
        .bind(&draft.user_id)
        .bind(status)
        .bind(&draft.resume_classification)
        .bind(&draft.modified_resume_classification)
        .fetch_one(ex)
        .await
}

pub async fn fetch_by_id(
    ex: impl PgExecutor<'_>,
    id: i64,
) -> Result<Option<ResumeResult>, sqlx::Error> {
    let sql = format!("SELECT {COLUMNS} FROM resume_result WHERE id = $1");
    sqlx::query_as::<_, ResumeResult>(&sql)
        .bind(id)
        .fetch_optional(ex)
        .await
}

/// Overwrites the columns present in `draft`, keeps the rest (`COALESCE`
/// against the stored value), and stamps `updated_time`. `created_time` is
/// never touched. Returns false when the id does not exist.
pub async fn update_by_id(
    ex: impl PgExecutor<'_>,
    id: i64,
    draft: &ResumeResultDraft,
    now: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE resume_result SET \
             original_content = COALESCE($2, original_content), \
             modified_content = COALESCE($3, modified_content), \
             modification_description = COALESCE($4, modification_description), \
             user_id = COALESCE($5, user_id), \
             status = COALESCE($6, status), \
             resume_classification = COALESCE($7, resume_classification), \
             modified_resume_classification = COALESCE($8, modified_resume_classification), \
             updated_time = $9 \
         WHERE id = $1",
    )
    .bind(id)
    .bind(&draft.original_content)
    .bind(&draft.modified_content)
    .bind(&draft.modification_description)
    .bind(&draft.user_id)
    .bind(draft.status)
    .bind(&draft.resume_classification)
    .bind(&draft.modified_resume_classification)
    .bind(now)
    .execute(ex)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns false when the id does not exist.
pub async fn delete_by_id(ex: impl PgExecutor<'_>, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM resume_result WHERE id = $1")
        .bind(id)
        .execute(ex)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Filtered, sorted, paginated scan: newest `created_time` first, plus the
/// total count matching the filter.
pub async fn scan(
    pool: &PgPool,
    filter: &ScanFilter,
    offset: i64,
    limit: i64,
) -> Result<(Vec<ResumeResult>, i64), sqlx::Error> {
    let mut count = QueryBuilder::new("SELECT COUNT(*) FROM resume_result");
    if let Some(user_id) = &filter.user_id {
        count.push(" WHERE user_id = ").push_bind(user_id);
    }
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut select = QueryBuilder::new(format!("SELECT {COLUMNS} FROM resume_result"));
    if let Some(user_id) = &filter.user_id {
        select.push(" WHERE user_id = ").push_bind(user_id);
    }
    select
        .push(" ORDER BY created_time DESC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);
    let items = select
        .build_query_as::<ResumeResult>()
        .fetch_all(pool)
        .await?;

    Ok((items, total))
}
