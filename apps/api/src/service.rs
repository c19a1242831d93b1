//! Write rules and query shaping for resume results.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::resume::{ResumeResult, ResumeResultDraft};
use crate::store::{self, ScanFilter};

/// Status value applied when a draft is saved without one.
pub const STATUS_DRAFT: i32 = 0;
pub const STATUS_COMPLETE: i32 = 1;

/// Normalizes a caller-supplied status to the {draft, complete} domain.
/// Out-of-range values are treated like absence, in the same silent-clamp
/// spirit as pagination parameters.
fn normalize_status(status: Option<i32>) -> Option<i32> {
    status.filter(|s| matches!(*s, STATUS_DRAFT | STATUS_COMPLETE))
}

#[derive(Clone)]
pub struct ResumeResultService {
    pool: PgPool,
}

impl ResumeResultService {
    pub fn new(pool: PgPool) -> Self {
        ResumeResultService { pool }
    }

    /// Stamps both timestamps with the same instant, defaults the status to
    /// draft, and inserts. Returns the stored row with its assigned id.
    pub async fn save(&self, draft: ResumeResultDraft) -> Result<ResumeResult, AppError> {
        let now = Utc::now();
        let status = normalize_status(draft.status).unwrap_or(STATUS_DRAFT);

        let record = store::insert(&self.pool, &draft, status, now).await?;
        info!("saved resume result, id: {}", record.id);
        Ok(record)
    }

    /// Direct passthrough; an absent row is a normal result, not an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<ResumeResult>, AppError> {
        let record = store::fetch_by_id(&self.pool, id).await?;
        match &record {
            Some(_) => debug!("fetched resume result, id: {id}"),
            None => warn!("attempted to fetch missing resume result, id: {id}"),
        }
        Ok(record)
    }

    /// Owner-filtered (only when `user_id` is non-empty), newest-first page.
    /// `current` and `size` are expected to be already clamped by the caller.
    pub async fn page(
        &self,
        current: i64,
        size: i64,
        user_id: Option<String>,
    ) -> Result<(Vec<ResumeResult>, i64), AppError> {
        let filter = ScanFilter {
            user_id: user_id.filter(|u| !u.is_empty()),
        };
        match &filter.user_id {
            Some(user_id) => debug!("paging resume results for user {user_id}"),
            None => debug!("paging all resume results"),
        }

        let offset = (current - 1) * size;
        let (items, total) = store::scan(&self.pool, &filter, offset, size).await?;
        debug!(
            "page query done: total={total}, current={current}, size={size}, returned={}",
            items.len()
        );
        Ok((items, total))
    }

    /// Check-then-act in one transaction: existence check, field-merge
    /// update stamping `updated_time`, re-fetch. Returns `None` when the row
    /// is absent (nothing updated). The re-fetched row, not the caller's
    /// payload, is the source of truth. Early returns drop the transaction,
    /// which rolls it back.
    pub async fn update(
        &self,
        id: i64,
        draft: ResumeResultDraft,
    ) -> Result<Option<ResumeResult>, AppError> {
        let mut tx = self.pool.begin().await?;

        if store::fetch_by_id(&mut *tx, id).await?.is_none() {
            warn!("attempted to update missing resume result, id: {id}");
            return Ok(None);
        }

        let draft = ResumeResultDraft {
            status: normalize_status(draft.status),
            ..draft
        };
        if !store::update_by_id(&mut *tx, id, &draft, Utc::now()).await? {
            warn!("update matched no row, id: {id}");
            return Ok(None);
        }

        let record = store::fetch_by_id(&mut *tx, id).await?;
        tx.commit().await?;
        info!("updated resume result, id: {id}");
        Ok(record)
    }

    /// Check-then-act in one transaction; false (not an error) when the row
    /// is absent. A storage fault during the delete itself propagates to the
    /// boundary instead of being swallowed.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        if store::fetch_by_id(&mut *tx, id).await?.is_none() {
            warn!("attempted to delete missing resume result, id: {id}");
            return Ok(false);
        }

        let deleted = store::delete_by_id(&mut *tx, id).await?;
        tx.commit().await?;
        if deleted {
            info!("deleted resume result, id: {id}");
        } else {
            warn!("delete matched no row, id: {id}");
        }
        Ok(deleted)
    }
}
