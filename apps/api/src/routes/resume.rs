//! Resume-result endpoints. Every handler answers HTTP 200 and reports
//! business failure only through the envelope's `success` flag.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use crate::models::resume::{ResumePage, ResumeResult, ResumeResultDraft};
use crate::response::Envelope;
use crate::state::AppState;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for the page endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default = "default_current")]
    pub current: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_current() -> i64 {
    DEFAULT_PAGE
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PageParams {
    /// Out-of-range values are silently clamped rather than rejected:
    /// current < 1 falls back to the first page, size outside [1, 100]
    /// falls back to the default size.
    fn clamped(self) -> Self {
        PageParams {
            current: if self.current < 1 {
                DEFAULT_PAGE
            } else {
                self.current
            },
            size: if self.size < 1 || self.size > MAX_PAGE_SIZE {
                DEFAULT_PAGE_SIZE
            } else {
                self.size
            },
            user_id: self.user_id,
        }
    }
}

/// POST /resume
pub async fn save_resume_result(
    State(state): State<AppState>,
    Json(draft): Json<ResumeResultDraft>,
) -> Json<Envelope<ResumeResult>> {
    info!(
        "received save request, content lengths: original={}, modified={}",
        draft.original_content.as_deref().map_or(0, str::len),
        draft.modified_content.as_deref().map_or(0, str::len)
    );

    match state.service.save(draft).await {
        Ok(record) => Json(Envelope::ok_with_message("resume result saved", record)),
        Err(e) => {
            error!("failed to save resume result: {e}");
            Json(Envelope::fail(format!("save failed: {e}")))
        }
    }
}

/// GET /resume/:id
pub async fn get_resume_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Envelope<ResumeResult>> {
    match state.service.get_by_id(id).await {
        Ok(Some(record)) => Json(Envelope::ok(record)),
        Ok(None) => Json(Envelope::fail(format!(
            "no resume result found with id {id}"
        ))),
        Err(e) => {
            error!("failed to fetch resume result {id}: {e}");
            Json(Envelope::fail(format!("query failed: {e}")))
        }
    }
}

/// GET /resume/page
pub async fn page_resume_results(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Json<Envelope<ResumePage>> {
    let PageParams {
        current,
        size,
        user_id,
    } = params.clamped();

    match state.service.page(current, size, user_id).await {
        Ok((items, total)) => Json(Envelope::ok(ResumePage {
            items,
            total,
            current,
            size,
        })),
        Err(e) => {
            error!("failed to page resume results: {e}");
            // Still ship a well-formed empty page so clients can parse it.
            Json(Envelope::fail_with_data(
                format!("query failed: {e}"),
                ResumePage::empty(current, size),
            ))
        }
    }
}

/// PUT /resume/:id
/// The path id is authoritative; any id in the body is ignored.
pub async fn update_resume_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<ResumeResultDraft>,
) -> Json<Envelope<ResumeResult>> {
    match state.service.update(id, draft).await {
        Ok(Some(record)) => Json(Envelope::ok_with_message("resume result updated", record)),
        Ok(None) => Json(Envelope::fail(format!(
            "no resume result found with id {id}"
        ))),
        Err(e) => {
            error!("failed to update resume result {id}: {e}");
            Json(Envelope::fail(format!("update failed: {e}")))
        }
    }
}

/// DELETE /resume/:id
/// Distinguishes a missing record from a failed delete, so the existence
/// check runs here as well as inside the service's transaction.
pub async fn delete_resume_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Envelope<()>> {
    info!("received delete request, id: {id}");

    let existing = match state.service.get_by_id(id).await {
        Ok(existing) => existing,
        Err(e) => {
            error!("failed to check resume result {id} before delete: {e}");
            return Json(Envelope::fail(format!("delete failed: {e}")));
        }
    };
    if existing.is_none() {
        warn!("attempted to delete missing record, id: {id}");
        return Json(Envelope::fail("delete failed, record not found"));
    }

    match state.service.delete(id).await {
        Ok(true) => Json(Envelope::ok_message("resume result deleted")),
        Ok(false) => {
            error!("delete reported no row removed, id: {id}");
            Json(Envelope::fail("delete operation failed"))
        }
        Err(e) => {
            error!("error while deleting resume result {id}: {e}");
            Json(Envelope::fail(format!("error during delete: {e}")))
        }
    }
}
