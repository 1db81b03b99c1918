use axum::Json;
use tracing::debug;

use crate::db::{Session, TestRow};
use crate::error::SentivestError;
use crate::middleware::ListLimit;

/// GET /test-table?limit=N -> rows by ascending id.
///
/// `ListLimit` runs first, so an invalid limit never opens a session.
pub async fn list_test_table(
    ListLimit(limit): ListLimit,
    mut session: Session,
) -> Result<Json<Vec<TestRow>>, SentivestError> {
    let rows = session.list_test_rows(limit).await?;
    debug!(session_id = session.id(), limit, count = rows.len(), "listed test_table");
    session.close().await?;
    Ok(Json(rows))
}
