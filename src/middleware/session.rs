use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::db::Session;
use crate::error::SentivestError;
use crate::router::SentivestState;

/// Hands each handler its own session. The session is released when the
/// handler's future completes, whichever way it completes.
impl FromRequestParts<SentivestState> for Session {
    type Rejection = SentivestError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &SentivestState,
    ) -> Result<Self, Self::Rejection> {
        state.db().session().await
    }
}
