//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use quorum_core::error::CoreError;
use quorum_core::roles::ROLE_SUPERUSER;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `superuser` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn moderators_only(RequireSuperuser(user): RequireSuperuser) -> AppResult<Json<()>> {
///     // user is guaranteed to be a superuser here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireSuperuser(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperuser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_SUPERUSER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Superuser role required".into(),
            )));
        }
        Ok(RequireSuperuser(user))
    }
}
