pub mod answer;
pub mod auth;
pub mod comment;
pub mod flag;
pub mod question;
pub mod revision;
pub mod search;
pub mod tag;
pub mod user;
pub mod vote;

use quorum_core::error::CoreError;
use quorum_core::validation::validate_content;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Run the content validator over user-authored text, mapping a
/// violation to a 400 response. Superusers bypass every check.
pub(crate) fn check_content(text: &str, author: &AuthUser) -> AppResult<()> {
    validate_content(text, author.is_superuser())
        .map_err(|v| AppError::Core(CoreError::Validation(v.to_string())))
}
