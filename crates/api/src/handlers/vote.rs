//! Handler for the vote ledger.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use quorum_core::content::ContentRef;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_core::voting::{VoteKind, VoteTransition};
use quorum_db::models::vote::{CastOutcome, Vote};
use quorum_db::repositories::VoteRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::indexing;
use crate::middleware::auth::AuthUser;
use crate::rate_limit;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /votes`.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub target_type: String,
    pub target_id: DbId,
    pub vote_type: VoteKind,
}

/// Response payload for a successful cast: the ledger row plus the
/// target's post-cast counters.
#[derive(Debug, Serialize)]
pub struct CastVoteResponse {
    pub vote: Vote,
    /// `"created"` for a first vote, `"switched"` for a flip.
    pub transition: &'static str,
    pub upvotes: i64,
    pub downvotes: i64,
}

/// POST /api/v1/votes
///
/// Cast or switch a vote on a question, answer, or comment. One vote
/// per user per item; re-casting the same type is a conflict and there
/// is no unvote.
pub async fn cast_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<impl IntoResponse> {
    let target =
        ContentRef::from_parts(&input.target_type, input.target_id).map_err(AppError::Core)?;

    // The hourly budget is enforced inside the cast transaction so
    // concurrent casts cannot slip past the bound together.
    match VoteRepo::cast(
        &state.pool,
        auth.user_id,
        target,
        input.vote_type,
        rate_limit::window_start(),
        rate_limit::VOTES_PER_HOUR,
    )
    .await?
    {
        CastOutcome::Cast {
            vote,
            transition,
            upvotes,
            downvotes,
        } => {
            tracing::info!(
                user_id = auth.user_id,
                target_type = %target.kind,
                target_id = target.id,
                vote_type = input.vote_type.as_str(),
                "Vote cast",
            );

            // Upvote counts are sortable in search, so refresh the doc.
            indexing::spawn_refresh(&state, target);

            let transition = match transition {
                VoteTransition::Created(_) => "created",
                VoteTransition::Switched { .. } => "switched",
            };
            Ok(Json(DataResponse {
                data: CastVoteResponse {
                    vote,
                    transition,
                    upvotes,
                    downvotes,
                },
            }))
        }
        CastOutcome::RateLimited => Err(AppError::Core(rate_limit::exceeded(
            rate_limit::VOTES_PER_HOUR,
            "votes",
        ))),
        CastOutcome::AlreadyCast => Err(AppError::Core(CoreError::Conflict(format!(
            "You have already {}voted this item",
            input.vote_type.as_str()
        )))),
        CastOutcome::SelfVote => Err(AppError::Core(CoreError::Forbidden(
            "You cannot vote on your own content".into(),
        ))),
        CastOutcome::TargetMissing => Err(AppError::Core(target.not_found())),
    }
}
