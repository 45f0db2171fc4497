pub mod answer_repo;
pub mod comment_repo;
pub mod flag_repo;
pub mod profile_repo;
pub mod question_repo;
pub mod revision_repo;
pub mod session_repo;
pub mod tag_repo;
pub mod user_repo;
pub mod vote_repo;

pub use answer_repo::AnswerRepo;
pub use comment_repo::CommentRepo;
pub use flag_repo::FlagRepo;
pub use profile_repo::ProfileRepo;
pub use question_repo::QuestionRepo;
pub use revision_repo::RevisionRepo;
pub use session_repo::SessionRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
