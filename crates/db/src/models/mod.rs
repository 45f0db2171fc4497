pub mod answer;
pub mod comment;
pub mod flag;
pub mod profile;
pub mod question;
pub mod revision;
pub mod session;
pub mod tag;
pub mod user;
pub mod vote;
