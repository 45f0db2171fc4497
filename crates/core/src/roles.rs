//! Role names embedded in JWT claims.

/// Superusers bypass content validation and may resolve flags.
pub const ROLE_SUPERUSER: &str = "superuser";

/// Regular authenticated user.
pub const ROLE_USER: &str = "user";
