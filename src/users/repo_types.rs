use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    /// Sequence-assigned, never reused.
    pub id: i64,
    pub name: String,
    /// Unique across all rows.
    pub email: String,
    pub created_at: OffsetDateTime,
    /// NULL until the first update.
    pub updated_at: Option<OffsetDateTime>,
}

/// Validated fields for an insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Validated fields for a partial update; `None` leaves the column as is.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}
