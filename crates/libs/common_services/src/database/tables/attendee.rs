use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One person on an invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Attendee {
    pub id: String,
    pub invite_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub is_child: bool,
    /// Presence flag, attendees are never deleted.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The mutable columns of an attendee row, as written by an RSVP update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeUpsert {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub is_child: bool,
    pub active: bool,
}
