use crate::database::attendee::Attendee;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// One invited party. Rows are created out of band, this service only reads them
/// and records RSVP state.
///
/// `Invite::default()` is the zero value handed out for unknown ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Invite {
    pub id: String,
    pub name: String,
    pub greeting: String,
    pub lang: String,
    pub max_adults: i32,
    pub max_children: i32,
    pub rsvp: bool,
    pub created_at: DateTime<Utc>,
    pub first_opened_at: Option<DateTime<Utc>>,
    pub last_opened_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Attendees keyed by attendee id. Not a column, filled in after the invite is read.
    #[sqlx(skip)]
    #[serde(default)]
    pub attendees: BTreeMap<String, Attendee>,
}

impl Invite {
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.id.is_empty()
    }

    #[must_use]
    pub fn with_attendees(mut self, attendees: impl IntoIterator<Item = Attendee>) -> Self {
        self.attendees
            .extend(attendees.into_iter().map(|a| (a.id.clone(), a)));
        self
    }
}
