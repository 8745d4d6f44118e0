use crate::api::invite::error::InviteError;
use crate::database::attendee::AttendeeUpsert;
use crate::database::invite::Invite;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Request Payloads ---

/// Body of an RSVP update. The invite id in the path is authoritative, `id` and
/// `invite_id` are accepted here but ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RsvpRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub invite_id: Option<String>,
    pub rsvp: bool,
    /// Attendees to save. Ignored unless `rsvp` is true.
    #[serde(default)]
    pub data: Vec<AttendeePayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendeePayload {
    /// Existing attendee id. Leave empty to add a new attendee.
    #[serde(default)]
    pub id: Option<String>,
    /// Required when `rsvp` is true.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub is_child: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl AttendeePayload {
    pub fn validate(&self) -> Result<(), InviteError> {
        if self.name.trim().is_empty() {
            return Err(InviteError::BadRequest(
                "attendee name must not be empty".to_owned(),
            ));
        }
        if self.age < 0 {
            return Err(InviteError::BadRequest(format!(
                "attendee age must not be negative, got {}",
                self.age
            )));
        }
        Ok(())
    }

    /// Converts the payload into the row to write, assigning a fresh id to new attendees.
    #[must_use]
    pub fn into_upsert(self) -> AttendeeUpsert {
        let id = self
            .id
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        AttendeeUpsert {
            id,
            name: self.name.trim().to_owned(),
            email: self.email,
            phone: self.phone,
            age: self.age,
            is_child: self.is_child,
            active: self.active,
        }
    }
}

// --- Responses ---

/// `{ "status": true }` on success, `{ "status": false, "err": "..." }` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl StatusResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            status: true,
            err: None,
        }
    }

    #[must_use]
    pub const fn failed(err: String) -> Self {
        Self {
            status: false,
            err: Some(err),
        }
    }
}

/// Returned with HTTP 200 when an invite could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InviteFailureResponse {
    pub status: bool,
    pub err: String,
    pub data: Invite,
}

impl From<InviteError> for InviteFailureResponse {
    fn from(err: InviteError) -> Self {
        err.log();
        Self {
            status: false,
            err: err.client_message(),
            data: Invite::default(),
        }
    }
}
