use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_services::api::invite::interfaces::{AttendeePayload, RsvpRequest};
use common_services::database::attendee::AttendeeUpsert;
use common_services::database::invite::Invite;
use common_services::database::invite_store::InviteStore;
use sqlx::PgPool;

/// Inserts a fresh invite. Invites are never created through the API.
pub async fn seed_invite(pool: &PgPool, invite_id: &str) -> Result<()> {
    sqlx::query(
        r"
        INSERT INTO invite (id, name, greeting, lang, max_adults, max_children)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(invite_id)
    .bind("The Does")
    .bind("Dear Jane and John")
    .bind("en")
    .bind(2)
    .bind(1)
    .execute(pool)
    .await?;
    Ok(())
}

/// Reads the stored row without touching the open timestamps.
pub async fn read_invite(pool: &PgPool, invite_id: &str) -> Result<Invite> {
    InviteStore::find_by_id(pool, invite_id)
        .await?
        .ok_or_else(|| eyre!("invite {invite_id} should exist"))
}

pub fn attendee_upsert(id: &str, name: &str, age: i32) -> AttendeeUpsert {
    AttendeeUpsert {
        id: id.to_owned(),
        name: name.to_owned(),
        email: "jane@example.com".to_owned(),
        phone: "555".to_owned(),
        age,
        is_child: false,
        active: true,
    }
}

pub fn attendee_payload(id: Option<&str>, name: &str) -> AttendeePayload {
    AttendeePayload {
        id: id.map(str::to_owned),
        name: name.to_owned(),
        email: "jane@example.com".to_owned(),
        phone: "555".to_owned(),
        age: 30,
        is_child: false,
        active: true,
    }
}

pub fn rsvp_request(rsvp: bool, data: Vec<AttendeePayload>) -> RsvpRequest {
    RsvpRequest {
        id: None,
        invite_id: None,
        rsvp,
        data,
    }
}
