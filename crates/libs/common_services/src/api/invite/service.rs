use crate::api::invite::error::InviteError;
use crate::api::invite::interfaces::RsvpRequest;
use crate::database::invite::Invite;
use crate::database::invite_store::InviteStore;
use sqlx::PgPool;
use tracing::{debug, instrument};

/// Reads an invite and records that it was opened.
///
/// An unknown id is not an error: it yields `Invite::default()` and nothing is written.
#[instrument(skip(pool))]
pub async fn get_invite_by_id(pool: &PgPool, invite_id: &str) -> Result<Invite, InviteError> {
    let Some(invite) = InviteStore::find_by_id(pool, invite_id).await? else {
        debug!("No invite with id {invite_id}");
        return Ok(Invite::default());
    };

    // The row can disappear between the read and the update, keep what we read.
    let opened = InviteStore::mark_opened(pool, &invite.id).await?;
    Ok(opened.unwrap_or(invite))
}

/// The invite together with its attendees. Unknown ids are `InviteError::NotFound`.
#[instrument(skip(pool))]
pub async fn get_invite_with_attendees(
    pool: &PgPool,
    invite_id: &str,
) -> Result<Invite, InviteError> {
    let invite = get_invite_by_id(pool, invite_id).await?;
    if invite.is_zero() {
        return Err(InviteError::NotFound(invite_id.to_owned()));
    }

    let attendees = InviteStore::list_attendees(pool, &invite.id).await?;
    Ok(invite.with_attendees(attendees))
}

/// Stores an RSVP. Attendees are only saved when `rsvp` is true.
///
/// The flag and all attendees are written in one transaction: either the whole
/// update lands or none of it does.
#[instrument(skip(pool, request), fields(rsvp = request.rsvp, attendees = request.data.len()))]
pub async fn update_invite(
    pool: &PgPool,
    invite_id: &str,
    request: RsvpRequest,
) -> Result<(), InviteError> {
    if request.rsvp {
        for attendee in &request.data {
            attendee.validate()?;
        }
    }

    let mut tx = pool.begin().await?;

    let result = InviteStore::set_rsvp(&mut *tx, invite_id, request.rsvp).await?;
    if result.rows_affected() == 0 {
        debug!("RSVP update for {invite_id} matched no invite");
    }

    if request.rsvp {
        for attendee in request.data {
            let attendee = attendee.into_upsert();
            let result = InviteStore::upsert_attendee(&mut *tx, invite_id, &attendee).await?;
            if result.rows_affected() == 0 {
                debug!(
                    "Attendee {} belongs to another invite, not updated",
                    attendee.id
                );
            }
        }
    }

    tx.commit().await?;
    Ok(())
}
