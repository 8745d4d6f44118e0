use crate::api_state::ApiContext;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use common_services::api::invite::error::InviteError;
use common_services::api::invite::interfaces::{InviteFailureResponse, RsvpRequest, StatusResponse};
use common_services::api::invite::service::{get_invite_with_attendees, update_invite};
use common_services::database::invite::Invite;
use tracing::info;

/// Get an invite with its attendees.
///
/// Reading an invite records when it was first and last opened. Failures are
/// still returned with status 200, flagged with `status: false`.
#[utoipa::path(
    get,
    path = "/api/{invite_id}",
    tag = "Invite",
    params(
        ("invite_id" = String, Path, description = "The unique ID of the invite.")
    ),
    responses(
        (status = 200, description = "The invite and its attendees, keyed by attendee id. \
            If the invite could not be read, an `InviteFailureResponse` instead.", body = Invite),
    )
)]
pub async fn get_invite_handler(
    State(context): State<ApiContext>,
    Path(invite_id): Path<String>,
) -> Result<Json<Invite>, Json<InviteFailureResponse>> {
    let invite = get_invite_with_attendees(&context.pool, &invite_id)
        .await
        .map_err(|e| Json(InviteFailureResponse::from(e)))?;
    Ok(Json(invite))
}

/// RSVP to an invite.
///
/// Sets the RSVP flag. When `rsvp` is true, the attendees in `data` are saved as
/// well: attendees with a known `id` are updated, the rest are added.
#[utoipa::path(
    post,
    path = "/api/{invite_id}",
    tag = "Invite",
    params(
        ("invite_id" = String, Path, description = "The unique ID of the invite.")
    ),
    request_body = RsvpRequest,
    responses(
        (status = 200, description = "RSVP saved.", body = StatusResponse),
        (status = 400, description = "Malformed body, invalid attendee or database error.", body = StatusResponse),
    )
)]
pub async fn update_invite_handler(
    State(context): State<ApiContext>,
    Path(invite_id): Path<String>,
    payload: Result<Json<RsvpRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, InviteError> {
    let Json(request) = payload?;
    info!(
        "RSVP for invite {}: rsvp={}, {} attendee(s)",
        invite_id,
        request.rsvp,
        request.data.len()
    );
    update_invite(&context.pool, &invite_id, request).await?;
    Ok(Json(StatusResponse::ok()))
}
