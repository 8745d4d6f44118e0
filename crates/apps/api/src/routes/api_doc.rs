use crate::routes::{invite, root};
use common_services::api::invite::interfaces::{
    AttendeePayload, InviteFailureResponse, RsvpRequest, StatusResponse,
};
use common_services::database::attendee::Attendee;
use common_services::database::invite::Invite;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Invite handlers
        invite::handlers::get_invite_handler,
        invite::handlers::update_invite_handler,
    ),
    components(
        schemas(
            Invite,
            Attendee,
            RsvpRequest,
            AttendeePayload,
            StatusResponse,
            InviteFailureResponse,
        ),
    ),
    tags(
        (name = "Invite", description = "Reading invites and submitting RSVPs"),
        (name = "System", description = "Liveness and readiness endpoints"),
    )
)]
pub struct ApiDoc;
