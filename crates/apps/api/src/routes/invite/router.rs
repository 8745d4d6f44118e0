use crate::api_state::ApiContext;
use crate::invite::handlers::{get_invite_handler, update_invite_handler};
use axum::{Router, routing::get};

pub fn invite_public_router() -> Router<ApiContext> {
    Router::new().route(
        "/api/{invite_id}",
        get(get_invite_handler).post(update_invite_handler),
    )
}
