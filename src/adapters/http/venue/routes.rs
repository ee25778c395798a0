//! Axum router configuration for venue authorization endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    authorize_manage_sessions, authorize_manage_venue, authorize_view_bookings, check_role,
    get_permissions, get_role, VenueAppState,
};

/// Create the venue API router.
///
/// # Routes
///
/// All require authentication; answers are for the caller.
/// - `GET /:venue_id/role` - Active role or null
/// - `GET /:venue_id/roles/:role` - Whether the caller holds at least `role`
/// - `GET /:venue_id/permissions` - Owner/admin/coach/member flags
/// - `GET /:venue_id/authorize/manage-venue` - Decision
/// - `GET /:venue_id/authorize/manage-sessions` - Decision
/// - `GET /:venue_id/authorize/view-bookings` - Decision (`target_user_id`, `coach_id` query)
pub fn venue_routes() -> Router<VenueAppState> {
    Router::new()
        .route("/:venue_id/role", get(get_role))
        .route("/:venue_id/roles/:role", get(check_role))
        .route("/:venue_id/permissions", get(get_permissions))
        .route("/:venue_id/authorize/manage-venue", get(authorize_manage_venue))
        .route(
            "/:venue_id/authorize/manage-sessions",
            get(authorize_manage_sessions),
        )
        .route(
            "/:venue_id/authorize/view-bookings",
            get(authorize_view_bookings),
        )
}

/// Venue routes mounted at `/venues`, ready to nest under `/api`.
pub fn venue_router() -> Router<VenueAppState> {
    Router::new().nest("/venues", venue_routes())
}
