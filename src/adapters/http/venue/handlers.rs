//! HTTP handlers for venue authorization endpoints.
//!
//! Every endpoint answers for the authenticated caller. Denials are ordinary
//! 200 responses; only lookup failures and bad input produce error statuses.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{GetVenuePermissionsHandler, GetVenuePermissionsQuery, VenueAuthorizer};
use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError, VenueId};
use crate::domain::venue::{VenueAction, VenueRole};

use super::super::middleware::RequireAuth;
use super::dto::{
    DecisionResponse, ErrorResponse, HasRoleResponse, VenuePermissionsResponse,
    VenueRoleResponse, ViewBookingsParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for venue endpoints.
#[derive(Clone)]
pub struct VenueAppState {
    pub authorizer: VenueAuthorizer,
}

impl VenueAppState {
    pub fn new(authorizer: VenueAuthorizer) -> Self {
        Self { authorizer }
    }

    pub fn permissions_handler(&self) -> GetVenuePermissionsHandler {
        GetVenuePermissionsHandler::new(self.authorizer.clone())
    }
}

fn parse_venue_id(raw: String) -> Result<VenueId, VenueApiError> {
    Ok(VenueId::new(raw)?)
}

/// An empty query value (`?coach_id=`) counts as not supplied.
fn parse_optional_user(raw: Option<String>) -> Result<Option<UserId>, VenueApiError> {
    Ok(raw
        .filter(|value| !value.is_empty())
        .map(UserId::new)
        .transpose()?)
}

// ════════════════════════════════════════════════════════════════════════════════
// Role Queries
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/venues/:venue_id/role - Caller's active role
pub async fn get_role(
    State(state): State<VenueAppState>,
    RequireAuth(user): RequireAuth,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, VenueApiError> {
    let venue_id = parse_venue_id(venue_id)?;
    let role = state.authorizer.get_user_venue_role(&user.id, &venue_id).await?;

    Ok(Json(VenueRoleResponse {
        venue_id: venue_id.to_string(),
        role,
    }))
}

/// GET /api/venues/:venue_id/roles/:role - Does the caller hold at least `role`?
pub async fn check_role(
    State(state): State<VenueAppState>,
    RequireAuth(user): RequireAuth,
    Path((venue_id, role)): Path<(String, String)>,
) -> Result<impl IntoResponse, VenueApiError> {
    let venue_id = parse_venue_id(venue_id)?;
    let required_role: VenueRole = role.parse().map_err(|e: ValidationError| {
        VenueApiError(DomainError::new(ErrorCode::InvalidRole, e.to_string()))
    })?;

    let has_role = state
        .authorizer
        .has_venue_role(&user.id, &venue_id, required_role)
        .await?;

    Ok(Json(HasRoleResponse {
        venue_id: venue_id.to_string(),
        required_role,
        has_role,
    }))
}

/// GET /api/venues/:venue_id/permissions - All role flags at once
pub async fn get_permissions(
    State(state): State<VenueAppState>,
    RequireAuth(user): RequireAuth,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, VenueApiError> {
    let query = GetVenuePermissionsQuery {
        user_id: user.id,
        venue_id: parse_venue_id(venue_id)?,
    };

    let permissions = state.permissions_handler().handle(query).await?;

    Ok(Json(VenuePermissionsResponse::from(permissions)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Policy Decisions
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/venues/:venue_id/authorize/manage-venue
pub async fn authorize_manage_venue(
    State(state): State<VenueAppState>,
    RequireAuth(user): RequireAuth,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, VenueApiError> {
    let venue_id = parse_venue_id(venue_id)?;
    let decision = state.authorizer.can_manage_venue(&user.id, &venue_id).await?;

    Ok(Json(DecisionResponse {
        venue_id: venue_id.to_string(),
        action: VenueAction::ManageVenue,
        decision,
    }))
}

/// GET /api/venues/:venue_id/authorize/manage-sessions
pub async fn authorize_manage_sessions(
    State(state): State<VenueAppState>,
    RequireAuth(user): RequireAuth,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, VenueApiError> {
    let venue_id = parse_venue_id(venue_id)?;
    let decision = state
        .authorizer
        .can_manage_sessions(&user.id, &venue_id)
        .await?;

    Ok(Json(DecisionResponse {
        venue_id: venue_id.to_string(),
        action: VenueAction::ManageSessions,
        decision,
    }))
}

/// GET /api/venues/:venue_id/authorize/view-bookings?target_user_id=&coach_id=
pub async fn authorize_view_bookings(
    State(state): State<VenueAppState>,
    RequireAuth(user): RequireAuth,
    Path(venue_id): Path<String>,
    Query(params): Query<ViewBookingsParams>,
) -> Result<impl IntoResponse, VenueApiError> {
    let venue_id = parse_venue_id(venue_id)?;
    let target_user_id = parse_optional_user(params.target_user_id)?;
    let coach_id = parse_optional_user(params.coach_id)?;

    let decision = state
        .authorizer
        .can_view_bookings(
            &user.id,
            &venue_id,
            target_user_id.as_ref(),
            coach_id.as_ref(),
        )
        .await?;

    Ok(Json(DecisionResponse {
        venue_id: venue_id.to_string(),
        action: VenueAction::ViewBookings,
        decision,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub struct VenueApiError(pub DomainError);

impl From<DomainError> for VenueApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for VenueApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for VenueApiError {
    fn into_response(self) -> Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed | ErrorCode::InvalidRole => StatusCode::BAD_REQUEST,
            ErrorCode::InsufficientPermissions => StatusCode::FORBIDDEN,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                tracing::error!(code = %self.0.code, "Venue request failed: {}", self.0.message);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Infrastructure detail stays in the logs.
        let message = if status.is_server_error() {
            "Internal error".to_string()
        } else {
            self.0.message
        };

        (status, Json(ErrorResponse::new(self.0.code.as_str(), message))).into_response()
    }
}
