use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;

use crate::session::guard::{check, read_marker, Access};
use crate::session::{Role, SessionMarker};
use crate::state::AppState;

/// The signed-in actor, if any. Never rejects.
pub struct MaybeSession(pub Option<SessionMarker>);

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeSession(read_marker(
            &parts.headers,
            &state.config.auth.cookie_name,
        )))
    }
}

/// A researcher session. Anyone else is redirected: to sign-in without a
/// marker, to their own home with the wrong role.
pub struct UserSession(pub SessionMarker);

impl FromRequestParts<AppState> for UserSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guard(parts, state, Role::User).map(UserSession)
    }
}

/// An admin session, guarded the same way as [`UserSession`].
pub struct AdminSession(pub SessionMarker);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        guard(parts, state, Role::Admin).map(AdminSession)
    }
}

fn guard(parts: &Parts, state: &AppState, required: Role) -> Result<SessionMarker, Redirect> {
    let marker = read_marker(&parts.headers, &state.config.auth.cookie_name);
    match check(marker, required) {
        Access::Granted(marker) => Ok(marker),
        Access::Redirect(to) => {
            tracing::debug!("Redirecting {} to {}", parts.uri.path(), to);
            Err(Redirect::to(to))
        }
    }
}
