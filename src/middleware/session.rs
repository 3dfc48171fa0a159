use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use crate::AppState;
use crate::error::AppError;

pub const SESSION_COOKIE: &str = "session_id";

/// Resolves the session cookie and guards every protected route. Handlers
/// behind this middleware receive the `Session` as an extension; requests
/// without a live session never reach them.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let session = match session_id(&jar) {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };

    match session {
        Some(session) => {
            request.extensions_mut().insert(session);
            next.run(request).await
        }
        None => {
            // htmx fragment requests get a bare 401; browser navigations are
            // sent back to the login screen.
            if request.headers().contains_key("hx-request") {
                AppError::Unauthorized.into_response()
            } else {
                Redirect::to("/login").into_response()
            }
        }
    }
}

pub fn session_id(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}
