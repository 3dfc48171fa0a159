use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tracing::{info, warn};

use super::model::LoginRequest;
use crate::AppState;
use crate::middleware::{SESSION_COOKIE, session_id};
use crate::views;

#[axum::debug_handler]
pub async fn login_page() -> Html<String> {
    Html(views::login::login_page(None))
}

/// Auth gate: digest the submitted password, compare against the credential
/// store, and open a session on a match. A mismatch re-renders the login
/// page with an inline error and leaves no session behind.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(req): Form<LoginRequest>,
) -> Response {
    if !state.credentials.verify(&req.username, &req.password) {
        warn!(username = %req.username, "login rejected");
        return Html(views::login::login_page(Some("Authentication failed"))).into_response();
    }

    let session = state.sessions.create(&req.username).await;
    info!(username = %req.username, "login succeeded");

    let cookie = Cookie::build((SESSION_COOKIE, session.to_string()))
        .path("/")
        .http_only(true)
        .build();
    (jar.add(cookie), Redirect::to("/")).into_response()
}

/// Clears the session if one exists. Safe to call with a stale or missing
/// cookie, so repeated logouts always land back on the login screen.
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(id) = session_id(&jar) {
        state.sessions.remove(id).await;
    }
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/login")).into_response()
}
