use v_htmlescape::escape;

use super::layout;

/// Login screen, optionally with the inline failure message. Failed attempts
/// re-render this page; nothing else is reachable while unauthenticated.
pub fn login_page(error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!(
            r#"<div class="inline-error"><strong>{}</strong></div>"#,
            escape(message)
        ),
        None => String::new(),
    };
    let body = format!(
        r#"<form class="login-card" method="post" action="/login">
    <h1>Analytics Dashboard &mdash; Sign in</h1>
    {error_html}
    <label>Username
        <input type="text" name="username" autocomplete="username" required>
    </label>
    <label>Password
        <input type="password" name="password" autocomplete="current-password" required>
    </label>
    <button class="primary" type="submit">Sign in</button>
    <p class="caption">Accounts are provisioned by the operator.</p>
</form>"#
    );
    layout::page("Sign in", &body)
}
