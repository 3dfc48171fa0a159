use v_htmlescape::escape;

const STYLE: &str = r#"
:root { color-scheme: dark; }
body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    background: radial-gradient(circle at top, #0f172a, #020617 60%);
    color: #e2e8f0;
}
a { color: #38bdf8; }
.wrap { display: flex; min-height: 100vh; }
.sidebar {
    width: 230px;
    padding: 1.5rem 1.25rem;
    background: rgba(15, 23, 42, 0.9);
    border-right: 1px solid rgba(148, 163, 184, 0.18);
}
.sidebar h1 { font-size: 1.15rem; margin: 0 0 0.5rem; }
.sidebar .welcome { color: #94a3b8; font-size: 0.9rem; margin-bottom: 1.5rem; }
.sidebar nav a {
    display: block;
    padding: 0.55rem 0.75rem;
    margin-bottom: 0.35rem;
    border-radius: 10px;
    text-decoration: none;
    color: #cbd5f5;
    cursor: pointer;
}
.sidebar nav a.active, .sidebar nav a:hover { background: rgba(56, 189, 248, 0.15); color: #38bdf8; }
.logout button {
    margin-top: 1.5rem;
    width: 100%;
    border: 1px solid rgba(148, 163, 184, 0.3);
    border-radius: 10px;
    background: transparent;
    color: #cbd5f5;
    padding: 0.5rem;
    cursor: pointer;
}
.content { flex: 1; padding: 2rem 2.5rem; max-width: 1100px; }
h2 { margin-top: 0; }
h3 { margin: 1.75rem 0 0.75rem; color: #cbd5f5; }
.metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(170px, 1fr)); gap: 1rem; }
.metric {
    background: rgba(15, 23, 42, 0.85);
    border: 1px solid rgba(148, 163, 184, 0.18);
    border-radius: 14px;
    padding: 1rem 1.25rem;
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
}
.metric-label { color: #94a3b8; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.05em; }
.metric-value { font-size: 1.35rem; font-weight: 600; }
table { width: 100%; border-collapse: collapse; margin-top: 0.75rem; }
thead th { text-align: left; color: #94a3b8; font-size: 0.85rem; padding: 0.5rem 0.75rem; text-transform: uppercase; }
tbody td { padding: 0.55rem 0.75rem; border-top: 1px solid rgba(148, 163, 184, 0.12); }
.table-empty { text-align: center; color: #64748b; padding: 1.5rem; }
.inline-error {
    display: flex;
    flex-direction: column;
    gap: 0.3rem;
    border: 1px solid rgba(248, 113, 113, 0.4);
    background: rgba(248, 113, 113, 0.12);
    border-radius: 12px;
    padding: 0.9rem 1.1rem;
    margin: 0.75rem 0;
    color: #f87171;
}
.inline-error .hint { color: #fca5a5; font-size: 0.9rem; }
.warn {
    border: 1px solid rgba(251, 191, 36, 0.4);
    background: rgba(251, 191, 36, 0.12);
    border-radius: 12px;
    padding: 0.9rem 1.1rem;
    margin: 0.75rem 0;
    color: #fbbf24;
}
.ok {
    border: 1px solid rgba(134, 239, 172, 0.4);
    background: rgba(134, 239, 172, 0.12);
    border-radius: 12px;
    padding: 0.9rem 1.1rem;
    margin: 0.75rem 0;
    color: #86efac;
}
form.controls { display: flex; flex-wrap: wrap; gap: 1rem; align-items: end; margin: 1rem 0; }
label { display: flex; flex-direction: column; gap: 0.35rem; font-size: 0.9rem; color: #cbd5f5; }
input, select {
    border-radius: 10px;
    border: 1px solid rgba(148, 163, 184, 0.3);
    background: rgba(15, 23, 42, 0.6);
    color: #e2e8f0;
    padding: 0.5rem 0.65rem;
    font-size: 0.95rem;
}
button.primary {
    border: none;
    border-radius: 10px;
    padding: 0.6rem 1.3rem;
    font-weight: 600;
    cursor: pointer;
    background: linear-gradient(135deg, #38bdf8, #2563eb);
    color: #0f172a;
}
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
@media (max-width: 900px) { .columns { grid-template-columns: 1fr; } }
.chart { background: rgba(15, 23, 42, 0.85); border: 1px solid rgba(148, 163, 184, 0.18); border-radius: 14px; padding: 0.75rem; }
.empty { color: #64748b; }
.login-card {
    width: min(360px, 92vw);
    margin: 14vh auto;
    background: rgba(15, 23, 42, 0.9);
    border: 1px solid rgba(148, 163, 184, 0.18);
    border-radius: 16px;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}
.login-card h1 { font-size: 1.3rem; margin: 0; }
.login-card .caption { color: #64748b; font-size: 0.8rem; }
"#;

/// Full HTML document wrapper shared by the login screen and the shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <script src="https://unpkg.com/htmx.org@1.9.12"></script>
    <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

fn nav_link(view: &str, label: &str, active: &str) -> String {
    let class = if view == active { " class=\"active\"" } else { "" };
    format!(
        r##"<a{class} hx-get="/views/{view}" hx-target="#content" hx-push-url="/?view={view}">{label}</a>"##,
    )
}

/// Authenticated page: persistent sidebar plus the selected view's content.
pub fn shell(username: &str, active_view: &str, content: &str) -> String {
    let body = format!(
        r#"<div class="wrap">
<aside class="sidebar">
    <h1>Analytics Dashboard</h1>
    <p class="welcome">Welcome, <strong>{username}</strong>!</p>
    <nav>
        {sales}
        {customer}
        {inventory}
    </nav>
    <form class="logout" method="post" action="/logout">
        <button type="submit">Log out</button>
    </form>
</aside>
<div class="content" id="content">
{content}
</div>
</div>"#,
        username = escape(username),
        sales = nav_link("sales", "Sales analysis", active_view),
        customer = nav_link("customer", "Customer analysis", active_view),
        inventory = nav_link("inventory", "Inventory analysis", active_view),
    );
    page("Analytics Dashboard", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_marks_the_active_view_and_greets_the_user() {
        let html = shell("analyst", "customer", "<p>hi</p>");
        assert!(html.contains("Welcome, <strong>analyst</strong>"));
        assert!(html.contains(r#"class="active" hx-get="/views/customer""#));
        assert!(!html.contains(r#"class="active" hx-get="/views/sales""#));
    }

    #[test]
    fn shell_escapes_the_username() {
        let html = shell("<b>x</b>", "sales", "");
        assert!(!html.contains("<b>x</b>"));
    }
}
