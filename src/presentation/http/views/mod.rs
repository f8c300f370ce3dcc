// src/presentation/http/views/mod.rs
//! Server-rendered pages. Every value that came from a user goes through
//! [`escape`] before it lands in markup.

mod auth;
mod dashboard;
mod home;

pub use auth::{login_page, register_page};
pub use dashboard::dashboard_page;
pub use home::home_page;

use crate::application::dto::AuthenticatedUser;
use chrono::{DateTime, Utc};

pub const PUBLIC_SUMMARY_CHARS: usize = 150;
pub const DASHBOARD_SUMMARY_CHARS: usize = 100;

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6f8; color: #222; }
nav { display: flex; gap: 1rem; align-items: center; padding: 0.75rem 2rem; background: #1f2937; }
nav a, nav span, nav button { color: #f9fafb; text-decoration: none; font-size: 0.95rem; }
nav .spacer { flex: 1; }
nav button { background: none; border: 1px solid #9ca3af; border-radius: 4px; padding: 0.25rem 0.75rem; cursor: pointer; }
main { max-width: 860px; margin: 2rem auto; padding: 0 1rem; }
.card { background: #fff; border-radius: 6px; padding: 1rem 1.25rem; margin-bottom: 1rem; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }
.meta { color: #6b7280; font-size: 0.85rem; }
.badge { font-size: 0.75rem; padding: 0.1rem 0.5rem; border-radius: 999px; }
.badge.published { background: #d1fae5; color: #065f46; }
.badge.draft { background: #fef3c7; color: #92400e; }
form label { display: block; margin-top: 0.75rem; }
form input[type=text], form input[type=email], form input[type=password], form textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
.error { color: #b91c1c; }
";

const SIGN_OUT_SCRIPT: &str = r"
document.querySelectorAll('[data-sign-out]').forEach(function (button) {
  button.addEventListener('click', async function () {
    await fetch('/api/logout', { method: 'POST', credentials: 'same-origin' });
    window.location.href = '/';
  });
});
";

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

pub fn display_date(at: DateTime<Utc>) -> String {
    at.format("%-d/%-m/%Y").to_string()
}

fn navbar(user: Option<&AuthenticatedUser>) -> String {
    match user {
        Some(user) => format!(
            r#"<nav><a href="/">Home</a><a href="/dashboard">Dashboard</a><span class="spacer"></span><span>Hello, {}</span><button type="button" data-sign-out>Sign Out</button></nav>"#,
            escape(user.display_name())
        ),
        None => r#"<nav><a href="/">Home</a><span class="spacer"></span><a href="/login">Login</a><a href="/register">Register</a></nav>"#
            .to_string(),
    }
}

/// Full document around `body`; `script` is appended after the sign-out
/// handler.
fn layout(title: &str, user: Option<&AuthenticatedUser>, body: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{nav}
<main>
{body}
</main>
<script>{SIGN_OUT_SCRIPT}{script}</script>
</body>
</html>"#,
        title = escape(title),
        nav = navbar(user),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::TimeZone;

    fn user(name: &str) -> AuthenticatedUser {
        let now = Utc::now();
        AuthenticatedUser {
            id: UserId(1),
            name: name.into(),
            email: "ana@x.com".into(),
            issued_at: now,
            expires_at: now,
        }
    }

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
    }

    #[test]
    fn navbar_reflects_session() {
        let signed_out = navbar(None);
        assert!(signed_out.contains("/login"));
        assert!(signed_out.contains("/register"));
        assert!(!signed_out.contains("Sign Out"));

        let signed_in = navbar(Some(&user("Ana")));
        assert!(signed_in.contains("Hello, Ana"));
        assert!(signed_in.contains("/dashboard"));
        assert!(signed_in.contains("Sign Out"));
        assert!(!signed_in.contains("/register"));
    }

    #[test]
    fn navbar_falls_back_to_email() {
        assert!(navbar(Some(&user("  "))).contains("Hello, ana@x.com"));
    }

    #[test]
    fn dates_render_day_first() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(display_date(at), "7/3/2024");
    }
}
