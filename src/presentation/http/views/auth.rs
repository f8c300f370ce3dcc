// src/presentation/http/views/auth.rs
use super::{escape, layout};
use crate::application::dto::AuthenticatedUser;

const LOGIN_SCRIPT: &str = r"
document.getElementById('login-form').addEventListener('submit', async function (event) {
  event.preventDefault();
  var form = event.target;
  var data = new FormData(form);
  var response = await fetch('/api/login', {
    method: 'POST',
    credentials: 'same-origin',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ email: data.get('email'), password: data.get('password') })
  });
  if (response.ok) { window.location.href = form.dataset.callback; return; }
  var payload = await response.json().catch(function () { return {}; });
  document.getElementById('login-error').textContent = payload.message || 'Login failed';
});
";

const REGISTER_SCRIPT: &str = r"
document.getElementById('register-form').addEventListener('submit', async function (event) {
  event.preventDefault();
  var data = new FormData(event.target);
  var response = await fetch('/api/register', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ name: data.get('name'), email: data.get('email'), password: data.get('password') })
  });
  if (response.ok) { window.location.href = '/login'; return; }
  var payload = await response.json().catch(function () { return {}; });
  document.getElementById('register-error').textContent = payload.message || 'Registration failed';
});
";

/// `callback` must already be a vetted same-site path.
pub fn login_page(user: Option<&AuthenticatedUser>, callback: &str) -> String {
    let body = format!(
        r#"<section class="card">
<h1>Login</h1>
<form id="login-form" data-callback="{callback}">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<p class="error" id="login-error"></p>
<button type="submit">Login</button>
</form>
<p>No account yet? <a href="/register">Register</a></p>
</section>"#,
        callback = escape(callback)
    );
    layout("Login", user, &body, LOGIN_SCRIPT)
}

pub fn register_page(user: Option<&AuthenticatedUser>) -> String {
    let body = r#"<section class="card">
<h1>Register</h1>
<form id="register-form">
<label>Name <input type="text" name="name" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<p class="error" id="register-error"></p>
<button type="submit">Create account</button>
</form>
<p>Already registered? <a href="/login">Login</a></p>
</section>"#;
    layout("Register", user, body, REGISTER_SCRIPT)
}
