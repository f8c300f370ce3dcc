// src/presentation/http/middleware/session_gate.rs
use crate::presentation::http::{
    session::{is_gated, session_token},
    state::HttpState,
};
use axum::{
    Extension,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Requests under a gated prefix need a valid session. Without one the
/// browser is sent to the login page with the original path as callback.
pub async fn session_gate(
    Extension(state): Extension<HttpState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if !is_gated(&path, &state.session.gated_prefixes) {
        return next.run(request).await;
    }

    let Some(token) = session_token(request.headers()) else {
        return login_redirect(&path);
    };

    match state.services.token_manager().authenticate(&token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) => {
            tracing::debug!(error = %err, path = %path, "session rejected by gate");
            login_redirect(&path)
        }
    }
}

fn login_redirect(path: &str) -> Response {
    let query = serde_urlencoded::to_string([("callbackUrl", path)])
        .unwrap_or_else(|_| "callbackUrl=%2F".to_string());
    Redirect::to(&format!("/login?{query}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[test]
    fn redirect_carries_encoded_callback() {
        let response = login_redirect("/dashboard/new");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/login?callbackUrl=%2Fdashboard%2Fnew"
        );
    }
}
