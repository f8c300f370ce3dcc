// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::session::SessionSettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub session: Arc<SessionSettings>,
    pub allowed_origins: Arc<[String]>,
}
