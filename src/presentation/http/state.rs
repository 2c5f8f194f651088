// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::presentation::http::matcher::SlugRouteTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub content_routes: Arc<SlugRouteTable>,
}
