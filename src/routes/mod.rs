// Route exports
pub mod analysis;
pub mod matches;

use crate::core::Matcher;
use crate::services::Roster;
use actix_web::web;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Roster>,
    pub matcher: Matcher,
}

/// Routes are registered at the root path; existing callers do not use a
/// version prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(analysis::configure)
        .configure(matches::configure);
}
