//! Axum router wiring.
//!
//! Routes are declared through an explicit table so duplicate registrations
//! are caught at startup instead of panicking deep inside the framework.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::app_state::AppState;
use crate::error::{ApiError, Result};
use crate::ops;

/// Ordered collection of `(path, handler)` entries. Paths must be unique;
/// per-method dispatch within a path is handled by the `MethodRouter`.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<(&'static str, MethodRouter<AppState>)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, path: &'static str, handler: MethodRouter<AppState>) -> Result<Self> {
        if self.routes.iter().any(|(p, _)| *p == path) {
            return Err(ApiError::BadRequest(format!(
                "duplicate route registration: {path}"
            )));
        }
        self.routes.push((path, handler));
        Ok(self)
    }

    pub fn into_router(self, state: AppState) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, (path, handler)| {
                router.route(path, handler)
            })
            .with_state(state)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_router(state: AppState) -> Result<Router> {
    Ok(RouteTable::new()
        .route("/", get(ops::root))?
        .route("/health", get(ops::health))?
        .route("/ready", get(ops::ready))?
        .route("/metrics", get(ops::metrics))?
        .into_router(state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_path_is_rejected() {
        let table = RouteTable::new()
            .route("/health", get(ops::health))
            .unwrap();
        let err = table.route("/health", get(ops::health)).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn build_router_succeeds() {
        let state = AppState::new(crate::config::ServiceConfig::default());
        assert!(build_router(state).is_ok());
    }
}
