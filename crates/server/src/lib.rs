#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
mod error;
mod exercises;
pub mod session;

pub use error::ApiError;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use ironlog_domain::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::session::SessionStore;

pub struct AppState<C> {
    pub catalog: Arc<C>,
    pub sessions: Arc<dyn SessionStore>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

pub fn router<C: Catalog>(state: AppState<C>) -> Router {
    Router::new()
        .route("/api/exercises", get(exercises::read_exercises::<C>))
        .route("/api/exercises/{id}", get(exercises::read_exercise::<C>))
        .route("/api/version", get(read_version))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn read_version() -> Json<&'static str> {
    Json(env!("CARGO_PKG_VERSION"))
}
