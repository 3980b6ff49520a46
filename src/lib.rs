//! bizreg - small multi-tenant business registry
//!
//! Owners register with a name and password, create at most one company, and
//! manage that company's employees. Requests authenticate with a
//! `name:password` Authorization header.

pub mod auth;
pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ownership;

use axum::Router;

use crate::db::AppState;

/// Full application router (public and owner-authenticated routes).
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::public::router())
        .merge(handlers::companies::router(state.clone()))
        .with_state(state)
}
