//! HTTP server for the portfolio site.
//!
//! Serves the server-rendered index page, a JSON API under `/api/v1`, and
//! static assets for every path no route claims.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
