//! HTTP API for the medical graph

pub mod handlers;
pub mod routes;

pub use routes::create_router;
