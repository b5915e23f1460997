//! Inventory service
//!
//! CRUD and aggregate statistics over the `products` table, exposed as a JSON
//! HTTP API under `/api`, with static assets served for every other path.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;

pub use state::AppState;
