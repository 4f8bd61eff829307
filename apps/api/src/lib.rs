//! Curricula API: AI-assisted course builder backend.
//!
//! Exposes the building blocks (config, state, errors, routes, stores,
//! generators) so integration tests and the binary entrypoint can both
//! reach them.

pub mod auth;
pub mod config;
pub mod courses;
pub mod db;
pub mod errors;
pub mod generation;
pub mod identity;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
