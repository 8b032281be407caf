//! NextGen Leads API Library
//!
//! This library provides the core functionality for the NextGen marketing
//! site's lead-capture backend: the public contact-form endpoint, the
//! token-gated lead management API, persistence, and validation.
//!
//! # Modules
//!
//! - `auth`: Operator bearer-token middleware.
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `routes`: Route table assembly.
//! - `store`: Lead storage operations.
//! - `validation`: Contact form field validation.

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod validation;
