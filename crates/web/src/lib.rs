//! ObraPlan web frontend library.
//!
//! This crate provides the presentation layer as a library, allowing it to
//! be tested and reused. All authentication is delegated to the platform
//! backend through the [`services::session::SessionProvider`] seam.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
