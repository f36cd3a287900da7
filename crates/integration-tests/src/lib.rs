//! Integration tests for ObraPlan.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the web frontend against a platform backend
//! cargo run -p obraplan-web
//!
//! # Run integration tests
//! cargo test -p obraplan-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flows` - Login, master login, and password recovery flows
//!
//! The tests drive a running instance over HTTP with a cookie-holding
//! client; they are `#[ignore]`d by default because they need the web
//! frontend (and its platform backend) to be up.
