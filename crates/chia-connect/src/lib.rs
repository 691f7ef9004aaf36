//! Connection configuration for Chia services.
//!
//! Chia services share a single certificate-based trust model: a client
//! proves itself by holding the service's private key/cert pair, the daemon
//! speaks a persistent WebSocket, and every other service answers
//! per-request HTTPS calls. This crate resolves where a service lives
//! ([`ChiaConnection`]), where its credentials sit on disk ([`paths`]), and
//! what to hand a TLS-capable transport ([`ClientOptions`]).
//!
//! No protocol lives here: take the options bundle and connect with the
//! WebSocket or HTTPS client of your choice.

pub mod connection;
pub mod error;
pub mod factory;
pub mod paths;
pub mod service;

pub use connection::{ChiaConnection, ClientOptions};
pub use error::{Error, Result};
pub use factory::{create_connection, create_connection_with_port};
pub use paths::{chia_root, expand_tilde};
pub use service::{Protocol, ServiceName};
