//! Connection descriptors for Chia services.
//!
//! A [`ChiaConnection`] captures where a service lives and which key/cert
//! pair proves the caller to it. It answers two independent queries: a
//! formatted service address and a TLS options bundle. The actual handshake
//! belongs to whatever transport consumes the bundle.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::paths::expand_tilde;
use crate::service::Protocol;

/// The details needed to connect to one Chia service.
///
/// All fields are set at construction and never change. `service` is
/// deliberately an open string: values outside the known set are accepted
/// and addressed over `https`, so a descriptor for a service newer than
/// this crate still works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChiaConnection {
    /// Service name; `daemon` selects the streaming scheme.
    pub service: String,
    /// Hostname or literal IP. Not validated.
    pub host: String,
    pub port: u16,
    /// Path to the client key file; may start with `~`.
    pub key_path: String,
    /// Path to the client cert file; may start with `~`.
    pub cert_path: String,
    /// Carried through to the transport; never enforced here.
    pub timeout_seconds: u64,
}

/// TLS parameters for a connection to a Chia service.
///
/// Peer verification is off: services under one operator identify each
/// other by possession of the matching key/cert pair, not by CA-validated
/// identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub verify_peer: bool,
    pub keep_alive: bool,
    /// Raw bytes of the private key file.
    pub key: Vec<u8>,
    /// Raw bytes of the certificate file.
    pub cert: Vec<u8>,
}

impl ChiaConnection {
    /// Store the connection details verbatim. No I/O, no validation.
    pub fn new(
        service: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        key_path: impl Into<String>,
        cert_path: impl Into<String>,
        timeout_seconds: u64,
    ) -> Self {
        Self {
            service: service.into(),
            host: host.into(),
            port,
            key_path: key_path.into(),
            cert_path: cert_path.into(),
            timeout_seconds,
        }
    }

    /// The protocol this connection's service speaks.
    pub fn protocol(&self) -> Protocol {
        Protocol::for_service(&self.service)
    }

    /// The service's address: `wss://host:port` for the daemon,
    /// `https://host:port` for everything else.
    pub fn service_address(&self) -> String {
        format!("{}://{}:{}", self.protocol().scheme(), self.host, self.port)
    }

    /// Build the TLS options bundle for this connection.
    ///
    /// Both paths are tilde-expanded and read from disk on every call, so
    /// credentials rotated on disk are picked up without building a new
    /// descriptor.
    ///
    /// # Errors
    ///
    /// [`Error::FileAccess`] naming whichever of the two files could not
    /// be read.
    pub fn client_options(&self) -> Result<ClientOptions> {
        let key = read_credential(&self.key_path)?;
        let cert = read_credential(&self.cert_path)?;
        Ok(ClientOptions {
            verify_peer: false,
            keep_alive: true,
            key,
            cert,
        })
    }
}

fn read_credential(path: &str) -> Result<Vec<u8>> {
    let resolved = PathBuf::from(expand_tilde(path).as_ref());
    debug!(path = %resolved.display(), "Reading TLS credential");
    std::fs::read(&resolved).map_err(|source| Error::FileAccess {
        path: resolved,
        source,
    })
}
