//! Convenience constructors for connections to well-known services.
//!
//! Builds a [`ChiaConnection`] from the conventions under the Chia root:
//! the default port for the service and the credential pair at
//! `config/ssl/<service>/private_<service>.{key,crt}`.

use tracing::debug;

use crate::connection::ChiaConnection;
use crate::paths::{default_cert_path, default_key_path};
use crate::service::ServiceName;

/// Default connection timeout carried on factory-built descriptors.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Build a connection to `service` at `host` on the service's default
/// port, using the conventional credential paths under [`chia_root`].
///
/// [`chia_root`]: crate::paths::chia_root
pub fn create_connection(
    service: ServiceName,
    host: &str,
    timeout_seconds: u64,
) -> ChiaConnection {
    create_connection_with_port(service, host, service.default_port(), timeout_seconds)
}

/// Same as [`create_connection`], with an explicit port.
pub fn create_connection_with_port(
    service: ServiceName,
    host: &str,
    port: u16,
    timeout_seconds: u64,
) -> ChiaConnection {
    debug!(service = %service, host, port, "Building service connection");
    ChiaConnection::new(
        service.as_str(),
        host,
        port,
        default_key_path(service).to_string_lossy(),
        default_cert_path(service).to_string_lossy(),
        timeout_seconds,
    )
}
