//! The known Chia services, their default ports, and how each one expects
//! to be spoken to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of Chia services this crate knows how to address.
///
/// Wire names are snake_case (`full_node`, `data_layer`, ...) and show up
/// in credential filenames and config trees as well as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceName {
    Crawler,
    Daemon,
    DataLayer,
    Farmer,
    FullNode,
    Harvester,
    Wallet,
}

impl ServiceName {
    /// Every known service, for callers that want to iterate the set.
    pub const ALL: [Self; 7] = [
        Self::Crawler,
        Self::Daemon,
        Self::DataLayer,
        Self::Farmer,
        Self::FullNode,
        Self::Harvester,
        Self::Wallet,
    ];

    /// The service's wire name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crawler => "crawler",
            Self::Daemon => "daemon",
            Self::DataLayer => "data_layer",
            Self::Farmer => "farmer",
            Self::FullNode => "full_node",
            Self::Harvester => "harvester",
            Self::Wallet => "wallet",
        }
    }

    /// The default port the service listens on: the daemon's WebSocket
    /// port, or the RPC port for everything else.
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Crawler => 8561,
            Self::Daemon => 55400,
            Self::DataLayer => 8562,
            Self::Farmer => 8559,
            Self::FullNode => 8555,
            Self::Harvester => 8560,
            Self::Wallet => 9256,
        }
    }

    /// The protocol this service speaks.
    pub fn protocol(self) -> Protocol {
        Protocol::for_service(self.as_str())
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service name outside the known set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service name: {0}")]
pub struct UnknownService(pub String);

impl FromStr for ServiceName {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

/// How a service expects to be spoken to.
///
/// The daemon holds one persistent WebSocket per client; every other
/// service answers individual HTTPS requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// Persistent streaming socket (`wss`).
    Streaming,
    /// Per-request HTTPS (`https`).
    RequestResponse,
}

impl Protocol {
    /// Select the protocol for a service name.
    ///
    /// Names outside the known set fall back to
    /// [`Protocol::RequestResponse`]; only the daemon streams.
    pub fn for_service(service: &str) -> Self {
        if service == ServiceName::Daemon.as_str() {
            Self::Streaming
        } else {
            Self::RequestResponse
        }
    }

    /// The URI scheme for addresses using this protocol.
    pub const fn scheme(self) -> &'static str {
        match self {
            Self::Streaming => "wss",
            Self::RequestResponse => "https",
        }
    }
}
