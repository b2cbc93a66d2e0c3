use std::net::Ipv4Addr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors the reporting core can surface to a caller.
///
/// Recoverable conditions (a custom template that cannot be read) are handled
/// locally with a logged fallback and never reach this enum.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A host key in the snapshot is not a dotted-quad IPv4 address.
    ///
    /// Ordering is defined over parsed addresses, so a bad key is rejected
    /// here, before any statistics or rendering work happens.
    #[error("malformed host address '{addr}': expected dotted-quad IPv4")]
    MalformedAddress { addr: String },

    /// A finding carries a port outside 1-65535.
    #[error("host {host}: port {port} is outside the valid range 1-65535")]
    PortOutOfRange { host: Ipv4Addr, port: u32 },

    /// The snapshot document is not valid JSON of the collaborator contract.
    #[error("snapshot is not valid scan output: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    /// The HTML report could not be written. Fatal, never retried.
    #[error("failed to write HTML report to {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
