//! Deterministic presentation ordering.
//!
//! Hosts sort in numeric IPv4 order, ports ascending. Malformed addresses
//! cannot reach this module: the snapshot boundary already rejected them and
//! the keys here are parsed [`Ipv4Addr`]s.

use std::net::Ipv4Addr;

use recap_common::model::{PortFinding, ScanSnapshot};

/// Host addresses in numeric octet order (`10.0.0.2` before `10.0.0.10`).
///
/// The snapshot stores parsed addresses in a `BTreeMap`, so this is a
/// straight key walk; the ordering invariant lives in the key type.
pub fn hosts(snapshot: &ScanSnapshot) -> Vec<Ipv4Addr> {
    snapshot.hosts().keys().copied().collect()
}

/// Findings ascending by port. Stable: ties keep their first-seen order.
pub fn findings(findings: &[PortFinding]) -> Vec<&PortFinding> {
    let mut sorted: Vec<&PortFinding> = findings.iter().collect();
    sorted.sort_by_key(|finding| finding.port);
    sorted
}
