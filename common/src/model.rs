//! # Scan Result Model
//!
//! Defines the immutable snapshot consumed by all reporting logic.
//!
//! The probing engine hands over a JSON mapping from dotted-quad host address
//! to an object with a `ports` array. Everything permissive about that
//! contract is resolved here, at the deserialization boundary:
//! * `risk` labels outside the four recognized tiers coerce to [`RiskTier::Unknown`],
//! * a missing `risk` falls back to the service catalog default,
//! * a missing `service` falls back to the catalog name, else `"unknown"`,
//! * a missing `version` becomes the empty string,
//! * a missing or out-of-range `port` rejects the snapshot.
//!
//! Renderers downstream never re-apply defaults; what they see is final.

use std::collections::BTreeMap;
use std::fmt;
use std::net::Ipv4Addr;

use serde::Deserialize;

use crate::catalog;
use crate::error::ReportError;

/// Fixed severity taxonomy used for both counting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RiskTier {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [
        RiskTier::High,
        RiskTier::Medium,
        RiskTier::Low,
        RiskTier::Unknown,
    ];

    /// Permissive constructor: any label outside the taxonomy maps to
    /// `Unknown` so the aggregate counts and the rendered badges can never
    /// disagree about a finding.
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => RiskTier::High,
            "Medium" => RiskTier::Medium,
            "Low" => RiskTier::Low,
            _ => RiskTier::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low => "Low",
            RiskTier::Unknown => "Unknown",
        }
    }

    /// Badge class suffix used by the HTML renderer (`badge-high` etc.).
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskTier::High => "high",
            RiskTier::Medium => "medium",
            RiskTier::Low => "low",
            RiskTier::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RiskTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(RiskTier::from_label(&label))
    }
}

/// One observed open port with its service metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortFinding {
    pub port: u16,
    pub service: String,
    /// Product and version joined by a space; empty when not fingerprinted.
    pub version: String,
    pub risk: RiskTier,
}

/// One scanned host. A host can be present with no findings, meaning it was
/// seen alive but exposed no open port in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostResult {
    pub findings: Vec<PortFinding>,
}

/// Wire shape of one finding as emitted by the probing engine.
#[derive(Debug, Deserialize)]
struct RawFinding {
    port: u32,
    service: Option<String>,
    #[serde(default)]
    version: String,
    risk: Option<RiskTier>,
}

#[derive(Debug, Deserialize)]
struct RawHost {
    #[serde(default)]
    ports: Vec<RawFinding>,
}

/// The complete, immutable result set for a single scan run.
///
/// Keys are parsed [`Ipv4Addr`]s, whose `Ord` is numeric octet order. The
/// map key choice itself guarantees the presentation ordering invariant:
/// `10.0.0.2` sorts before `10.0.0.10`.
#[derive(Debug, Clone, Default)]
pub struct ScanSnapshot {
    hosts: BTreeMap<Ipv4Addr, HostResult>,
}

impl ScanSnapshot {
    /// Parses a snapshot from the probing engine's JSON output.
    ///
    /// Fails on malformed host keys, out-of-range ports, or a document that
    /// does not match the contract shape. Succeeding here means every
    /// downstream component operates on fully normalized data.
    pub fn from_json(input: &str) -> Result<Self, ReportError> {
        let raw: BTreeMap<String, RawHost> = serde_json::from_str(input)?;

        let mut hosts = BTreeMap::new();
        for (addr, raw_host) in raw {
            let host_addr: Ipv4Addr = addr
                .parse()
                .map_err(|_| ReportError::MalformedAddress { addr: addr.clone() })?;

            let mut findings = Vec::with_capacity(raw_host.ports.len());
            for raw_finding in raw_host.ports {
                findings.push(normalize_finding(host_addr, raw_finding)?);
            }

            hosts.insert(host_addr, HostResult { findings });
        }

        Ok(Self { hosts })
    }

    pub fn hosts(&self) -> &BTreeMap<Ipv4Addr, HostResult> {
        &self.hosts
    }

    pub fn host(&self, addr: &Ipv4Addr) -> Option<&HostResult> {
        self.hosts.get(addr)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Build-phase insertion. Once report generation starts the snapshot is
    /// only ever handed out by shared reference.
    pub fn insert(&mut self, addr: Ipv4Addr, host: HostResult) {
        self.hosts.insert(addr, host);
    }
}

/// Applies the documented field defaults for one wire finding.
fn normalize_finding(host: Ipv4Addr, raw: RawFinding) -> Result<PortFinding, ReportError> {
    if raw.port == 0 || raw.port > u32::from(u16::MAX) {
        return Err(ReportError::PortOutOfRange { host, port: raw.port });
    }
    let port = raw.port as u16;

    let service = match raw.service {
        Some(service) => service,
        None => catalog::default_service(port),
    };
    let risk = match raw.risk {
        Some(risk) => risk,
        None => catalog::default_risk(port),
    };

    Ok(PortFinding {
        port,
        service,
        version: raw.version,
        risk,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
