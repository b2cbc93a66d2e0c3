//! Well-known service catalog.
//!
//! Maps common ports to a canonical service name and a default risk tier.
//! The probing engine normally supplies both fields itself; the catalog only
//! backs the documented defaults for records that omit them.

use crate::model::RiskTier;

pub struct ServiceEntry {
    pub name: &'static str,
    pub risk: RiskTier,
}

/// Sorted by port so [`lookup`] can binary-search.
const COMMON_SERVICES: &[(u16, ServiceEntry)] = &[
    (21, ServiceEntry { name: "FTP", risk: RiskTier::Medium }),
    (22, ServiceEntry { name: "SSH", risk: RiskTier::Low }),
    (23, ServiceEntry { name: "Telnet", risk: RiskTier::High }),
    (25, ServiceEntry { name: "SMTP", risk: RiskTier::Medium }),
    (53, ServiceEntry { name: "DNS", risk: RiskTier::Low }),
    (80, ServiceEntry { name: "HTTP", risk: RiskTier::Medium }),
    (110, ServiceEntry { name: "POP3", risk: RiskTier::Medium }),
    (135, ServiceEntry { name: "MS-RPC", risk: RiskTier::Medium }),
    (139, ServiceEntry { name: "NetBIOS", risk: RiskTier::Medium }),
    (143, ServiceEntry { name: "IMAP", risk: RiskTier::Medium }),
    (443, ServiceEntry { name: "HTTPS", risk: RiskTier::Low }),
    (445, ServiceEntry { name: "SMB", risk: RiskTier::Medium }),
    (993, ServiceEntry { name: "IMAPS", risk: RiskTier::Low }),
    (995, ServiceEntry { name: "POP3S", risk: RiskTier::Low }),
    (1723, ServiceEntry { name: "PPTP", risk: RiskTier::Medium }),
    (3306, ServiceEntry { name: "MySQL", risk: RiskTier::Medium }),
    (3389, ServiceEntry { name: "RDP", risk: RiskTier::Medium }),
    (5900, ServiceEntry { name: "VNC", risk: RiskTier::Medium }),
    (8080, ServiceEntry { name: "HTTP-Proxy", risk: RiskTier::Medium }),
];

pub fn lookup(port: u16) -> Option<&'static ServiceEntry> {
    COMMON_SERVICES
        .binary_search_by_key(&port, |(p, _)| *p)
        .ok()
        .map(|idx| &COMMON_SERVICES[idx].1)
}

/// Default risk tier for a finding that omits the `risk` field.
pub fn default_risk(port: u16) -> RiskTier {
    lookup(port).map(|entry| entry.risk).unwrap_or(RiskTier::Unknown)
}

/// Default service label for a finding that omits the `service` field.
pub fn default_service(port: u16) -> String {
    lookup(port)
        .map(|entry| entry.name.to_ascii_lowercase())
        .unwrap_or_else(|| String::from("unknown"))
}
