//! Snapshot aggregation.

use recap_common::model::{RiskTier, ScanSnapshot};

/// Per-tier finding counters. All four tiers are always present and start at
/// zero, whether or not any finding carries them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl RiskCounts {
    pub fn bump(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::High => self.high += 1,
            RiskTier::Medium => self.medium += 1,
            RiskTier::Low => self.low += 1,
            RiskTier::Unknown => self.unknown += 1,
        }
    }

    pub fn get(&self, tier: RiskTier) -> usize {
        match tier {
            RiskTier::High => self.high,
            RiskTier::Medium => self.medium,
            RiskTier::Low => self.low,
            RiskTier::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low + self.unknown
    }
}

/// Aggregate view of one snapshot, computed once per report generation and
/// read-only afterwards. Never cached across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Every host key, including hosts with zero findings.
    pub total_hosts: usize,
    /// Every finding across all hosts.
    pub total_ports: usize,
    pub risk_counts: RiskCounts,
}

/// Reduces a snapshot to its statistics.
///
/// Pure and insensitive to iteration order; an empty snapshot yields all
/// zeros. Every finding lands in exactly one tier counter, so the four
/// counters always sum to `total_ports`.
pub fn compute(snapshot: &ScanSnapshot) -> ScanStatistics {
    let mut stats = ScanStatistics {
        total_hosts: snapshot.len(),
        ..Default::default()
    };

    for host in snapshot.hosts().values() {
        for finding in &host.findings {
            stats.total_ports += 1;
            stats.risk_counts.bump(finding.risk);
        }
    }

    stats
}
