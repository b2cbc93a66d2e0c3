//! Plain-text report rendering.

use colored::Colorize;
use recap_common::error::ReportError;
use recap_common::model::{RiskTier, ScanSnapshot};

use crate::stats::ScanStatistics;
use crate::{order, RenderedReport, Renderer, ReportContext};

const SECTION_WIDTH: usize = 60;
const HOST_RULE_WIDTH: usize = 40;

/// Renders the console report: a summary block followed by one subsection per
/// host that has at least one finding.
///
/// Pure formatting; cannot fail given a well-formed snapshot/statistics pair.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn render_text(
        &self,
        snapshot: &ScanSnapshot,
        stats: &ScanStatistics,
        ctx: &ReportContext,
    ) -> String {
        let heavy = "=".repeat(SECTION_WIDTH);
        let light = "-".repeat(SECTION_WIDTH);

        let mut out = String::new();
        out.push_str(&format!("{heavy}\n"));
        out.push_str("SCAN SUMMARY\n");
        out.push_str(&format!("{heavy}\n"));
        out.push_str(&format!("Scan target:      {}\n", ctx.subnet));
        out.push_str(&format!("Scan completed:   {}\n", ctx.timestamp));
        out.push_str(&format!("Scan duration:    {:.2} seconds\n", ctx.duration_secs));
        out.push_str(&format!("Hosts discovered: {}\n", stats.total_hosts));
        out.push_str(&format!("Open ports found: {}\n", stats.total_ports));
        out.push_str(&format!("{light}\n"));
        out.push_str("Risk assessment:\n");
        out.push_str(&format!("  High risk:      {}\n", stats.risk_counts.high));
        out.push_str(&format!("  Medium risk:    {}\n", stats.risk_counts.medium));
        out.push_str(&format!("  Low risk:       {}\n", stats.risk_counts.low));
        out.push_str(&format!("  Unknown risk:   {}\n", stats.risk_counts.unknown));
        out.push_str(&format!("{heavy}\n"));

        if stats.total_ports == 0 {
            out.push_str("\nNo hosts with open ports were found.\n");
            return out;
        }

        out.push_str("\nDETAILED RESULTS:\n");
        out.push_str(&format!("{light}\n"));

        for addr in order::hosts(snapshot) {
            let Some(host) = snapshot.host(&addr) else {
                continue;
            };
            if host.findings.is_empty() {
                continue;
            }

            out.push_str(&format!("\nHost: {addr}\n"));
            out.push_str(&format!("{}\n", "-".repeat(HOST_RULE_WIDTH)));

            for finding in order::findings(&host.findings) {
                let mut service = finding.service.clone();
                if !finding.version.is_empty() {
                    service.push_str(&format!(" ({})", finding.version));
                }

                // Low and Unknown render without any annotation.
                let highlight = match finding.risk {
                    RiskTier::High => format!(" - {}", "HIGH RISK".red().bold()),
                    RiskTier::Medium => format!(" - {}", "Medium Risk".yellow()),
                    RiskTier::Low | RiskTier::Unknown => String::new(),
                };

                out.push_str(&format!("  Port {}: {}{}\n", finding.port, service, highlight));
            }
        }

        out.push_str(&format!("\n{heavy}\n"));
        out
    }
}

impl Renderer for ConsoleRenderer {
    fn generate(
        &self,
        snapshot: &ScanSnapshot,
        stats: &ScanStatistics,
        ctx: &ReportContext,
    ) -> Result<RenderedReport, ReportError> {
        Ok(RenderedReport::Console(self.render_text(snapshot, stats, ctx)))
    }
}
