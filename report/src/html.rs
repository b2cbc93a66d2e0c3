//! HTML report rendering.

use std::fs;
use std::path::PathBuf;

use recap_common::error::ReportError;
use recap_common::model::ScanSnapshot;
use tracing::debug;

use crate::stats::ScanStatistics;
use crate::template::Template;
use crate::{order, RenderedReport, Renderer, ReportContext};

const NO_RESULTS_FRAGMENT: &str = "<p>No hosts with open ports were found.</p>";

/// Renders the HTML report and writes it to a caller-supplied path.
///
/// The document is fully staged in memory and written with a single
/// `fs::write`, so a failure never leaves a half-written report behind an
/// open handle. An existing file at the path is overwritten silently.
pub struct HtmlRenderer {
    template: Template,
    output_path: PathBuf,
}

impl HtmlRenderer {
    pub fn new(template: Template, output_path: PathBuf) -> Self {
        Self {
            template,
            output_path,
        }
    }

    pub fn write_report(
        &self,
        snapshot: &ScanSnapshot,
        stats: &ScanStatistics,
        ctx: &ReportContext,
    ) -> Result<PathBuf, ReportError> {
        let detail = detail_fragment(snapshot);
        let duration = format!("{:.2}", ctx.duration_secs);
        let host_count = stats.total_hosts.to_string();
        let port_count = stats.total_ports.to_string();
        let high = stats.risk_counts.high.to_string();
        let medium = stats.risk_counts.medium.to_string();
        let low = stats.risk_counts.low.to_string();
        let unknown = stats.risk_counts.unknown.to_string();

        let vars = [
            ("DETAILED_RESULTS", detail.as_str()),
            ("TIMESTAMP", ctx.timestamp.as_str()),
            ("SUBNET", ctx.subnet.as_str()),
            ("DURATION", duration.as_str()),
            ("HOST_COUNT", host_count.as_str()),
            ("PORT_COUNT", port_count.as_str()),
            ("HIGH_RISK", high.as_str()),
            ("MEDIUM_RISK", medium.as_str()),
            ("LOW_RISK", low.as_str()),
            ("UNKNOWN_RISK", unknown.as_str()),
        ];

        let document = self.template.render(&vars);
        debug!(
            "staged {} bytes of HTML for {}",
            document.len(),
            self.output_path.display()
        );

        fs::write(&self.output_path, document).map_err(|source| ReportError::WriteFailure {
            path: self.output_path.clone(),
            source,
        })?;

        Ok(self.output_path.clone())
    }
}

impl Renderer for HtmlRenderer {
    fn generate(
        &self,
        snapshot: &ScanSnapshot,
        stats: &ScanStatistics,
        ctx: &ReportContext,
    ) -> Result<RenderedReport, ReportError> {
        let path = self.write_report(snapshot, stats, ctx)?;
        Ok(RenderedReport::HtmlFile(path))
    }
}

/// Builds the per-host detail markup: one collapsible section per host with
/// findings, or the fallback paragraph when nothing has findings.
///
/// Field values are inserted as raw text, consistent with the template
/// engine's no-escaping contract.
fn detail_fragment(snapshot: &ScanSnapshot) -> String {
    let mut content = String::new();

    for addr in order::hosts(snapshot) {
        let Some(host) = snapshot.host(&addr) else {
            continue;
        };
        if host.findings.is_empty() {
            continue;
        }

        content.push_str("<div class=\"host-section\">\n");
        content.push_str("  <div class=\"host-header\" onclick=\"toggleHostSection(this)\">\n");
        content.push_str(&format!("    <h3>Host: {addr}</h3>\n"));
        content.push_str("    <span>▼</span>\n");
        content.push_str("  </div>\n");
        content.push_str("  <div class=\"host-content\">\n");
        content.push_str("    <table class=\"results-table\">\n");
        content.push_str("      <thead>\n");
        content.push_str(
            "        <tr><th>Port</th><th>Service</th><th>Version</th><th>Risk Level</th></tr>\n",
        );
        content.push_str("      </thead>\n");
        content.push_str("      <tbody>\n");

        for finding in order::findings(&host.findings) {
            content.push_str("        <tr>\n");
            content.push_str(&format!("          <td>{}</td>\n", finding.port));
            content.push_str(&format!("          <td>{}</td>\n", finding.service));
            content.push_str(&format!("          <td>{}</td>\n", finding.version));
            content.push_str(&format!(
                "          <td><span class=\"badge badge-{}\">{}</span></td>\n",
                finding.risk.css_class(),
                finding.risk
            ));
            content.push_str("        </tr>\n");
        }

        content.push_str("      </tbody>\n");
        content.push_str("    </table>\n");
        content.push_str("  </div>\n");
        content.push_str("</div>\n");
    }

    if content.is_empty() {
        return String::from(NO_RESULTS_FRAGMENT);
    }
    content
}
