//! End-to-end reporting scenarios: snapshot JSON in, rendered artifacts out.

use std::fs;

use recap_common::model::ScanSnapshot;
use recap_report::console::ConsoleRenderer;
use recap_report::html::HtmlRenderer;
use recap_report::stats;
use recap_report::template::Template;
use recap_report::{RenderedReport, Renderer, ReportContext};

fn ctx() -> ReportContext {
    ReportContext {
        subnet: String::from("192.168.1.0/24"),
        timestamp: String::from("2026-01-05 09:30:00"),
        duration_secs: 4.5,
    }
}

/// One host seen alive, no open ports in scope.
#[test]
fn lone_quiet_host_renders_fallbacks_in_both_views() {
    colored::control::set_override(false);
    let snapshot = ScanSnapshot::from_json(r#"{"192.168.1.7": {"ports": []}}"#).unwrap();
    let stats = stats::compute(&snapshot);
    assert_eq!(stats.total_hosts, 1);
    assert_eq!(stats.total_ports, 0);

    let console = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
    assert!(console.contains("Hosts discovered: 1"));
    assert!(console.contains("Open ports found: 0"));
    assert!(console.contains("No hosts with open ports were found."));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.html");
    let renderer = HtmlRenderer::new(Template::default(), out.clone());
    renderer.write_report(&snapshot, &stats, &ctx()).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<p>No hosts with open ports were found.</p>"));
    assert!(!html.contains("<table"));
}

/// One host, two findings across the risk spectrum.
#[test]
fn single_host_report_flags_the_high_risk_port() {
    colored::control::set_override(false);
    let snapshot = ScanSnapshot::from_json(
        r#"{
            "192.168.1.5": {
                "ports": [
                    {"port": 22, "service": "ssh", "version": "OpenSSH 8.4", "risk": "Low"},
                    {"port": 23, "service": "telnet", "version": "", "risk": "High"}
                ]
            }
        }"#,
    )
    .unwrap();
    let stats = stats::compute(&snapshot);
    assert_eq!(stats.total_hosts, 1);
    assert_eq!(stats.total_ports, 2);
    assert_eq!(stats.risk_counts.high, 1);
    assert_eq!(stats.risk_counts.low, 1);
    assert_eq!(stats.risk_counts.medium, 0);
    assert_eq!(stats.risk_counts.unknown, 0);

    let console = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
    assert!(console.contains("  Port 23: telnet - HIGH RISK\n"));
    assert!(console.contains("  Port 22: ssh (OpenSSH 8.4)\n"));

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.html");
    let renderer = HtmlRenderer::new(Template::default(), out.clone());
    renderer.write_report(&snapshot, &stats, &ctx()).unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("host-section").count(), 2); // one section + its css rule
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<td>telnet</td>"));
    assert!(html.contains("badge badge-high"));
}

/// An out-of-taxonomy risk label counts as Unknown, not a new bucket.
#[test]
fn unrecognized_risk_label_lands_in_unknown() {
    let snapshot = ScanSnapshot::from_json(
        r#"{"10.0.0.9": {"ports": [{"port": 8443, "service": "https-alt", "risk": "Critical"}]}}"#,
    )
    .unwrap();
    let stats = stats::compute(&snapshot);
    assert_eq!(stats.risk_counts.unknown, 1);
    assert_eq!(stats.risk_counts.high, 0);
    assert_eq!(stats.risk_counts.total(), stats.total_ports);
}

#[test]
fn hosts_order_numerically_across_the_pipeline() {
    colored::control::set_override(false);
    let snapshot = ScanSnapshot::from_json(
        r#"{
            "10.0.0.10": {"ports": [{"port": 80, "service": "http", "risk": "Medium"}]},
            "10.0.0.2": {"ports": [{"port": 80, "service": "http", "risk": "Medium"}]},
            "10.0.0.1": {"ports": [{"port": 80, "service": "http", "risk": "Medium"}]}
        }"#,
    )
    .unwrap();
    let stats = stats::compute(&snapshot);

    let console = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
    let first = console.find("Host: 10.0.0.1\n").unwrap();
    let second = console.find("Host: 10.0.0.2\n").unwrap();
    let third = console.find("Host: 10.0.0.10\n").unwrap();
    assert!(first < second && second < third);
}

/// Rendering is a pure function of snapshot, statistics, and context.
#[test]
fn repeated_rendering_is_byte_identical() {
    colored::control::set_override(false);
    let snapshot = ScanSnapshot::from_json(
        r#"{
            "192.168.1.5": {
                "ports": [
                    {"port": 443, "service": "https", "version": "nginx 1.24", "risk": "Low"},
                    {"port": 23, "service": "telnet", "risk": "High"}
                ]
            },
            "192.168.1.30": {"ports": []}
        }"#,
    )
    .unwrap();
    let stats = stats::compute(&snapshot);

    let first = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
    let second = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
    assert_eq!(first, second);

    let dir = tempfile::tempdir().unwrap();
    let out_a = dir.path().join("a.html");
    let out_b = dir.path().join("b.html");
    HtmlRenderer::new(Template::default(), out_a.clone())
        .write_report(&snapshot, &stats, &ctx())
        .unwrap();
    HtmlRenderer::new(Template::default(), out_b.clone())
        .write_report(&snapshot, &stats, &ctx())
        .unwrap();
    assert_eq!(
        fs::read_to_string(out_a).unwrap(),
        fs::read_to_string(out_b).unwrap()
    );
}

/// Substituting all ten placeholders must leave no token behind.
#[test]
fn rendered_document_has_no_residual_placeholders() {
    let snapshot = ScanSnapshot::from_json(
        r#"{"192.168.1.5": {"ports": [{"port": 22, "service": "ssh", "risk": "Low"}]}}"#,
    )
    .unwrap();
    let stats = stats::compute(&snapshot);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.html");
    HtmlRenderer::new(Template::default(), out.clone())
        .write_report(&snapshot, &stats, &ctx())
        .unwrap();

    let html = fs::read_to_string(out).unwrap();
    assert!(!html.contains("{{"), "unsubstituted placeholder left behind");
    assert!(!html.contains("}}"));
    assert!(html.contains("192.168.1.0/24"));
    assert!(html.contains("4.50 seconds"));
}

/// The overwrite contract: a second render replaces the file silently.
#[test]
fn html_report_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.html");
    fs::write(&out, "stale content").unwrap();

    let snapshot = ScanSnapshot::from_json(r#"{"10.0.0.1": {"ports": []}}"#).unwrap();
    let stats = stats::compute(&snapshot);
    let report = HtmlRenderer::new(Template::default(), out.clone())
        .generate(&snapshot, &stats, &ctx())
        .unwrap();

    assert_eq!(report, RenderedReport::HtmlFile(out.clone()));
    let html = fs::read_to_string(out).unwrap();
    assert!(!html.contains("stale content"));
    assert!(html.contains("<!DOCTYPE html>"));
}

/// Renderers observe the same immutable inputs in any invocation order.
#[test]
fn renderers_are_order_independent() {
    colored::control::set_override(false);
    let snapshot = ScanSnapshot::from_json(
        r#"{"10.0.0.1": {"ports": [{"port": 22, "service": "ssh", "risk": "Low"}]}}"#,
    )
    .unwrap();
    let stats = stats::compute(&snapshot);
    let dir = tempfile::tempdir().unwrap();

    let html_first = {
        let out = dir.path().join("first.html");
        HtmlRenderer::new(Template::default(), out.clone())
            .write_report(&snapshot, &stats, &ctx())
            .unwrap();
        let console = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
        (fs::read_to_string(out).unwrap(), console)
    };

    let console_first = {
        let console = ConsoleRenderer.render_text(&snapshot, &stats, &ctx());
        let out = dir.path().join("second.html");
        HtmlRenderer::new(Template::default(), out.clone())
            .write_report(&snapshot, &stats, &ctx())
            .unwrap();
        (fs::read_to_string(out).unwrap(), console)
    };

    assert_eq!(html_first, console_first);
}
