use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use recap_common::model::ScanSnapshot;
use recap_report::console::ConsoleRenderer;
use recap_report::html::HtmlRenderer;
use recap_report::template::Template;
use recap_report::{RenderedReport, Renderer, ReportContext, stats};
use tracing::info;

use crate::commands::RenderArgs;

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let input = read_snapshot(&args.snapshot)?;
    let snapshot = ScanSnapshot::from_json(&input)
        .with_context(|| format!("invalid snapshot '{}'", args.snapshot.display()))?;
    info!(
        "loaded snapshot with {} host(s) from {}",
        snapshot.len(),
        args.snapshot.display()
    );

    let stats = stats::compute(&snapshot);
    let ctx = ReportContext {
        subnet: args.subnet,
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        duration_secs: args.duration,
    };

    let mut renderers: Vec<Box<dyn Renderer>> = Vec::new();
    if args.format.wants_console() {
        renderers.push(Box::new(ConsoleRenderer));
    }
    if args.format.wants_html() {
        let template = match &args.template {
            Some(path) => Template::load(path),
            None => Template::default(),
        };
        renderers.push(Box::new(HtmlRenderer::new(template, args.output)));
    }

    for renderer in renderers {
        match renderer.generate(&snapshot, &stats, &ctx)? {
            RenderedReport::Console(text) => println!("{text}"),
            RenderedReport::HtmlFile(path) => {
                let shown = fs::canonicalize(&path).unwrap_or(path);
                info!("HTML report saved to {}", shown.display());
            }
        }
    }

    Ok(())
}

/// Reads the snapshot document from a file, or from stdin when the path
/// is `-`.
fn read_snapshot(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read snapshot from stdin")?;
        return Ok(input);
    }

    fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file '{}'", path.display()))
}
