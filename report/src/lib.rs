//! The reporting core: statistics aggregation and report rendering.
//!
//! One immutable [`ScanSnapshot`](recap_common::model::ScanSnapshot) flows in,
//! [`stats::compute`] reduces it once, and each [`Renderer`] independently
//! turns the pair into an output artifact. Renderers share no mutable state,
//! so a caller may invoke them in either order, or in parallel, without
//! coordination.

use std::path::PathBuf;

use recap_common::error::ReportError;
use recap_common::model::ScanSnapshot;

pub mod console;
pub mod html;
pub mod order;
pub mod stats;
pub mod template;

use crate::stats::ScanStatistics;

/// Presentation inputs the core does not compute itself.
///
/// The timestamp is supplied by the caller so that rendering stays a pure
/// function of its inputs; generating the same context twice yields
/// byte-identical reports.
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Target identifier shown in report headers, typically a CIDR block.
    pub subnet: String,
    /// Completion time, preformatted as `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
    /// Scan duration in seconds, rendered to two decimal places.
    pub duration_secs: f64,
}

/// What a renderer produced: a text payload for the console, or the path of
/// the HTML document it wrote. Nothing else persists beyond the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedReport {
    Console(String),
    HtmlFile(PathBuf),
}

/// The shared rendering capability.
///
/// Both report views consume the same snapshot and precomputed statistics;
/// neither may mutate them or recompute the aggregation on its own.
pub trait Renderer {
    fn generate(
        &self,
        snapshot: &ScanSnapshot,
        stats: &ScanStatistics,
        ctx: &ReportContext,
    ) -> Result<RenderedReport, ReportError>;
}
