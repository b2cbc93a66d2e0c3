pub mod render;
pub mod template;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "recap")]
#[command(about = "Turns raw network scan output into risk reports.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render console and/or HTML reports from a scan snapshot
    #[command(alias = "r")]
    Render(RenderArgs),
    /// Write the built-in HTML template to disk for customization
    #[command(alias = "t")]
    Template {
        /// Directory the template file is written into
        #[arg(long, default_value = "templates")]
        dir: PathBuf,
    },
}

#[derive(Args)]
pub struct RenderArgs {
    /// Scan snapshot JSON produced by the probing engine ("-" for stdin)
    pub snapshot: PathBuf,

    /// Scanned subnet, shown as the report's target identifier
    #[arg(long)]
    pub subnet: String,

    /// Scan duration in seconds, as measured by the probing engine
    #[arg(long)]
    pub duration: f64,

    /// Report view(s) to produce
    #[arg(long, value_enum, default_value_t = Format::Cli)]
    pub format: Format,

    /// Output path for the HTML report
    #[arg(long, default_value = "recap_report.html")]
    pub output: PathBuf,

    /// Custom HTML template (the built-in default is used if unreadable)
    #[arg(long)]
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Cli,
    Html,
    Both,
}

impl Format {
    pub fn wants_console(self) -> bool {
        matches!(self, Format::Cli | Format::Both)
    }

    pub fn wants_html(self) -> bool {
        matches!(self, Format::Html | Format::Both)
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
