use std::path::Path;

use recap_report::template;
use tracing::info;

/// Materializes the built-in HTML template so users can customize it.
///
/// A file already present in the directory is left untouched.
pub fn run(dir: &Path) -> anyhow::Result<()> {
    let path = template::write_default(dir)?;
    info!("template ready at {}", path.display());
    Ok(())
}
