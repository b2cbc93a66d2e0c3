//! Minimal placeholder substitution for the HTML report.
//!
//! Placeholders are `{{NAME}}` tokens. Substitution is a single left-to-right
//! pass over the template text: inserted values are never rescanned, so a
//! value that happens to contain a placeholder token comes through verbatim.
//! Values are raw text, not HTML-escaped. Both are deliberate limitations of
//! the contract, not bugs to fix in the renderer.

use std::fs;
use std::path::{Path, PathBuf};

use recap_common::error::ReportError;
use tracing::{info, warn};

/// Built-in report template, embedded so a missing asset can never break
/// rendering.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/default_template.html");

/// File name used when materializing the default template to disk.
pub const TEMPLATE_FILE_NAME: &str = "report_template.html";

#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            text: String::from(DEFAULT_TEMPLATE),
        }
    }
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Loads a custom template, falling back to the built-in default when the
    /// path cannot be read. The fallback is recoverable by design, but it is
    /// logged so a misconfigured path does not go unnoticed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self { text },
            Err(err) => {
                warn!(
                    "could not read template {}: {err}; using built-in default",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Substitutes placeholder tokens in a single pass.
    ///
    /// Tokens without a mapping pass through verbatim, as does any `{{` that
    /// never closes. Each replacement value is emitted as-is and skipped
    /// over, never rescanned for further tokens.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after = &rest[open + 2..];

            let Some(close) = after.find("}}") else {
                // Unterminated delimiter, emit literally and stop scanning.
                out.push_str(&rest[open..]);
                return out;
            };

            let name = &after[..close];
            if name.contains("{{") {
                // Stray opener without a token; emit it and rescan from the
                // next opener so nested tokens are still found.
                out.push_str("{{");
                rest = after;
                continue;
            }

            match vars.iter().find(|(key, _)| *key == name) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[open..open + 2 + close + 2]),
            }
            rest = &after[close + 2..];
        }

        out.push_str(rest);
        out
    }
}

/// Writes the built-in template into `dir` unless one already exists there.
///
/// This is the explicit asset-initialization step: render calls themselves
/// never touch the template file on disk.
pub fn write_default(dir: &Path) -> Result<PathBuf, ReportError> {
    let path = dir.join(TEMPLATE_FILE_NAME);
    if path.exists() {
        info!("template already present at {}", path.display());
        return Ok(path);
    }

    fs::create_dir_all(dir)
        .and_then(|_| fs::write(&path, DEFAULT_TEMPLATE))
        .map_err(|source| ReportError::WriteFailure {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
