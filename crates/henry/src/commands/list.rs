//! `henry list` command implementation.

use std::fmt::Write as _;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use chrono::SecondsFormat;
use clap::{Args, ValueEnum};
use console::Term;
use henry_config::{CliSettings, Config};
use henry_renderer::{HtmlPipeline, MarkdownRenderer};
use henry_site::{Document, DocumentBuilder, load_documents};
use henry_storage_fs::FsSource;

use crate::error::CliError;
use crate::output::Output;

/// Output format for the document listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human-readable summary per document.
    #[default]
    Text,
    /// JSON array of documents.
    Json,
}

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Path to configuration file (default: auto-discover henry.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Document source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Disable GitHub Flavored Markdown extensions.
    #[arg(long)]
    no_gfm: bool,

    /// Enable verbose output (per-batch progress logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source directory cannot
    /// be walked, or stdout cannot be written. Individual files that fail to
    /// parse or render are reported but do not fail the command.
    pub(crate) fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            gfm: self.no_gfm.then_some(false),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.banner(version);
        output.info(&format!(
            "Source directory: {}",
            config.docs_resolved.source_dir.display()
        ));

        let source = FsSource::new(source_root(&config.docs_resolved.source_dir));
        let pipeline = HtmlPipeline::new()
            .with_renderer(MarkdownRenderer::new().with_gfm(config.markdown.gfm));
        let report = load_documents(&source, &DocumentBuilder::with_renderer(pipeline))?;

        let stdout = Term::stdout();
        match self.format {
            Format::Text => {
                for document in &report.documents {
                    stdout.write_str(&format_document(document))?;
                }
            }
            Format::Json => {
                stdout.write_line(&serde_json::to_string_pretty(&report.documents)?)?;
            }
        }

        for skipped in &report.skipped {
            output.skipped(skipped);
        }
        output.summary(report.documents.len(), report.skipped.len());

        Ok(())
    }
}

/// Root path used for discovery.
///
/// Directories get a trailing separator so files directly under the root
/// have an empty sub-path.
fn source_root(source_dir: &Path) -> PathBuf {
    let mut root = source_dir.as_os_str().to_owned();
    if source_dir.is_dir() && !root.to_string_lossy().ends_with(MAIN_SEPARATOR) {
        root.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(root)
}

/// Format one document for text output.
fn format_document(document: &Document) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", document.title);
    let _ = writeln!(
        out,
        "  date:    {}",
        document.date.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    if document.draft {
        let _ = writeln!(out, "  draft:   yes");
    }
    if !document.sub_path.is_empty() {
        let _ = writeln!(out, "  path:    {}", document.sub_path);
    }
    if !document.summary.is_empty() {
        let _ = writeln!(out, "  summary: {}", document.summary.trim_end());
    }
    out.push('\n');
    out
}
