//! The two invocation modes of `logo-fx`: a single well-known logo
//! rendered with every preset, and a whole folder processed with
//! filename rules.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use logo_fx::{run_presets, BatchReport, BatchRunner, Preset, RuleSet};
use strum::IntoEnumIterator;
use tracing::{error, info};

pub const DEFAULT_INPUT: &str = "images/ut-logo.png";
pub const DEFAULT_OUTPUT: &str = "images/ut-logo-outlined.png";
pub const DEFAULT_BATCH_DIR: &str = "images/logos";

const RULE: &str = "============================================================";

/// Render all presets for one input file
pub fn run_single(input: &Path, output: &Path) -> Result<Vec<PathBuf>> {
    info!("{RULE}");
    info!("Image Converter: White Outline");
    info!("{RULE}");

    let results = run_presets(input, output)?;

    info!("{RULE}");
    info!("[SUCCESS] Processing complete!");
    info!("{RULE}");
    info!("Generated files:");
    for (i, (preset, result)) in Preset::iter().zip(&results).enumerate() {
        info!("  {}. {} ({})", i + 1, result.destination.display(), preset);
    }

    Ok(results.into_iter().map(|result| result.destination).collect())
}

/// Load rules from `rules_path`, or fall back to the built-in set
pub fn load_rules(rules_path: Option<&Path>) -> Result<RuleSet> {
    match rules_path {
        Some(path) => RuleSet::from_file(path)
            .wrap_err_with(|| format!("Failed to load rules from {}", path.display())),
        None => Ok(RuleSet::builtin()),
    }
}

/// Process every image in `directory`; per-file failures end up in the report
pub fn run_batch(directory: &Path, rules_path: Option<&Path>) -> Result<BatchReport> {
    let matcher = load_rules(rules_path)?.compile()?;
    let runner = BatchRunner::new(directory, matcher);

    info!("{RULE}");
    info!("Batch Logo Converter: White + Purple Glow");
    info!("{RULE}");

    let report = runner.run()?;
    if report.is_empty() {
        return Ok(report);
    }

    info!("{RULE}");
    info!("[SUCCESS] Batch processing complete!");
    info!("{RULE}");
    info!(
        "Processed {}, skipped {}, failed {}",
        report.processed(),
        report.skipped(),
        report.failed()
    );
    for failure in report.failures() {
        error!("  [ERROR] {}", failure.source.display());
    }
    info!("Output directory: {}", runner.directory().display());

    Ok(report)
}
