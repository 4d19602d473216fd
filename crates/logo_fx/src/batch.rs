//! Directory-wide processing with per-file failure isolation.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::{
    error::{LogoFxError, Result},
    pipeline::Pipeline,
    rules::RuleMatcher,
};

/// Appended to the file stem of every batch output
pub const OUTPUT_SUFFIX: &str = "-white-purple";

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeStatus {
    Processed,
    /// Output of an earlier run
    Skipped,
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    /// Name of the rule that selected the configuration, if any
    pub rule: Option<String>,
    pub status: OutcomeStatus,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn processed(&self) -> usize {
        self.count(|status| matches!(status, OutcomeStatus::Processed))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, OutcomeStatus::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, OutcomeStatus::Failed { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome.status, OutcomeStatus::Failed { .. }))
    }

    fn count(&self, predicate: impl Fn(&OutcomeStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|outcome| predicate(&outcome.status)).count()
    }
}

/// True for names produced by an earlier batch run
pub fn is_previous_output(file_name: &str) -> bool {
    file_name.ends_with(&format!("{OUTPUT_SUFFIX}.png"))
}

/// `logos/acme.jpg` becomes `logos/acme-white-purple.png`
pub fn output_path_for(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.png"))
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub struct BatchRunner {
    directory: PathBuf,
    rules: RuleMatcher,
}

impl BatchRunner {
    pub fn new(directory: impl Into<PathBuf>, rules: RuleMatcher) -> Self {
        Self {
            directory: directory.into(),
            rules,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Image files directly inside the directory, sorted by name
    pub fn list_images(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.is_dir() {
            return Err(LogoFxError::DirectoryNotFound(self.directory.clone()));
        }

        let mut images = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file() && has_image_extension(&path) {
                images.push(path);
            }
        }
        images.sort();
        Ok(images)
    }

    /// Process every image, recording one outcome per file.
    ///
    /// Only a missing or unreadable directory is an error; failures on
    /// individual files are logged and collected in the report.
    pub fn run(&self) -> Result<BatchReport> {
        let images = self.list_images()?;
        let mut report = BatchReport::default();

        if images.is_empty() {
            warn!("No image files found in {}", self.directory.display());
            return Ok(report);
        }

        info!("Found {} logos to process", images.len());

        let total = images.len();
        for (i, source) in images.into_iter().enumerate() {
            let file_name = source
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            if is_previous_output(&file_name) {
                debug!("Skipping previous output {}", file_name);
                report.outcomes.push(FileOutcome {
                    source,
                    destination: None,
                    rule: None,
                    status: OutcomeStatus::Skipped,
                });
                continue;
            }

            info!("[{}/{}] Processing: {}", i + 1, total, file_name);

            let resolved = self.rules.resolve(&file_name);
            debug!(
                "Using rule '{}' for {}",
                resolved.rule.unwrap_or("default"),
                file_name
            );

            let destination = output_path_for(&source);
            let status = match Pipeline::from_config(resolved.config).process_file(&source, &destination) {
                Ok(_) => OutcomeStatus::Processed,
                Err(e) => {
                    error!("  [ERROR] Failed to process {}: {}", file_name, e);
                    OutcomeStatus::Failed { message: e.to_string() }
                }
            };

            report.outcomes.push(FileOutcome {
                source,
                destination: Some(destination),
                rule: resolved.rule.map(str::to_string),
                status,
            });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;
    use image::{Rgba, RgbaImage};

    fn runner(dir: &Path) -> BatchRunner {
        let rules = RuleSet::builtin().compile().expect("Built-in rules should compile");
        BatchRunner::new(dir, rules)
    }

    fn logo_on_white() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255]));
        for y in 5..11 {
            for x in 5..11 {
                img.put_pixel(x, y, Rgba([20, 40, 200, 255]));
            }
        }
        img
    }

    #[test]
    fn test_output_naming() {
        assert_eq!(
            output_path_for(Path::new("logos/acme.JPG")),
            PathBuf::from("logos/acme-white-purple.png")
        );
        assert!(is_previous_output("acme-white-purple.png"));
        assert!(is_previous_output("acme-white-purple-white-purple.png"));
        assert!(!is_previous_output("acme-white.png"));
    }

    #[test]
    fn test_empty_directory_is_not_an_error() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        fs::write(dir.path().join("notes.txt"), "not an image").expect("Should write");

        let report = runner(dir.path()).run().expect("Should not fail");
        assert!(report.is_empty());
        assert_eq!(fs::read_dir(dir.path()).expect("Should list").count(), 1);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let err = runner(&dir.path().join("missing")).run().unwrap_err();
        assert!(matches!(err, LogoFxError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_lists_images_case_insensitively() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        for name in ["b.PNG", "a.jpeg", "c.gif", "d.txt"] {
            fs::write(dir.path().join(name), b"").expect("Should write");
        }

        let names: Vec<String> = runner(dir.path())
            .list_images()
            .expect("Should list")
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, vec!["a.jpeg", "b.PNG"]);
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        logo_on_white().save(dir.path().join("acme.png")).expect("Should save");
        logo_on_white().save(dir.path().join("zeta.png")).expect("Should save");
        logo_on_white()
            .save(dir.path().join("old-white-purple.png"))
            .expect("Should save");
        fs::write(dir.path().join("broken.png"), b"definitely not a png").expect("Should write");

        let report = runner(dir.path()).run().expect("Batch should complete");

        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(report.processed(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);

        let failure = report.failures().next().expect("One failure");
        assert!(failure.source.ends_with("broken.png"));

        let output = image::open(dir.path().join("zeta-white-purple.png"))
            .expect("Should decode output")
            .to_rgba8();
        assert_eq!(output.dimensions(), (16, 16));
        // Logo turned white, former white background made transparent apart from the glow
        assert_eq!(*output.get_pixel(8, 8), Rgba([255, 255, 255, 255]));
        assert!(output.get_pixel(0, 0)[3] < 255);
        assert!(!dir.path().join("old-white-purple-white-purple.png").exists());
    }

    #[test]
    fn test_rule_name_is_recorded() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        logo_on_white()
            .save(dir.path().join("bridges-black-transparent.png"))
            .expect("Should save");

        let report = runner(dir.path()).run().expect("Batch should complete");
        assert_eq!(report.outcomes[0].rule.as_deref(), Some("black-transparent"));
        assert_eq!(report.outcomes[0].status, OutcomeStatus::Processed);
    }
}
