//! # Logo Post-Processing Library
//!
//! Pixel-level filters for turning logos into transparent, stylized
//! variants for a dark-themed website: background removal, white-pixel
//! extraction, color inversion, white conversion, morphological outlines
//! and Gaussian glows.
//!
//! ## Core Features
//!
//! - **Filter Trait**: every stage implements [`ImageFilter`]
//! - **Fixed-Order Pipeline**: background → invert → white → outline → glow
//! - **Presets**: four named single-logo variants
//! - **Batch Rules**: declarative filename rules resolved once per run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logo_fx::{GlowMode, Pipeline, PipelineConfig};
//! use std::path::Path;
//!
//! let config = PipelineConfig::default()
//!     .with_convert_to_white(true)
//!     .with_outline(0)
//!     .with_glow(GlowMode::Purple, 10.0);
//!
//! let pipeline = Pipeline::from_config(&config);
//! pipeline.process_file(Path::new("logo.png"), Path::new("logo-white-purple.png"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Batch Processing
//!
//! ```rust,no_run
//! use logo_fx::{BatchRunner, RuleSet};
//!
//! let rules = RuleSet::builtin().compile()?;
//! let report = BatchRunner::new("images/logos", rules).run()?;
//! println!("{} processed, {} failed", report.processed(), report.failed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod presets;
pub mod rules;
pub mod batch;

// Re-exports for convenience
pub use error::{LogoFxError, Result};
pub use types::{ProcessingResult, LIGHT_PURPLE, WHITE};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{
    Pipeline,
    builder::PipelineBuilder,
    config::{BackgroundMode, GlowMode, PipelineConfig, MAX_GLOW_RADIUS},
};
pub use presets::{Preset, run_presets};
pub use rules::{batch_default_config, ConfigOverrides, FileRule, Resolved, RuleMatcher, RuleSet};
pub use batch::{BatchReport, BatchRunner, FileOutcome, OutcomeStatus};
