//! The four named variants produced for a single logo.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr, VariantNames};
use tracing::info;

use crate::{
    error::{LogoFxError, Result},
    pipeline::{BackgroundMode, GlowMode, Pipeline, PipelineConfig},
    types::ProcessingResult,
};

#[derive(
    Debug, Clone, Copy,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Preset {
    /// White logo with purple glow
    WhitePurple,
    /// White logo with white glow
    WhiteGlow,
    /// White logo with outline and purple glow
    WhiteOutline,
    /// Original colors with purple glow
    OrangePurple,
}

impl Preset {
    /// Get a list of all preset names
    pub fn names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::WhitePurple => "White logo with purple glow (RECOMMENDED)",
            Self::WhiteGlow => "White logo with white glow",
            Self::WhiteOutline => "White logo with outline + purple glow",
            Self::OrangePurple => "Original orange with purple glow",
        }
    }

    pub fn config(&self) -> PipelineConfig {
        let base = PipelineConfig::default()
            .with_background(BackgroundMode::Keep)
            .with_outline(0);

        match self {
            Self::WhitePurple => base
                .with_convert_to_white(true)
                .with_glow(GlowMode::Purple, 10.0),
            Self::WhiteGlow => base
                .with_convert_to_white(true)
                .with_glow(GlowMode::White, 8.0),
            Self::WhiteOutline => base
                .with_convert_to_white(true)
                .with_outline(2)
                .with_glow(GlowMode::Purple, 8.0),
            Self::OrangePurple => base.with_glow(GlowMode::Purple, 10.0),
        }
    }

    /// `images/logo.png` becomes `images/logo-<preset>.png`
    pub fn output_path(&self, base: &Path) -> PathBuf {
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        base.with_file_name(format!("{}-{}.png", stem, self))
    }
}

/// Render every preset for `input`, naming outputs after `output_base`.
pub fn run_presets(input: &Path, output_base: &Path) -> Result<Vec<ProcessingResult>> {
    if !input.is_file() {
        return Err(LogoFxError::InputNotFound(input.to_path_buf()));
    }

    Preset::iter()
        .enumerate()
        .map(|(i, preset)| {
            info!("[{}] {}", i + 1, preset.description());
            let pipeline = Pipeline::from_config(&preset.config());
            pipeline.process_file(input, &preset.output_path(output_base))
        })
        .collect()
}
