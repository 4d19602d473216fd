use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// First pipeline stage: how the incoming pixels get their alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum BackgroundMode {
    /// Leave alpha as decoded
    Keep,
    /// Near-white pixels become transparent, all others opaque
    RemoveBackground {
        #[serde(default = "default_background_threshold")]
        threshold: u8,
    },
    /// Only near-white pixels survive, all others become transparent
    KeepOnlyWhite {
        #[serde(default = "default_white_threshold")]
        threshold: u8,
    },
}

fn default_background_threshold() -> u8 {
    240
}

fn default_white_threshold() -> u8 {
    200
}

impl Default for BackgroundMode {
    fn default() -> Self {
        Self::RemoveBackground { threshold: default_background_threshold() }
    }
}

/// Last pipeline stage: which halo, if any, goes behind the result.
#[derive(
    Debug, Clone, Copy, Default,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GlowMode {
    #[default]
    None,
    White,
    Purple,
}

/// Largest glow radius accepted from configuration files
pub const MAX_GLOW_RADIUS: f32 = 256.0;

/// Everything the pipeline needs to know about one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PipelineConfig {
    pub background: BackgroundMode,
    pub invert: bool,
    pub convert_to_white: bool,
    /// Outline width in pixels; 0 disables the outline
    pub outline_width: u32,
    pub glow: GlowMode,
    /// Gaussian sigma of the glow
    pub glow_radius: f32,
    /// Multiplier applied to the blurred alpha, 0.0..=1.0
    pub glow_intensity: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            background: BackgroundMode::default(),
            invert: false,
            convert_to_white: false,
            outline_width: 3,
            glow: GlowMode::None,
            glow_radius: 5.0,
            glow_intensity: 0.8,
        }
    }
}

impl PipelineConfig {
    pub fn with_background(mut self, background: BackgroundMode) -> Self {
        self.background = background;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_convert_to_white(mut self, convert_to_white: bool) -> Self {
        self.convert_to_white = convert_to_white;
        self
    }

    pub fn with_outline(mut self, width: u32) -> Self {
        self.outline_width = width;
        self
    }

    pub fn with_glow(mut self, glow: GlowMode, radius: f32) -> Self {
        self.glow = glow;
        self.glow_radius = radius;
        self
    }

    /// Reject glow parameters the blur cannot handle; the blur kernel
    /// is sized from the radius.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.glow_radius.is_finite() || !(0.0..=MAX_GLOW_RADIUS).contains(&self.glow_radius) {
            return Err(format!(
                "glow_radius must be between 0 and {MAX_GLOW_RADIUS}, got {}",
                self.glow_radius
            ));
        }
        if !self.glow_intensity.is_finite() || self.glow_intensity < 0.0 {
            return Err(format!(
                "glow_intensity must be a finite, non-negative number, got {}",
                self.glow_intensity
            ));
        }
        Ok(())
    }
}
