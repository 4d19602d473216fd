use crate::{
    pipeline::{
        Pipeline,
        config::{BackgroundMode, GlowMode, PipelineConfig},
    },
    traits::ImageFilter,
    algorithms::{
        ConvertToWhite,
        ExtractWhitePixels,
        Glow,
        InvertColors,
        RemoveBackground,
        WhiteOutline,
    },
};

/// Builder for filter pipelines with a fluent API.
///
/// Stages are slotted, not queued: whatever order the methods are called
/// in, `build` assembles background, invert, white conversion, outline
/// and glow in that order, followed by any custom stages.
pub struct PipelineBuilder {
    background: Option<Box<dyn ImageFilter>>,
    invert: bool,
    convert_to_white: bool,
    outline: Option<WhiteOutline>,
    glow: Option<Glow>,
    custom: Vec<Box<dyn ImageFilter>>,
}

impl PipelineBuilder {
    /// Create an empty pipeline builder
    pub fn new() -> Self {
        Self {
            background: None,
            invert: false,
            convert_to_white: false,
            outline: None,
            glow: None,
            custom: Vec::new(),
        }
    }

    /// Set the background stage (replaces any existing one)
    pub fn with_background(mut self, mode: BackgroundMode) -> Self {
        self.background = match mode {
            BackgroundMode::Keep => None,
            BackgroundMode::RemoveBackground { threshold } => {
                Some(Box::new(RemoveBackground { threshold }))
            }
            BackgroundMode::KeepOnlyWhite { threshold } => {
                Some(Box::new(ExtractWhitePixels { threshold }))
            }
        };
        self
    }

    pub fn with_invert(mut self) -> Self {
        self.invert = true;
        self
    }

    pub fn with_convert_to_white(mut self) -> Self {
        self.convert_to_white = true;
        self
    }

    /// Add a white outline; a width of zero removes the stage
    pub fn with_outline(mut self, width: u32) -> Self {
        self.outline = (width > 0).then_some(WhiteOutline { width });
        self
    }

    /// Set the glow stage (replaces any existing one)
    pub fn with_glow(mut self, mode: GlowMode, radius: f32, intensity: f32) -> Self {
        self.glow = match mode {
            GlowMode::None => None,
            GlowMode::White => Some(Glow::white(radius, intensity)),
            GlowMode::Purple => Some(Glow::purple(radius, intensity)),
        };
        self
    }

    /// Append a custom stage that runs after the built-in ones
    pub fn add_stage<F>(mut self, stage: F) -> Self
    where
        F: ImageFilter + 'static,
    {
        self.custom.push(Box::new(stage));
        self
    }

    pub fn build(self) -> Pipeline {
        let mut stages: Vec<Box<dyn ImageFilter>> = Vec::new();

        if let Some(background) = self.background {
            stages.push(background);
        }
        if self.invert {
            stages.push(Box::new(InvertColors));
        }
        if self.convert_to_white {
            stages.push(Box::new(ConvertToWhite));
        }
        if let Some(outline) = self.outline {
            stages.push(Box::new(outline));
        }
        if let Some(glow) = self.glow {
            stages.push(Box::new(glow));
        }
        stages.extend(self.custom);

        Pipeline::new(stages)
    }

    /// Build the pipeline described by a configuration record
    pub fn from_config(config: &PipelineConfig) -> Pipeline {
        let mut builder = Self::new()
            .with_background(config.background)
            .with_outline(config.outline_width)
            .with_glow(config.glow, config.glow_radius, config.glow_intensity);

        if config.invert {
            builder = builder.with_invert();
        }
        if config.convert_to_white {
            builder = builder.with_convert_to_white();
        }

        builder.build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
