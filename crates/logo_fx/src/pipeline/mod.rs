pub mod builder;
pub mod config;

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::info;
use crate::{
    error::Result,
    traits::ImageFilter,
    types::ProcessingResult,
};

pub use config::{BackgroundMode, GlowMode, PipelineConfig, MAX_GLOW_RADIUS};

/// An ordered list of filters applied to one image
pub struct Pipeline {
    stages: Vec<Box<dyn ImageFilter>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a pipeline that runs `stages` exactly in the given order
    pub fn new(stages: Vec<Box<dyn ImageFilter>>) -> Self {
        Self { stages }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        builder::PipelineBuilder::from_config(config)
    }

    /// Normalize to RGBA and run every stage in sequence
    pub fn process(&self, image: &DynamicImage) -> Result<RgbaImage> {
        self.process_rgba(image.to_rgba8())
    }

    pub fn process_rgba(&self, image: RgbaImage) -> Result<RgbaImage> {
        let mut processed = image;
        for stage in &self.stages {
            info!("  → {}", stage.describe());
            processed = stage.apply(&processed)?;
        }
        Ok(processed)
    }

    /// Decode `input`, run the pipeline and write the result to `output` as PNG
    pub fn process_file(&self, input: &Path, output: &Path) -> Result<ProcessingResult> {
        info!("Processing: {}", input.display());

        let image = image::open(input)?;
        let processed = self.process(&image)?;
        processed.save_with_format(output, ImageFormat::Png)?;

        info!("  [OK] Saved to: {}", output.display());

        Ok(ProcessingResult {
            image: processed,
            source: input.to_path_buf(),
            destination: output.to_path_buf(),
        })
    }

    /// Stage announcements in execution order
    pub fn stage_descriptions(&self) -> Vec<String> {
        self.stages.iter().map(|stage| stage.describe()).collect()
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!("Pipeline: {} stages", self.stages.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn logo_on_white() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(12, 12, Rgba([255, 255, 255, 255]));
        for y in 4..8 {
            for x in 4..8 {
                img.put_pixel(x, y, Rgba([230, 120, 20, 255]));
            }
        }
        img
    }

    #[test]
    fn test_stage_order_is_fixed() {
        let pipeline = Pipeline::builder()
            .with_glow(GlowMode::White, 2.0, 0.8)
            .with_outline(1)
            .with_convert_to_white()
            .with_invert()
            .with_background(BackgroundMode::RemoveBackground { threshold: 240 })
            .build();

        assert_eq!(
            pipeline.stage_descriptions(),
            vec![
                "Removing background...",
                "Inverting colors...",
                "Converting all colors to white...",
                "Adding 1px white outline...",
                "Adding white glow effect (radius=2)...",
            ]
        );
    }

    #[test]
    fn test_config_selects_stages() {
        let config = PipelineConfig::default()
            .with_background(BackgroundMode::KeepOnlyWhite { threshold: 220 })
            .with_outline(0)
            .with_glow(GlowMode::Purple, 10.0);
        let pipeline = Pipeline::from_config(&config);

        assert_eq!(
            pipeline.stage_descriptions(),
            vec!["Extracting only white pixels...", "Adding purple glow effect (radius=10)..."]
        );
    }

    #[test]
    fn test_keep_background_with_nothing_else_only_normalizes() {
        let config = PipelineConfig::default()
            .with_background(BackgroundMode::Keep)
            .with_outline(0);
        let pipeline = Pipeline::from_config(&config);
        assert_eq!(pipeline.info(), "Pipeline: 0 stages");

        let rgb = DynamicImage::new_rgb8(3, 2);
        let result = pipeline.process(&rgb).expect("Should process");
        assert_eq!(result.dimensions(), (3, 2));
        assert!(result.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_remove_background_then_white() {
        let config = PipelineConfig::default()
            .with_convert_to_white(true)
            .with_outline(0);
        let result = Pipeline::from_config(&config)
            .process_rgba(logo_on_white())
            .expect("Should process");

        assert_eq!(*result.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*result.get_pixel(5, 5), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_invert_before_white_extraction_order() {
        // Dark logo on transparent background: invert makes it white
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));

        let config = PipelineConfig::default()
            .with_background(BackgroundMode::Keep)
            .with_invert(true)
            .with_outline(0);
        let result = Pipeline::from_config(&config).process_rgba(img).expect("Should process");

        assert_eq!(*result.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
        assert_eq!(*result.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    }
}
