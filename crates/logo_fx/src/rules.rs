//! Declarative filename rules for batch mode.
//!
//! A [`RuleSet`] maps case-insensitive regular expressions on the file
//! name to configuration overrides. Rule overrides are layered on top of
//! the rule set's default, which is itself layered on the batch default
//! (white logo, purple glow, no outline). It is compiled once into a
//! [`RuleMatcher`]; the first matching rule wins.

use std::fs;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{LogoFxError, Result},
    pipeline::{BackgroundMode, GlowMode, PipelineConfig},
};

/// Partial [`PipelineConfig`]; unset fields keep the value underneath
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convert_to_white: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow: Option<GlowMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow_intensity: Option<f32>,
}

impl ConfigOverrides {
    pub fn apply_to(&self, base: &PipelineConfig) -> PipelineConfig {
        PipelineConfig {
            background: self.background.unwrap_or(base.background),
            invert: self.invert.unwrap_or(base.invert),
            convert_to_white: self.convert_to_white.unwrap_or(base.convert_to_white),
            outline_width: self.outline_width.unwrap_or(base.outline_width),
            glow: self.glow.unwrap_or(base.glow),
            glow_radius: self.glow_radius.unwrap_or(base.glow_radius),
            glow_intensity: self.glow_intensity.unwrap_or(base.glow_intensity),
        }
    }
}

/// One set of filename patterns and the overrides they select
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FileRule {
    pub name: String,
    /// Regular expressions matched case-insensitively against the file
    /// name; the rule applies only when every one of them matches
    pub patterns: Vec<String>,
    #[serde(default)]
    pub config: ConfigOverrides,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<FileRule>,
    /// Used when no rule matches, and underneath every rule
    #[serde(default)]
    pub default: ConfigOverrides,
}

/// White logo with a wide purple glow and no outline
pub fn batch_default_config() -> PipelineConfig {
    PipelineConfig::default()
        .with_background(BackgroundMode::RemoveBackground { threshold: 240 })
        .with_convert_to_white(true)
        .with_outline(0)
        .with_glow(GlowMode::Purple, 10.0)
}

fn patterns(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

impl RuleSet {
    /// Rules for the site's logo folder
    pub fn builtin() -> Self {
        let horizontal = BackgroundMode::KeepOnlyWhite { threshold: 220 };
        Self {
            rules: vec![
                FileRule {
                    name: "horizontal-black-transparent".to_string(),
                    patterns: patterns(&["bridges", "horizontal", "black", "transparent"]),
                    config: ConfigOverrides {
                        background: Some(horizontal),
                        invert: Some(true),
                        convert_to_white: Some(false),
                        ..Default::default()
                    },
                },
                FileRule {
                    name: "horizontal-logo".to_string(),
                    patterns: patterns(&["bridges", "horizontal"]),
                    config: ConfigOverrides {
                        background: Some(horizontal),
                        convert_to_white: Some(false),
                        ..Default::default()
                    },
                },
                FileRule {
                    name: "black-transparent".to_string(),
                    patterns: patterns(&["black", "transparent"]),
                    config: ConfigOverrides {
                        invert: Some(true),
                        convert_to_white: Some(false),
                        ..Default::default()
                    },
                },
            ],
            default: ConfigOverrides::default(),
        }
    }

    /// Load a rule set from a TOML or JSON file, picked by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path_ref)?),
            Some("json") => Self::from_json(&fs::read_to_string(path_ref)?),
            _ => Err(LogoFxError::UnsupportedRuleFormat),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Get the JSON schema of the rule file format
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RuleSet)
    }

    /// Compile every pattern and resolve every configuration; fails on
    /// the first invalid pattern or out-of-range parameter
    pub fn compile(&self) -> Result<RuleMatcher> {
        let default = self.default.apply_to(&batch_default_config());
        validate("default", &default)?;

        let rules = self
            .rules
            .iter()
            .map(|rule| {
                let regexes = rule
                    .patterns
                    .iter()
                    .map(|pattern| {
                        RegexBuilder::new(pattern)
                            .case_insensitive(true)
                            .build()
                            .map_err(|source| LogoFxError::InvalidRule {
                                name: rule.name.clone(),
                                source,
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;

                let config = rule.config.apply_to(&default);
                validate(&rule.name, &config)?;

                Ok(CompiledRule {
                    name: rule.name.clone(),
                    regexes,
                    config,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(RuleMatcher { rules, default })
    }
}

fn validate(name: &str, config: &PipelineConfig) -> Result<()> {
    config.validate().map_err(|reason| LogoFxError::InvalidConfig {
        name: name.to_string(),
        reason,
    })
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: String,
    regexes: Vec<Regex>,
    config: PipelineConfig,
}

impl CompiledRule {
    fn matches(&self, file_name: &str) -> bool {
        self.regexes.iter().all(|regex| regex.is_match(file_name))
    }
}

/// Compiled form of a [`RuleSet`]
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    rules: Vec<CompiledRule>,
    default: PipelineConfig,
}

/// The configuration chosen for a file and the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    /// `None` when the default configuration applies
    pub rule: Option<&'a str>,
    pub config: &'a PipelineConfig,
}

impl RuleMatcher {
    pub fn resolve(&self, file_name: &str) -> Resolved<'_> {
        self.rules
            .iter()
            .find(|rule| rule.matches(file_name))
            .map(|rule| Resolved {
                rule: Some(rule.name.as_str()),
                config: &rule.config,
            })
            .unwrap_or(Resolved {
                rule: None,
                config: &self.default,
            })
    }
}
