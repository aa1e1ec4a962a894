//! Pipeline configuration

use crate::error::{AnalyzeError, Result};
use serde::{Deserialize, Serialize};

/// Options for the footer extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterOptions {
    /// Emit `<br />` instead of `<br>` as the line-break marker
    pub xhtml: bool,
}

impl Default for FooterOptions {
    fn default() -> Self {
        Self { xhtml: true }
    }
}

impl FooterOptions {
    /// Marker inserted in front of each line break of a cleaned body
    #[must_use]
    pub const fn line_break_marker(&self) -> &'static str {
        if self.xhtml { "<br />" } else { "<br>" }
    }
}

/// Which analyzers run, in order, and how they are tuned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Analyzer ids to run
    pub analyzers: Vec<String>,

    /// Footer analyzer options
    pub footer: FooterOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            analyzers: vec![crate::analyzer::FOOTER_ANALYZER_ID.to_string()],
            footer: FooterOptions::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AnalyzeError::Config(e.to_string()))
    }
}
