//! Analyzer pipeline
//!
//! Analyzers are pluggable steps that read and update an [`AnalyzerResult`].
//! They are looked up by id in an [`AnalyzerRegistry`], which runs them in
//! the order a [`PipelineConfig`] asks for.

use crate::config::PipelineConfig;
use crate::error::{AnalyzeError, Result};
use crate::footer::FooterExtractor;
use crate::types::AnalyzerResult;
use tracing::{debug, warn};

/// Id the footer analyzer is registered under
pub const FOOTER_ANALYZER_ID: &str = "footer";

/// A single analysis step over a message
pub trait Analyzer: Send + Sync {
    /// Stable identifier used in configuration
    fn id(&self) -> &'static str;

    /// Human readable name
    fn label(&self) -> &'static str;

    /// Inspect and update the result
    fn analyze(&self, result: &mut AnalyzerResult) -> Result<()>;
}

/// Strips the footer from the body and records it on the result
#[derive(Debug, Clone, Default)]
pub struct FooterAnalyzer {
    extractor: FooterExtractor,
}

impl FooterAnalyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_extractor(extractor: FooterExtractor) -> Self {
        Self { extractor }
    }

    /// Find the footer, update the result, and return the footer
    ///
    /// The body is only replaced when a footer was found. The footer is
    /// always written, so a stale footer from an earlier run is cleared.
    pub fn find_footer(&self, result: &mut AnalyzerResult) -> Result<Option<String>> {
        let Some(body) = result.body() else {
            warn!("Footer analyzer invoked on a result without a body");
            return Err(AnalyzeError::InvalidInput(
                "analyzer result has no message body".into(),
            ));
        };

        let extraction = self.extractor.extract(body);
        if extraction.has_footer() {
            result.set_body(extraction.body);
        }
        result.set_footer(extraction.footer.clone());

        Ok(extraction.footer)
    }
}

impl Analyzer for FooterAnalyzer {
    fn id(&self) -> &'static str {
        FOOTER_ANALYZER_ID
    }

    fn label(&self) -> &'static str {
        "Footer Analyzer"
    }

    fn analyze(&self, result: &mut AnalyzerResult) -> Result<()> {
        self.find_footer(result).map(|_| ())
    }
}

/// Static mapping from analyzer id to implementation
#[derive(Default)]
pub struct AnalyzerRegistry {
    analyzers: Vec<Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in analyzer with default options
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FooterAnalyzer::new()));
        registry
    }

    /// Registry holding the built-in analyzers tuned by `config`
    #[must_use]
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FooterAnalyzer::with_extractor(
            FooterExtractor::with_options(config.footer.clone()),
        )));
        registry
    }

    /// Add an analyzer, replacing any previously registered under the same id
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        let id = analyzer.id();
        if let Some(index) = self.analyzers.iter().position(|a| a.id() == id) {
            self.analyzers[index] = analyzer;
            return;
        }
        self.analyzers.push(analyzer);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Analyzer> {
        self.analyzers
            .iter()
            .find(|a| a.id() == id)
            .map(Box::as_ref)
    }

    /// Registered ids in registration order
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.analyzers.iter().map(|a| a.id()).collect()
    }

    /// Run the analyzers named by `ids`, in order
    ///
    /// Every id is resolved before anything runs, so an unknown id leaves
    /// the result untouched.
    pub fn run<S: AsRef<str>>(&self, ids: &[S], result: &mut AnalyzerResult) -> Result<()> {
        let analyzers = ids
            .iter()
            .map(|id| {
                let id = id.as_ref();
                self.get(id)
                    .ok_or_else(|| AnalyzeError::UnknownAnalyzer(id.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        for analyzer in analyzers {
            debug!("Running analyzer: {}", analyzer.label());
            analyzer.analyze(result)?;
        }

        Ok(())
    }

    /// Run every registered analyzer in registration order
    pub fn run_all(&self, result: &mut AnalyzerResult) -> Result<()> {
        for analyzer in &self.analyzers {
            debug!("Running analyzer: {}", analyzer.label());
            analyzer.analyze(result)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerRegistry")
            .field("analyzers", &self.ids())
            .finish()
    }
}
