use mail_footer::*;

struct ShoutAnalyzer;

impl Analyzer for ShoutAnalyzer {
    fn id(&self) -> &'static str {
        "shout"
    }

    fn label(&self) -> &'static str {
        "Shout Analyzer"
    }

    fn analyze(&self, result: &mut AnalyzerResult) -> Result<()> {
        let body = result
            .body()
            .ok_or_else(|| AnalyzeError::InvalidInput("no body".into()))?
            .to_uppercase();
        result.set_body(body);
        Ok(())
    }
}

// --- FooterAnalyzer ---

#[test]
fn test_footer_analyzer_updates_result() {
    let mut result = AnalyzerResult::new("Hello\n-- \nBye");
    let footer = FooterAnalyzer::new().find_footer(&mut result).unwrap();

    assert_eq!(footer.as_deref(), Some("Bye"));
    assert_eq!(result.body(), Some("Hello"));
    assert_eq!(result.footer(), Some("Bye"));
}

#[test]
fn test_footer_analyzer_leaves_body_without_footer() {
    let mut result = AnalyzerResult::new("Line one\nLine two");
    FooterAnalyzer::new().analyze(&mut result).unwrap();

    assert_eq!(result.body(), Some("Line one\nLine two"));
    assert!(result.footer().is_none());
}

#[test]
fn test_footer_analyzer_clears_stale_footer() {
    let mut result = AnalyzerResult::new("No footer here");
    result.set_footer(Some("old".into()));

    FooterAnalyzer::new().analyze(&mut result).unwrap();

    assert!(result.footer().is_none());
}

#[test]
fn test_footer_analyzer_requires_body() {
    let mut result = AnalyzerResult::without_body(None);
    let before = result.clone();

    let err = FooterAnalyzer::new().analyze(&mut result).unwrap_err();

    assert!(matches!(err, AnalyzeError::InvalidInput(_)));
    assert_eq!(result, before);
}

#[test]
fn test_footer_analyzer_keeps_signature() {
    let signature = SignatureInfo {
        protocol: Some("application/pgp-signature".into()),
        micalg: Some("pgp-sha256".into()),
    };
    let mut result = AnalyzerResult::signed("Signed\n-- \nAlice", signature.clone());

    FooterAnalyzer::new().analyze(&mut result).unwrap();

    assert!(result.is_signed());
    assert_eq!(result.signature(), Some(&signature));
    assert_eq!(result.footer(), Some("Alice"));
}

#[test]
fn test_footer_analyzer_identity() {
    let analyzer = FooterAnalyzer::new();

    assert_eq!(analyzer.id(), FOOTER_ANALYZER_ID);
    assert_eq!(analyzer.label(), "Footer Analyzer");
}

// --- AnalyzerRegistry ---

#[test]
fn test_registry_defaults() {
    let registry = AnalyzerRegistry::with_defaults();

    assert_eq!(registry.ids(), vec!["footer"]);
    assert_eq!(registry.get("footer").unwrap().label(), "Footer Analyzer");
    assert!(registry.get("missing").is_none());
}

#[test]
fn test_registry_run() {
    let registry = AnalyzerRegistry::with_defaults();
    let mut result = AnalyzerResult::new("Hi\n-- \nSig");

    registry.run(&["footer"], &mut result).unwrap();

    assert_eq!(result.body(), Some("Hi"));
    assert_eq!(result.footer(), Some("Sig"));
}

#[test]
fn test_registry_unknown_id_runs_nothing() {
    let registry = AnalyzerRegistry::with_defaults();
    let mut result = AnalyzerResult::new("Hi\n-- \nSig");
    let before = result.clone();

    let err = registry
        .run(&["footer", "missing"], &mut result)
        .unwrap_err();

    assert!(matches!(err, AnalyzeError::UnknownAnalyzer(ref id) if id == "missing"));
    assert_eq!(result, before);
}

#[test]
fn test_registry_runs_in_requested_order() {
    let mut registry = AnalyzerRegistry::with_defaults();
    registry.register(Box::new(ShoutAnalyzer));

    let mut result = AnalyzerResult::new("hi\n-- \nsig");
    registry.run(&["shout", "footer"], &mut result).unwrap();

    assert_eq!(result.body(), Some("HI"));
    assert_eq!(result.footer(), Some("SIG"));
}

#[test]
fn test_registry_run_all() {
    let mut registry = AnalyzerRegistry::with_defaults();
    registry.register(Box::new(ShoutAnalyzer));

    let mut result = AnalyzerResult::new("hi\n-- \nsig");
    registry.run_all(&mut result).unwrap();

    assert_eq!(result.body(), Some("HI"));
    assert_eq!(result.footer(), Some("sig"));
}

#[test]
fn test_register_replaces_same_id() {
    let mut registry = AnalyzerRegistry::new();
    registry.register(Box::new(FooterAnalyzer::new()));
    registry.register(Box::new(FooterAnalyzer::with_extractor(
        FooterExtractor::with_options(FooterOptions { xhtml: false }),
    )));

    assert_eq!(registry.ids(), vec!["footer"]);

    let mut result = AnalyzerResult::new("A\nB\n-- \nS");
    registry.run_all(&mut result).unwrap();
    assert_eq!(result.body(), Some("A<br>\nB"));
}

#[test]
fn test_registry_from_config() {
    let config = PipelineConfig::from_json(r#"{"footer": {"xhtml": false}}"#).unwrap();
    let registry = AnalyzerRegistry::from_config(&config);
    let mut result = AnalyzerResult::new("A\nB\n-- \nS");

    registry.run(&config.analyzers, &mut result).unwrap();

    assert_eq!(result.body(), Some("A<br>\nB"));
    assert_eq!(result.footer(), Some("S"));
}

#[test]
fn test_registry_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnalyzerRegistry>();
}
