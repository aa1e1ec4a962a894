//! Raw message adapter

use crate::error::{AnalyzeError, Result};
use crate::types::{AnalyzerResult, SignatureInfo};
use mailparse::ParsedMail;
use tracing::debug;

/// Parse raw message bytes into an [`AnalyzerResult`]
///
/// The body is the first `text/plain` part, depth first. Messages without a
/// plain-text part yield a result with no body. `multipart/signed` messages
/// carry their signature parameters on the result.
pub fn parse_message(raw: &[u8]) -> Result<AnalyzerResult> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| AnalyzeError::Structure(e.to_string()))?;

    let signature = extract_signature(&parsed);
    let body = find_plain_text(&parsed);

    debug!(
        "Parsed message: {} body, {}",
        if body.is_some() { "plain-text" } else { "no" },
        if signature.is_some() { "signed" } else { "unsigned" }
    );

    Ok(match (body, signature) {
        (Some(body), Some(signature)) => AnalyzerResult::signed(body, signature),
        (Some(body), None) => AnalyzerResult::new(body),
        (None, signature) => AnalyzerResult::without_body(signature),
    })
}

fn extract_signature(parsed: &ParsedMail) -> Option<SignatureInfo> {
    if parsed.ctype.mimetype.to_lowercase() != "multipart/signed" {
        return None;
    }

    Some(SignatureInfo {
        protocol: parsed.ctype.params.get("protocol").cloned(),
        micalg: parsed.ctype.params.get("micalg").cloned(),
    })
}

fn find_plain_text(parsed: &ParsedMail) -> Option<String> {
    if parsed.subparts.is_empty() {
        let content_type = parsed.ctype.mimetype.to_lowercase();
        if content_type.contains("text/plain") {
            return parsed.get_body().ok();
        }
        return None;
    }

    parsed.subparts.iter().find_map(find_plain_text)
}
