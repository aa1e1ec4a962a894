//! Core types shared by the extractor and the analyzer pipeline

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Outcome of running footer extraction over a body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Body with the footer removed (line breaks marked up when a footer was found)
    pub body: String,

    /// Detected footer, verbatim
    pub footer: Option<String>,

    /// Heuristic that produced the footer
    pub method: Option<DetectionMethod>,
}

impl ExtractionResult {
    /// Result for a body in which nothing was detected
    #[must_use]
    pub fn unchanged(body: &str) -> Self {
        Self {
            body: body.to_string(),
            footer: None,
            method: None,
        }
    }

    #[must_use]
    pub const fn has_footer(&self) -> bool {
        self.footer.is_some()
    }
}

/// Which heuristic located the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// A `-- ` signature separator line
    Delimiter,

    /// An "On <date> at <time>" quoted-reply header
    ReplyLine {
        /// Date and time stated in the reply header, when it is a valid calendar time
        sent_at: Option<NaiveDateTime>,
    },
}

/// Metadata carried by messages sent as `multipart/signed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Signature protocol, e.g. `application/pgp-signature`
    pub protocol: Option<String>,

    /// Message integrity check algorithm, e.g. `pgp-sha256`
    pub micalg: Option<String>,
}

/// Mutable carrier passed between analyzers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerResult {
    body: Option<String>,
    footer: Option<String>,
    signature: Option<SignatureInfo>,
}

impl AnalyzerResult {
    /// Unsigned result holding the given body
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            ..Self::default()
        }
    }

    /// Result for a `multipart/signed` message
    pub fn signed(body: impl Into<String>, signature: SignatureInfo) -> Self {
        Self {
            body: Some(body.into()),
            footer: None,
            signature: Some(signature),
        }
    }

    /// Result for a message that has no plain-text body
    #[must_use]
    pub fn without_body(signature: Option<SignatureInfo>) -> Self {
        Self {
            body: None,
            footer: None,
            signature,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    #[must_use]
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn set_footer(&mut self, footer: Option<String>) {
        self.footer = footer;
    }

    #[must_use]
    pub const fn signature(&self) -> Option<&SignatureInfo> {
        self.signature.as_ref()
    }

    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}
