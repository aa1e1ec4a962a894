// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Mail Footer Extraction
//!
//! Detects the footer or signature block trailing an email body and
//! separates it from the message content.
//!
//! # Features
//!
//! - RFC 3676 `-- ` signature delimiter detection
//! - Quoted-reply header detection (`On Mon, Jan 5, 2020 at 3:45 PM ...`)
//! - Pluggable analyzer pipeline with a static registry
//! - Signed message (`multipart/signed`) awareness
//!
//! # Example
//!
//! ```rust
//! use mail_footer::extract_footer;
//!
//! let result = extract_footer("Hello\n-- \nJohn Doe");
//!
//! assert_eq!(result.body, "Hello");
//! assert_eq!(result.footer.as_deref(), Some("John Doe"));
//! ```

mod analyzer;
mod config;
mod error;
mod footer;
mod message;
mod types;

pub use analyzer::{Analyzer, AnalyzerRegistry, FOOTER_ANALYZER_ID, FooterAnalyzer};
pub use config::{FooterOptions, PipelineConfig};
pub use error::{AnalyzeError, Result};
pub use footer::{FooterExtractor, extract_footer, insert_line_break_markers};
pub use message::parse_message;
pub use types::*;
