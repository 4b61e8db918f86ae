//! # Parsers
//!
//! Parsers that recover structured data from untrusted backend text.
//!
//! - [`report_parser`]: locates and decodes the similarity report in judge output.
//! - [`literal_parser`]: lenient Python-literal parsing used as the report fallback.

pub mod literal_parser;
pub mod report_parser;
