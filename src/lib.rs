//! **SBOM format and spec-version detection.**
//!
//! `sbom-sniff` identifies the serialization format of a Software Bill of
//! Materials document without being told it in advance. Given an
//! arbitrary byte stream, it determines whether the content is
//! **CycloneDX** or **SPDX**, in which encoding (JSON or tag-value
//! text), and which spec version, returning a single canonical
//! [`Format`] identifier or a clear failure.
//!
//! Detection runs in two stages:
//!
//! 1. A **structured probe** attempts one strict JSON decode of the
//!    small envelope of declaration fields (`bomFormat`, `specVersion`,
//!    `spdxVersion`). Well-formed JSON documents are identified, or
//!    definitively rejected, here without any scanning.
//! 2. Anything that does not decode as JSON is re-read **line by line**.
//!    Each format family accumulates partial evidence (type, encoding,
//!    version) across lines until one family completes an
//!    identification or the stream is exhausted.
//!
//! Supported formats: CycloneDX 1.3–1.5 (JSON) and SPDX 2.2–2.3 (JSON
//! and tag-value text).
//!
//! ## Getting started
//!
//! ```
//! use std::io::Cursor;
//! use sbom_sniff::{sniff_reader, Format};
//!
//! let mut doc = Cursor::new(r#"{"bomFormat": "CycloneDX", "specVersion": "1.4"}"#);
//! assert_eq!(sniff_reader(&mut doc)?, Format::CDX14_JSON);
//! # Ok::<(), sbom_sniff::SniffError>(())
//! ```
//!
//! Files work the same way through [`sniff_file`]:
//!
//! ```no_run
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let format = sbom_sniff::sniff_file("path/to/sbom.json")?;
//!     println!("detected {format}");
//!     Ok(())
//! }
//! ```
//!
//! The stream handed to [`sniff_reader`] is restored to its starting
//! position on every exit path, so detection can be followed by a full
//! parse of the same stream.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod error;
pub mod format;
pub mod sniff;

// Re-export main types for convenience
pub use error::{Result, SniffError};
pub use format::Format;
pub use sniff::{sniff_file, sniff_reader, Sniffer};
