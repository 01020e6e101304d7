//! Family-specific line matchers.
//!
//! Each supported family owns the textual signatures that identify it in
//! a non-JSON (or malformed-JSON) document. A matcher inspects one line
//! at a time and records what it finds in the family's evidence record.
//! Most signals accumulate across lines; a few resolve a document from a
//! single line.

use super::session::Evidence;
use crate::format::{Format, CDX_MIME, ENC_JSON, ENC_TEXT, SPDX_MIME};

/// SPDX spec versions probed by the textual signatures, in match order.
const SPDX_VERSIONS: [&str; 2] = ["2.2", "2.3"];

/// Supported format families, in registration order.
pub(crate) const FAMILIES: [Family; 2] = [Family::CycloneDx, Family::Spdx];

/// A format family the line scanner knows how to recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    CycloneDx,
    Spdx,
}

impl Family {
    /// Human-readable family name.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::CycloneDx => "CycloneDX",
            Self::Spdx => "SPDX",
        }
    }

    /// Inspect one line and update the family's evidence record.
    ///
    /// Returns the resolved identifier as soon as the record is
    /// complete, whether that takes one line or several.
    pub(crate) fn sniff_line(self, line: &str, evidence: &mut Evidence) -> Option<Format> {
        match self {
            Self::CycloneDx => sniff_cyclonedx_line(line, evidence),
            Self::Spdx => sniff_spdx_line(line, evidence),
        }
    }
}

fn sniff_cyclonedx_line(line: &str, evidence: &mut Evidence) -> Option<Format> {
    if line.contains(r#""bomFormat""#) && line.contains(r#""CycloneDX""#) {
        evidence.mime = Some(CDX_MIME);
        evidence.encoding = Some(ENC_JSON);
    }

    if line.contains(r#""specVersion""#) {
        // The value is pulled out with a plain split, not a JSON
        // tokenizer: a line holding anything other than exactly one
        // colon is skipped.
        let parts: Vec<&str> = line.split(':').collect();
        if parts.len() == 2 {
            let version = trim_version_value(parts[1]);
            if !version.is_empty() {
                evidence.version = Some(version.to_string());
                evidence.encoding = Some(ENC_JSON);
            }
        }
    }

    evidence.resolve()
}

/// Strip whitespace, one trailing comma, and surrounding double quotes
/// from a raw `specVersion` value, in that order.
fn trim_version_value(raw: &str) -> &str {
    let value = raw.trim();
    let value = value.strip_suffix(',').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.strip_prefix('"').unwrap_or(value)
}

fn sniff_spdx_line(line: &str, evidence: &mut Evidence) -> Option<Format> {
    // Tag-value form: the SPDXVersion tag carries the version on the
    // same line, so this path resolves without further accumulation.
    if line.contains("SPDXVersion:") {
        evidence.mime = Some(SPDX_MIME);
        evidence.encoding = Some(ENC_TEXT);

        for version in SPDX_VERSIONS {
            if line.contains(&format!("SPDX-{version}")) {
                evidence.version = Some(version.to_string());
                return evidence.resolve();
            }
        }
    }

    // In JSON the version key is quoted. The version value itself is
    // matched by the quoted-literal signature below.
    if line.contains(r#""spdxVersion""#) || line.contains("'spdxVersion'") {
        evidence.mime = Some(SPDX_MIME);
        evidence.encoding = Some(ENC_JSON);
    }

    for version in SPDX_VERSIONS {
        if line.contains(&format!(r#""SPDX-{version}""#))
            || line.contains(&format!("'SPDX-{version}'"))
        {
            evidence.version = Some(version.to_string());
            return evidence.resolve();
        }
    }

    evidence.resolve()
}
