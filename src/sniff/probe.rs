//! Structured JSON fast path.
//!
//! Well-formed JSON SBOMs declare their format in a handful of top-level
//! fields, so one strict decode of that envelope identifies them without
//! any scanning. Anything that fails to decode falls through to the line
//! scanner; anything that decodes but declares an unsupported format is
//! rejected outright.

use std::io::Read;

use serde::Deserialize;

use crate::format::Format;

/// Minimal envelope of the declaration fields carried by JSON SBOMs.
#[derive(Debug, Deserialize)]
struct VersionEnvelope {
    #[serde(rename = "bomFormat")]
    bom_format: Option<String>,
    #[serde(rename = "specVersion")]
    spec_version: Option<String>,
    #[serde(rename = "spdxVersion")]
    spdx_version: Option<String>,
}

/// Outcome of the JSON probe.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ProbeOutcome {
    /// The envelope named a supported format and version.
    Detected(Format),
    /// The stream decoded as JSON but declared no supported format and
    /// version combination. Terminal: the line scanner is not consulted.
    UnsupportedEnvelope,
    /// The stream is not decodable JSON. Not an error; the line scanner
    /// takes over.
    NotApplicable,
}

/// Decode one JSON value from the stream and map its declaration fields
/// to a catalog identifier.
///
/// Only the first value is decoded; trailing bytes are left for the
/// caller to rewind past.
pub(crate) fn probe<R: Read>(stream: &mut R) -> ProbeOutcome {
    let mut deserializer = serde_json::Deserializer::from_reader(stream);
    let envelope = match VersionEnvelope::deserialize(&mut deserializer) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::debug!("structured probe not applicable: {err}");
            return ProbeOutcome::NotApplicable;
        }
    };

    if envelope.bom_format.as_deref() == Some("CycloneDX") {
        match envelope.spec_version.as_deref() {
            Some("1.3") => ProbeOutcome::Detected(Format::CDX13_JSON),
            Some("1.4") => ProbeOutcome::Detected(Format::CDX14_JSON),
            Some("1.5") => ProbeOutcome::Detected(Format::CDX15_JSON),
            _ => ProbeOutcome::UnsupportedEnvelope,
        }
    } else {
        // JSON without a CycloneDX declaration: the remaining candidate
        // is SPDX, which declares the full prefixed version string.
        match envelope.spdx_version.as_deref() {
            Some("SPDX-2.2") => ProbeOutcome::Detected(Format::SPDX22_JSON),
            Some("SPDX-2.3") => ProbeOutcome::Detected(Format::SPDX23_JSON),
            _ => ProbeOutcome::UnsupportedEnvelope,
        }
    }
}
