//! Per-call evidence accumulation for the line scanner.

use super::matchers::{Family, FAMILIES};
use crate::format::Format;

/// Partial identification signals for one format family.
///
/// Fields are set independently as lines are scanned and only ever move
/// from unset to a concrete value within a pass. The record resolves to
/// a [`Format`] once all three are present.
#[derive(Debug, Default)]
pub(crate) struct Evidence {
    pub(crate) mime: Option<&'static str>,
    pub(crate) encoding: Option<&'static str>,
    pub(crate) version: Option<String>,
}

impl Evidence {
    /// The canonical identifier for the accumulated evidence, if
    /// complete.
    pub(crate) fn resolve(&self) -> Option<Format> {
        match (self.mime, self.encoding, self.version.as_deref()) {
            (Some(mime), Some(encoding), Some(version)) => {
                Some(Format::compose(mime, encoding, version))
            }
            _ => None,
        }
    }
}

/// Scan state for a single detection pass.
///
/// Holds one evidence record per registered family. Constructed fresh
/// for every pass; nothing survives between calls.
#[derive(Debug, Default)]
pub(crate) struct SniffSession {
    cyclonedx: Evidence,
    spdx: Evidence,
}

impl SniffSession {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn record_mut(&mut self, family: Family) -> &mut Evidence {
        match family {
            Family::CycloneDx => &mut self.cyclonedx,
            Family::Spdx => &mut self.spdx,
        }
    }

    /// Offer one line to every family in registration order.
    ///
    /// The first family whose record completes wins, even if another
    /// family could have resolved from later lines.
    pub(crate) fn offer_line(&mut self, line: &str) -> Option<Format> {
        for family in FAMILIES {
            let record = self.record_mut(family);
            if let Some(format) = family.sniff_line(line, record) {
                tracing::debug!(family = family.name(), "line scan resolved");
                return Some(format);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{CDX_MIME, ENC_JSON};

    #[test]
    fn test_evidence_resolves_only_when_complete() {
        let mut evidence = Evidence::default();
        assert!(evidence.resolve().is_none());

        evidence.mime = Some(CDX_MIME);
        assert!(evidence.resolve().is_none());

        evidence.encoding = Some(ENC_JSON);
        assert!(evidence.resolve().is_none());

        evidence.version = Some("1.4".to_string());
        assert_eq!(evidence.resolve(), Some(Format::CDX14_JSON));
    }

    #[test]
    fn test_fresh_session_has_no_evidence() {
        let mut session = SniffSession::new();
        assert!(session.offer_line("PackageName: lodash").is_none());
    }

    #[test]
    fn test_session_accumulates_across_lines() {
        let mut session = SniffSession::new();
        assert!(session.offer_line(r#"  "bomFormat": "CycloneDX","#).is_none());
        let format = session.offer_line(r#"  "specVersion": "1.4","#);
        assert_eq!(format, Some(Format::CDX14_JSON));
    }
}
