//! Canonical SBOM format identifiers.
//!
//! A [`Format`] names one family + encoding + version combination as a
//! MIME-style string, e.g. `application/vnd.cyclonedx+json;version=1.4`.
//! The constants below form the catalog of combinations the sniffer can
//! report from the JSON fast path; the line scanner renders the same
//! shape from accumulated evidence, so both paths agree on identifiers.

use std::borrow::Cow;
use std::fmt;

/// Media-type atom for the CycloneDX family.
pub(crate) const CDX_MIME: &str = "application/vnd.cyclonedx";
/// Media-type atom for the SPDX family.
pub(crate) const SPDX_MIME: &str = "text/spdx";
/// Encoding atom for JSON documents.
pub(crate) const ENC_JSON: &str = "json";
/// Encoding atom for tag-value text documents.
pub(crate) const ENC_TEXT: &str = "text";

/// Canonical identifier for a specific SBOM format, encoding, and spec
/// version.
///
/// Immutable once constructed and cheap to clone; catalog constants are
/// borrowed statics, scanner composites own their string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Format(Cow<'static, str>);

impl Format {
    /// CycloneDX 1.3, JSON encoding.
    pub const CDX13_JSON: Self = Self::from_static("application/vnd.cyclonedx+json;version=1.3");
    /// CycloneDX 1.4, JSON encoding.
    pub const CDX14_JSON: Self = Self::from_static("application/vnd.cyclonedx+json;version=1.4");
    /// CycloneDX 1.5, JSON encoding.
    pub const CDX15_JSON: Self = Self::from_static("application/vnd.cyclonedx+json;version=1.5");
    /// SPDX 2.2, JSON encoding.
    pub const SPDX22_JSON: Self = Self::from_static("text/spdx+json;version=2.2");
    /// SPDX 2.3, JSON encoding.
    pub const SPDX23_JSON: Self = Self::from_static("text/spdx+json;version=2.3");
    /// SPDX 2.2, tag-value text encoding.
    pub const SPDX22_TEXT: Self = Self::from_static("text/spdx+text;version=2.2");
    /// SPDX 2.3, tag-value text encoding.
    pub const SPDX23_TEXT: Self = Self::from_static("text/spdx+text;version=2.3");

    const fn from_static(identifier: &'static str) -> Self {
        Self(Cow::Borrowed(identifier))
    }

    /// Render a `<mime>+<encoding>;version=<ver>` identifier from scan
    /// evidence.
    pub(crate) fn compose(mime: &str, encoding: &str, version: &str) -> Self {
        Self(Cow::Owned(format!("{mime}+{encoding};version={version}")))
    }

    /// The identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Format {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
