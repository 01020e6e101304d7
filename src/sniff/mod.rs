//! Two-stage SBOM format detection.
//!
//! [`Sniffer`] identifies the family, encoding, and spec version of an
//! SBOM document without being told the format up front. A strict JSON
//! probe handles well-formed JSON documents in a single decode;
//! everything else is re-read line by line, with each format family
//! accumulating partial evidence until an identification emerges or the
//! stream runs out.

mod matchers;
mod probe;
mod session;

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Result, SniffError};
use crate::format::Format;
use probe::ProbeOutcome;
use session::SniffSession;

/// Detects the format of SBOM documents from paths or seekable streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sniffer;

impl Sniffer {
    /// Create a new sniffer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Detect the format of the SBOM at `path`.
    pub fn sniff_file(&self, path: impl AsRef<Path>) -> Result<Format> {
        let mut file = File::open(path)?;
        self.sniff_reader(&mut file)
    }

    /// Detect the format of the SBOM in `stream`.
    ///
    /// The stream position is restored to the start on every exit path.
    /// A failed restore is logged as a warning; the detection result is
    /// still returned.
    pub fn sniff_reader<R: Read + Seek>(&self, stream: &mut R) -> Result<Format> {
        let guard = RewindOnDrop(stream);
        Self::detect(&mut *guard.0)
    }

    fn detect<R: Read + Seek>(stream: &mut R) -> Result<Format> {
        match probe::probe(&mut *stream) {
            ProbeOutcome::Detected(format) => {
                tracing::debug!(format = %format, "identified by structured probe");
                return Ok(format);
            }
            ProbeOutcome::UnsupportedEnvelope => return Err(SniffError::UnknownFormat),
            ProbeOutcome::NotApplicable => {}
        }

        // Not a whole JSON document. Rescan from the top, line by line.
        stream.seek(SeekFrom::Start(0))?;
        Self::scan_lines(stream)
    }

    /// Offer each line to every family matcher until one identification
    /// completes. First family to resolve wins, even if another family
    /// could have resolved from later lines.
    fn scan_lines<R: Read>(stream: &mut R) -> Result<Format> {
        let mut session = SniffSession::new();
        let mut reader = BufReader::new(stream);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(trim_line_ending(&buf));
            if let Some(format) = session.offer_line(&line) {
                tracing::debug!(format = %format, "identified by line scan");
                return Ok(format);
            }
        }

        Err(SniffError::UnknownFormat)
    }
}

/// Detect the format of the SBOM at `path`.
pub fn sniff_file(path: impl AsRef<Path>) -> Result<Format> {
    Sniffer::new().sniff_file(path)
}

/// Detect the format of the SBOM in `stream`.
pub fn sniff_reader<R: Read + Seek>(stream: &mut R) -> Result<Format> {
    Sniffer::new().sniff_reader(stream)
}

/// Restores a stream to its start when dropped, covering success,
/// failure, and unwind exits alike.
struct RewindOnDrop<'a, R: Seek>(&'a mut R);

impl<R: Seek> Drop for RewindOnDrop<'_, R> {
    fn drop(&mut self) {
        if let Err(err) = self.0.seek(SeekFrom::Start(0)) {
            tracing::warn!("could not seek back to start of SBOM stream: {err}");
        }
    }
}

/// Strip a trailing LF or CRLF, leaving the raw line bytes.
fn trim_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_probe_path_identifies_json() {
        let mut stream = Cursor::new(r#"{"bomFormat": "CycloneDX", "specVersion": "1.5"}"#);
        assert_eq!(sniff_reader(&mut stream).unwrap(), Format::CDX15_JSON);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_scan_path_identifies_tag_value() {
        let content = "SPDXVersion: SPDX-2.3\nDataLicense: CC0-1.0\nSPDXID: SPDXRef-DOCUMENT\n";
        let mut stream = Cursor::new(content);
        assert_eq!(sniff_reader(&mut stream).unwrap(), Format::SPDX23_TEXT);
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_unknown_input_scans_to_exhaustion() {
        let mut stream = Cursor::new("not an sbom\nat all\n");
        assert!(matches!(
            sniff_reader(&mut stream),
            Err(SniffError::UnknownFormat)
        ));
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b"line\n"), b"line");
        assert_eq!(trim_line_ending(b"line\r\n"), b"line");
        assert_eq!(trim_line_ending(b"line"), b"line");
        assert_eq!(trim_line_ending(b""), b"");
    }
}
