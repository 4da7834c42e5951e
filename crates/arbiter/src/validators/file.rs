//! Uploaded file rules
//!
//! Content rules inspect raw bytes (`[u8]`); name rules inspect file names.
//! Type and MIME checks only look at the header, the first
//! [`HEADER_LEN`] bytes.

use std::path::Path;

use crate::foundation::{Rule, ValidationError};

/// Number of leading bytes inspected by signature and MIME checks.
pub const HEADER_LEN: usize = 512;

fn header(input: &[u8]) -> &[u8] {
    &input[..input.len().min(HEADER_LEN)]
}

// ============================================================================
// SIZE
// ============================================================================

crate::rule! {
    /// Validates the size of a file's contents in bytes.
    ///
    /// A `max` of zero means no upper bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbiter::prelude::*;
    ///
    /// assert!(file_size(1, 4).validate(b"abcd".as_slice()).is_ok());
    /// assert!(file_size(1, 4).validate(b"abcde".as_slice()).is_err());
    /// assert!(file_size(1, 0).validate(&[0u8; 4096][..]).is_ok());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub FileSize { min: u64, max: u64 } for [u8];
    check(self, input) {
        let size = input.len() as u64;
        size >= self.min && (self.max == 0 || size <= self.max)
    }
    error(self, input) {
        ValidationError::new(
            "file_size",
            format!("file size is not between {} and {}", self.min, self.max),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.len().to_string())
    }
    fn file_size(min: u64, max: u64);
}

// ============================================================================
// TYPE SIGNATURE
// ============================================================================

/// Validates that the file header contains one of the allowed signatures.
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = file_type(["%PDF", "PK"]);
/// assert!(rule.validate(b"%PDF-1.7 ...".as_slice()).is_ok());
/// assert!(rule.validate(b"GIF89a".as_slice()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileType {
    signatures: Vec<Vec<u8>>,
}

impl FileType {
    /// Creates a rule accepting any of `signatures`.
    pub fn new<S: AsRef<[u8]>>(signatures: impl IntoIterator<Item = S>) -> Self {
        Self {
            signatures: signatures
                .into_iter()
                .map(|signature| signature.as_ref().to_vec())
                .collect(),
        }
    }
}

impl Rule for FileType {
    type Input = [u8];

    fn validate(&self, input: &[u8]) -> Result<(), ValidationError> {
        let header = header(input);
        let found = self.signatures.iter().any(|signature| {
            signature.is_empty()
                || header
                    .windows(signature.len())
                    .any(|window| window == signature.as_slice())
        });
        if found {
            Ok(())
        } else {
            Err(ValidationError::new("file_type", "file type is not allowed"))
        }
    }
}

/// Creates a [`FileType`] rule.
#[must_use]
pub fn file_type<S: AsRef<[u8]>>(signatures: impl IntoIterator<Item = S>) -> FileType {
    FileType::new(signatures)
}

// ============================================================================
// MIME TYPE
// ============================================================================

/// Magic numbers for the recognized formats, checked in order.
const MAGIC: &[(&[u8], &str)] = &[
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xff\xd8\xff", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"%PDF-", "application/pdf"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1f\x8b", "application/gzip"),
    (b"BM", "image/bmp"),
];

/// Detects the MIME type of file contents from their magic number.
///
/// Recognizes PNG, JPEG, GIF, PDF, ZIP, GZIP, BMP and WEBP.
#[must_use]
pub fn sniff_mime_type(input: &[u8]) -> Option<&'static str> {
    if input.len() >= 12 && &input[..4] == b"RIFF" && &input[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    MAGIC
        .iter()
        .find(|(magic, _)| input.starts_with(magic))
        .map(|&(_, mime)| mime)
}

/// Validates that sniffed file contents have an allowed MIME type.
///
/// Unrecognized contents always fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileMimeType {
    allowed: Vec<String>,
}

impl FileMimeType {
    /// Creates a rule accepting any of `allowed`, compared case-insensitively.
    pub fn new<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Rule for FileMimeType {
    type Input = [u8];

    fn validate(&self, input: &[u8]) -> Result<(), ValidationError> {
        let detected = sniff_mime_type(header(input));
        let allowed = detected.is_some_and(|mime| {
            self.allowed.iter().any(|allowed| allowed.eq_ignore_ascii_case(mime))
        });
        if allowed {
            return Ok(());
        }

        let error = ValidationError::new("file_mime_type", "file mime type is not allowed");
        Err(match detected {
            Some(mime) => error.with_param("detected", mime),
            None => error,
        })
    }
}

/// Creates a [`FileMimeType`] rule.
///
/// ```
/// use arbiter::prelude::*;
///
/// let images = file_mime_type(["image/png", "image/jpeg"]);
/// assert!(images.validate(b"\x89PNG\r\n\x1a\n....".as_slice()).is_ok());
/// assert!(images.validate(b"%PDF-1.4".as_slice()).is_err());
/// ```
#[must_use]
pub fn file_mime_type<S: Into<String>>(allowed: impl IntoIterator<Item = S>) -> FileMimeType {
    FileMimeType::new(allowed)
}

// ============================================================================
// EXTENSION
// ============================================================================

/// Validates a file name's extension against an allow list.
///
/// Comparison ignores case and a leading dot in the allowed entries. A name
/// without an extension fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileExtension {
    allowed: Vec<String>,
}

impl FileExtension {
    /// Creates a rule accepting any of `allowed`.
    pub fn new<S: AsRef<str>>(allowed: impl IntoIterator<Item = S>) -> Self {
        Self {
            allowed: allowed
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }
}

fn extension(name: &str) -> Option<&str> {
    let file_name = Path::new(name).file_name()?.to_str()?;
    let (_, ext) = file_name.rsplit_once('.')?;
    (!ext.is_empty()).then_some(ext)
}

impl Rule for FileExtension {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let ext = extension(input).map(str::to_lowercase);
        if ext.as_ref().is_some_and(|ext| self.allowed.contains(ext)) {
            return Ok(());
        }
        Err(
            ValidationError::new("file_extension", "file extension is not allowed")
                .with_param("allowed", self.allowed.join(",")),
        )
    }
}

/// Creates a [`FileExtension`] rule.
///
/// ```
/// use arbiter::prelude::*;
///
/// let rule = file_extension(["jpg", ".png"]);
/// assert!(rule.validate("holiday/Photo.PNG").is_ok());
/// assert!(rule.validate("notes.txt").is_err());
/// assert!(rule.validate("README").is_err());
/// ```
#[must_use]
pub fn file_extension<S: AsRef<str>>(allowed: impl IntoIterator<Item = S>) -> FileExtension {
    FileExtension::new(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    const WEBP: &[u8] = b"RIFF\x24\0\0\0WEBPVP8 ";

    #[test]
    fn test_file_size() {
        let rule = file_size(2, 3);
        assert!(rule.validate(b"ab").is_ok());
        assert!(rule.validate(b"a").is_err());
        assert!(rule.validate(b"abcd").is_err());

        let error = file_size(10, 20).validate(b"x").unwrap_err();
        assert_eq!(error.message, "file size is not between 10 and 20");
        assert_eq!(error.param("actual"), Some("1"));
    }

    #[test]
    fn test_file_type_scans_header_only() {
        let rule = file_type(["MAGIC"]);
        assert!(rule.validate(b"..MAGIC..").is_ok());

        let mut late = vec![0u8; HEADER_LEN];
        late.extend_from_slice(b"MAGIC");
        assert!(rule.validate(&late).is_err());
    }

    #[test]
    fn test_file_type_message() {
        let error = file_type([b"\x7fELF"]).validate(b"MZ").unwrap_err();
        assert_eq!(error.message, "file type is not allowed");
    }

    #[rstest]
    #[case(PNG, Some("image/png"))]
    #[case(b"\xff\xd8\xff\xe0JFIF", Some("image/jpeg"))]
    #[case(b"GIF89a\x01\0", Some("image/gif"))]
    #[case(b"%PDF-1.4", Some("application/pdf"))]
    #[case(b"PK\x03\x04\x14\0", Some("application/zip"))]
    #[case(b"\x1f\x8b\x08", Some("application/gzip"))]
    #[case(b"BM\x36\0", Some("image/bmp"))]
    #[case(WEBP, Some("image/webp"))]
    #[case(b"plain text", None)]
    #[case(b"", None)]
    fn test_sniff_mime_type(#[case] input: &[u8], #[case] expected: Option<&str>) {
        assert_eq!(sniff_mime_type(input), expected);
    }

    #[test]
    fn test_file_mime_type() {
        let rule = file_mime_type(["IMAGE/PNG", "image/webp"]);
        assert!(rule.validate(PNG).is_ok());
        assert!(rule.validate(WEBP).is_ok());

        let error = rule.validate(b"%PDF-1.4").unwrap_err();
        assert_eq!(error.param("detected"), Some("application/pdf"));
        assert!(rule.validate(b"unknown").unwrap_err().param("detected").is_none());
    }

    #[rstest]
    #[case("photo.jpg", true)]
    #[case("photo.JPEG", true)]
    #[case("dir.v2/photo.png", true)]
    #[case("archive.tar.gz", false)]
    #[case("photo.", false)]
    #[case("photo", false)]
    #[case("", false)]
    fn test_file_extension(#[case] name: &str, #[case] ok: bool) {
        let rule = file_extension(["jpg", "jpeg", ".PNG"]);
        assert_eq!(rule.validate(name).is_ok(), ok);
    }
}
