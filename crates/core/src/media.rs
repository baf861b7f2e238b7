//! Image ingestion: validation, naming, and URL derivation (Media Codec).
//!
//! A deployment runs in exactly one [`ImageStorageMode`]:
//!
//! - **Inline**: the caller sends Base64 text plus a MIME type, both stored
//!   verbatim on the record. Reads derive a `data:` URI.
//! - **Stored**: the caller uploads a file, which is validated, renamed and
//!   written to a flat upload directory. The record keeps only the filename.
//!
//! The two shapes are never mixed on a single record.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// MIME type assumed for inline images when the caller omits one.
pub const DEFAULT_IMAGE_TYPE: &str = "image/jpeg";

/// Ceiling for JSON request bodies, which bounds inline images (10 MiB).
pub const MAX_JSON_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Ceiling for a single uploaded image file (15 MiB).
pub const MAX_UPLOAD_BYTES: usize = 15 * 1024 * 1024;

/// URL path prefix under which stored images are served.
pub const DEFAULT_UPLOAD_PREFIX: &str = "/uploads";

/// Accepted upload file extensions (lowercase, with leading dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".svg"];

/// Accepted declared content types for uploads.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/svg+xml",
];

/// Upper bound (exclusive) of the random component in generated filenames.
const FILENAME_RANDOM_BOUND: u32 = 1_000_000_000;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures raised while ingesting an image. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("Image is required")]
    MissingImage,

    #[error("Unsupported image type: {0}. Only jpg, jpeg, png, gif and svg images are allowed")]
    UnsupportedImageType(String),

    #[error("Image is too large. Maximum allowed size is {limit} bytes")]
    ImageTooLarge { limit: usize },

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),
}

// ---------------------------------------------------------------------------
// Storage mode
// ---------------------------------------------------------------------------

/// Which image representation a deployment accepts and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStorageMode {
    #[default]
    Inline,
    Stored,
}

impl ImageStorageMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Stored => "stored",
        }
    }

    /// Human-readable description reported by the health check.
    pub fn description(self) -> &'static str {
        match self {
            Self::Inline => "Database (Base64)",
            Self::Stored => "Filesystem uploads",
        }
    }
}

impl fmt::Display for ImageStorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageStorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" | "base64" => Ok(Self::Inline),
            "stored" | "file" | "files" => Ok(Self::Stored),
            other => Err(format!(
                "Unknown image storage mode '{other}'. Must be one of: inline, stored"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Representation
// ---------------------------------------------------------------------------

/// How an image is attached to its owning record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRepresentation {
    /// Base64 text embedded in the record.
    Inline { data: String, mime_type: String },
    /// A file in the upload directory, referenced by name. Legacy records may
    /// hold a full external URL here instead.
    Stored { filename: String },
}

impl ImageRepresentation {
    pub fn kind(&self) -> ImageStorageMode {
        match self {
            Self::Inline { .. } => ImageStorageMode::Inline,
            Self::Stored { .. } => ImageStorageMode::Stored,
        }
    }

    /// Derive the URL a browser can load the image from.
    pub fn url(&self, public_base_url: &str, upload_prefix: &str) -> String {
        match self {
            Self::Inline { data, mime_type } => data_uri(mime_type, data),
            Self::Stored { filename } => stored_image_url(filename, public_base_url, upload_prefix),
        }
    }

    /// The stored filename, if this image lives in the upload directory.
    ///
    /// External URLs are never reported, so callers can safely remove the
    /// returned file.
    pub fn local_filename(&self) -> Option<&str> {
        match self {
            Self::Stored { filename } if is_local_filename(filename) => Some(filename),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Inline mode
// ---------------------------------------------------------------------------

/// Build an inline image from request fields.
///
/// A missing or blank `image_base64` means "no image" and yields `None`.
/// The payload and MIME type are otherwise kept verbatim; the MIME type
/// defaults to [`DEFAULT_IMAGE_TYPE`].
pub fn inline_from_request(
    image_base64: Option<&str>,
    image_type: Option<&str>,
) -> Option<ImageRepresentation> {
    let data = image_base64.filter(|d| !d.trim().is_empty())?;
    let mime_type = image_type
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_IMAGE_TYPE);

    Some(ImageRepresentation::Inline {
        data: data.to_string(),
        mime_type: mime_type.to_string(),
    })
}

/// Format a `data:<mime>;base64,<data>` URI.
pub fn data_uri(mime_type: &str, data: &str) -> String {
    format!("data:{mime_type};base64,{data}")
}

// ---------------------------------------------------------------------------
// Stored-file mode
// ---------------------------------------------------------------------------

/// Validate an uploaded file and return its extension.
///
/// Checks run in order: extension, declared content type, then size. The
/// returned extension keeps the client's case and includes the leading dot.
pub fn validate_upload(
    file_name: &str,
    content_type: Option<&str>,
    size: usize,
    max_bytes: usize,
) -> Result<String, MediaError> {
    let ext = validate_image_type(file_name, content_type)?;
    check_upload_size(size, max_bytes)?;
    Ok(ext)
}

/// Check the extension and declared content type of an upload.
///
/// Both must be on the allow-lists, compared case-insensitively. The
/// returned extension keeps its original case and includes the leading dot.
pub fn validate_image_type(file_name: &str, content_type: Option<&str>) -> Result<String, MediaError> {
    let ext = file_extension(file_name).ok_or_else(|| {
        MediaError::UnsupportedImageType(format!("'{file_name}' has no file extension"))
    })?;
    if !ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return Err(MediaError::UnsupportedImageType(format!(
            "extension '{ext}' is not allowed"
        )));
    }

    let declared = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_CONTENT_TYPES.contains(&declared.as_str()) {
        return Err(MediaError::UnsupportedImageType(format!(
            "content type '{declared}' is not allowed"
        )));
    }

    Ok(ext)
}

/// Reject uploads larger than `max_bytes`.
pub fn check_upload_size(size: usize, max_bytes: usize) -> Result<(), MediaError> {
    if size > max_bytes {
        Err(MediaError::ImageTooLarge { limit: max_bytes })
    } else {
        Ok(())
    }
}

/// Extract the extension (with dot, original case) from a client-supplied
/// filename.
///
/// Only the final path component is considered, so directory parts sent by
/// some browsers are ignored.
pub fn file_extension(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let dot = base.rfind('.')?;
    // A leading dot (".png") is a hidden file name, not an extension.
    if dot == 0 || dot == base.len() - 1 {
        return None;
    }
    Some(base[dot..].to_string())
}

/// Generate a collision-resistant upload filename.
///
/// Format: `<unix millis>-<random in [0, 1e9)><ext>`. No lookup is made for
/// an existing file of the same name.
pub fn generate_filename(ext: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::rng().random_range(0..FILENAME_RANDOM_BOUND);
    format!("{millis}-{random}{ext}")
}

/// Whether a stored value names a file directly inside the upload directory.
pub fn is_local_filename(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with("http")
        && !value.contains(['/', '\\'])
        && value != "."
        && value != ".."
}

/// Resolve a stored image value into a full URL.
///
/// Values that already look like URLs (start with `http`) are returned
/// unchanged; anything else is treated as a filename under `upload_prefix`.
pub fn stored_image_url(value: &str, public_base_url: &str, upload_prefix: &str) -> String {
    if value.starts_with("http") {
        return value.to_string();
    }
    let base = public_base_url.trim_end_matches('/');
    let prefix = upload_prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{base}/{value}")
    } else {
        format!("{base}/{prefix}/{value}")
    }
}
