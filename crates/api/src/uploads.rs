//! Stored-mode image uploads: multipart parsing and the upload directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use realtrust_core::media::{
    check_upload_size, generate_filename, validate_image_type, ImageRepresentation, MediaError,
};
use realtrust_db::models::image::ImageColumns;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};

/// Multipart field carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Body-size headroom for the text fields sent alongside an image.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// An image file read from a multipart body, already type- and size-checked.
#[derive(Debug)]
pub struct UploadedImage {
    pub file_name: String,
    /// Extension as sent by the client, with leading dot.
    pub ext: String,
    pub bytes: Vec<u8>,
}

/// A parsed `multipart/form-data` body: text fields plus at most one image.
#[derive(Debug, Default)]
pub struct ImageForm {
    fields: HashMap<String, String>,
    image: Option<UploadedImage>,
}

impl ImageForm {
    /// Read every part of `multipart`.
    ///
    /// The image part is validated from its headers before any bytes are
    /// buffered, and reading stops as soon as it exceeds `max_bytes`. An
    /// image part without a filename (no file chosen) counts as absent.
    pub async fn read(mut multipart: Multipart, max_bytes: usize) -> Result<Self, MediaError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| multipart_error(e, max_bytes))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == IMAGE_FIELD {
                if form.image.is_some() {
                    return Err(MediaError::MalformedUpload(
                        "only one image file may be uploaded".into(),
                    ));
                }
                form.image = read_image(field, max_bytes).await?;
            } else if !name.is_empty() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, max_bytes))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn take_image(&mut self) -> Option<UploadedImage> {
        self.image.take()
    }
}

async fn read_image(
    mut field: Field<'_>,
    max_bytes: usize,
) -> Result<Option<UploadedImage>, MediaError> {
    let file_name = field.file_name().unwrap_or("").to_string();
    if file_name.is_empty() {
        return Ok(None);
    }

    let ext = validate_image_type(&file_name, field.content_type())?;

    let mut bytes = Vec::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, max_bytes))?
    {
        check_upload_size(bytes.len() + chunk.len(), max_bytes)?;
        bytes.extend_from_slice(&chunk);
    }

    if bytes.is_empty() {
        return Err(MediaError::MalformedUpload(format!(
            "uploaded file '{file_name}' is empty"
        )));
    }

    Ok(Some(UploadedImage {
        file_name,
        ext,
        bytes,
    }))
}

/// A body that blew the transport limit is still an oversized image.
fn multipart_error(err: MultipartError, max_bytes: usize) -> MediaError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        MediaError::ImageTooLarge { limit: max_bytes }
    } else {
        MediaError::MalformedUpload(err.body_text())
    }
}

/// The flat directory stored-mode images are written to.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(dir: PathBuf, max_bytes: usize) -> Self {
        Self { dir, max_bytes }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Parse an upload form using this store's size limit.
    pub async fn read_form(&self, multipart: Multipart) -> AppResult<ImageForm> {
        Ok(ImageForm::read(multipart, self.max_bytes).await?)
    }

    /// Write an uploaded image under a freshly generated name.
    ///
    /// The name is never checked against existing files; the file is opened
    /// with `create_new` so an improbable collision fails instead of
    /// overwriting.
    pub async fn save(&self, image: &UploadedImage) -> AppResult<ImageRepresentation> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let filename = generate_filename(&image.ext);
        let path = self.dir.join(&filename);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        file.write_all(&image.bytes)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::info!(
            %filename,
            original = %image.file_name,
            size = image.bytes.len(),
            "Stored uploaded image"
        );
        Ok(ImageRepresentation::Stored { filename })
    }

    /// Remove the file behind a stored image. Failures are logged, not returned.
    pub async fn remove(&self, image: &ImageColumns) {
        let Some(repr) = image.representation() else {
            return;
        };
        self.remove_representation(&repr).await;
    }

    /// Like [`UploadStore::remove`] for a representation not yet persisted.
    pub async fn remove_representation(&self, image: &ImageRepresentation) {
        let Some(filename) = image.local_filename() else {
            return;
        };
        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => tracing::debug!(%filename, "Removed stored image"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(%filename, error = %e, "Failed to remove stored image"),
        }
    }
}
