//! Column mapping for the tagged image representation.

use realtrust_core::media::{ImageRepresentation, ImageStorageMode, DEFAULT_IMAGE_TYPE};
use sqlx::FromRow;

/// The `image_kind`, `image` and `image_type` columns shared by every table
/// that owns an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct ImageColumns {
    pub image_kind: Option<String>,
    pub image: Option<String>,
    pub image_type: Option<String>,
}

impl ImageColumns {
    /// Decode the columns into a representation. Rows without an image, or
    /// with an unrecognized kind, yield `None`.
    pub fn representation(&self) -> Option<ImageRepresentation> {
        let image = self.image.as_deref().filter(|v| !v.is_empty())?;
        match self.image_kind.as_deref()?.parse::<ImageStorageMode>().ok()? {
            ImageStorageMode::Inline => Some(ImageRepresentation::Inline {
                data: image.to_string(),
                mime_type: self
                    .image_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string()),
            }),
            ImageStorageMode::Stored => Some(ImageRepresentation::Stored {
                filename: image.to_string(),
            }),
        }
    }
}

impl From<Option<&ImageRepresentation>> for ImageColumns {
    fn from(value: Option<&ImageRepresentation>) -> Self {
        let Some(repr) = value else {
            return Self::default();
        };
        let image_kind = Some(repr.kind().as_str().to_string());
        match repr {
            ImageRepresentation::Inline { data, mime_type } => Self {
                image_kind,
                image: Some(data.clone()),
                image_type: Some(mime_type.clone()),
            },
            ImageRepresentation::Stored { filename } => Self {
                image_kind,
                image: Some(filename.clone()),
                image_type: None,
            },
        }
    }
}
