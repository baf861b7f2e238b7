//! Response shapes for records that own an image.
//!
//! The stored columns are exposed as-is and the browser-loadable `imageUrl`
//! is derived on every read: a `data:` URI for inline images, a full URL for
//! stored files, `null` when there is no image.

use realtrust_core::media::ImageRepresentation;
use realtrust_core::types::{DbId, Timestamp};
use realtrust_db::models::client::Client;
use realtrust_db::models::image::ImageColumns;
use realtrust_db::models::project::Project;
use serde::Serialize;

use crate::config::ServerConfig;

/// Image fields flattened into every project and client response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    /// Base64 payload (inline) or filename (stored).
    pub image: Option<String>,
    /// MIME type; only present for inline images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
    pub image_url: Option<String>,
}

impl ImageView {
    pub fn new(columns: &ImageColumns, config: &ServerConfig) -> Self {
        match columns.representation() {
            None => Self {
                image: None,
                image_type: None,
                image_url: None,
            },
            Some(repr) => {
                let image_url = repr.url(&config.public_base_url, &config.upload_url_prefix);
                match repr {
                    ImageRepresentation::Inline { data, mime_type } => Self {
                        image: Some(data),
                        image_type: Some(mime_type),
                        image_url: Some(image_url),
                    },
                    ImageRepresentation::Stored { filename } => Self {
                        image: Some(filename),
                        image_type: None,
                        image_url: Some(image_url),
                    },
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    #[serde(flatten)]
    pub image: ImageView,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectView {
    pub fn new(project: Project, config: &ServerConfig) -> Self {
        Self {
            image: ImageView::new(&project.image, config),
            id: project.id,
            name: project.name,
            description: project.description,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub designation: String,
    #[serde(flatten)]
    pub image: ImageView,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClientView {
    pub fn new(client: Client, config: &ServerConfig) -> Self {
        Self {
            image: ImageView::new(&client.image, config),
            id: client.id,
            name: client.name,
            description: client.description,
            designation: client.designation,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}
