//! Image references.

use serde::{Deserialize, Serialize};

use crate::types::ImageId;

/// An uploaded image with its low-resolution placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    /// URL or storage path of the full image.
    pub image: String,
    /// URL or storage path of the placeholder shown while loading.
    pub placeholder: String,
    pub is_thumbnail: bool,
}
