//! Gallery models: albums owning an ordered collection of photos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::slug::slugify;
use shared::validation::{validate_not_blank, validate_slug};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A photo inside an album. `position` preserves insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: Uuid,
    pub album_id: Uuid,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

/// A gallery album without its photos, for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryAlbum {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub photo_count: i64,
    pub created_at: DateTime<Utc>,
}

/// An album with its photos in insertion order, for detail pages.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithPhotos {
    #[serde(flatten)]
    pub album: GalleryAlbum,
    pub photos: Vec<Photo>,
}

/// Request to create an album.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_album_slug_resolvable"))]
pub struct CreateAlbumRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(url(message = "Invalid cover image URL"))]
    pub cover_image_url: Option<String>,
}

impl CreateAlbumRequest {
    pub fn resolved_slug(&self) -> String {
        match &self.slug {
            Some(slug) => slug.clone(),
            None => slugify(&self.title),
        }
    }
}

/// A punctuation-only title slugifies to an empty string, which would make
/// the album unreachable by URL. Caught here so it never reaches the insert.
fn validate_album_slug_resolvable(request: &CreateAlbumRequest) -> Result<(), ValidationError> {
    if request.resolved_slug().is_empty() {
        let mut err = ValidationError::new("slug");
        err.message = Some("Title must contain at least one letter or digit".into());
        return Err(err);
    }
    Ok(())
}

/// Partial album update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumRequest {
    #[validate(custom(function = "validate_not_blank"), length(max = 200))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_slug"))]
    pub slug: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    #[validate(url(message = "Invalid cover image URL"))]
    pub cover_image_url: Option<String>,
}

/// A photo to attach to an album, referencing an already-uploaded image.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPhoto {
    #[validate(url(message = "Invalid image URL"))]
    pub image_url: String,

    #[validate(length(max = 300, message = "Caption must be at most 300 characters"))]
    pub caption: Option<String>,
}

/// Request to attach a batch of uploaded photos to an album.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddPhotosRequest {
    #[validate(length(min = 1, message = "At least one photo is required"))]
    #[validate(nested)]
    pub photos: Vec<NewPhoto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_slug_derivation() {
        let req = CreateAlbumRequest {
            title: "Ramadan 2023".into(),
            slug: None,
            description: "Iftar nights.".into(),
            cover_image_url: None,
        };
        assert_eq!(req.resolved_slug(), "ramadan-2023");
    }

    #[test]
    fn test_punctuation_only_title_rejected() {
        let req = CreateAlbumRequest {
            title: "!!! ***".into(),
            slug: None,
            description: "Symbols only.".into(),
            cover_image_url: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_punctuation_title_with_explicit_slug_accepted() {
        let req = CreateAlbumRequest {
            title: "!!! ***".into(),
            slug: Some("symbols".into()),
            description: "Symbols only.".into(),
            cover_image_url: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_add_photos_accepts_valid_batch() {
        let req = AddPhotosRequest {
            photos: vec![NewPhoto {
                image_url: "https://example.org/media/gallery/a.jpg".into(),
                caption: Some("Iftar night".into()),
            }],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_add_photos_requires_at_least_one() {
        let req = AddPhotosRequest { photos: vec![] };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_add_photos_validates_each_url() {
        let req = AddPhotosRequest {
            photos: vec![NewPhoto {
                image_url: "not-a-url".into(),
                caption: None,
            }],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_album_with_photos_flattens() {
        let album = GalleryAlbum {
            id: Uuid::new_v4(),
            title: "Eid Prayers".into(),
            slug: "eid-prayers".into(),
            description: "Morning of Eid.".into(),
            cover_image_url: None,
            photo_count: 1,
            created_at: Utc::now(),
        };
        let with_photos = AlbumWithPhotos {
            album,
            photos: vec![],
        };
        let json = serde_json::to_string(&with_photos).unwrap();
        // Album fields sit at the top level next to photos
        assert!(json.contains("\"slug\":\"eid-prayers\""));
        assert!(json.contains("\"photos\":[]"));
    }
}
