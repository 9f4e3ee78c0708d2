use crate::utils::error::Result;
use crate::utils::validation::{validate_required, validate_string_length, Validate};
use serde::{Deserialize, Serialize};

/// Form values submitted for song creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub style: String,
}

impl Validate for SongRequest {
    fn validate(&self) -> Result<()> {
        validate_required("title", &self.title)?;
        validate_string_length("title", &self.title, 1, 200)?;
        if !self.description.is_empty() {
            validate_string_length("description", &self.description, 1, 2000)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtRequest {
    pub description: String,
    pub style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionRequest {
    pub original_lyrics: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongResult {
    pub success: bool,
    pub lyrics: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumArtResult {
    pub success: bool,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_request_requires_a_title() {
        let request = SongRequest {
            title: "".to_string(),
            description: "a ballad about the sea".to_string(),
            style: "corrido".to_string(),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.status_code, 400);
    }

    #[test]
    fn test_song_request_with_title_only_is_valid() {
        let request = SongRequest {
            title: "X".to_string(),
            description: String::new(),
            style: String::new(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_album_art_result_serializes_camel_case() {
        let result = AlbumArtResult {
            success: true,
            image_url: "https://example.com/a.png".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.png");
    }
}
