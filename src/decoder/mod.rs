use crate::app::Result;
use crate::domain::FeedResponse;

/// Turns a raw feed document into a [`FeedResponse`].
///
/// Decoding is all-or-nothing: one item missing a required key fails the
/// whole document. Unknown keys are ignored.
#[derive(Clone)]
pub struct FeedDecoder;

impl Default for FeedDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, body: &[u8]) -> Result<FeedResponse> {
        let response: FeedResponse = serde_json::from_slice(body)?;
        tracing::debug!("Decoded {} feed items", response.len());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FeedError;

    const ONE_ITEM: &str = r#"{
        "title": "Recent Uploads tagged porcupine",
        "items": [
            {
                "title": "Porcupine",
                "link": "https://www.flickr.com",
                "media": { "m": "https://www.flickr.com/image.jpg" },
                "date_taken": "2025-01-04T10:00:00-08:00",
                "description": "<p>Author posted a photo:</p><p>Photo description</p><p>El Dorado Lodge, Sierra Nevada de Santa Marta, Colombia</p>",
                "published": "2025-01-05T23:04:10Z",
                "author": "nobody@flickr.com (\"krunal mistry\")",
                "tags": "porcupine"
            }
        ]
    }"#;

    #[test]
    fn test_decode_one_item() {
        let response = FeedDecoder::new().decode(ONE_ITEM.as_bytes()).unwrap();

        assert_eq!(response.len(), 1);
        let item = &response.items[0];
        assert_eq!(item.title, "Porcupine");
        assert_eq!(item.link, "https://www.flickr.com");
        assert_eq!(item.media_url(), "https://www.flickr.com/image.jpg");
        assert_eq!(item.published_raw, "2025-01-05T23:04:10Z");
        assert_eq!(item.author_raw, r#"nobody@flickr.com ("krunal mistry")"#);
        assert_eq!(
            item.parsed_description(),
            "El Dorado Lodge, Sierra Nevada de Santa Marta, Colombia"
        );
    }

    #[test]
    fn test_decode_empty_items() {
        let response = FeedDecoder::new().decode(br#"{"items": []}"#).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn test_missing_key_fails_whole_document() {
        let body = r#"{"items": [
            {"title": "a", "link": "l1", "media": {"m": "m"}, "description": "d", "published": "p", "author": "x"},
            {"title": "b", "link": "l2", "media": {"m": "m"}, "description": "d", "published": "p"}
        ]}"#;

        let err = FeedDecoder::new().decode(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FeedError::DecodeFailed(_)));
    }

    #[test]
    fn test_missing_nested_media_url_fails() {
        let body = r#"{"items": [
            {"title": "a", "link": "l", "media": {}, "description": "d", "published": "p", "author": "x"}
        ]}"#;

        assert!(FeedDecoder::new().decode(body.as_bytes()).is_err());
    }

    #[test]
    fn test_mistyped_field_fails() {
        let body = r#"{"items": [
            {"title": 7, "link": "l", "media": {"m": "m"}, "description": "d", "published": "p", "author": "x"}
        ]}"#;

        assert!(FeedDecoder::new().decode(body.as_bytes()).is_err());
    }

    #[test]
    fn test_not_json_fails() {
        let err = FeedDecoder::new().decode(b"jsonFlickrFeed({})").unwrap_err();
        assert!(matches!(err, FeedError::DecodeFailed(_)));
    }

    #[test]
    fn test_missing_items_fails() {
        assert!(FeedDecoder::new().decode(b"{}").is_err());
    }
}
