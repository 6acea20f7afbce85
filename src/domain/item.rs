use serde::{Deserialize, Serialize};

use crate::extract::{self, Dimensions};

/// A single photo entry as it appears on the wire.
///
/// Every field is required. Display fields are derived on each call and
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub media: Media,
    #[serde(rename = "description")]
    pub description_html: String,
    #[serde(rename = "published")]
    pub published_raw: String,
    #[serde(rename = "author")]
    pub author_raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(rename = "m")]
    pub media_url: String,
}

impl FeedItem {
    pub fn media_url(&self) -> &str {
        &self.media.media_url
    }

    pub fn dimensions(&self) -> Dimensions {
        extract::parse_dimensions(&self.description_html)
    }

    pub fn parsed_author(&self) -> String {
        extract::parse_author(&self.author_raw)
    }

    pub fn parsed_description(&self) -> String {
        extract::parse_description(&self.description_html)
    }

    pub fn formatted_published_date(&self) -> String {
        extract::format_published_date(&self.published_raw)
    }

    /// Everything a detail view shows for this item.
    pub fn details(&self) -> ItemDetails {
        let dimensions = self.dimensions();
        ItemDetails {
            title: self.title.clone(),
            author: self.parsed_author(),
            published: self.formatted_published_date(),
            description: self.parsed_description(),
            width: dimensions.width,
            height: dimensions.height,
            image_url: self.media.media_url.clone(),
            link: self.link.clone(),
        }
    }

    /// Plain text block suitable for sharing the photo.
    pub fn share_text(&self) -> String {
        format!(
            "Title: {}\nAuthor: {}\nPublished: {}\nDescription: {}\nImage: {}",
            self.title,
            self.parsed_author(),
            self.formatted_published_date(),
            self.parsed_description(),
            self.media.media_url,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetails {
    pub title: String,
    pub author: String,
    pub published: String,
    pub description: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub image_url: String,
    pub link: String,
}

impl ItemDetails {
    pub fn dimensions_label(&self) -> String {
        Dimensions {
            width: self.width,
            height: self.height,
        }
        .label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn porcupine() -> FeedItem {
        FeedItem {
            title: "Porcupine".into(),
            link: "https://www.flickr.com".into(),
            media: Media {
                media_url: "https://www.flickr.com/image.jpg".into(),
            },
            description_html: r#" <p><a href="https://www.flickr.com/people/107626626@N06/">ildikoannable</a> posted a photo:</p> <p><a href="https://www.flickr.com/photos/107626626@N06/54249235448/" title="Porcupine"><img src="https://live.staticflickr.com/65535/54249235448_7a10b2308b_m.jpg" width="240" height="163" alt="Porcupine" /></a></p> <p>Porcupine spotted on the ground snacking on twigs.</p>"#.into(),
            published_raw: "2025-01-05T23:04:10Z".into(),
            author_raw: r#"nobody@flickr.com ("krunal mistry")"#.into(),
        }
    }

    #[test]
    fn test_parsed_author() {
        assert_eq!(porcupine().parsed_author(), "Krunal Mistry");
    }

    #[test]
    fn test_formatted_published_date() {
        assert_eq!(
            porcupine().formatted_published_date(),
            "Jan 5, 2025 at 11:04 pm"
        );
    }

    #[test]
    fn test_parsed_description() {
        assert_eq!(
            porcupine().parsed_description(),
            "Porcupine spotted on the ground snacking on twigs."
        );
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(porcupine().dimensions().both(), Some((240, 163)));
    }

    #[test]
    fn test_details() {
        let details = porcupine().details();
        assert_eq!(details.title, "Porcupine");
        assert_eq!(details.author, "Krunal Mistry");
        assert_eq!(details.dimensions_label(), "240 x 163");
        assert_eq!(details.image_url, "https://www.flickr.com/image.jpg");
    }

    #[test]
    fn test_details_unknown_dimensions() {
        let mut item = porcupine();
        item.description_html = "<p>no image</p>".into();
        let details = item.details();
        assert_eq!(details.dimensions_label(), "Unknown");
        assert_eq!(details.description, "No Description");
    }

    #[test]
    fn test_share_text() {
        let text = porcupine().share_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Title: Porcupine",
                "Author: Krunal Mistry",
                "Published: Jan 5, 2025 at 11:04 pm",
                "Description: Porcupine spotted on the ground snacking on twigs.",
                "Image: https://www.flickr.com/image.jpg",
            ]
        );
    }
}
