use mime::Mime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Image,
    Video,
}

impl FileType {
    /// Anything that is not a `video/*` upload is treated as an image.
    pub fn from_mime(mime_type: &Mime) -> Self {
        if mime_type.type_() == mime::VIDEO {
            FileType::Video
        } else {
            FileType::Image
        }
    }

    pub fn value(&self) -> String {
        match *self {
            FileType::Image => "image".to_string(),
            FileType::Video => "video".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(content_type: &str) -> FileType {
        FileType::from_mime(&content_type.parse::<Mime>().unwrap())
    }

    #[test]
    fn test_video_content_types() {
        assert_eq!(classify("video/mp4"), FileType::Video);
        assert_eq!(classify("video/quicktime"), FileType::Video);
    }

    #[test]
    fn test_everything_else_is_image() {
        assert_eq!(classify("image/png"), FileType::Image);
        assert_eq!(classify("application/octet-stream"), FileType::Image);
        assert_eq!(classify("audio/mpeg"), FileType::Image);
        assert_eq!(classify("text/plain"), FileType::Image);
    }

    #[test]
    fn test_values() {
        assert_eq!(FileType::Image.value(), "image");
        assert_eq!(FileType::Video.value(), "video");
    }
}
