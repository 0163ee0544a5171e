use std::path::Path;

use chrono::{DateTime, Utc};

/// Kind of file accepted by the upload endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const VIDEO_TYPES: &[&str] = &["video/mp4", "video/quicktime", "video/mov"];

impl MediaKind {
    pub fn allowed_types(&self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_TYPES,
            MediaKind::Video => VIDEO_TYPES,
        }
    }

    pub fn accepts(&self, mime: &str) -> bool {
        self.allowed_types()
            .iter()
            .any(|t| t.eq_ignore_ascii_case(mime))
    }

    /// Multipart field the file is expected under.
    pub fn field_name(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// Directory under the upload root, also the URL segment after `/uploads`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            MediaKind::Image => "blogs",
            MediaKind::Video => "videos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
        }
    }
}

fn extension_for(mime: &str) -> &'static str {
    match mime.to_ascii_lowercase().as_str() {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "video/mp4" => "mp4",
        "video/quicktime" | "video/mov" => "mov",
        _ => "bin",
    }
}

/// Stored file name: upload time in unix milliseconds plus the client's
/// extension, or one derived from the MIME type when the client sent none.
pub fn timestamped_file_name(original: Option<&str>, mime: &str, at: DateTime<Utc>) -> String {
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 8)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| extension_for(mime).to_string());

    format!("{}.{}", at.timestamp_millis(), ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    #[test]
    fn test_accepts_only_kind_specific_types() {
        assert!(MediaKind::Image.accepts("image/png"));
        assert!(MediaKind::Image.accepts("IMAGE/JPEG"));
        assert!(!MediaKind::Image.accepts("video/mp4"));
        assert!(!MediaKind::Image.accepts("image/gif"));
        assert!(MediaKind::Video.accepts("video/quicktime"));
        assert!(!MediaKind::Video.accepts("image/webp"));
    }

    #[test]
    fn test_file_name_keeps_client_extension() {
        let name = timestamped_file_name(Some("Court Side.JPG"), "image/jpeg", at());
        assert_eq!(name, "1700000000123.jpg");
    }

    #[test]
    fn test_file_name_falls_back_to_mime_extension() {
        assert_eq!(
            timestamped_file_name(None, "image/webp", at()),
            "1700000000123.webp"
        );
        assert_eq!(
            timestamped_file_name(Some("clip"), "video/quicktime", at()),
            "1700000000123.mov"
        );
        assert_eq!(
            timestamped_file_name(Some("evil.p/hp"), "image/png", at()),
            "1700000000123.png"
        );
    }
}
