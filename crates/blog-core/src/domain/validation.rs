//! Field-level checks shared by blog posts and their sections.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationErrors;

/// URL prefix under which locally uploaded media is served.
pub const MEDIA_URL_PREFIX: &str = "/uploads";

static MEDIA_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://|/uploads/)").expect("valid media path pattern"));

static VIDEO_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("valid video url pattern"));

/// An external URL or a path under the local uploads prefix.
pub fn is_media_path(value: &str) -> bool {
    MEDIA_PATH.is_match(value)
}

pub fn is_video_url(value: &str) -> bool {
    VIDEO_URL.is_match(value)
}

/// Media that lives on local disk rather than behind an external URL.
pub fn is_local_media(value: &str) -> bool {
    !value.is_empty() && !value.starts_with("http")
}

pub(crate) fn require_text(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", field));
    }
}

pub(crate) fn check_media_path(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !is_media_path(v)) {
        errors.add(
            field,
            format!("{} is not a valid image URL or local file path", v),
        );
    }
}

pub(crate) fn check_video_url(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !is_video_url(v)) {
        errors.add(field, format!("{} is not a valid video URL", v));
    }
}

/// Empty strings mean "no value" for optional text fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
