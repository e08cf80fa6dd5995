//! Media-type rules for uploaded and downloaded video payloads.

/// MIME prefix every accepted payload must carry.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// Content type assumed when the object store reports none.
pub const DEFAULT_VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Extension given to downloaded media when the key carries none.
pub const DEFAULT_MEDIA_EXTENSION: &str = "mp4";

/// Whether `content_type` names a video MIME type.
pub fn is_video_content_type(content_type: &str) -> bool {
    content_type.starts_with(VIDEO_MIME_PREFIX)
}

/// Lowercased file extension of `name`, or [`DEFAULT_MEDIA_EXTENSION`].
///
/// Used to give temporary media files a suffix the transcription server
/// can sniff.
pub fn media_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && !ext.contains('/')
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            ext.to_lowercase()
        }
        _ => DEFAULT_MEDIA_EXTENSION.to_string(),
    }
}
