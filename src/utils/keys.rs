use percent_encoding::percent_decode_str;

use crate::error::ThumbnailError;

/// Decodes an S3 notification key: `+` becomes a space, then percent-escapes
/// are resolved.
pub fn decode_object_key(raw: &str) -> Result<String, ThumbnailError> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|key| key.into_owned())
        .map_err(|_| ThumbnailError::InvalidKey(raw.to_string()))
}

/// Case-sensitive suffix match on the decoded key.
pub fn is_video_key(key: &str, video_extension: &str) -> bool {
    key.ends_with(video_extension)
}

/// Maps a video key to its thumbnail key.
///
/// Only the first occurrence of `video_prefix` is replaced, wherever it sits
/// in the key. The extension is swapped at the end of the key.
pub fn derive_image_key(
    key: &str,
    video_prefix: &str,
    image_prefix: &str,
    video_extension: &str,
    image_extension: &str,
) -> String {
    let moved = key.replacen(video_prefix, image_prefix, 1);
    match moved.strip_suffix(video_extension) {
        Some(stem) => format!("{}{}", stem, image_extension),
        None => moved,
    }
}
